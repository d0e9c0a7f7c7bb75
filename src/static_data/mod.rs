//! Client for the static game constants published on the developer portal.

use serde::de::DeserializeOwned;

use crate::api::client::ApiClient;
use crate::cache::LazyCache;
use crate::types::{RiotApiError, RiotApiResponse, StatusError};

pub mod types;

pub use types::{GameMode, GameType, Map, Queue, Season};

pub const STATIC_DATA_ORIGIN: &str = "https://static.developer.riotgames.com";

const DOCS_PATH: &str = "/docs/lol";

#[derive(Debug)]
pub struct StaticDataClient {
    client: ApiClient,
    seasons: LazyCache<Vec<Season>>,
    queues: LazyCache<Vec<Queue>>,
    maps: LazyCache<Vec<Map>>,
    game_modes: LazyCache<Vec<GameMode>>,
    game_types: LazyCache<Vec<GameType>>,
}

impl StaticDataClient {
    /// `client` must address the static data origin (see [`STATIC_DATA_ORIGIN`]).
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            seasons: LazyCache::new(),
            queues: LazyCache::new(),
            maps: LazyCache::new(),
            game_modes: LazyCache::new(),
            game_types: LazyCache::new(),
        }
    }

    async fn get_list<T: DeserializeOwned>(&self, file: &str) -> RiotApiResponse<Vec<T>> {
        tracing::trace!("[STATIC-DATA] fetching {}", file);

        self.client
            .get_into(&format!("{}/{}", DOCS_PATH, file))
            .await
    }

    pub async fn get_seasons(&self) -> RiotApiResponse<Vec<Season>> {
        self.seasons
            .get_or_fetch(|| self.get_list("seasons.json"))
            .await
    }

    pub async fn get_season(&self, id: i64) -> RiotApiResponse<Season> {
        find(self.get_seasons().await?, |s| s.id == id)
    }

    pub async fn get_queues(&self) -> RiotApiResponse<Vec<Queue>> {
        self.queues
            .get_or_fetch(|| self.get_list("queues.json"))
            .await
    }

    pub async fn get_queue(&self, id: i64) -> RiotApiResponse<Queue> {
        find(self.get_queues().await?, |q| q.queue_id == id)
    }

    pub async fn get_maps(&self) -> RiotApiResponse<Vec<Map>> {
        self.maps.get_or_fetch(|| self.get_list("maps.json")).await
    }

    pub async fn get_map(&self, id: i64) -> RiotApiResponse<Map> {
        find(self.get_maps().await?, |m| m.map_id == id)
    }

    pub async fn get_game_modes(&self) -> RiotApiResponse<Vec<GameMode>> {
        self.game_modes
            .get_or_fetch(|| self.get_list("gameModes.json"))
            .await
    }

    pub async fn get_game_mode(&self, mode: &str) -> RiotApiResponse<GameMode> {
        find(self.get_game_modes().await?, |m| m.game_mode == mode)
    }

    pub async fn get_game_types(&self) -> RiotApiResponse<Vec<GameType>> {
        self.game_types
            .get_or_fetch(|| self.get_list("gameTypes.json"))
            .await
    }

    pub async fn get_game_type(&self, game_type: &str) -> RiotApiResponse<GameType> {
        find(self.get_game_types().await?, |t| t.game_type == game_type)
    }

    pub async fn clear_caches(&self) {
        tracing::debug!("[STATIC-DATA] clearing caches");

        self.seasons.clear().await;
        self.queues.clear().await;
        self.maps.clear().await;
        self.game_modes.clear().await;
        self.game_types.clear().await;
    }
}

fn find<T>(list: Vec<T>, predicate: impl Fn(&T) -> bool) -> RiotApiResponse<T> {
    list.into_iter()
        .find(predicate)
        .ok_or(RiotApiError::Status(StatusError::NotFound))
}
