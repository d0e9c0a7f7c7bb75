//! Client for the Data Dragon static assets, with every data file cached in memory.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::api::client::ApiClient;
use crate::cache::{KeyedCache, LazyCache};
use crate::types::{RiotApiError, RiotApiResponse, StatusError};

pub mod types;
pub mod version;

use types::DataFile;
pub use types::{
    ChampionData, ChampionDataExtended, ItemData, MasteryData, ProfileIcon, RuneData,
    SummonerSpell,
};
pub use version::{LEGACY_RUNES_VERSION, version_greater_than};

pub const DDRAGON_ORIGIN: &str = "https://ddragon.leagueoflegends.com";

#[derive(Debug)]
pub struct DataDragonClient {
    client: ApiClient,
    version: String,
    language: String,
    champions: LazyCache<HashMap<String, ChampionData>>,
    champion_details: KeyedCache<String, ChampionDataExtended>,
    profile_icons: LazyCache<HashMap<String, ProfileIcon>>,
    items: LazyCache<HashMap<String, ItemData>>,
    masteries: LazyCache<HashMap<String, MasteryData>>,
    runes: LazyCache<HashMap<String, RuneData>>,
    summoner_spells: LazyCache<HashMap<String, SummonerSpell>>,
}

impl DataDragonClient {
    /// `client` must address the Data Dragon origin (see [`DDRAGON_ORIGIN`]).
    pub fn new(client: ApiClient, version: impl Into<String>, language: impl Into<String>) -> Self {
        Self {
            client,
            version: version.into(),
            language: language.into(),
            champions: LazyCache::new(),
            champion_details: KeyedCache::new(),
            profile_icons: LazyCache::new(),
            items: LazyCache::new(),
            masteries: LazyCache::new(),
            runes: LazyCache::new(),
            summoner_spells: LazyCache::new(),
        }
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    fn data_path(&self, file: &str) -> String {
        format!(
            "/cdn/{}/data/{}/{}",
            version::effective_version(&self.version, file),
            self.language,
            file
        )
    }

    async fn get_data<T: DeserializeOwned>(
        &self,
        file: &str,
    ) -> RiotApiResponse<HashMap<String, T>> {
        tracing::trace!("[DDRAGON] fetching {}", file);

        let raw: DataFile<T> = self.client.get_into(&self.data_path(file)).await?;
        Ok(raw.data)
    }

    /// Every published Data Dragon version, newest first. Not cached.
    pub async fn get_versions(&self) -> RiotApiResponse<Vec<String>> {
        self.client.get_into("/api/versions.json").await
    }

    /// Champion summaries keyed by champion id (`"MonkeyKing"`, `"Ahri"`...).
    pub async fn get_champions(&self) -> RiotApiResponse<HashMap<String, ChampionData>> {
        self.champions
            .get_or_fetch(|| self.get_data("champion.json"))
            .await
    }

    /// Full champion record, looked up by id or display name.
    pub async fn get_champion(&self, name: &str) -> RiotApiResponse<ChampionDataExtended> {
        let champions = self.get_champions().await?;
        let id = champions
            .get(name)
            .or_else(|| champions.values().find(|c| c.name == name))
            .map(|c| c.id.clone())
            .ok_or(RiotApiError::Status(StatusError::NotFound))?;

        self.champion_details
            .get_or_fetch_where(
                &id,
                |champion| !champion.is_summary_only(),
                || async {
                    let mut data: HashMap<String, ChampionDataExtended> =
                        self.get_data(&format!("champion/{}.json", id)).await?;
                    data.remove(&id)
                        .ok_or(RiotApiError::Status(StatusError::NotFound))
                },
            )
            .await
    }

    /// Full champion record for the numeric key used by the Riot APIs.
    pub async fn get_champion_by_id(&self, key: i64) -> RiotApiResponse<ChampionDataExtended> {
        let champions = self.get_champions().await?;
        let champion = champions
            .values()
            .find(|c| c.numeric_key() == Some(key))
            .ok_or(RiotApiError::Status(StatusError::NotFound))?;

        self.get_champion(&champion.id).await
    }

    pub async fn get_profile_icons(&self) -> RiotApiResponse<HashMap<String, ProfileIcon>> {
        self.profile_icons
            .get_or_fetch(|| self.get_data("profileicon.json"))
            .await
    }

    pub async fn get_profile_icon(&self, id: i64) -> RiotApiResponse<ProfileIcon> {
        lookup(self.get_profile_icons().await?, &id.to_string())
    }

    pub async fn get_items(&self) -> RiotApiResponse<HashMap<String, ItemData>> {
        self.items
            .get_or_fetch(|| async {
                let mut items: HashMap<String, ItemData> = self.get_data("item.json").await?;
                for (id, item) in items.iter_mut() {
                    item.id = id.clone();
                }
                Ok(items)
            })
            .await
    }

    pub async fn get_item(&self, id: &str) -> RiotApiResponse<ItemData> {
        lookup(self.get_items().await?, id)
    }

    /// Resolve a list of item ids through the item cache.
    pub async fn get_items_by_ids(&self, ids: &[String]) -> RiotApiResponse<Vec<ItemData>> {
        let items = self.get_items().await?;
        ids.iter()
            .map(|id| {
                items
                    .get(id)
                    .cloned()
                    .ok_or(RiotApiError::Status(StatusError::NotFound))
            })
            .collect()
    }

    /// Legacy masteries, always served from the last version shipping them.
    pub async fn get_masteries(&self) -> RiotApiResponse<HashMap<String, MasteryData>> {
        self.masteries
            .get_or_fetch(|| self.get_data("mastery.json"))
            .await
    }

    /// Legacy runes, always served from the last version shipping them.
    pub async fn get_runes(&self) -> RiotApiResponse<HashMap<String, RuneData>> {
        self.runes
            .get_or_fetch(|| async {
                let mut runes: HashMap<String, RuneData> = self.get_data("rune.json").await?;
                for (id, rune) in runes.iter_mut() {
                    rune.id = id.clone();
                }
                Ok(runes)
            })
            .await
    }

    pub async fn get_summoner_spells(&self) -> RiotApiResponse<HashMap<String, SummonerSpell>> {
        self.summoner_spells
            .get_or_fetch(|| self.get_data("summoner.json"))
            .await
    }

    /// Summoner spell by id (`"SummonerFlash"`) or numeric key (`"4"`).
    pub async fn get_summoner_spell(&self, id: &str) -> RiotApiResponse<SummonerSpell> {
        let spells = self.get_summoner_spells().await?;
        spells
            .get(id)
            .or_else(|| spells.values().find(|s| s.key == id))
            .cloned()
            .ok_or(RiotApiError::Status(StatusError::NotFound))
    }

    /// Drop every cached file. Each cache is reset on its own.
    pub async fn clear_caches(&self) {
        tracing::debug!("[DDRAGON] clearing caches");

        self.champions.clear().await;
        self.champion_details.clear().await;
        self.profile_icons.clear().await;
        self.items.clear().await;
        self.masteries.clear().await;
        self.runes.clear().await;
        self.summoner_spells.clear().await;
    }

    pub fn champion_image_url(&self, champion: &ChampionData) -> String {
        self.image_url("champion", &champion.image.full)
    }

    pub fn profile_icon_url(&self, id: i64) -> String {
        self.image_url("profileicon", &format!("{}.png", id))
    }

    pub fn item_image_url(&self, item: &ItemData) -> String {
        self.image_url("item", &item.image.full)
    }

    fn image_url(&self, group: &str, file: &str) -> String {
        format!(
            "{}/cdn/{}/img/{}/{}",
            self.client.host().origin(),
            self.version,
            group,
            file
        )
    }
}

fn lookup<T>(mut map: HashMap<String, T>, id: &str) -> RiotApiResponse<T> {
    map.remove(id)
        .ok_or(RiotApiError::Status(StatusError::NotFound))
}

impl ItemData {
    /// Items this item is built from.
    pub async fn recipe_items(
        &self,
        ddragon: &DataDragonClient,
    ) -> RiotApiResponse<Vec<ItemData>> {
        ddragon.get_items_by_ids(&self.from).await
    }

    /// Items this item builds into.
    pub async fn upgrade_items(
        &self,
        ddragon: &DataDragonClient,
    ) -> RiotApiResponse<Vec<ItemData>> {
        ddragon.get_items_by_ids(&self.into).await
    }
}
