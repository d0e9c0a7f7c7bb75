use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

/// Spectator endpoints, `prefix` selecting the game (`/lol/spectator/v5` or `/lol/spectator/tft/v5`).
#[derive(Debug, Clone)]
pub struct SpectatorV5Api {
    client: Arc<ApiClient>,
    prefix: &'static str,
}

impl SpectatorV5Api {
    pub const LOL: &'static str = "/lol/spectator/v5";
    pub const TFT: &'static str = "/lol/spectator/tft/v5";

    pub fn new(client: Arc<ApiClient>, prefix: &'static str) -> Self {
        Self { client, prefix }
    }

    pub async fn get_current(&self, puuid: &str) -> RiotApiResponse<CurrentGameInfo> {
        tracing::trace!("[SPECTATOR-V5 API] get_current {} on {}", puuid, self.prefix);

        let path = format!("{}/active-games/by-summoner/{}", self.prefix, puuid);
        self.client.get_into(&path).await
    }

    pub async fn list_featured(&self) -> RiotApiResponse<FeaturedGames> {
        tracing::trace!("[SPECTATOR-V5 API] list_featured on {}", self.prefix);

        let path = format!("{}/featured-games", self.prefix);
        self.client.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameInfo {
    pub game_id: i64,
    pub game_type: String,
    #[serde(default)]
    pub game_start_time: i64,
    pub map_id: i64,
    /// Seconds since the game started.
    #[serde(default)]
    pub game_length: i64,
    pub platform_id: String,
    pub game_mode: String,
    #[serde(default)]
    pub banned_champions: Vec<BannedChampion>,
    #[serde(default)]
    pub game_queue_config_id: Option<i64>,
    #[serde(default)]
    pub observers: Option<Observer>,
    pub participants: Vec<CurrentGameParticipant>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BannedChampion {
    pub pick_turn: i32,
    pub champion_id: i64,
    pub team_id: i64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Observer {
    pub encryption_key: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CurrentGameParticipant {
    pub champion_id: i64,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub riot_id: Option<String>,
    pub team_id: i64,
    #[serde(default)]
    pub spell1_id: i64,
    #[serde(default)]
    pub spell2_id: i64,
    #[serde(default)]
    pub profile_icon_id: i64,
    #[serde(default)]
    pub bot: bool,
    #[serde(default)]
    pub perks: Option<Perks>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Perks {
    pub perk_ids: Vec<i64>,
    pub perk_style: i64,
    pub perk_sub_style: i64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedGames {
    pub game_list: Vec<CurrentGameInfo>,
    #[serde(default)]
    pub client_refresh_interval: Option<i64>,
}
