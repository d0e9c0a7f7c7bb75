use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone)]
pub struct MatchV1Api(Arc<ApiClient>);

impl MatchV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn list_ids(&self, puuid: &str) -> RiotApiResponse<Vec<String>> {
        tracing::trace!("[LOR-MATCH-V1 API] list_ids {}", puuid);

        let path = format!("/lor/match/v1/matches/by-puuid/{}/ids", puuid);
        self.0.get_into(&path).await
    }

    pub async fn get(&self, match_id: &str) -> RiotApiResponse<MatchDto> {
        tracing::trace!("[LOR-MATCH-V1 API] get {}", match_id);

        let path = format!("/lor/match/v1/matches/{}", match_id);
        self.0.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct MatchDto {
    pub metadata: MetadataDto,
    pub info: InfoDto,
}

#[derive(Deserialize, Debug, Clone)]
pub struct MetadataDto {
    pub data_version: String,
    pub match_id: String,
    pub participants: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InfoDto {
    pub game_mode: String,
    pub game_type: String,
    pub game_start_time_utc: String,
    pub game_version: String,
    #[serde(default)]
    pub total_turn_count: i32,
    pub players: Vec<PlayerDto>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerDto {
    pub puuid: String,
    pub deck_id: String,
    pub deck_code: String,
    #[serde(default)]
    pub factions: Vec<String>,
    pub game_outcome: String,
    pub order_of_play: i32,
}

impl PlayerDto {
    pub fn is_win(&self) -> bool {
        self.game_outcome == "win"
    }
}
