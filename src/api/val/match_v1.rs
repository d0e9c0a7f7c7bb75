use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

/// VAL-Match-V1, served on the shard host.
#[derive(Debug, Clone)]
pub struct MatchV1Api(Arc<ApiClient>);

impl MatchV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get(&self, match_id: &str) -> RiotApiResponse<MatchDto> {
        tracing::trace!("[VAL-MATCH-V1 API] get {}", match_id);

        let path = format!("/val/match/v1/matches/{}", match_id);
        self.0.get_into(&path).await
    }

    pub async fn list_by_puuid(&self, puuid: &str) -> RiotApiResponse<MatchlistDto> {
        tracing::trace!("[VAL-MATCH-V1 API] list_by_puuid {}", puuid);

        let path = format!("/val/match/v1/matchlists/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }

    /// Ids of the matches completed in the last ten minutes on `queue`.
    pub async fn get_recent(&self, queue: &str) -> RiotApiResponse<RecentMatchesDto> {
        tracing::trace!("[VAL-MATCH-V1 API] get_recent {}", queue);

        let path = format!("/val/match/v1/recent-matches/by-queue/{}", queue);
        self.0.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub match_info: MatchInfoDto,
    #[serde(default)]
    pub players: Vec<PlayerDto>,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
    #[serde(default)]
    pub round_results: Vec<serde_json::Value>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfoDto {
    pub match_id: String,
    pub map_id: String,
    pub game_length_millis: i64,
    pub game_start_millis: i64,
    #[serde(default)]
    pub provisioning_flow_id: String,
    pub is_completed: bool,
    #[serde(default)]
    pub custom_game_name: String,
    #[serde(default)]
    pub queue_id: String,
    #[serde(default)]
    pub game_mode: String,
    #[serde(default)]
    pub is_ranked: bool,
    #[serde(default)]
    pub season_id: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub puuid: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub tag_line: String,
    pub team_id: String,
    #[serde(default)]
    pub party_id: String,
    #[serde(default)]
    pub character_id: Option<String>,
    #[serde(default)]
    pub stats: Option<PlayerStatsDto>,
    #[serde(default)]
    pub competitive_tier: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStatsDto {
    pub score: i32,
    pub rounds_played: i32,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub team_id: String,
    pub won: bool,
    pub rounds_played: i32,
    pub rounds_won: i32,
    #[serde(default)]
    pub num_points: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchlistDto {
    pub puuid: String,
    pub history: Vec<MatchlistEntryDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchlistEntryDto {
    pub match_id: String,
    pub game_start_time_millis: i64,
    #[serde(default)]
    pub queue_id: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatchesDto {
    pub current_time: i64,
    pub match_ids: Vec<String>,
}
