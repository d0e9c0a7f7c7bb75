use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone)]
pub struct ClashV1Api(Arc<ApiClient>);

impl ClashV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Active registrations of a player.
    pub async fn list_players(&self, puuid: &str) -> RiotApiResponse<Vec<PlayerDto>> {
        tracing::trace!("[LOL-CLASH-V1 API] list_players {}", puuid);

        let path = format!("/lol/clash/v1/players/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }

    pub async fn get_team(&self, team_id: &str) -> RiotApiResponse<TeamDto> {
        tracing::trace!("[LOL-CLASH-V1 API] get_team {}", team_id);

        let path = format!("/lol/clash/v1/teams/{}", team_id);
        self.0.get_into(&path).await
    }

    pub async fn list_tournaments(&self) -> RiotApiResponse<Vec<TournamentDto>> {
        tracing::trace!("[LOL-CLASH-V1 API] list_tournaments");

        self.0.get_into("/lol/clash/v1/tournaments").await
    }

    pub async fn get_tournament(&self, tournament_id: i64) -> RiotApiResponse<TournamentDto> {
        tracing::trace!("[LOL-CLASH-V1 API] get_tournament {}", tournament_id);

        let path = format!("/lol/clash/v1/tournaments/{}", tournament_id);
        self.0.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub summoner_id: Option<String>,
    #[serde(default)]
    pub team_id: Option<String>,
    pub position: String,
    pub role: String,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub id: String,
    pub tournament_id: i64,
    pub name: String,
    pub icon_id: i64,
    pub tier: i32,
    pub captain: String,
    pub abbreviation: String,
    #[serde(default)]
    pub players: Vec<PlayerDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TournamentDto {
    pub id: i64,
    pub theme_id: i64,
    pub name_key: String,
    #[serde(default)]
    pub name_key_secondary: String,
    #[serde(default)]
    pub schedule: Vec<TournamentPhaseDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TournamentPhaseDto {
    pub id: i64,
    pub registration_time: i64,
    pub start_time: i64,
    pub cancelled: bool,
}
