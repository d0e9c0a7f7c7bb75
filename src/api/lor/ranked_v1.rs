use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone)]
pub struct RankedV1Api(Arc<ApiClient>);

impl RankedV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_leaderboard(&self) -> RiotApiResponse<LeaderboardDto> {
        tracing::trace!("[LOR-RANKED-V1 API] get_leaderboard");

        self.0.get_into("/lor/ranked/v1/leaderboards").await
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct LeaderboardDto {
    pub players: Vec<PlayerDto>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct PlayerDto {
    pub name: String,
    pub rank: i32,
    pub lp: f64,
}
