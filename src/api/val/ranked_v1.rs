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

    /// One window of the competitive leaderboard of an act.
    pub async fn get_leaderboard(
        &self,
        act_id: &str,
        size: u32,
        start_index: u32,
    ) -> RiotApiResponse<LeaderboardDto> {
        tracing::trace!(
            "[VAL-RANKED-V1 API] get_leaderboard {} ({}+{})",
            act_id,
            start_index,
            size
        );

        let path = format!(
            "/val/ranked/v1/leaderboards/by-act/{}?size={}&startIndex={}",
            act_id, size, start_index
        );
        self.0.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardDto {
    pub shard: String,
    pub act_id: String,
    pub total_players: i64,
    pub players: Vec<PlayerDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub game_name: Option<String>,
    #[serde(default)]
    pub tag_line: Option<String>,
    pub leaderboard_rank: i64,
    pub ranked_rating: i64,
    pub number_of_wins: i64,
}
