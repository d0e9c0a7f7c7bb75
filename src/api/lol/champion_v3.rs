use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone)]
pub struct ChampionV3Api(Arc<ApiClient>);

impl ChampionV3Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_free_rotation(&self) -> RiotApiResponse<ChampionInfoDto> {
        tracing::trace!("[LOL-CHAMPION-V3 API] get_free_rotation");

        self.0.get_into("/lol/platform/v3/champion-rotations").await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChampionInfoDto {
    pub max_new_player_level: i32,
    pub free_champion_ids_for_new_players: Vec<i64>,
    pub free_champion_ids: Vec<i64>,
}
