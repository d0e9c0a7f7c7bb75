use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::ddragon::{ChampionDataExtended, DataDragonClient};
use crate::types::RiotApiResponse;

#[derive(Debug, Clone)]
pub struct ChampionMasteryV4Api(Arc<ApiClient>);

impl ChampionMasteryV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn list(&self, puuid: &str) -> RiotApiResponse<Vec<ChampionMasteryDto>> {
        tracing::trace!("[LOL-CHAMPION-MASTERY-V4 API] list {}", puuid);

        let path = format!("/lol/champion-mastery/v4/champion-masteries/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }

    pub async fn get(&self, puuid: &str, champion_id: i64) -> RiotApiResponse<ChampionMasteryDto> {
        tracing::trace!(
            "[LOL-CHAMPION-MASTERY-V4 API] get {} for champion {}",
            puuid,
            champion_id
        );

        let path = format!(
            "/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/by-champion/{}",
            puuid, champion_id
        );
        self.0.get_into(&path).await
    }

    pub async fn list_top(
        &self,
        puuid: &str,
        count: u32,
    ) -> RiotApiResponse<Vec<ChampionMasteryDto>> {
        tracing::trace!("[LOL-CHAMPION-MASTERY-V4 API] list_top {} ({})", puuid, count);

        let path = format!(
            "/lol/champion-mastery/v4/champion-masteries/by-puuid/{}/top?count={}",
            puuid, count
        );
        self.0.get_into(&path).await
    }

    /// Sum of the mastery levels of every champion.
    pub async fn get_score(&self, puuid: &str) -> RiotApiResponse<i32> {
        tracing::trace!("[LOL-CHAMPION-MASTERY-V4 API] get_score {}", puuid);

        let path = format!("/lol/champion-mastery/v4/scores/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub puuid: String,
    pub champion_id: i64,
    pub champion_level: i32,
    pub champion_points: i64,
    pub last_play_time: i64,
    #[serde(default)]
    pub champion_points_since_last_level: i64,
    #[serde(default)]
    pub champion_points_until_next_level: i64,
    #[serde(default)]
    pub chest_granted: Option<bool>,
    #[serde(default)]
    pub tokens_earned: i32,
}

impl ChampionMasteryDto {
    /// Data Dragon record of the champion this mastery is about.
    pub async fn champion(
        &self,
        ddragon: &DataDragonClient,
    ) -> RiotApiResponse<ChampionDataExtended> {
        ddragon.get_champion_by_id(self.champion_id).await
    }
}
