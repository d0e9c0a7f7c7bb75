use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApexLevel {
    Master,
    Grandmaster,
    Challenger,
}

impl fmt::Display for ApexLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ApexLevel::Master => "MASTER",
            ApexLevel::Grandmaster => "GRANDMASTER",
            ApexLevel::Challenger => "CHALLENGER",
        })
    }
}

#[derive(Debug, Clone)]
pub struct ChallengesV1Api(Arc<ApiClient>);

impl ChallengesV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn list_config(&self) -> RiotApiResponse<Vec<ChallengeConfigInfoDto>> {
        tracing::trace!("[LOL-CHALLENGES-V1 API] list_config");

        self.0.get_into("/lol/challenges/v1/challenges/config").await
    }

    /// Percentile distribution of every challenge, keyed by challenge id then level.
    pub async fn list_percentiles(
        &self,
    ) -> RiotApiResponse<HashMap<String, HashMap<String, f64>>> {
        tracing::trace!("[LOL-CHALLENGES-V1 API] list_percentiles");

        self.0
            .get_into("/lol/challenges/v1/challenges/percentiles")
            .await
    }

    pub async fn get_config(&self, challenge_id: i64) -> RiotApiResponse<ChallengeConfigInfoDto> {
        tracing::trace!("[LOL-CHALLENGES-V1 API] get_config {}", challenge_id);

        let path = format!("/lol/challenges/v1/challenges/{}/config", challenge_id);
        self.0.get_into(&path).await
    }

    pub async fn get_leaderboard(
        &self,
        challenge_id: i64,
        level: ApexLevel,
        limit: Option<u32>,
    ) -> RiotApiResponse<Vec<ApexPlayerInfoDto>> {
        tracing::trace!(
            "[LOL-CHALLENGES-V1 API] get_leaderboard {} {}",
            challenge_id,
            level
        );

        let mut path = format!(
            "/lol/challenges/v1/challenges/{}/leaderboards/by-level/{}",
            challenge_id, level
        );
        if let Some(limit) = limit {
            path.push_str(&format!("?limit={}", limit));
        }
        self.0.get_into(&path).await
    }

    pub async fn get_player_data(&self, puuid: &str) -> RiotApiResponse<PlayerInfoDto> {
        tracing::trace!("[LOL-CHALLENGES-V1 API] get_player_data {}", puuid);

        let path = format!("/lol/challenges/v1/player-data/{}", puuid);
        self.0.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeConfigInfoDto {
    pub id: i64,
    #[serde(default)]
    pub localized_names: HashMap<String, HashMap<String, String>>,
    pub state: String,
    #[serde(default)]
    pub leaderboard: bool,
    #[serde(default)]
    pub thresholds: HashMap<String, f64>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ApexPlayerInfoDto {
    pub puuid: String,
    pub value: f64,
    pub position: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfoDto {
    #[serde(default)]
    pub challenges: Vec<ChallengeInfoDto>,
    pub total_points: ChallengePointsDto,
    #[serde(default)]
    pub category_points: HashMap<String, ChallengePointsDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeInfoDto {
    pub challenge_id: i64,
    #[serde(default)]
    pub percentile: f64,
    pub level: String,
    pub value: f64,
    #[serde(default)]
    pub achieved_time: Option<i64>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePointsDto {
    pub level: String,
    pub current: i64,
    pub max: i64,
    #[serde(default)]
    pub percentile: Option<f64>,
}
