use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone)]
pub struct SummonerV4Api(Arc<ApiClient>);

impl SummonerV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_by_puuid(&self, puuid: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[LOL-SUMMONER-V4 API] get_by_puuid {}", puuid);

        let path = format!("/lol/summoner/v4/summoners/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }

    pub async fn get_by_id(&self, summoner_id: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[LOL-SUMMONER-V4 API] get_by_id {}", summoner_id);

        let path = format!("/lol/summoner/v4/summoners/{}", summoner_id);
        self.0.get_into(&path).await
    }

    pub async fn get_by_account_id(&self, account_id: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[LOL-SUMMONER-V4 API] get_by_account_id {}", account_id);

        let path = format!("/lol/summoner/v4/summoners/by-account/{}", account_id);
        self.0.get_into(&path).await
    }

    /// Deprecated upstream in favor of Riot IDs, still answered on some platforms.
    pub async fn get_by_name(&self, name: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[LOL-SUMMONER-V4 API] get_by_name {}", name);

        let path = format!(
            "/lol/summoner/v4/summoners/by-name/{}",
            urlencoding::encode(name)
        );
        self.0.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub puuid: String,
    /// Encrypted summoner id, no longer returned for every account.
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub account_id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub profile_icon_id: i32,
    pub revision_date: i64,
    pub summoner_level: i64,
}
