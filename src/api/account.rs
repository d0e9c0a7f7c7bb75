use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

/// Account-V1, served on the continent route.
#[derive(Debug, Clone)]
pub struct AccountApi(Arc<ApiClient>);

impl AccountApi {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_by_puuid(&self, puuid: &str) -> RiotApiResponse<AccountDto> {
        tracing::trace!("[ACCOUNT-V1 API] get_by_puuid {}", puuid);

        let path = format!("/riot/account/v1/accounts/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }

    pub async fn get_by_riot_id(
        &self,
        game_name: &str,
        tag_line: &str,
    ) -> RiotApiResponse<AccountDto> {
        tracing::trace!("[ACCOUNT-V1 API] get_by_riot_id {}#{}", game_name, tag_line);

        let path = format!(
            "/riot/account/v1/accounts/by-riot-id/{}/{}",
            urlencoding::encode(game_name),
            urlencoding::encode(tag_line)
        );
        self.0.get_into(&path).await
    }

    /// Shard the player is active on for `game` (`"val"` or `"lor"`).
    pub async fn get_active_shard(
        &self,
        game: &str,
        puuid: &str,
    ) -> RiotApiResponse<ActiveShardDto> {
        tracing::trace!("[ACCOUNT-V1 API] get_active_shard {} for {}", game, puuid);

        let path = format!(
            "/riot/account/v1/active-shards/by-game/{}/by-puuid/{}",
            game, puuid
        );
        self.0.get_into(&path).await
    }
}

/// Representation of the account data response.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AccountDto {
    pub puuid: String,
    pub game_name: Option<String>,
    pub tag_line: Option<String>,
}

impl AccountDto {
    /// `name#tag` when both parts are known.
    pub fn riot_id(&self) -> Option<String> {
        match (&self.game_name, &self.tag_line) {
            (Some(name), Some(tag)) => Some(format!("{}#{}", name, tag)),
            _ => None,
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveShardDto {
    pub puuid: String,
    pub game: String,
    pub active_shard: String,
}
