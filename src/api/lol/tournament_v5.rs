use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PickType {
    BlindPick,
    DraftMode,
    AllRandom,
    TournamentDraft,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MapType {
    SummonersRift,
    HowlingAbyss,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SpectatorType {
    None,
    LobbyOnly,
    All,
}

/// Tournament-V5, live (`/lol/tournament/v5`) or stub (`/lol/tournament-stub/v5`).
///
/// Both variants are only served on the `americas` route.
#[derive(Debug, Clone)]
pub struct TournamentV5Api {
    client: Arc<ApiClient>,
    base: &'static str,
}

impl TournamentV5Api {
    pub const LIVE: &'static str = "/lol/tournament/v5";
    pub const STUB: &'static str = "/lol/tournament-stub/v5";

    pub fn new(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            base: Self::LIVE,
        }
    }

    /// Same operations against the stub API, which creates nothing real.
    pub fn stub(client: Arc<ApiClient>) -> Self {
        Self {
            client,
            base: Self::STUB,
        }
    }

    pub fn base(&self) -> &'static str {
        self.base
    }

    /// Register a provider and return its id.
    pub async fn create_provider(
        &self,
        params: &ProviderRegistrationParameters,
    ) -> RiotApiResponse<i64> {
        tracing::trace!("[LOL-TOURNAMENT-V5 API] create_provider {}", params.url);

        let path = format!("{}/providers", self.base);
        self.client.post_into(&path, params).await
    }

    /// Register a tournament and return its id.
    pub async fn create_tournament(
        &self,
        params: &TournamentRegistrationParameters,
    ) -> RiotApiResponse<i64> {
        tracing::trace!(
            "[LOL-TOURNAMENT-V5 API] create_tournament for provider {}",
            params.provider_id
        );

        let path = format!("{}/tournaments", self.base);
        self.client.post_into(&path, params).await
    }

    pub async fn create_codes(
        &self,
        tournament_id: i64,
        count: u32,
        params: &TournamentCodeParameters,
    ) -> RiotApiResponse<Vec<String>> {
        tracing::trace!(
            "[LOL-TOURNAMENT-V5 API] create_codes {} x{}",
            tournament_id,
            count
        );

        let path = format!(
            "{}/codes?tournamentId={}&count={}",
            self.base, tournament_id, count
        );
        self.client.post_into(&path, params).await
    }

    pub async fn get_code(&self, code: &str) -> RiotApiResponse<TournamentCodeDto> {
        tracing::trace!("[LOL-TOURNAMENT-V5 API] get_code {}", code);

        let path = format!("{}/codes/{}", self.base, code);
        self.client.get_into(&path).await
    }

    pub async fn update_code(
        &self,
        code: &str,
        params: &TournamentCodeUpdateParameters,
    ) -> RiotApiResponse<()> {
        tracing::trace!("[LOL-TOURNAMENT-V5 API] update_code {}", code);

        let path = format!("{}/codes/{}", self.base, code);
        self.client.put(&path, params).await
    }

    pub async fn list_lobby_events(&self, code: &str) -> RiotApiResponse<LobbyEventDtoWrapper> {
        tracing::trace!("[LOL-TOURNAMENT-V5 API] list_lobby_events {}", code);

        let path = format!("{}/lobby-events/by-code/{}", self.base, code);
        self.client.get_into(&path).await
    }
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ProviderRegistrationParameters {
    /// Platform short name, `"NA"`, `"EUW"`...
    pub region: String,
    /// Callback receiving game results.
    pub url: String,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TournamentRegistrationParameters {
    pub provider_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_participants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    pub team_size: u8,
    pub pick_type: PickType,
    pub map_type: MapType,
    pub spectator_type: SpectatorType,
    pub enough_players: bool,
}

#[derive(Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeUpdateParameters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_participants: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pick_type: Option<PickType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub map_type: Option<MapType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spectator_type: Option<SpectatorType>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TournamentCodeDto {
    pub code: String,
    pub spectators: String,
    pub lobby_name: String,
    #[serde(default)]
    pub meta_data: Option<String>,
    pub password: String,
    pub team_size: i32,
    pub provider_id: i64,
    pub pick_type: String,
    pub tournament_id: i64,
    pub id: i64,
    pub region: String,
    pub map: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LobbyEventDtoWrapper {
    pub event_list: Vec<LobbyEventDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LobbyEventDto {
    pub timestamp: String,
    pub event_type: String,
    #[serde(default)]
    pub puuid: Option<String>,
}
