use std::fmt;
use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::lol::league_v4::{Division, LeagueEntryDto, LeagueListDto, Tier};
use crate::types::RiotApiResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TftQueue {
    RankedTft,
    RankedTftTurbo,
    RankedTftDoubleUp,
}

impl TftQueue {
    pub fn as_str(&self) -> &'static str {
        match self {
            TftQueue::RankedTft => "RANKED_TFT",
            TftQueue::RankedTftTurbo => "RANKED_TFT_TURBO",
            TftQueue::RankedTftDoubleUp => "RANKED_TFT_DOUBLE_UP",
        }
    }
}

impl fmt::Display for TftQueue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// TFT-League-V1. Entries and lists share the LoL league models.
#[derive(Debug, Clone)]
pub struct LeagueV1Api(Arc<ApiClient>);

impl LeagueV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_challenger(&self, queue: TftQueue) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[TFT-LEAGUE-V1 API] get_challenger {}", queue);

        let path = format!("/tft/league/v1/challenger?queue={}", queue);
        self.0.get_into(&path).await
    }

    pub async fn get_grandmaster(&self, queue: TftQueue) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[TFT-LEAGUE-V1 API] get_grandmaster {}", queue);

        let path = format!("/tft/league/v1/grandmaster?queue={}", queue);
        self.0.get_into(&path).await
    }

    pub async fn get_master(&self, queue: TftQueue) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[TFT-LEAGUE-V1 API] get_master {}", queue);

        let path = format!("/tft/league/v1/master?queue={}", queue);
        self.0.get_into(&path).await
    }

    pub async fn list_by_puuid(&self, puuid: &str) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!("[TFT-LEAGUE-V1 API] list_by_puuid {}", puuid);

        let path = format!("/tft/league/v1/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }

    /// One page of the `RANKED_TFT` players of a division. Pages start at 1.
    pub async fn list_players(
        &self,
        tier: Tier,
        division: Division,
        page: u32,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!(
            "[TFT-LEAGUE-V1 API] list_players {} {} page {}",
            tier.as_str(),
            division.as_str(),
            page
        );

        let path = format!(
            "/tft/league/v1/entries/{}/{}?page={}",
            tier.as_str(),
            division.as_str(),
            page
        );
        self.0.get_into(&path).await
    }

    pub async fn get(&self, league_id: &str) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[TFT-LEAGUE-V1 API] get {}", league_id);

        let path = format!("/tft/league/v1/leagues/{}", league_id);
        self.0.get_into(&path).await
    }
}
