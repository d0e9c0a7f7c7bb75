use std::fmt;
use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Queue {
    RankedSolo5x5,
    RankedFlexSr,
    RankedFlexTt,
}

impl Queue {
    pub fn as_str(&self) -> &'static str {
        match self {
            Queue::RankedSolo5x5 => "RANKED_SOLO_5x5",
            Queue::RankedFlexSr => "RANKED_FLEX_SR",
            Queue::RankedFlexTt => "RANKED_FLEX_TT",
        }
    }
}

impl fmt::Display for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    Iron,
    Bronze,
    Silver,
    Gold,
    Platinum,
    Emerald,
    Diamond,
}

impl Tier {
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Iron => "IRON",
            Tier::Bronze => "BRONZE",
            Tier::Silver => "SILVER",
            Tier::Gold => "GOLD",
            Tier::Platinum => "PLATINUM",
            Tier::Emerald => "EMERALD",
            Tier::Diamond => "DIAMOND",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Division {
    I,
    II,
    III,
    IV,
}

impl Division {
    pub fn as_str(&self) -> &'static str {
        match self {
            Division::I => "I",
            Division::II => "II",
            Division::III => "III",
            Division::IV => "IV",
        }
    }
}

#[derive(Debug, Clone)]
pub struct LeagueV4Api(Arc<ApiClient>);

impl LeagueV4Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_challenger(&self, queue: Queue) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[LOL-LEAGUE-V4 API] get_challenger {}", queue);

        let path = format!("/lol/league/v4/challengerleagues/by-queue/{}", queue);
        self.0.get_into(&path).await
    }

    pub async fn get_grandmaster(&self, queue: Queue) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[LOL-LEAGUE-V4 API] get_grandmaster {}", queue);

        let path = format!("/lol/league/v4/grandmasterleagues/by-queue/{}", queue);
        self.0.get_into(&path).await
    }

    pub async fn get_master(&self, queue: Queue) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[LOL-LEAGUE-V4 API] get_master {}", queue);

        let path = format!("/lol/league/v4/masterleagues/by-queue/{}", queue);
        self.0.get_into(&path).await
    }

    pub async fn list_by_puuid(&self, puuid: &str) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!("[LOL-LEAGUE-V4 API] list_by_puuid {}", puuid);

        let path = format!("/lol/league/v4/entries/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }

    pub async fn list_by_summoner(
        &self,
        summoner_id: &str,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!("[LOL-LEAGUE-V4 API] list_by_summoner {}", summoner_id);

        let path = format!("/lol/league/v4/entries/by-summoner/{}", summoner_id);
        self.0.get_into(&path).await
    }

    /// One page of the players of an apex-less division. Pages start at 1.
    pub async fn list_players(
        &self,
        queue: Queue,
        tier: Tier,
        division: Division,
        page: u32,
    ) -> RiotApiResponse<Vec<LeagueEntryDto>> {
        tracing::trace!(
            "[LOL-LEAGUE-V4 API] list_players {} {} {} page {}",
            queue,
            tier.as_str(),
            division.as_str(),
            page
        );

        let path = format!(
            "/lol/league/v4/entries/{}/{}/{}?page={}",
            queue,
            tier.as_str(),
            division.as_str(),
            page
        );
        self.0.get_into(&path).await
    }

    pub async fn get(&self, league_id: &str) -> RiotApiResponse<LeagueListDto> {
        tracing::trace!("[LOL-LEAGUE-V4 API] get {}", league_id);

        let path = format!("/lol/league/v4/leagues/{}", league_id);
        self.0.get_into(&path).await
    }
}

/// Representation of a league with all of its entries.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueListDto {
    #[serde(default)]
    pub league_id: Option<String>,
    pub tier: String,
    #[serde(default)]
    pub name: Option<String>,
    pub queue: String,
    pub entries: Vec<LeagueItemDto>,
}

impl LeagueListDto {
    /// Entry holding `rank` once sorted by league points, 1 being the best.
    pub fn entry_at_rank(&self, rank: usize) -> Option<&LeagueItemDto> {
        let mut sorted: Vec<&LeagueItemDto> = self.entries.iter().collect();
        sorted.sort_by(|a, b| b.league_points.cmp(&a.league_points));
        sorted.into_iter().nth(rank.checked_sub(1)?)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueItemDto {
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub summoner_id: Option<String>,
    pub league_points: i32,
    pub rank: String,
    pub wins: i32,
    pub losses: i32,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub mini_series: Option<MiniSeriesDto>,
}

/// Representation of the league entry response, shared by LoL and TFT.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntryDto {
    #[serde(default)]
    pub league_id: Option<String>,
    #[serde(default)]
    pub puuid: Option<String>,
    #[serde(default)]
    pub summoner_id: Option<String>,
    pub queue_type: String,
    #[serde(default)]
    pub tier: Option<String>,
    #[serde(default)]
    pub rank: Option<String>,
    #[serde(default)]
    pub league_points: i32,
    pub wins: i32,
    pub losses: i32,
    #[serde(default)]
    pub hot_streak: bool,
    #[serde(default)]
    pub veteran: bool,
    #[serde(default)]
    pub fresh_blood: bool,
    #[serde(default)]
    pub inactive: bool,
    #[serde(default)]
    pub mini_series: Option<MiniSeriesDto>,
}

impl LeagueEntryDto {
    pub fn is_ranked_solo_duo(&self) -> bool {
        self.queue_type == Queue::RankedSolo5x5.as_str()
    }

    pub fn is_ranked_flex(&self) -> bool {
        self.queue_type == Queue::RankedFlexSr.as_str()
    }

    pub fn win_rate(&self) -> f64 {
        let games = self.wins + self.losses;
        if games == 0 {
            0.0
        } else {
            self.wins as f64 / games as f64
        }
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct MiniSeriesDto {
    pub losses: i32,
    pub progress: String,
    pub target: i32,
    pub wins: i32,
}
