use std::fmt;
use std::sync::Arc;

use futures::Stream;
use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::api::stream::paginate;
use crate::types::RiotApiResponse;

/// Page size used when streaming match ids.
pub const TFT_MATCH_PAGE_SIZE: u32 = 100;

/// TFT-Match-V1, served on the continent route.
#[derive(Debug, Clone)]
pub struct MatchV1Api(Arc<ApiClient>);

impl MatchV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn list(&self, puuid: &str, start: u32, count: u32) -> RiotApiResponse<Vec<String>> {
        tracing::trace!("[TFT-MATCH-V1 API] list {} ({}+{})", puuid, start, count);

        let path = format!(
            "/tft/match/v1/matches/by-puuid/{}/ids?start={}&count={}",
            puuid, start, count
        );
        self.0.get_into(&path).await
    }

    /// Every match id of the player, fetched page by page as the stream is consumed.
    pub fn list_stream<'a>(
        &'a self,
        puuid: &'a str,
    ) -> impl Stream<Item = RiotApiResponse<String>> + 'a {
        paginate(TFT_MATCH_PAGE_SIZE, move |start, count| {
            self.list(puuid, start, count)
        })
    }

    pub async fn get(&self, match_id: &str) -> RiotApiResponse<MatchDto> {
        tracing::trace!("[TFT-MATCH-V1 API] get {}", match_id);

        let path = format!("/tft/match/v1/matches/{}", match_id);
        self.0.get_into(&path).await
    }
}

/// Representation of the match data response.
#[derive(Deserialize, Debug, Clone)]
pub struct MatchDto {
    pub metadata: MetadataDto,
    pub info: InfoDto,
}

impl MatchDto {
    pub fn participant(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }

    pub fn is_ranked(&self) -> bool {
        self.info.queue_id == 1100
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct MetadataDto {
    #[serde(default)]
    pub data_version: String,
    pub match_id: String,
    #[serde(default)]
    pub participants: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct InfoDto {
    pub participants: Vec<ParticipantDto>,
    pub queue_id: i32,
    #[serde(default)]
    pub game_datetime: i64,
    /// Seconds, fractional.
    #[serde(default)]
    pub game_length: f64,
    #[serde(default)]
    pub game_version: String,
    #[serde(default)]
    pub tft_set_number: i32,
    #[serde(default)]
    pub tft_game_type: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ParticipantDto {
    pub puuid: String,
    #[serde(rename = "riotIdGameName", default)]
    pub riot_id_game_name: String,
    #[serde(rename = "riotIdTagline", default)]
    pub riot_id_tagline: String,
    pub placement: i32,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub gold_left: i32,
    #[serde(default)]
    pub last_round: i32,
    #[serde(default)]
    pub total_damage_to_players: i32,
    #[serde(default)]
    pub companion: Option<CompanionDto>,
    #[serde(default)]
    pub traits: Vec<TraitDto>,
    #[serde(default)]
    pub units: Vec<UnitDto>,
}

impl ParticipantDto {
    /// `"1st"`, `"2nd"`, `"3rd"`, `"4th"`...
    pub fn placement_label(&self) -> String {
        match self.placement {
            1 => "1st".to_string(),
            2 => "2nd".to_string(),
            3 => "3rd".to_string(),
            x => format!("{}th", x),
        }
    }

    /// Top four.
    pub fn is_win(&self) -> bool {
        self.placement <= 4
    }

    /// Highest star level, then rarity, then item count.
    pub fn best_unit(&self) -> Option<&UnitDto> {
        self.units.iter().max_by(|a, b| {
            (a.tier, a.rarity, a.item_names.len()).cmp(&(b.tier, b.rarity, b.item_names.len()))
        })
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct CompanionDto {
    #[serde(rename = "item_ID")]
    pub item_id: i64,
    #[serde(rename = "skin_ID")]
    pub skin_id: i64,
    #[serde(default)]
    pub species: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct TraitDto {
    pub name: String,
    pub num_units: i32,
    pub style: i32,
    pub tier_current: i32,
    pub tier_total: i32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UnitDto {
    pub character_id: String,
    #[serde(rename = "itemNames", default)]
    pub item_names: Vec<String>,
    pub rarity: i32,
    pub tier: i32,
}

impl fmt::Display for UnitDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .character_id
            .rsplit('_')
            .next()
            .unwrap_or(&self.character_id);

        write!(f, "{} ({}*)", name, self.tier)
    }
}
