use std::collections::HashMap;
use std::sync::Arc;

use futures::Stream;
use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::api::stream::paginate;
use crate::types::RiotApiResponse;

/// Largest `count` accepted by the match id list endpoint.
pub const MATCH_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Ranked,
    Normal,
    Tourney,
    Tutorial,
}

impl MatchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchType::Ranked => "ranked",
            MatchType::Normal => "normal",
            MatchType::Tourney => "tourney",
            MatchType::Tutorial => "tutorial",
        }
    }
}

/// Filters of the match id list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchListOptions {
    /// Epoch seconds.
    pub start_time: Option<i64>,
    /// Epoch seconds.
    pub end_time: Option<i64>,
    pub queue: Option<i32>,
    pub kind: Option<MatchType>,
    pub start: Option<u32>,
    pub count: Option<u32>,
}

impl MatchListOptions {
    fn query(&self) -> String {
        let mut params = Vec::new();
        if let Some(start_time) = self.start_time {
            params.push(format!("startTime={}", start_time));
        }
        if let Some(end_time) = self.end_time {
            params.push(format!("endTime={}", end_time));
        }
        if let Some(queue) = self.queue {
            params.push(format!("queue={}", queue));
        }
        if let Some(kind) = self.kind {
            params.push(format!("type={}", kind.as_str()));
        }
        if let Some(start) = self.start {
            params.push(format!("start={}", start));
        }
        if let Some(count) = self.count {
            params.push(format!("count={}", count));
        }

        if params.is_empty() {
            String::new()
        } else {
            format!("?{}", params.join("&"))
        }
    }
}

/// Match-V5, served on the continent route.
#[derive(Debug, Clone)]
pub struct MatchV5Api(Arc<ApiClient>);

impl MatchV5Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn list(
        &self,
        puuid: &str,
        options: &MatchListOptions,
    ) -> RiotApiResponse<Vec<String>> {
        tracing::trace!("[LOL-MATCH-V5 API] list {} {:?}", puuid, options);

        let path = format!(
            "/lol/match/v5/matches/by-puuid/{}/ids{}",
            puuid,
            options.query()
        );
        self.0.get_into(&path).await
    }

    /// Every match id matching `options`, fetched page by page as the stream is
    /// consumed. `start` and `count` of `options` are managed by the stream.
    pub fn list_stream<'a>(
        &'a self,
        puuid: &'a str,
        options: MatchListOptions,
    ) -> impl Stream<Item = RiotApiResponse<String>> + 'a {
        paginate(MATCH_PAGE_SIZE, move |start, count| {
            let options = MatchListOptions {
                start: Some(start),
                count: Some(count),
                ..options.clone()
            };
            async move { self.list(puuid, &options).await }
        })
    }

    pub async fn get(&self, match_id: &str) -> RiotApiResponse<MatchDto> {
        tracing::trace!("[LOL-MATCH-V5 API] get {}", match_id);

        let path = format!("/lol/match/v5/matches/{}", match_id);
        self.0.get_into(&path).await
    }

    pub async fn get_timeline(&self, match_id: &str) -> RiotApiResponse<TimelineDto> {
        tracing::trace!("[LOL-MATCH-V5 API] get_timeline {}", match_id);

        let path = format!("/lol/match/v5/matches/{}/timeline", match_id);
        self.0.get_into(&path).await
    }
}

/// Representation of the match data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    pub metadata: MetadataDto,
    pub info: InfoDto,
}

impl MatchDto {
    pub fn participant_info_of(&self, puuid: &str) -> Option<&ParticipantDto> {
        self.info.participants.iter().find(|p| p.puuid == puuid)
    }

    pub fn to_formatted_match_duration(&self) -> String {
        let minutes = self.info.game_duration / 60;
        let seconds = self.info.game_duration % 60;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MetadataDto {
    pub data_version: String,
    pub match_id: String,
    pub participants: Vec<String>,
}

/// Representation of the match info data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct InfoDto {
    pub game_creation: i64,
    /// Seconds.
    pub game_duration: i64,
    #[serde(default)]
    pub game_end_timestamp: Option<i64>,
    pub game_id: i64,
    pub game_mode: String,
    #[serde(default)]
    pub game_name: String,
    #[serde(default)]
    pub game_start_timestamp: i64,
    #[serde(default)]
    pub game_type: String,
    pub game_version: String,
    pub map_id: i32,
    pub participants: Vec<ParticipantDto>,
    #[serde(default)]
    pub platform_id: String,
    pub queue_id: i32,
    #[serde(default)]
    pub teams: Vec<TeamDto>,
    #[serde(default)]
    pub tournament_code: Option<String>,
}

impl InfoDto {
    /// Short patch version (`"14.24"` from `"14.24.632.8043"`).
    pub fn patch_version(&self) -> &str {
        self.game_version
            .match_indices('.')
            .nth(1)
            .map(|(idx, _)| &self.game_version[..idx])
            .unwrap_or(&self.game_version)
    }
}

/// Representation of the participant data response.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub puuid: String,
    #[serde(default)]
    pub riot_id_game_name: String,
    #[serde(default)]
    pub riot_id_tagline: String,
    pub champion_id: i32,
    pub champion_name: String,
    #[serde(default)]
    pub champ_level: i32,
    pub team_id: i32,
    #[serde(default)]
    pub team_position: String,
    #[serde(default)]
    pub individual_position: String,
    pub kills: i32,
    pub deaths: i32,
    pub assists: i32,
    #[serde(default)]
    pub gold_earned: i64,
    #[serde(default)]
    pub total_damage_dealt_to_champions: i64,
    #[serde(default)]
    pub total_minions_killed: i32,
    #[serde(default)]
    pub neutral_minions_killed: i32,
    #[serde(default)]
    pub vision_score: i32,
    #[serde(default)]
    pub profile_icon: i32,
    #[serde(default)]
    pub summoner1_id: i32,
    #[serde(default)]
    pub summoner2_id: i32,
    pub win: bool,
    #[serde(default)]
    pub item0: i32,
    #[serde(default)]
    pub item1: i32,
    #[serde(default)]
    pub item2: i32,
    #[serde(default)]
    pub item3: i32,
    #[serde(default)]
    pub item4: i32,
    #[serde(default)]
    pub item5: i32,
    #[serde(default)]
    pub item6: i32,
}

impl ParticipantDto {
    pub fn kda_ratio(&self) -> f64 {
        if self.deaths == 0 {
            (self.kills + self.assists) as f64
        } else {
            (self.kills + self.assists) as f64 / self.deaths as f64
        }
    }

    pub fn cs_total(&self) -> i32 {
        self.total_minions_killed + self.neutral_minions_killed
    }

    /// Returns all item IDs (0 = empty slot)
    pub fn items(&self) -> [i32; 7] {
        [
            self.item0, self.item1, self.item2, self.item3, self.item4, self.item5, self.item6,
        ]
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TeamDto {
    pub team_id: i32,
    pub win: bool,
    #[serde(default)]
    pub bans: Vec<BanDto>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct BanDto {
    pub champion_id: i32,
    pub pick_turn: i32,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineDto {
    pub metadata: MetadataDto,
    pub info: TimelineInfoDto,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct TimelineInfoDto {
    pub frame_interval: i64,
    pub frames: Vec<FrameDto>,
    #[serde(default)]
    pub game_id: i64,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct FrameDto {
    pub timestamp: i64,
    #[serde(default)]
    pub events: Vec<EventDto>,
    #[serde(default)]
    pub participant_frames: HashMap<String, ParticipantFrameDto>,
}

/// Timeline event. Fields depending on the event type are kept raw.
#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(flatten)]
    pub details: HashMap<String, serde_json::Value>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantFrameDto {
    pub participant_id: i32,
    #[serde(default)]
    pub current_gold: i32,
    #[serde(default)]
    pub total_gold: i32,
    #[serde(default)]
    pub level: i32,
    #[serde(default)]
    pub xp: i32,
    #[serde(default)]
    pub minions_killed: i32,
    #[serde(default)]
    pub jungle_minions_killed: i32,
}
