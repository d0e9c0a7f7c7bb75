//! Teamfight Tactics endpoints.

use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::lol::spectator_v5::SpectatorV5Api;
use crate::api::status::StatusApi;

pub mod league_v1;
pub mod match_v1;
pub mod summoner_v1;

use league_v1::LeagueV1Api;
use match_v1::MatchV1Api;
use summoner_v1::SummonerV1Api;

#[derive(Debug, Clone)]
pub struct TftApi {
    pub summoner_v1: SummonerV1Api,
    pub league_v1: LeagueV1Api,
    pub match_v1: MatchV1Api,
    pub spectator_v5: SpectatorV5Api,
    pub status_v1: StatusApi,
}

impl TftApi {
    pub fn new(platform: Arc<ApiClient>, route: Arc<ApiClient>) -> Self {
        Self {
            summoner_v1: SummonerV1Api::new(platform.clone()),
            league_v1: LeagueV1Api::new(platform.clone()),
            match_v1: MatchV1Api::new(route),
            spectator_v5: SpectatorV5Api::new(platform.clone(), SpectatorV5Api::TFT),
            status_v1: StatusApi::new(platform, StatusApi::TFT),
        }
    }
}
