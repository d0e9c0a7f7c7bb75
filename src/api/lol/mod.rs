//! League of Legends endpoints.

use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::status::StatusApi;

pub mod challenges_v1;
pub mod champion_mastery_v4;
pub mod champion_v3;
pub mod clash_v1;
pub mod league_v4;
pub mod match_v5;
pub mod spectator_v5;
pub mod summoner_v4;
pub mod tournament_v5;

use challenges_v1::ChallengesV1Api;
use champion_mastery_v4::ChampionMasteryV4Api;
use champion_v3::ChampionV3Api;
use clash_v1::ClashV1Api;
use league_v4::LeagueV4Api;
use match_v5::MatchV5Api;
use spectator_v5::SpectatorV5Api;
use summoner_v4::SummonerV4Api;
use tournament_v5::TournamentV5Api;

#[derive(Debug, Clone)]
pub struct LolApi {
    pub summoner_v4: SummonerV4Api,
    pub league_v4: LeagueV4Api,
    pub match_v5: MatchV5Api,
    pub spectator_v5: SpectatorV5Api,
    pub champion_v3: ChampionV3Api,
    pub champion_mastery_v4: ChampionMasteryV4Api,
    pub challenges_v1: ChallengesV1Api,
    pub clash_v1: ClashV1Api,
    pub status_v4: StatusApi,
    pub tournament_v5: TournamentV5Api,
    pub tournament_stub_v5: TournamentV5Api,
}

impl LolApi {
    /// `platform` addresses the platform host, `route` its continent and
    /// `tournament` the `americas` route.
    pub fn new(
        platform: Arc<ApiClient>,
        route: Arc<ApiClient>,
        tournament: Arc<ApiClient>,
    ) -> Self {
        Self {
            summoner_v4: SummonerV4Api::new(platform.clone()),
            league_v4: LeagueV4Api::new(platform.clone()),
            match_v5: MatchV5Api::new(route),
            spectator_v5: SpectatorV5Api::new(platform.clone(), SpectatorV5Api::LOL),
            champion_v3: ChampionV3Api::new(platform.clone()),
            champion_mastery_v4: ChampionMasteryV4Api::new(platform.clone()),
            challenges_v1: ChallengesV1Api::new(platform.clone()),
            clash_v1: ClashV1Api::new(platform.clone()),
            status_v4: StatusApi::new(platform, StatusApi::LOL),
            tournament_v5: TournamentV5Api::new(tournament.clone()),
            tournament_stub_v5: TournamentV5Api::stub(tournament),
        }
    }
}
