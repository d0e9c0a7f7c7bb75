use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::lol::summoner_v4::SummonerDto;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone)]
pub struct SummonerV1Api(Arc<ApiClient>);

impl SummonerV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    pub async fn get_by_puuid(&self, puuid: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[TFT-SUMMONER-V1 API] get_by_puuid {}", puuid);

        let path = format!("/tft/summoner/v1/summoners/by-puuid/{}", puuid);
        self.0.get_into(&path).await
    }

    pub async fn get_by_id(&self, summoner_id: &str) -> RiotApiResponse<SummonerDto> {
        tracing::trace!("[TFT-SUMMONER-V1 API] get_by_id {}", summoner_id);

        let path = format!("/tft/summoner/v1/summoners/{}", summoner_id);
        self.0.get_into(&path).await
    }
}
