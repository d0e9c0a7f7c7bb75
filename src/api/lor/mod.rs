//! Legends of Runeterra endpoints, all served on the continent route.

use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::status::StatusApi;

pub mod match_v1;
pub mod ranked_v1;

use match_v1::MatchV1Api;
use ranked_v1::RankedV1Api;

#[derive(Debug, Clone)]
pub struct LorApi {
    pub ranked_v1: RankedV1Api,
    pub match_v1: MatchV1Api,
    pub status_v1: StatusApi,
}

impl LorApi {
    pub fn new(route: Arc<ApiClient>) -> Self {
        Self {
            ranked_v1: RankedV1Api::new(route.clone()),
            match_v1: MatchV1Api::new(route.clone()),
            status_v1: StatusApi::new(route, StatusApi::LOR),
        }
    }
}
