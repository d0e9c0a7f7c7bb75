//! VALORANT endpoints, all served on the shard host.

use std::sync::Arc;

use crate::api::client::ApiClient;
use crate::api::status::StatusApi;

pub mod content_v1;
pub mod match_v1;
pub mod ranked_v1;

use content_v1::ContentV1Api;
use match_v1::MatchV1Api;
use ranked_v1::RankedV1Api;

#[derive(Debug, Clone)]
pub struct ValApi {
    pub content_v1: ContentV1Api,
    pub ranked_v1: RankedV1Api,
    pub match_v1: MatchV1Api,
    pub status_v1: StatusApi,
}

impl ValApi {
    pub fn new(shard: Arc<ApiClient>) -> Self {
        Self {
            content_v1: ContentV1Api::new(shard.clone()),
            ranked_v1: RankedV1Api::new(shard.clone()),
            match_v1: MatchV1Api::new(shard.clone()),
            status_v1: StatusApi::new(shard, StatusApi::VAL),
        }
    }
}
