use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

/// Platform status endpoint, identical in shape across every game.
#[derive(Debug, Clone)]
pub struct StatusApi {
    client: Arc<ApiClient>,
    path: &'static str,
}

impl StatusApi {
    pub const LOL: &'static str = "/lol/status/v4/platform-data";
    pub const TFT: &'static str = "/tft/status/v1/platform-data";
    pub const VAL: &'static str = "/val/status/v1/platform-data";
    pub const LOR: &'static str = "/lor/status/v1/platform-data";

    pub fn new(client: Arc<ApiClient>, path: &'static str) -> Self {
        Self { client, path }
    }

    pub async fn get_platform_data(&self) -> RiotApiResponse<PlatformDataDto> {
        tracing::trace!("[STATUS API] get_platform_data {}", self.path);

        self.client.get_into(self.path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct PlatformDataDto {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub locales: Vec<String>,
    #[serde(default)]
    pub maintenances: Vec<StatusDto>,
    #[serde(default)]
    pub incidents: Vec<StatusDto>,
}

impl PlatformDataDto {
    pub fn is_healthy(&self) -> bool {
        self.maintenances.is_empty() && self.incidents.is_empty()
    }
}

#[derive(Deserialize, Debug, Clone)]
pub struct StatusDto {
    pub id: i64,
    #[serde(default)]
    pub maintenance_status: Option<String>,
    #[serde(default)]
    pub incident_severity: Option<String>,
    #[serde(default)]
    pub titles: Vec<ContentDto>,
    #[serde(default)]
    pub updates: Vec<UpdateDto>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub archive_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
    #[serde(default)]
    pub platforms: Vec<String>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ContentDto {
    pub locale: String,
    pub content: String,
}

#[derive(Deserialize, Debug, Clone)]
pub struct UpdateDto {
    pub id: i64,
    pub author: String,
    pub publish: bool,
    #[serde(default)]
    pub publish_locations: Vec<String>,
    #[serde(default)]
    pub translations: Vec<ContentDto>,
    pub created_at: String,
    pub updated_at: String,
}
