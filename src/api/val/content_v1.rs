use std::collections::HashMap;
use std::sync::Arc;

use serde::Deserialize;

use crate::api::client::ApiClient;
use crate::types::RiotApiResponse;

#[derive(Debug, Clone)]
pub struct ContentV1Api(Arc<ApiClient>);

impl ContentV1Api {
    pub fn new(api_client: Arc<ApiClient>) -> Self {
        Self(api_client)
    }

    /// Game content, with every localized name when `locale` is `None`.
    pub async fn get_content(&self, locale: Option<&str>) -> RiotApiResponse<ContentDto> {
        tracing::trace!("[VAL-CONTENT-V1 API] get_content {:?}", locale);

        let path = match locale {
            Some(locale) => format!("/val/content/v1/contents?locale={}", locale),
            None => "/val/content/v1/contents".to_string(),
        };
        self.0.get_into(&path).await
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentDto {
    pub version: String,
    #[serde(default)]
    pub characters: Vec<ContentItemDto>,
    #[serde(default)]
    pub maps: Vec<ContentItemDto>,
    #[serde(default)]
    pub chromas: Vec<ContentItemDto>,
    #[serde(default)]
    pub skins: Vec<ContentItemDto>,
    #[serde(default)]
    pub skin_levels: Vec<ContentItemDto>,
    #[serde(default)]
    pub equips: Vec<ContentItemDto>,
    #[serde(default)]
    pub game_modes: Vec<ContentItemDto>,
    #[serde(default)]
    pub sprays: Vec<ContentItemDto>,
    #[serde(default)]
    pub spray_levels: Vec<ContentItemDto>,
    #[serde(default)]
    pub charms: Vec<ContentItemDto>,
    #[serde(default)]
    pub charm_levels: Vec<ContentItemDto>,
    #[serde(default)]
    pub player_cards: Vec<ContentItemDto>,
    #[serde(default)]
    pub player_titles: Vec<ContentItemDto>,
    #[serde(default)]
    pub acts: Vec<ActDto>,
}

impl ContentDto {
    /// The act currently running, if any.
    pub fn active_act(&self) -> Option<&ActDto> {
        self.acts.iter().find(|act| act.is_active)
    }
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ContentItemDto {
    pub name: String,
    #[serde(default)]
    pub localized_names: Option<HashMap<String, String>>,
    pub id: String,
    #[serde(default)]
    pub asset_name: String,
    #[serde(default)]
    pub asset_path: Option<String>,
}

#[derive(Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct ActDto {
    pub name: String,
    #[serde(default)]
    pub localized_names: Option<HashMap<String, String>>,
    pub id: String,
    pub is_active: bool,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub parent_id: Option<String>,
}
