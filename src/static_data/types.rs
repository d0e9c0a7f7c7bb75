use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub id: i64,
    pub season: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Queue {
    pub queue_id: i64,
    pub map: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Map {
    pub map_id: i64,
    pub map_name: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMode {
    pub game_mode: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameType {
    #[serde(rename = "gametype")]
    pub game_type: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn queue_with_null_description_decodes() {
        let raw = r#"{"queueId": 0, "map": "Custom games", "description": null, "notes": null}"#;
        let queue: Queue = serde_json::from_str(raw).unwrap();

        assert_eq!(queue.queue_id, 0);
        assert!(queue.description.is_none());
    }

    #[test]
    fn game_type_uses_lowercase_field() {
        let raw = r#"{"gametype": "MATCHED_GAME", "description": "all other games"}"#;
        let game_type: GameType = serde_json::from_str(raw).unwrap();

        assert_eq!(game_type.game_type, "MATCHED_GAME");
    }
}
