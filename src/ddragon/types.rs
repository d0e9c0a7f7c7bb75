use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Envelope shared by every Data Dragon data file.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct DataFile<T> {
    pub data: HashMap<String, T>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageDto {
    pub full: String,
    pub sprite: String,
    pub group: String,
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

// ============================================================================
// Champions
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionInfo {
    pub attack: i32,
    pub defense: i32,
    pub magic: i32,
    pub difficulty: i32,
}

/// Summary record from `champion.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionData {
    pub version: String,
    pub id: String,
    /// Numeric champion id, as a string.
    pub key: String,
    pub name: String,
    pub title: String,
    pub blurb: String,
    pub info: ChampionInfo,
    pub image: ImageDto,
    pub tags: Vec<String>,
    pub partype: String,
    pub stats: HashMap<String, f64>,
}

impl ChampionData {
    pub fn numeric_key(&self) -> Option<i64> {
        self.key.parse().ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkinDto {
    pub id: String,
    pub num: i32,
    pub name: String,
    pub chromas: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChampionSpellDto {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub maxrank: i32,
    pub cooldown: Vec<f64>,
    pub cooldown_burn: String,
    pub cost: Vec<f64>,
    pub cost_burn: String,
    pub range: Vec<f64>,
    pub range_burn: String,
    pub image: ImageDto,
    pub resource: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PassiveDto {
    pub name: String,
    pub description: String,
    pub image: ImageDto,
}

/// Full record from `champion/<name>.json`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChampionDataExtended {
    #[serde(flatten)]
    pub champion: ChampionData,
    pub skins: Vec<SkinDto>,
    pub lore: String,
    pub allytips: Vec<String>,
    pub enemytips: Vec<String>,
    pub spells: Vec<ChampionSpellDto>,
    pub passive: PassiveDto,
}

impl ChampionDataExtended {
    /// Only the summary fields are known, the detail file was never fetched.
    pub fn is_summary_only(&self) -> bool {
        self.lore.is_empty()
    }
}

impl From<ChampionData> for ChampionDataExtended {
    fn from(champion: ChampionData) -> Self {
        Self {
            champion,
            ..Default::default()
        }
    }
}

// ============================================================================
// Items
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoldDto {
    pub base: i32,
    pub total: i32,
    pub sell: i32,
    pub purchasable: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ItemData {
    /// Filled from the key of the `data` map.
    pub id: String,
    pub name: String,
    pub description: String,
    pub plaintext: String,
    /// Items this item builds into.
    pub into: Vec<String>,
    /// Items this item is built from.
    pub from: Vec<String>,
    pub gold: GoldDto,
    pub tags: Vec<String>,
    pub stats: HashMap<String, f64>,
    pub maps: HashMap<String, bool>,
    pub image: ImageDto,
    pub depth: i32,
}

// ============================================================================
// Profile icons, masteries, runes and summoner spells
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileIcon {
    pub id: i64,
    pub image: ImageDto,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasteryData {
    pub id: i64,
    pub name: String,
    pub description: Vec<String>,
    pub image: ImageDto,
    pub ranks: i32,
    pub prereq: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuneMetadata {
    pub isrune: bool,
    pub tier: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuneData {
    /// Filled from the key of the `data` map.
    pub id: String,
    pub name: String,
    pub description: String,
    pub image: ImageDto,
    pub rune: RuneMetadata,
    pub stats: HashMap<String, f64>,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SummonerSpell {
    pub id: String,
    pub name: String,
    pub description: String,
    pub tooltip: String,
    pub maxrank: i32,
    pub cooldown: Vec<f64>,
    pub cooldown_burn: String,
    pub key: String,
    pub summoner_level: i32,
    pub modes: Vec<String>,
    pub range: Vec<f64>,
    pub image: ImageDto,
}
