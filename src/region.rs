use std::fmt;
use std::str::FromStr;

use crate::types::ConfigError;

/// Platform routing values (Summoner-v4, League-v4, Spectator-v5...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    BR1,
    EUN1,
    EUW1,
    JP1,
    KR,
    LA1,
    LA2,
    ME1,
    NA1,
    OC1,
    PH2,
    RU,
    SG2,
    TH2,
    TR1,
    TW2,
    VN2,
    PBE1,
}

impl Region {
    pub const ALL: [Region; 18] = [
        Self::BR1,
        Self::EUN1,
        Self::EUW1,
        Self::JP1,
        Self::KR,
        Self::LA1,
        Self::LA2,
        Self::ME1,
        Self::NA1,
        Self::OC1,
        Self::PH2,
        Self::RU,
        Self::SG2,
        Self::TH2,
        Self::TR1,
        Self::TW2,
        Self::VN2,
        Self::PBE1,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BR1 => "br1",
            Self::EUN1 => "eun1",
            Self::EUW1 => "euw1",
            Self::JP1 => "jp1",
            Self::KR => "kr",
            Self::LA1 => "la1",
            Self::LA2 => "la2",
            Self::ME1 => "me1",
            Self::NA1 => "na1",
            Self::OC1 => "oc1",
            Self::PH2 => "ph2",
            Self::RU => "ru",
            Self::SG2 => "sg2",
            Self::TH2 => "th2",
            Self::TR1 => "tr1",
            Self::TW2 => "tw2",
            Self::VN2 => "vn2",
            Self::PBE1 => "pbe1",
        }
    }

    /// Continent-level route required by Account-v1, Match-v5 and friends.
    pub fn route(self) -> Route {
        match self {
            Self::BR1 | Self::LA1 | Self::LA2 | Self::NA1 | Self::PBE1 => Route::Americas,
            Self::JP1 | Self::KR => Route::Asia,
            Self::EUN1 | Self::EUW1 | Self::ME1 | Self::RU | Self::TR1 => Route::Europe,
            Self::OC1 | Self::PH2 | Self::SG2 | Self::TH2 | Self::TW2 | Self::VN2 => Route::Sea,
        }
    }

    /// Valorant shard serving this platform.
    pub fn val_shard(self) -> ValShard {
        match self {
            Self::BR1 => ValShard::Br,
            Self::LA1 | Self::LA2 => ValShard::Latam,
            Self::NA1 => ValShard::Na,
            Self::KR => ValShard::Kr,
            Self::PBE1 => ValShard::Pbe,
            Self::EUN1 | Self::EUW1 | Self::ME1 | Self::RU | Self::TR1 => ValShard::Eu,
            Self::JP1
            | Self::OC1
            | Self::PH2
            | Self::SG2
            | Self::TH2
            | Self::TW2
            | Self::VN2 => ValShard::Ap,
        }
    }
}

impl FromStr for Region {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BR" | "BR1" => Ok(Self::BR1),
            "EUNE" | "EUN" | "EUN1" => Ok(Self::EUN1),
            "EUW" | "EUW1" => Ok(Self::EUW1),
            "JP" | "JP1" => Ok(Self::JP1),
            "KR" => Ok(Self::KR),
            "LAN" | "LA1" => Ok(Self::LA1),
            "LAS" | "LA2" => Ok(Self::LA2),
            "ME" | "ME1" => Ok(Self::ME1),
            "NA" | "NA1" => Ok(Self::NA1),
            "OCE" | "OC" | "OC1" => Ok(Self::OC1),
            "PH" | "PH2" => Ok(Self::PH2),
            "RU" => Ok(Self::RU),
            "SG" | "SG2" => Ok(Self::SG2),
            "TH" | "TH2" => Ok(Self::TH2),
            "TR" | "TR1" => Ok(Self::TR1),
            "TW" | "TW2" => Ok(Self::TW2),
            "VN" | "VN2" => Ok(Self::VN2),
            "PBE" | "PBE1" => Ok(Self::PBE1),
            _ => Err(ConfigError::InvalidRegion(s.to_string())),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Regional routing values (Account-v1, Match-v5, LoR).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Americas,
    Asia,
    Europe,
    Sea,
}

impl Route {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Americas => "americas",
            Self::Asia => "asia",
            Self::Europe => "europe",
            Self::Sea => "sea",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValShard {
    Ap,
    Br,
    Eu,
    Kr,
    Latam,
    Na,
    Pbe,
}

impl ValShard {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ap => "ap",
            Self::Br => "br",
            Self::Eu => "eu",
            Self::Kr => "kr",
            Self::Latam => "latam",
            Self::Na => "na",
            Self::Pbe => "pbe",
        }
    }
}

impl fmt::Display for ValShard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
