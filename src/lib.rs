//! Typed async client for the Riot Games REST APIs.
//!
//! The library offers typed wrappers around the official League of Legends,
//! Teamfight Tactics, VALORANT and Legends of Runeterra endpoints, plus cached
//! access to Data Dragon and the static game constants. Every request goes
//! through a shared core handling authentication, `503` and `429` retries and
//! status classification.

pub mod api;
pub mod cache;
pub mod client;
pub mod config;
pub mod ddragon;
pub mod region;
pub mod static_data;
pub mod types;

pub use client::RiotClient;
pub use config::{ClientConfig, RateLimitPolicy};
pub use region::{Region, Route, ValShard};
pub use types::{ConfigError, RiotApiError, RiotApiResponse, StatusError};
