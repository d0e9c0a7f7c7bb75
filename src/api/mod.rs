pub mod account;
pub mod client;
pub mod lol;
pub mod lor;
pub mod metrics;
pub mod status;
pub mod stream;
pub mod tft;
pub mod traits;
pub mod val;

pub use account::AccountApi;
pub use client::{ApiClient, Host};
pub use lol::LolApi;
pub use lor::LorApi;
pub use status::{PlatformDataDto, StatusApi};
pub use stream::paginate;
pub use tft::TftApi;
pub use val::ValApi;
