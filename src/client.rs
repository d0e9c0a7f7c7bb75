use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::{
    AccountApi, ApiClient, Host, LolApi, LorApi, TftApi, ValApi,
    metrics::RequestMetrics,
    traits::Transport,
};
use crate::config::ClientConfig;
use crate::ddragon::{DDRAGON_ORIGIN, DataDragonClient};
use crate::region::{Region, Route};
use crate::static_data::{STATIC_DATA_ORIGIN, StaticDataClient};

/// Every Riot API family behind one value.
///
/// All the cores are derived from a single platform core and share its
/// transport and cancellation token. Only the Riot API cores share the
/// throttle and request metrics; Data Dragon and static data have their own.
#[derive(Debug)]
pub struct RiotClient {
    core: ApiClient,
    region: Region,
    pub account: AccountApi,
    pub lol: LolApi,
    pub tft: TftApi,
    pub val: ValApi,
    pub lor: LorApi,
    pub ddragon: DataDragonClient,
    pub static_data: StaticDataClient,
}

impl RiotClient {
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(reqwest::Client::new()))
    }

    pub fn with_transport(config: ClientConfig, transport: Arc<dyn Transport>) -> Self {
        let mut core = ApiClient::new(transport, config.api_key, Host::riot(config.region.as_str()))
            .with_rate_limit(config.rate_limit);
        if let Some(per_second) = config.requests_per_second {
            core = core.with_throttle(per_second);
        }

        tracing::debug!(
            "[RIOT::CLIENT] new client for {} (route {}, shard {})",
            config.region,
            config.region.route(),
            config.region.val_shard()
        );

        let platform = Arc::new(core.clone());
        let route = Arc::new(core.with_subdomain(config.region.route().as_str()));
        let shard = Arc::new(core.with_subdomain(config.region.val_shard().as_str()));
        let tournament = Arc::new(core.with_subdomain(Route::Americas.as_str()));

        Self {
            account: AccountApi::new(route.clone()),
            lol: LolApi::new(platform.clone(), route.clone(), tournament),
            tft: TftApi::new(platform, route.clone()),
            val: ValApi::new(shard),
            lor: LorApi::new(route),
            ddragon: DataDragonClient::new(
                core.with_origin(Host::fixed(DDRAGON_ORIGIN), "ddragon"),
                config.ddragon_version,
                config.ddragon_language,
            ),
            static_data: StaticDataClient::new(
                core.with_origin(Host::fixed(STATIC_DATA_ORIGIN), "static-data"),
            ),
            region: config.region,
            core,
        }
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn metrics(&self) -> &Arc<RequestMetrics> {
        &self.core.metrics
    }

    /// Spawn a task logging periodic metrics about requests, until the client is cancelled.
    pub fn start_metrics_logging(&self) -> JoinHandle<()> {
        let metrics = self.core.metrics.clone();
        let token = self.core.cancellation_token().clone();
        tokio::spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = metrics.log_loop() => {}
            }
        })
    }

    /// Abort every in-flight and future request of this client.
    pub fn cancel(&self) {
        tracing::debug!("[RIOT::CLIENT] cancelling every request");
        self.core.cancellation_token().cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.core.cancellation_token().is_cancelled()
    }
}
