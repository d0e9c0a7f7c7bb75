use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

use tracing::{Instrument, info_span};

/// Counters of the requests performed by a core and of the retries it had to make.
#[derive(Debug)]
pub struct RequestMetrics {
    start: Instant,
    requests: AtomicU64,
    unavailable_retries: AtomicU64,
    rate_limited_retries: AtomicU64,
    name: &'static str,
}

impl RequestMetrics {
    pub fn new(name: &'static str) -> Arc<Self> {
        Arc::new(Self {
            start: Instant::now(),
            requests: AtomicU64::new(0),
            unavailable_retries: AtomicU64::new(0),
            rate_limited_retries: AtomicU64::new(0),
            name,
        })
    }

    pub fn inc(&self) {
        self.requests.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_unavailable(&self) {
        self.unavailable_retries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_rate_limited(&self) {
        self.rate_limited_retries.fetch_add(1, Ordering::Relaxed);
    }

    pub fn requests(&self) -> u64 {
        self.requests.load(Ordering::Relaxed)
    }

    pub fn unavailable_retries(&self) -> u64 {
        self.unavailable_retries.load(Ordering::Relaxed)
    }

    pub fn rate_limited_retries(&self) -> u64 {
        self.rate_limited_retries.load(Ordering::Relaxed)
    }

    pub async fn log_loop(self: Arc<Self>) {
        let mut interval = tokio::time::interval(Duration::from_secs(60));
        loop {
            let span = info_span!("📊 ", client = self.name);
            async {
                interval.tick().await;
                let total = self.requests();
                let elapsed_min = self.start.elapsed().as_secs_f64() / 60.0;
                let avg = if elapsed_min > 0.0 {
                    total as f64 / elapsed_min
                } else {
                    0.0
                };
                tracing::info!(
                    "{} requests executed (avg {:.2} req/min), {} retried after 503, {} after 429",
                    total,
                    avg,
                    self.unavailable_retries(),
                    self.rate_limited_retries()
                );
            }
            .instrument(span)
            .await
        }
    }
}
