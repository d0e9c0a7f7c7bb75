use std::{fmt::Debug, num::NonZeroU32, sync::Arc, time::Duration};

use bytes::Bytes;
use governor::{
    Quota, RateLimiter,
    clock::DefaultClock,
    state::{InMemoryState, NotKeyed},
};
use reqwest::{
    Method, Request, Response, StatusCode, Url,
    header::{ACCEPT, CONTENT_TYPE, HeaderName, HeaderValue, RETRY_AFTER},
};
use serde::{Serialize, de::DeserializeOwned};
use tokio_util::sync::CancellationToken;

use crate::config::RateLimitPolicy;
use crate::types::{RiotApiError, RiotApiResponse, StatusError};

use super::metrics::RequestMetrics;
use super::traits::Transport;

pub const RIOT_API_BASE: &str = "api.riotgames.com";

const API_KEY_HEADER: &str = "x-riot-token";
const UNAVAILABLE_RETRY_DELAY: Duration = Duration::from_secs(1);

type Limiter = RateLimiter<NotKeyed, InMemoryState, DefaultClock>;

/// Origin every endpoint path of a core is appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Host {
    /// `scheme://<subdomain>.<base>`, the subdomain being a platform, route or shard.
    Subdomain {
        scheme: String,
        subdomain: String,
        base: String,
    },
    /// A fixed origin such as Data Dragon or a local mock server.
    Fixed(String),
}

impl Host {
    pub fn riot(subdomain: impl Into<String>) -> Self {
        Self::Subdomain {
            scheme: "https".to_string(),
            subdomain: subdomain.into(),
            base: RIOT_API_BASE.to_string(),
        }
    }

    pub fn fixed(origin: impl Into<String>) -> Self {
        Self::Fixed(origin.into())
    }

    pub fn origin(&self) -> String {
        match self {
            Self::Subdomain {
                scheme,
                subdomain,
                base,
            } => format!("{}://{}.{}", scheme, subdomain, base),
            Self::Fixed(origin) => origin.trim_end_matches('/').to_string(),
        }
    }

    fn with_subdomain(&self, subdomain: &str) -> Self {
        match self {
            Self::Subdomain { scheme, base, .. } => Self::Subdomain {
                scheme: scheme.clone(),
                subdomain: subdomain.to_string(),
                base: base.clone(),
            },
            Self::Fixed(origin) => Self::Fixed(origin.clone()),
        }
    }
}

/// Shared request core: builds, sends and retries requests, then classifies
/// or decodes the responses.
#[derive(Debug, Clone)]
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    host: Host,
    /// Riot API Key
    key: String,
    policy: RateLimitPolicy,
    limiter: Option<Arc<Limiter>>,
    cancel: CancellationToken,
    pub metrics: Arc<RequestMetrics>,
}

impl ApiClient {
    pub fn new(transport: Arc<dyn Transport>, key: impl Into<String>, host: Host) -> Self {
        Self {
            transport,
            host,
            key: key.into(),
            policy: RateLimitPolicy::default(),
            limiter: None,
            cancel: CancellationToken::new(),
            metrics: RequestMetrics::new("riot"),
        }
    }

    pub fn with_rate_limit(mut self, policy: RateLimitPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Throttle outgoing requests on the client side, shared with every derived core.
    pub fn with_throttle(mut self, per_second: NonZeroU32) -> Self {
        self.limiter = Some(Arc::new(RateLimiter::direct(Quota::per_second(per_second))));
        self
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = token;
        self
    }

    pub fn with_metrics(mut self, metrics: Arc<RequestMetrics>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sibling core addressing another subdomain of the same base host.
    pub fn with_subdomain(&self, subdomain: &str) -> Self {
        Self {
            host: self.host.with_subdomain(subdomain),
            ..self.clone()
        }
    }

    /// Core for an origin outside the Riot API: same transport, key and
    /// cancellation, but no throttle and its own metrics.
    pub fn with_origin(&self, host: Host, name: &'static str) -> Self {
        Self {
            host,
            limiter: None,
            metrics: RequestMetrics::new(name),
            ..self.clone()
        }
    }

    pub fn host(&self) -> &Host {
        &self.host
    }

    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub async fn get(&self, endpoint: &str) -> RiotApiResponse<Response> {
        self.do_request("GET", endpoint, None).await
    }

    pub async fn get_into<T: DeserializeOwned>(&self, endpoint: &str) -> RiotApiResponse<T> {
        let res = self.get(endpoint).await?;
        decode(res).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> RiotApiResponse<Response> {
        let body = encode(body)?;
        self.do_request("POST", endpoint, Some(body)).await
    }

    pub async fn post_into<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> RiotApiResponse<T> {
        let res = self.post(endpoint, body).await?;
        decode(res).await
    }

    pub async fn put<B: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> RiotApiResponse<()> {
        let body = encode(body)?;
        self.do_request("PUT", endpoint, Some(body)).await?;
        Ok(())
    }

    /// Send a request and apply the retry policy.
    ///
    /// A `503` is retried once after one second. A `429` waits for the
    /// `Retry-After` seconds and starts over, as many times as the
    /// [`RateLimitPolicy`] allows (forever by default). Any other non-2xx
    /// status is classified into a [`StatusError`] without reading the body.
    pub async fn do_request(
        &self,
        method: &str,
        endpoint: &str,
        body: Option<Bytes>,
    ) -> RiotApiResponse<Response> {
        let method = Method::from_bytes(method.as_bytes())
            .map_err(|_| RiotApiError::Request(format!("invalid method {:?}", method)))?;

        let mut rate_limited = 0;
        loop {
            let request = self.build_request(&method, endpoint, body.as_ref())?;
            let mut response = self.send(request).await?;

            if response.status() == StatusCode::SERVICE_UNAVAILABLE {
                tracing::debug!(
                    "[RIOT::CLIENT] {} {} unavailable, retrying once",
                    method,
                    endpoint
                );
                self.metrics.inc_unavailable();
                self.sleep(UNAVAILABLE_RETRY_DELAY).await?;

                let retry = self.build_request(&method, endpoint, body.as_ref())?;
                response = self.send(retry).await?;
            }

            if response.status() == StatusCode::TOO_MANY_REQUESTS
                && self.policy.allows_retry(rate_limited)
            {
                let wait = self.policy.clamp_wait(retry_after(&response)?);
                tracing::debug!(
                    "[RIOT::CLIENT] {} {} rate limited, waiting {:?}",
                    method,
                    endpoint,
                    wait
                );
                self.metrics.inc_rate_limited();
                self.sleep(wait).await?;
                rate_limited += 1;
                continue;
            }

            let status = response.status();
            if !status.is_success() {
                let err = StatusError::from_status(status.as_u16());
                tracing::debug!("[RIOT::CLIENT] {} {} failed: {}", method, endpoint, err);
                return Err(err.into());
            }

            return Ok(response);
        }
    }

    fn build_request(
        &self,
        method: &Method,
        endpoint: &str,
        body: Option<&Bytes>,
    ) -> RiotApiResponse<Request> {
        let raw = format!("{}{}", self.host.origin(), endpoint);
        let url = Url::parse(&raw)
            .map_err(|e| RiotApiError::Request(format!("invalid url {}: {}", raw, e)))?;
        let key = HeaderValue::from_str(&self.key)
            .map_err(|_| RiotApiError::Request("API key is not a valid header value".into()))?;

        let mut request = Request::new(method.clone(), url);
        let headers = request.headers_mut();
        headers.insert(HeaderName::from_static(API_KEY_HEADER), key);
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        if let Some(body) = body {
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            *request.body_mut() = Some(body.clone().into());
        }

        Ok(request)
    }

    async fn send(&self, request: Request) -> RiotApiResponse<Response> {
        if self.cancel.is_cancelled() {
            return Err(RiotApiError::Cancelled);
        }

        if let Some(limiter) = &self.limiter {
            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => return Err(RiotApiError::Cancelled),
                _ = limiter.until_ready() => {}
            }
        }

        self.metrics.inc();

        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(RiotApiError::Cancelled),
            res = self.transport.send(request) => res.map_err(|e| {
                tracing::debug!("[RIOT::CLIENT] transport error: {}", e);
                RiotApiError::Transport(e)
            }),
        }
    }

    async fn sleep(&self, duration: Duration) -> RiotApiResponse<()> {
        tokio::select! {
            biased;
            _ = self.cancel.cancelled() => Err(RiotApiError::Cancelled),
            _ = tokio::time::sleep(duration) => Ok(()),
        }
    }
}

fn retry_after(response: &Response) -> RiotApiResponse<Duration> {
    let raw = response
        .headers()
        .get(RETRY_AFTER)
        .map(|value| value.to_str().unwrap_or_default().to_string())
        .unwrap_or_default();

    raw.parse::<u64>()
        .map(Duration::from_secs)
        .map_err(|_| RiotApiError::RetryAfter(raw))
}

fn encode<B: Serialize + ?Sized>(body: &B) -> RiotApiResponse<Bytes> {
    serde_json::to_vec(body)
        .map(Bytes::from)
        .map_err(RiotApiError::Encode)
}

async fn decode<T: DeserializeOwned>(res: Response) -> RiotApiResponse<T> {
    let raw = res
        .bytes()
        .await
        .map_err(|e| RiotApiError::Transport(Box::new(e)))?;
    Ok(serde_json::from_slice(&raw)?)
}
