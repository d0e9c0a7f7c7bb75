use std::error::Error as ErrorT;
use std::fmt::Debug;

use async_trait::async_trait;
use reqwest::{Request, Response};

pub type TransportError = Box<dyn ErrorT + Send + Sync + 'static>;

/// Anything able to send a built HTTP request and hand back the raw response.
///
/// [`reqwest::Client`] is the production implementation; tests plug in doubles
/// returning canned responses or synthetic failures.
#[async_trait]
pub trait Transport: Send + Sync + Debug {
    async fn send(&self, request: Request) -> Result<Response, TransportError>;
}

#[async_trait]
impl Transport for reqwest::Client {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.execute(request).await.map_err(|e| Box::new(e) as TransportError)
    }
}
