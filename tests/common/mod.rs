#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::{Request, Response};
use riotkit::api::traits::{Transport, TransportError};

/// One canned outcome of [`ScriptedTransport`].
#[derive(Debug, Clone)]
pub enum Scripted {
    Reply {
        status: u16,
        headers: Vec<(&'static str, String)>,
        body: String,
    },
    Fail(String),
    /// Never answers.
    Hang,
}

impl Scripted {
    pub fn json(status: u16, body: impl Into<String>) -> Self {
        Self::Reply {
            status,
            headers: vec![("content-type", "application/json".to_string())],
            body: body.into(),
        }
    }

    pub fn status(status: u16) -> Self {
        Self::Reply {
            status,
            headers: Vec::new(),
            body: String::new(),
        }
    }

    pub fn rate_limited(retry_after: &str) -> Self {
        Self::Reply {
            status: 429,
            headers: vec![("retry-after", retry_after.to_string())],
            body: String::new(),
        }
    }

    pub fn fail(message: &str) -> Self {
        Self::Fail(message.to_string())
    }
}

/// What the transport saw of a request.
#[derive(Debug, Clone)]
pub struct Seen {
    pub method: String,
    pub url: String,
    pub api_key: Option<String>,
    pub body: Option<Vec<u8>>,
}

/// In-memory transport replaying a script, one entry per call.
#[derive(Debug, Default)]
pub struct ScriptedTransport {
    script: Mutex<VecDeque<Scripted>>,
    seen: Mutex<Vec<Seen>>,
    calls: AtomicUsize,
}

impl ScriptedTransport {
    pub fn new(script: impl IntoIterator<Item = Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into_iter().collect()),
            ..Default::default()
        }
    }

    pub fn push(&self, entry: Scripted) {
        self.script.lock().unwrap().push_back(entry);
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.seen.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.seen().into_iter().map(|s| s.url).collect()
    }
}

#[async_trait]
impl Transport for ScriptedTransport {
    async fn send(&self, request: Request) -> Result<Response, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().unwrap().push(Seen {
            method: request.method().to_string(),
            url: request.url().to_string(),
            api_key: request
                .headers()
                .get("x-riot-token")
                .and_then(|v| v.to_str().ok())
                .map(str::to_string),
            body: request
                .body()
                .and_then(|b| b.as_bytes())
                .map(|b| b.to_vec()),
        });

        let next = self.script.lock().unwrap().pop_front();
        match next {
            Some(Scripted::Reply {
                status,
                headers,
                body,
            }) => {
                let mut builder = http::Response::builder().status(status);
                for (name, value) in headers {
                    builder = builder.header(name, value);
                }
                Ok(Response::from(builder.body(body).unwrap()))
            }
            Some(Scripted::Fail(message)) => Err(message.into()),
            Some(Scripted::Hang) => std::future::pending().await,
            None => Err("script exhausted".into()),
        }
    }
}
