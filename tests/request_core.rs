mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{Scripted, ScriptedTransport};
use riotkit::api::client::{ApiClient, Host};
use riotkit::{RateLimitPolicy, RiotApiError, StatusError};
use serde::Serialize;
use tokio::time::Instant;

fn core(transport: &Arc<ScriptedTransport>) -> ApiClient {
    ApiClient::new(transport.clone(), "RGAPI-TEST", Host::riot("euw1"))
}

#[tokio::test(start_paused = true)]
async fn unavailable_is_retried_once_and_surfaces_resend_transport_error() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::status(503),
        Scripted::fail("connection reset"),
    ]));
    let started = Instant::now();

    let res = core(&transport).get("/lol/status/v4/platform-data").await;

    match res {
        Err(RiotApiError::Transport(e)) => assert_eq!(e.to_string(), "connection reset"),
        other => panic!("expected transport error, got {:?}", other),
    }
    assert_eq!(transport.calls(), 2);
    assert!(started.elapsed() >= Duration::from_secs(1));
}

#[tokio::test(start_paused = true)]
async fn second_unavailable_is_classified() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::status(503),
        Scripted::status(503),
        Scripted::json(200, "{}"),
    ]));

    let res = core(&transport).get("/lol/status/v4/platform-data").await;

    assert_eq!(
        res.unwrap_err().status(),
        Some(StatusError::ServiceUnavailable)
    );
    assert_eq!(transport.calls(), 2);
}

#[tokio::test(start_paused = true)]
async fn rate_limit_waits_as_told_until_success() {
    for n in [0u64, 1, 5, 25] {
        let transport = Arc::new(ScriptedTransport::new(
            (0..n).map(|_| Scripted::rate_limited("1")),
        ));
        transport.push(Scripted::json(200, r#"["EUW1_1"]"#));
        let started = Instant::now();

        let ids: Vec<String> = core(&transport)
            .get_into("/lol/match/v5/matches/by-puuid/abc/ids")
            .await
            .unwrap();

        assert_eq!(ids, vec!["EUW1_1".to_string()]);
        assert_eq!(transport.calls() as u64, n + 1);
        assert!(started.elapsed() >= Duration::from_secs(n));
    }
}

#[tokio::test(start_paused = true)]
async fn unavailable_then_rate_limited_then_success() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::status(503),
        Scripted::rate_limited("2"),
        Scripted::rate_limited("1"),
        Scripted::json(200, "1"),
    ]));
    let started = Instant::now();

    let score: i32 = core(&transport)
        .get_into("/lol/champion-mastery/v4/scores/by-puuid/abc")
        .await
        .unwrap();

    assert_eq!(score, 1);
    assert_eq!(transport.calls(), 4);
    assert!(started.elapsed() >= Duration::from_secs(4));
}

#[tokio::test(start_paused = true)]
async fn malformed_retry_after_fails_without_waiting() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::rate_limited("abc")]));
    let started = Instant::now();

    let res = core(&transport).get("/anything").await;

    assert!(matches!(res, Err(RiotApiError::RetryAfter(ref raw)) if raw == "abc"));
    assert_eq!(transport.calls(), 1);
    assert_eq!(started.elapsed(), Duration::ZERO);
}

#[tokio::test(start_paused = true)]
async fn missing_retry_after_is_an_error() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::status(429)]));

    let res = core(&transport).get("/anything").await;

    assert!(matches!(res, Err(RiotApiError::RetryAfter(_))));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn bounded_policy_gives_up_with_rate_limit_error() {
    let transport = Arc::new(ScriptedTransport::new(
        (0..10).map(|_| Scripted::rate_limited("1")),
    ));
    let client = core(&transport).with_rate_limit(RateLimitPolicy::bounded(2));

    let res = client.get("/anything").await;

    assert_eq!(
        res.unwrap_err().status(),
        Some(StatusError::RateLimitExceeded)
    );
    assert_eq!(transport.calls(), 3);
    assert_eq!(client.metrics.rate_limited_retries(), 2);
}

#[tokio::test(start_paused = true)]
async fn max_wait_caps_the_server_delay() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::rate_limited("3600"),
        Scripted::json(200, "[]"),
    ]));
    let client = core(&transport)
        .with_rate_limit(RateLimitPolicy::unbounded().with_max_wait(Duration::from_secs(5)));
    let started = Instant::now();

    let ids: Vec<String> = client.get_into("/anything").await.unwrap();

    assert!(ids.is_empty());
    let elapsed = started.elapsed();
    assert!(elapsed >= Duration::from_secs(5));
    assert!(elapsed < Duration::from_secs(3600));
}

#[tokio::test]
async fn every_known_status_maps_to_its_error() {
    let table = [
        (400, StatusError::BadRequest),
        (401, StatusError::Unauthorized),
        (403, StatusError::Forbidden),
        (404, StatusError::NotFound),
        (405, StatusError::MethodNotAllowed),
        (415, StatusError::UnsupportedMediaType),
        (500, StatusError::InternalServerError),
        (502, StatusError::BadGateway),
        (504, StatusError::GatewayTimeout),
    ];

    for (code, expected) in table {
        let transport = Arc::new(ScriptedTransport::new([Scripted::status(code)]));
        let res = core(&transport).get("/anything").await;

        assert_eq!(res.unwrap_err().status(), Some(expected), "status {}", code);
        assert_eq!(transport.calls(), 1);
    }
}

#[tokio::test]
async fn unmapped_statuses_keep_raw_code() {
    for code in [418u16, 999] {
        let transport = Arc::new(ScriptedTransport::new([Scripted::status(code)]));
        let err = core(&transport).get("/anything").await.unwrap_err();

        assert_eq!(err.status(), Some(StatusError::Unknown(code)));
        assert!(err.to_string().contains("unknown error reason"));
    }
}

#[tokio::test]
async fn transport_error_is_not_retried() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::fail("dns failure"),
        Scripted::json(200, "{}"),
    ]));

    let res = core(&transport).get("/anything").await;

    assert!(matches!(res, Err(RiotApiError::Transport(_))));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn malformed_success_body_is_a_decode_error() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::json(200, "")]));

    let res: Result<Vec<String>, _> = core(&transport).get_into("/anything").await;

    assert!(matches!(res, Err(RiotApiError::Serde(_))));
}

struct Unencodable;

impl Serialize for Unencodable {
    fn serialize<S: serde::Serializer>(&self, _: S) -> Result<S::Ok, S::Error> {
        Err(serde::ser::Error::custom("refusing to encode"))
    }
}

#[tokio::test]
async fn unencodable_body_is_never_sent() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::json(200, "1")]));
    let client = core(&transport);

    let post: Result<i64, _> = client
        .post_into("/lol/tournament-stub/v5/providers", &Unencodable)
        .await;
    let put = client.put("/lol/tournament-stub/v5/codes/ABC", &Unencodable).await;

    assert!(matches!(post, Err(RiotApiError::Encode(_))));
    assert!(matches!(put, Err(RiotApiError::Encode(_))));
    assert_eq!(transport.calls(), 0);
}

#[tokio::test]
async fn post_sends_encoded_body_and_key() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::json(200, "42")]));

    let id: i64 = core(&transport)
        .post_into("/lol/tournament-stub/v5/providers", &serde_json::json!({"region": "EUW"}))
        .await
        .unwrap();

    assert_eq!(id, 42);
    let seen = &transport.seen()[0];
    assert_eq!(seen.method, "POST");
    assert_eq!(
        seen.url,
        "https://euw1.api.riotgames.com/lol/tournament-stub/v5/providers"
    );
    assert_eq!(seen.api_key.as_deref(), Some("RGAPI-TEST"));
    assert_eq!(seen.body.as_deref(), Some(&br#"{"region":"EUW"}"#[..]));
}

#[tokio::test(start_paused = true)]
async fn cancel_interrupts_rate_limit_wait() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::rate_limited("600"),
        Scripted::json(200, "{}"),
    ]));
    let client = core(&transport);
    let token = client.cancellation_token().clone();

    let task = tokio::spawn(async move { client.get("/anything").await });
    tokio::time::sleep(Duration::from_secs(10)).await;
    token.cancel();

    let res = task.await.unwrap();
    assert!(matches!(res, Err(RiotApiError::Cancelled)));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test(start_paused = true)]
async fn cancel_interrupts_unavailable_wait() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::status(503),
        Scripted::json(200, "{}"),
    ]));
    let client = core(&transport);
    let token = client.cancellation_token().clone();

    let task = tokio::spawn(async move { client.get("/anything").await });
    tokio::time::sleep(Duration::from_millis(500)).await;
    token.cancel();

    let res = task.await.unwrap();
    assert!(matches!(res, Err(RiotApiError::Cancelled)));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn cancel_interrupts_pending_send() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::Hang]));
    let client = core(&transport);
    let token = client.cancellation_token().clone();

    let task = tokio::spawn(async move { client.get("/anything").await });
    tokio::task::yield_now().await;
    token.cancel();

    let res = task.await.unwrap();
    assert!(matches!(res, Err(RiotApiError::Cancelled)));
}

#[tokio::test]
async fn derived_cores_share_metrics_and_cancellation() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::json(200, "{}"),
        Scripted::json(200, "{}"),
    ]));
    let platform = core(&transport);
    let route = platform.with_subdomain("europe");

    platform.get("/a").await.unwrap();
    route.get("/b").await.unwrap();

    assert_eq!(platform.metrics.requests(), 2);
    assert_eq!(
        transport.urls(),
        vec![
            "https://euw1.api.riotgames.com/a".to_string(),
            "https://europe.api.riotgames.com/b".to_string(),
        ]
    );

    platform.cancellation_token().cancel();
    assert!(matches!(route.get("/c").await, Err(RiotApiError::Cancelled)));
}
