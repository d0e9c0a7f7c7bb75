use std::sync::Arc;

use httpmock::prelude::*;
use riotkit::api::account::AccountApi;
use riotkit::api::client::{ApiClient, Host};
use riotkit::api::lol::tournament_v5::{
    MapType, PickType, ProviderRegistrationParameters, SpectatorType, TournamentCodeParameters,
    TournamentCodeUpdateParameters, TournamentV5Api,
};
use riotkit::{RiotApiError, StatusError};
use serde_json::json;

fn core(server: &MockServer) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(
        Arc::new(reqwest::Client::new()),
        "RGAPI-WIRE",
        Host::fixed(server.base_url()),
    ))
}

#[tokio::test]
async fn get_carries_key_and_accept_headers() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/riot/account/v1/accounts/by-riot-id/Conservateur/3012")
                .header("x-riot-token", "RGAPI-WIRE")
                .header("accept", "application/json");
            then.status(200).json_body(json!({
                "puuid": "abc",
                "gameName": "Conservateur",
                "tagLine": "3012"
            }));
        })
        .await;

    let account = AccountApi::new(core(&server))
        .get_by_riot_id("Conservateur", "3012")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(account.puuid, "abc");
    assert_eq!(account.riot_id().as_deref(), Some("Conservateur#3012"));
}

#[tokio::test]
async fn not_found_is_classified_without_reading_body() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path("/riot/account/v1/accounts/by-puuid/missing");
            then.status(404).body("not json at all");
        })
        .await;

    let err = AccountApi::new(core(&server))
        .get_by_puuid("missing")
        .await
        .unwrap_err();

    assert!(matches!(err, RiotApiError::Status(StatusError::NotFound)));
}

#[tokio::test]
async fn tournament_calls_send_json_bodies() {
    let server = MockServer::start_async().await;
    let provider = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/lol/tournament-stub/v5/providers")
                .header("content-type", "application/json")
                .json_body(json!({"region": "EUW", "url": "https://example.com/callback"}));
            then.status(200).body("1234");
        })
        .await;
    let codes = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/lol/tournament-stub/v5/codes")
                .query_param("tournamentId", "42")
                .query_param("count", "2")
                .json_body(json!({
                    "teamSize": 5,
                    "pickType": "BLIND_PICK",
                    "mapType": "HOWLING_ABYSS",
                    "spectatorType": "ALL",
                    "enoughPlayers": false
                }));
            then.status(200).json_body(json!(["EUW-CODE-1", "EUW-CODE-2"]));
        })
        .await;
    let update = server
        .mock_async(|when, then| {
            when.method(PUT)
                .path("/lol/tournament-stub/v5/codes/EUW-CODE-1")
                .json_body(json!({"pickType": "TOURNAMENT_DRAFT"}));
            then.status(200);
        })
        .await;

    let api = TournamentV5Api::stub(core(&server));

    let provider_id = api
        .create_provider(&ProviderRegistrationParameters {
            region: "EUW".into(),
            url: "https://example.com/callback".into(),
        })
        .await
        .unwrap();
    assert_eq!(provider_id, 1234);

    let created = api
        .create_codes(
            42,
            2,
            &TournamentCodeParameters {
                allowed_participants: None,
                metadata: None,
                team_size: 5,
                pick_type: PickType::BlindPick,
                map_type: MapType::HowlingAbyss,
                spectator_type: SpectatorType::All,
                enough_players: false,
            },
        )
        .await
        .unwrap();
    assert_eq!(created, vec!["EUW-CODE-1", "EUW-CODE-2"]);

    api.update_code(
        "EUW-CODE-1",
        &TournamentCodeUpdateParameters {
            pick_type: Some(PickType::TournamentDraft),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    provider.assert_async().await;
    codes.assert_async().await;
    update.assert_async().await;
}

#[tokio::test]
async fn connection_failure_is_a_transport_error() {
    let client = ApiClient::new(
        Arc::new(reqwest::Client::new()),
        "RGAPI-WIRE",
        Host::fixed("http://127.0.0.1:9"),
    );

    let res = client.get("/lol/status/v4/platform-data").await;

    assert!(matches!(res, Err(RiotApiError::Transport(_))));
}
