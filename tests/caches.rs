mod common;

use std::sync::Arc;

use common::{Scripted, ScriptedTransport};
use riotkit::api::client::{ApiClient, Host};
use riotkit::ddragon::{DDRAGON_ORIGIN, DataDragonClient};
use riotkit::static_data::{STATIC_DATA_ORIGIN, StaticDataClient};
use riotkit::{RiotApiError, StatusError};

const CHAMPIONS: &str = r#"{
    "type": "champion",
    "version": "15.12.1",
    "data": {
        "Ahri": {"id": "Ahri", "key": "103", "name": "Ahri", "title": "the Nine-Tailed Fox"},
        "MonkeyKing": {"id": "MonkeyKing", "key": "62", "name": "Wukong", "title": "the Monkey King"}
    }
}"#;

const AHRI: &str = r#"{
    "data": {
        "Ahri": {
            "id": "Ahri",
            "key": "103",
            "name": "Ahri",
            "lore": "Innately connected to the magic of the spirit realm.",
            "skins": [{"id": "103000", "num": 0, "name": "default", "chromas": false}]
        }
    }
}"#;

const ITEMS: &str = r#"{
    "data": {
        "1036": {"name": "Long Sword", "into": ["3071"], "gold": {"total": 350}},
        "3044": {"name": "Phage", "into": ["3071"]},
        "3071": {"name": "Black Cleaver", "from": ["3044", "1036"], "depth": 3}
    }
}"#;

fn ddragon(transport: &Arc<ScriptedTransport>) -> DataDragonClient {
    let client = ApiClient::new(transport.clone(), "RGAPI-TEST", Host::fixed(DDRAGON_ORIGIN));
    DataDragonClient::new(client, "15.12.1", "en_US")
}

fn static_data(transport: &Arc<ScriptedTransport>) -> StaticDataClient {
    let client = ApiClient::new(
        transport.clone(),
        "RGAPI-TEST",
        Host::fixed(STATIC_DATA_ORIGIN),
    );
    StaticDataClient::new(client)
}

#[tokio::test]
async fn champions_are_fetched_once() {
    // a second network call would fail
    let transport = Arc::new(ScriptedTransport::new([Scripted::json(200, CHAMPIONS)]));
    let client = ddragon(&transport);

    let first = client.get_champions().await.unwrap();
    let second = client.get_champions().await.unwrap();

    assert_eq!(first, second);
    assert_eq!(first["MonkeyKing"].name, "Wukong");
    assert_eq!(transport.calls(), 1);
    assert_eq!(
        transport.urls(),
        vec!["https://ddragon.leagueoflegends.com/cdn/15.12.1/data/en_US/champion.json"]
    );
}

#[tokio::test]
async fn clear_caches_forces_a_fresh_fetch() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::json(200, CHAMPIONS),
        Scripted::json(200, CHAMPIONS),
    ]));
    let client = ddragon(&transport);

    client.get_champions().await.unwrap();
    client.clear_caches().await;
    client.get_champions().await.unwrap();

    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn failed_fetch_is_retried_on_next_call() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::status(500),
        Scripted::json(200, CHAMPIONS),
    ]));
    let client = ddragon(&transport);

    let err = client.get_champions().await.unwrap_err();
    assert_eq!(err.status(), Some(StatusError::InternalServerError));

    assert_eq!(client.get_champions().await.unwrap().len(), 2);
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn champion_detail_is_fetched_by_name_or_key_and_cached() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::json(200, CHAMPIONS),
        Scripted::json(200, AHRI),
    ]));
    let client = ddragon(&transport);

    let by_name = client.get_champion("Ahri").await.unwrap();
    let by_key = client.get_champion_by_id(103).await.unwrap();

    assert_eq!(by_name, by_key);
    assert!(!by_name.is_summary_only());
    assert_eq!(by_name.skins.len(), 1);
    assert_eq!(transport.calls(), 2);
    assert_eq!(
        transport.urls()[1],
        "https://ddragon.leagueoflegends.com/cdn/15.12.1/data/en_US/champion/Ahri.json"
    );
}

#[tokio::test]
async fn unknown_champion_is_not_found() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::json(200, CHAMPIONS)]));
    let client = ddragon(&transport);

    let err = client.get_champion("Teemo").await.unwrap_err();

    assert!(matches!(err, RiotApiError::Status(StatusError::NotFound)));
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn items_resolve_their_recipe_through_the_cache() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::json(200, ITEMS)]));
    let client = ddragon(&transport);

    let cleaver = client.get_item("3071").await.unwrap();
    assert_eq!(cleaver.id, "3071");

    let recipe = cleaver.recipe_items(&client).await.unwrap();
    let names: Vec<&str> = recipe.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Phage", "Long Sword"]);

    let sword = client.get_item("1036").await.unwrap();
    let upgrades = sword.upgrade_items(&client).await.unwrap();
    assert_eq!(upgrades[0].name, "Black Cleaver");

    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn legacy_runes_use_last_shipping_version() {
    let transport = Arc::new(ScriptedTransport::new([Scripted::json(
        200,
        r#"{"data": {"5001": {"name": "Lesser Mark of Attack Damage", "rune": {"isrune": true, "tier": "1", "type": "red"}}}}"#,
    )]));
    let client = ddragon(&transport);

    let runes = client.get_runes().await.unwrap();

    assert_eq!(runes["5001"].id, "5001");
    assert_eq!(
        transport.urls(),
        vec!["https://ddragon.leagueoflegends.com/cdn/7.23.1/data/en_US/rune.json"]
    );
}

#[tokio::test]
async fn static_lists_are_cached_per_slot() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::json(200, r#"[{"id": 13, "season": "SEASON 2019"}]"#),
        Scripted::json(
            200,
            r#"[{"queueId": 420, "map": "Summoner's Rift", "description": "5v5 Ranked Solo games", "notes": null}]"#,
        ),
    ]));
    let client = static_data(&transport);

    assert_eq!(client.get_season(13).await.unwrap().season, "SEASON 2019");
    assert_eq!(client.get_seasons().await.unwrap().len(), 1);
    assert_eq!(client.get_queue(420).await.unwrap().map, "Summoner's Rift");
    assert!(matches!(
        client.get_queue(9999).await,
        Err(RiotApiError::Status(StatusError::NotFound))
    ));

    assert_eq!(transport.calls(), 2);
    assert_eq!(
        transport.urls(),
        vec![
            "https://static.developer.riotgames.com/docs/lol/seasons.json",
            "https://static.developer.riotgames.com/docs/lol/queues.json",
        ]
    );
}

#[tokio::test]
async fn static_clear_refetches() {
    let transport = Arc::new(ScriptedTransport::new([
        Scripted::json(200, r#"[{"gametype": "CUSTOM_GAME", "description": "Custom games"}]"#),
        Scripted::json(200, r#"[{"gametype": "MATCHED_GAME", "description": "all other games"}]"#),
    ]));
    let client = static_data(&transport);

    assert!(client.get_game_type("CUSTOM_GAME").await.is_ok());
    client.clear_caches().await;
    assert!(client.get_game_type("MATCHED_GAME").await.is_ok());
    assert_eq!(transport.calls(), 2);
}

#[tokio::test]
async fn concurrent_readers_all_get_the_same_list() {
    let transport = Arc::new(ScriptedTransport::new(
        (0..8).map(|_| Scripted::json(200, r#"[{"mapId": 11, "mapName": "Summoner's Rift"}]"#)),
    ));
    let client = Arc::new(static_data(&transport));

    let mut handles = Vec::new();
    for _ in 0..8 {
        let client = client.clone();
        handles.push(tokio::spawn(async move { client.get_map(11).await }));
    }

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap().map_name, "Summoner's Rift");
    }
    let fetched = transport.calls();
    assert!((1..=8).contains(&fetched));

    // Later reads are served from the cache.
    let maps = client.get_maps().await.unwrap();
    assert_eq!(maps.len(), 1);
    assert_eq!(maps[0].map_id, 11);
    assert_eq!(client.get_map(11).await.unwrap().map_name, "Summoner's Rift");
    assert_eq!(transport.calls(), fetched);
}
