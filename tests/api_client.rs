use clash_api::api_models::Role;
use clash_api::{ApiError, ClashClient, Config, ModelError};
use httpmock::prelude::*;
use serde_json::json;

const PLAYER_JSON: &str = include_str!("fixtures/player.json");
const CLAN_JSON: &str = include_str!("fixtures/clan.json");

#[tokio::test]
async fn fetches_player_with_bearer_token() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/players/%239QJ2CY0L")
                .header("authorization", "Bearer tok1")
                .header("accept", "application/json");
            then.status(200)
                .header("content-type", "application/json")
                .body(PLAYER_JSON);
        })
        .await;

    let client = ClashClient::with_tokens(&server.base_url(), ["tok1"]).unwrap();
    let player = client.get_player("#9QJ2CY0L").await.unwrap();

    mock.assert_async().await;
    assert_eq!(player.name(), Some("Ash"));
    assert_eq!(player.role(), Some(Role::Admin));
}

#[tokio::test]
async fn fetches_clan_from_config() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path_contains("/clans/").path_contains("2PP");
            then.status(200).body(CLAN_JSON);
        })
        .await;

    let config = Config::from_parts("tok1", Some(format!("{}/", server.base_url()))).unwrap();
    let client = ClashClient::new(&config).unwrap();
    let clan = client.get_clan("#2PP").await.unwrap();

    mock.assert_async().await;
    assert_eq!(clan.member_list().map(<[_]>::len), Some(3));
}

#[tokio::test]
async fn rotates_tokens() {
    let server = MockServer::start_async().await;
    let first = server
        .mock_async(|when, then| {
            when.method(GET).header("authorization", "Bearer tok1");
            then.status(200).body(r##"{"tag":"#A"}"##);
        })
        .await;
    let second = server
        .mock_async(|when, then| {
            when.method(GET).header("authorization", "Bearer tok2");
            then.status(200).body(r##"{"tag":"#B"}"##);
        })
        .await;

    let client = ClashClient::with_tokens(&server.base_url(), ["tok1", "tok2"]).unwrap();
    let a = client.get_player("#A").await.unwrap();
    let b = client.clone().get_player("#B").await.unwrap();
    client.get_player("#A").await.unwrap();

    assert_eq!(a.tag(), Some("#A"));
    assert_eq!(b.tag(), Some("#B"));
    first.assert_hits_async(2).await;
    second.assert_hits_async(1).await;
}

#[tokio::test]
async fn maps_error_statuses() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("MISSING");
            then.status(404)
                .json_body(json!({ "reason": "notFound", "message": "Not found with tag %23MISSING" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("DENIED");
            then.status(403)
                .json_body(json!({ "reason": "accessDenied.invalidIp" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("BUSY");
            then.status(429).json_body(json!({ "reason": "requestThrottled" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("BAD");
            then.status(400).json_body(json!({ "reason": "badRequest" }));
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("DOWN");
            then.status(503).body("<html>maintenance</html>");
        })
        .await;

    let client = ClashClient::with_tokens(&server.base_url(), ["tok1"]).unwrap();

    let err = client.get_player("#MISSING").await.unwrap_err();
    match err {
        ApiError::NotFound(Some(body)) => {
            assert_eq!(body.reason(), Some("notFound"));
            assert!(body.message().unwrap().contains("MISSING"));
        }
        other => panic!("expected not found, got {other:?}"),
    }

    let err = client.get_player("#DENIED").await.unwrap_err();
    assert!(matches!(err, ApiError::AccessDenied(Some(_))), "{err:?}");
    assert!(err.to_string().contains("accessDenied.invalidIp"));

    let err = client.get_clan("#BUSY").await.unwrap_err();
    assert!(matches!(err, ApiError::RateLimited(_)), "{err:?}");

    let err = client.get_player("#BAD").await.unwrap_err();
    assert!(matches!(&err, ApiError::BadRequest(Some(body)) if body.reason() == Some("badRequest")), "{err:?}");

    let err = client.get_player("#DOWN").await.unwrap_err();
    assert!(matches!(err, ApiError::Maintenance(None)), "{err:?}");
}

#[tokio::test]
async fn surfaces_decode_errors() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("WRONG");
            then.status(200).body(r#"{"name":"Ash","trophies":"many"}"#);
        })
        .await;
    server
        .mock_async(|when, then| {
            when.method(GET).path_contains("CUT");
            then.status(200).body(r#"{"name": "Ash"#);
        })
        .await;

    let client = ClashClient::with_tokens(&server.base_url(), ["tok1"]).unwrap();

    let err = client.get_player("#WRONG").await.unwrap_err();
    match err {
        ApiError::Decode(ModelError::TypeMismatch { field, .. }) => assert_eq!(field, "trophies"),
        other => panic!("expected a type mismatch, got {other:?}"),
    }

    let err = client.get_player("#CUT").await.unwrap_err();
    assert!(
        matches!(err, ApiError::Decode(ModelError::MalformedInput(_))),
        "{err:?}"
    );
}
