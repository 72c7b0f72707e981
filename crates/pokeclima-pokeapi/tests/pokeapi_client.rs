//! Integration tests for PokeApiClient using wiremock.

use pokeclima_core::PokeApiConfig;
use pokeclima_pokeapi::{PokeApiClient, PokeApiError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> PokeApiClient {
    let config = PokeApiConfig {
        base_url: format!("{}/api/v2/", server.uri()),
    };
    PokeApiClient::new(&config, None).unwrap()
}

fn pokemon_body(name: &str, type_name: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "sprites": {
            "other": { "official-artwork": { "front_default": format!("https://img.test/{}.png", name) } }
        },
        "stats": [
            { "base_stat": 45, "stat": { "name": "hp", "url": "https://pokeapi.co/api/v2/stat/1/" } },
            { "base_stat": 49, "stat": { "name": "attack", "url": "https://pokeapi.co/api/v2/stat/2/" } }
        ],
        "types": [
            { "slot": 1, "type": { "name": type_name, "url": "https://pokeapi.co/api/v2/type/12/" } }
        ]
    })
}

#[tokio::test]
async fn test_list_by_type_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/type/grass"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "grass",
            "pokemon": [
                { "slot": 1, "pokemon": { "name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/" } },
                { "slot": 1, "pokemon": { "name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/" } },
                { "slot": 1, "pokemon": { "name": "venusaur", "url": "https://pokeapi.co/api/v2/pokemon/3/" } }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let refs = client.list_by_type("grass").await.unwrap();

    assert_eq!(refs.len(), 3);
    assert_eq!(refs[0].name, "bulbasaur");
    assert_eq!(refs[2].url, "https://pokeapi.co/api/v2/pokemon/3/");
}

#[tokio::test]
async fn test_list_by_type_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/type/shadow"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "name": "shadow",
            "pokemon": []
        })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let refs = client.list_by_type("shadow").await.unwrap();
    assert!(refs.is_empty());
}

#[tokio::test]
async fn test_list_by_type_server_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/type/fire"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let err = client.list_by_type("fire").await.unwrap_err();
    assert!(err.to_string().contains("500"), "Error should mention 500 status: {}", err);
}

#[tokio::test]
async fn test_fetch_detail_follows_absolute_url() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/1/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(pokemon_body("bulbasaur", "grass")))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = format!("{}/api/v2/pokemon/1/", mock_server.uri());
    let detail = client.fetch_detail(&url).await.unwrap();

    assert_eq!(detail.name, "bulbasaur");
    assert_eq!(detail.image_url.as_deref(), Some("https://img.test/bulbasaur.png"));
    let attack = detail.stats.iter().find(|s| s.stat_name == "attack");
    assert_eq!(attack.map(|s| s.base_stat), Some(49));
    assert_eq!(detail.has_type("grass"), Some(true));
}

#[tokio::test]
async fn test_fetch_detail_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/99999/"))
        .respond_with(ResponseTemplate::new(404).set_body_string("Not Found"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = format!("{}/api/v2/pokemon/99999/", mock_server.uri());
    let err = client.fetch_detail(&url).await.unwrap_err();
    assert!(matches!(&err, PokeApiError::Network(e) if e.status() == Some(404)));
}

#[tokio::test]
async fn test_fetch_detail_rejects_relative_url() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let err = client.fetch_detail("pokemon/1/").await.unwrap_err();
    assert!(matches!(err, PokeApiError::InvalidUrl(_)));
}

#[tokio::test]
async fn test_fetch_detail_malformed_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v2/pokemon/7/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "name": "squirtle" })))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server);
    let url = format!("{}/api/v2/pokemon/7/", mock_server.uri());
    let err = client.fetch_detail(&url).await.unwrap_err();
    assert!(matches!(err, PokeApiError::Parse(_)));
}
