//! Integration tests for WeatherFetcher against a mock forecast server.

use skycast_weather::types::{Location, WeatherError};
use skycast_weather::WeatherFetcher;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn trenton() -> Location {
    Location {
        display_name: "Trenton".to_string(),
        region: "New Jersey".to_string(),
        country: "United States".to_string(),
        latitude: 40.2171,
        longitude: -74.7429,
    }
}

fn current_body(temp_c: f64, code: i32, is_day: u8) -> serde_json::Value {
    serde_json::json!({
        "current": {
            "temperature_2m": temp_c,
            "weather_code": code,
            "is_day": is_day
        }
    })
}

#[tokio::test]
async fn fetch_builds_snapshot_in_fahrenheit() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "40.2171"))
        .and(query_param("longitude", "-74.7429"))
        .and(query_param("current", "temperature_2m,weather_code,is_day"))
        .and(query_param("timezone", "auto"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(0.0, 3, 1)))
        .mount(&server)
        .await;

    let fetcher = WeatherFetcher::with_base_url(server.uri()).unwrap();
    let snapshot = fetcher.fetch(&trenton()).await.unwrap();

    assert_eq!(snapshot.temperature_f, 32.0);
    assert_eq!(snapshot.condition_code, 3);
    assert!(snapshot.description.eq_ignore_ascii_case("overcast"));
    assert!(snapshot.is_day);
}

#[tokio::test]
async fn fetch_keeps_full_precision() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(21.7, 0, 0)))
        .mount(&server)
        .await;

    let fetcher = WeatherFetcher::with_base_url(server.uri()).unwrap();
    let snapshot = fetcher.fetch(&trenton()).await.unwrap();

    assert!((snapshot.temperature_f - 71.06).abs() < 1e-9);
    assert!(!snapshot.is_day);
}

#[tokio::test]
async fn fetch_degrades_unknown_code_to_fallback_description() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body(10.0, 42, 1)))
        .mount(&server)
        .await;

    let fetcher = WeatherFetcher::with_base_url(server.uri()).unwrap();
    let snapshot = fetcher.fetch(&trenton()).await.unwrap();

    assert_eq!(snapshot.description, "Unknown weather condition");
    assert_eq!(snapshot.condition_code, 42);
}

#[tokio::test]
async fn fetch_surfaces_provider_error_with_reason() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "error": true,
            "reason": "Latitude must be in range of -90 to 90"
        })))
        .mount(&server)
        .await;

    let fetcher = WeatherFetcher::with_base_url(server.uri()).unwrap();
    let err = fetcher.fetch(&trenton()).await.unwrap_err();

    match err {
        WeatherError::Api(reason) => assert!(reason.contains("Latitude")),
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn fetch_treats_missing_current_block_as_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let fetcher = WeatherFetcher::with_base_url(server.uri()).unwrap();
    let err = fetcher.fetch(&trenton()).await.unwrap_err();

    assert!(matches!(err, WeatherError::Api(_)));
}

#[tokio::test]
async fn fetch_surfaces_transport_failures_as_network_errors() {
    let fetcher = WeatherFetcher::with_base_url("http://127.0.0.1:9").unwrap();
    let err = fetcher.fetch(&trenton()).await.unwrap_err();

    assert!(matches!(err, WeatherError::Network(_)));
}
