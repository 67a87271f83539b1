//! Integration tests for LocationResolver against a mock geocoding server.

use skycast_weather::types::WeatherError;
use skycast_weather::LocationResolver;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn candidate(name: &str, lat: f64, lon: f64, country: &str, code: &str, admin1: &str) -> serde_json::Value {
    serde_json::json!({
        "name": name,
        "latitude": lat,
        "longitude": lon,
        "country": country,
        "country_code": code,
        "admin1": admin1
    })
}

#[tokio::test]
async fn resolve_picks_top_candidate_without_hint() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Trenton"))
        .and(query_param("count", "10"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                candidate("Trenton", 40.2171, -74.7429, "United States", "US", "New Jersey"),
                candidate("Trenton", 44.1001, -77.5772, "Canada", "CA", "Ontario"),
            ]
        })))
        .mount(&server)
        .await;

    let resolver = LocationResolver::with_base_url(server.uri()).unwrap();
    let location = resolver.resolve("Trenton").await.unwrap();

    assert_eq!(location.display_name, "Trenton");
    assert_eq!(location.region, "New Jersey");
    assert_eq!(location.latitude, 40.2171);
}

#[tokio::test]
async fn resolve_prefers_hint_match_over_top_candidate() {
    let server = MockServer::start().await;

    // Provider ranks the Ontario Trenton first; the "NJ" hint should pull
    // the New Jersey candidate from further down the list.
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Trenton"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                candidate("Trenton", 44.1001, -77.5772, "Canada", "CA", "Ontario"),
                candidate("Trenton", 40.2171, -74.7429, "United States", "US", "New Jersey"),
            ]
        })))
        .mount(&server)
        .await;

    let resolver = LocationResolver::with_base_url(server.uri()).unwrap();
    let location = resolver.resolve("Trenton, NJ").await.unwrap();

    assert_eq!(location.region, "New Jersey");
    assert_eq!(location.country, "United States");
    assert_eq!(location.longitude, -74.7429);
}

#[tokio::test]
async fn resolve_falls_back_to_top_when_hint_matches_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                candidate("Trenton", 44.1001, -77.5772, "Canada", "CA", "Ontario"),
                candidate("Trenton", 40.2171, -74.7429, "United States", "US", "New Jersey"),
            ]
        })))
        .mount(&server)
        .await;

    let resolver = LocationResolver::with_base_url(server.uri()).unwrap();
    let location = resolver.resolve("Trenton, France").await.unwrap();

    // A hint that matches nothing never hard-fails.
    assert_eq!(location.region, "Ontario");
}

#[tokio::test]
async fn resolve_sends_name_without_context_hint() {
    let server = MockServer::start().await;

    // The hint stays client-side; only the name goes to the provider.
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "Trenton"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [candidate("Trenton", 40.2171, -74.7429, "United States", "US", "New Jersey")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resolver = LocationResolver::with_base_url(server.uri()).unwrap();
    resolver.resolve("Trenton, NJ").await.unwrap();
}

#[tokio::test]
async fn resolve_fails_with_location_not_found_on_empty_results() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let resolver = LocationResolver::with_base_url(server.uri()).unwrap();
    let err = resolver.resolve("Nowhereville").await.unwrap_err();

    match err {
        WeatherError::LocationNotFound(name) => assert_eq!(name, "Nowhereville"),
        other => panic!("expected LocationNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn resolve_surfaces_transport_failures_as_network_errors() {
    // Nothing is listening here.
    let resolver = LocationResolver::with_base_url("http://127.0.0.1:9").unwrap();
    let err = resolver.resolve("Trenton").await.unwrap_err();

    assert!(matches!(err, WeatherError::Network(_)));
}
