//! Provider contract tests against a mock HTTP server.

use chrono::NaiveDate;
use serde_json::json;
use waqt_network::{AladhanClient, IpGeolocationClient, ProviderConfig};
use waqt_types::{GeoLocation, PrayerName, TimeOfDay, WaqtError};
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> ProviderConfig {
    ProviderConfig::new("test-ipgeo-key")
        .with_geo_url(format!("{}/ipgeo", server.uri()))
        .with_timings_url(format!("{}/v1", server.uri()))
}

fn cairo() -> GeoLocation {
    GeoLocation {
        latitude: "30.0444".to_string(),
        longitude: "31.2357".to_string(),
        country_code: "EG".to_string(),
        city: "Cairo".to_string(),
    }
}

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 10, 7).unwrap()
}

fn timings_body() -> serde_json::Value {
    json!({
        "code": 200,
        "status": "OK",
        "data": {
            "timings": {
                "Fajr": "04:00",
                "Sunrise": "05:30",
                "Dhuhr": "11:15",
                "Asr": "14:45",
                "Sunset": "17:20",
                "Maghrib": "17:20",
                "Isha": "18:45",
                "Imsak": "03:50",
                "Midnight": "23:17"
            },
            "date": { "readable": "07 Oct 2024" }
        }
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Geolocation
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_locate_sends_api_key_and_decodes() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ipgeo"))
        .and(query_param("apiKey", "test-ipgeo-key"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ip": "41.33.0.1",
            "latitude": "30.0444",
            "longitude": "31.2357",
            "country_code2": "EG",
            "country_name": "Egypt",
            "city": "Cairo"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = IpGeolocationClient::new(&config(&server)).unwrap();
    let geo = client.locate().await.unwrap();

    assert_eq!(geo, cairo());
}

#[tokio::test]
async fn test_locate_error_body_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ipgeo"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({ "message": "Provided API key is not valid." })),
        )
        .mount(&server)
        .await;

    let client = IpGeolocationClient::new(&config(&server)).unwrap();
    let err = client.locate().await.unwrap_err();

    assert!(matches!(err, WaqtError::NetworkError(_)));
    assert!(!err.to_string().contains("test-ipgeo-key"));
}

// ────────────────────────────────────────────────────────────────────────────
// Timings
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_timings_request_format() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/timingsByCity/07-10-2024"))
        .and(query_param("city", "Cairo"))
        .and(query_param("country", "EG"))
        .and(query_param("latitude", "30.0444"))
        .and(query_param("longitude", "31.2357"))
        .and(query_param("method", "5"))
        .and(query_param("x7xapikey", "x7x-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timings_body()))
        .expect(1)
        .mount(&server)
        .await;

    let client = AladhanClient::new(&config(&server).with_x7x_api_key("x7x-key")).unwrap();
    let timings = client.timings(date(), &cairo()).await.unwrap();

    assert_eq!(timings.len(), 5);
    assert_eq!(timings[&PrayerName::Fajr], "04:00");
    assert_eq!(timings[&PrayerName::Isha], "18:45");
}

#[tokio::test]
async fn test_prayer_set_applies_correction() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/timingsByCity/07-10-2024"))
        .respond_with(ResponseTemplate::new(200).set_body_json(timings_body()))
        .mount(&server)
        .await;

    let client = AladhanClient::new(&config(&server)).unwrap();
    let set = client.prayer_set(date(), &cairo()).await.unwrap();

    assert_eq!(set.get(PrayerName::Fajr).time, TimeOfDay::new(5, 0).unwrap());
    assert_eq!(set.get(PrayerName::Maghrib).time, TimeOfDay::new(18, 20).unwrap());
    assert!(set.is_chronological());
}

#[tokio::test]
async fn test_non_success_code_is_incomplete_data() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "code": 400,
            "status": "BAD_REQUEST",
            "data": "Please specify a city and country."
        })))
        .mount(&server)
        .await;

    let client = AladhanClient::new(&config(&server)).unwrap();
    let err = client.timings(date(), &cairo()).await.unwrap_err();

    assert_eq!(err, WaqtError::provider_status(400, "BAD_REQUEST"));
}

#[tokio::test]
async fn test_missing_prayer_is_incomplete_data() {
    let server = MockServer::start().await;

    let mut body = timings_body();
    body["data"]["timings"]
        .as_object_mut()
        .unwrap()
        .remove("Asr");

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let client = AladhanClient::new(&config(&server)).unwrap();
    let err = client.prayer_set(date(), &cairo()).await.unwrap_err();

    assert_eq!(err, WaqtError::missing_prayers(&[PrayerName::Asr]));
}

#[tokio::test]
async fn test_timeout_is_network_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(timings_body())
                .set_delay(std::time::Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let config = config(&server).with_timeout(std::time::Duration::from_millis(50));
    let client = AladhanClient::new(&config).unwrap();
    let err = client.timings(date(), &cairo()).await.unwrap_err();

    assert!(matches!(err, WaqtError::NetworkError(_)));
}
