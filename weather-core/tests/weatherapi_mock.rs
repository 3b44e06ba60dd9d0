//! Forecast client and controller against a mock WeatherAPI.com server.

use std::time::Duration;

use weather_core::{
    App, Outcome, WeatherError, WeatherProvider, provider::weatherapi::WeatherApiProvider,
};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Trimmed-down `forecast.json` payload.
fn austin_forecast() -> serde_json::Value {
    serde_json::json!({
        "location": {
            "name": "Austin",
            "region": "Texas",
            "country": "United States of America",
            "lat": 30.27,
            "lon": -97.74,
            "tz_id": "America/Chicago",
            "localtime_epoch": 1700000000,
            "localtime": "2023-11-14 16:13"
        },
        "current": {
            "last_updated_epoch": 1699999200,
            "temp_c": 22.0,
            "temp_f": 71.6,
            "is_day": 1,
            "condition": { "text": "Partly cloudy", "icon": "//cdn.weatherapi.com/x.png", "code": 1003 },
            "wind_mph": 7.8,
            "wind_kph": 12.6,
            "humidity": 54,
            "feelslike_c": 21.2,
            "feelslike_f": 70.2
        },
        "forecast": { "forecastday": [] }
    })
}

fn provider(server: &MockServer) -> WeatherApiProvider {
    WeatherApiProvider::new("TEST_KEY".into(), server.uri(), Duration::from_secs(5))
        .expect("client builds")
}

#[tokio::test]
async fn fetches_and_decodes_forecast() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("key", "TEST_KEY"))
        .and(query_param("q", "austin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_forecast()))
        .expect(1)
        .mount(&server)
        .await;

    let raw = provider(&server).forecast("austin").await.unwrap();

    assert_eq!(raw.location.name, "Austin");
    assert_eq!(raw.current.condition.text, "Partly cloudy");
    assert_eq!(raw.current.humidity, 54.0);
}

#[tokio::test]
async fn location_is_url_encoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "new york&units=x"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_forecast()))
        .expect(1)
        .mount(&server)
        .await;

    provider(&server).forecast("new york&units=x").await.unwrap();
}

#[tokio::test]
async fn status_400_is_bad_request() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(400).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let err = provider(&server).forecast("").await.unwrap_err();
    assert!(err.is_bad_request());
}

#[tokio::test]
async fn other_error_status_goes_on_to_decoding() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": { "code": 2006, "message": "API key is invalid." } })),
        )
        .mount(&server)
        .await;

    let err = provider(&server).forecast("austin").await.unwrap_err();
    match err {
        WeatherError::Decode { status, .. } => assert_eq!(status.as_u16(), 401),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn non_400_status_with_valid_body_is_accepted() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(ResponseTemplate::new(203).set_body_json(austin_forecast()))
        .mount(&server)
        .await;

    assert!(provider(&server).forecast("austin").await.is_ok());
}

#[tokio::test]
async fn missing_fields_are_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "location": { "name": "Austin" } })),
        )
        .mount(&server)
        .await;

    let err = provider(&server).forecast("austin").await.unwrap_err();
    assert!(matches!(err, WeatherError::Decode { .. }));
}

#[tokio::test]
async fn timeout_is_a_transport_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(austin_forecast())
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let provider =
        WeatherApiProvider::new("TEST_KEY".into(), server.uri(), Duration::from_millis(200)).unwrap();
    let err = provider.forecast("austin").await.unwrap_err();
    assert!(matches!(err, WeatherError::Transport(_)));
}

#[tokio::test]
async fn app_round_trip_against_mock() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "austin"))
        .respond_with(ResponseTemplate::new(200).set_body_json(austin_forecast()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast.json"))
        .and(query_param("q", "atlantis"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&server)
        .await;

    let mut app = App::new(provider(&server));

    app.page_mut().input = "atlantis".into();
    assert_eq!(app.submit().await, Outcome::Rejected);
    assert!(app.page().is_error_visible());

    app.page_mut().input = "austin".into();
    assert!(matches!(app.submit().await, Outcome::Displayed(_)));

    let page = app.page();
    assert!(!page.is_error_visible());
    assert_eq!(page.fields.condition, "Partly cloudy");
    assert_eq!(page.fields.location, "AUSTIN, TEXAS");
    assert_eq!(page.fields.degrees, "72");
    assert_eq!(page.fields.feels_like, "FEELS LIKE: 70");
    assert_eq!(page.fields.wind_mph, "WIND: 8 MPH");
    assert_eq!(page.fields.humidity, "HUMIDITY: 54");
    assert!(page.input.is_empty());
}
