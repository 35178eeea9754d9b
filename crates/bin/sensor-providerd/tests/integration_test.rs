//! End-to-end smoke tests for the full sensor-providerd stack.
//!
//! Each test spins up the complete application (embedded fixtures, real
//! services, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use sensor_provider_adapter_fixtures::FixtureProvider;
use sensor_provider_adapter_http_axum::router;
use sensor_provider_adapter_http_axum::state::AppState;
use sensor_provider_app::services::auth_service::AuthService;
use sensor_provider_app::services::sensor_service::SensorService;
use serde_json::{Value, json};
use tower::ServiceExt;

const SENSOR_ID: &str = "00000000-0000-0000-0000-000000000000";

/// Build a fully-wired router backed by the embedded fixtures.
fn app() -> axum::Router {
    let fixtures = FixtureProvider::embedded().expect("embedded fixtures should load");
    let state = AppState::new(
        SensorService::new(fixtures.clone()),
        AuthService::new(fixtures),
    );
    router::build(state)
}

fn get(uri: &str, project: Option<&str>, authorization: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().uri(uri);
    if let Some(project) = project {
        builder = builder.header("X-ProjectId", project);
    }
    if let Some(authorization) = authorization {
        builder = builder.header("Authorization", authorization);
    }
    builder.body(Body::empty()).unwrap()
}

fn authorized(uri: &str) -> Request<Body> {
    get(uri, Some("abc"), Some("Bearer xyz"))
}

fn sensors_auth(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/sensors-auth")
        .header("content-type", "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap()
}

async fn call(app: axum::Router, request: Request<Body>) -> (StatusCode, Value) {
    let resp = app.oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn protected_uris() -> Vec<String> {
    vec![
        "/sensors".to_string(),
        format!("/sensors/{SENSOR_ID}/status"),
        format!("/sensors/{SENSOR_ID}/measurements"),
    ]
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().oneshot(get("/health", None, None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Token exchange
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_issue_access_token_for_example_credentials() {
    let (status, body) = call(
        app(),
        sensors_auth(r#"{"projectId":"abc","refreshToken":"123"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "accessToken": "xyz" }));
}

#[tokio::test]
async fn should_reject_exchange_with_missing_fields() {
    for raw in [r#"{"projectId":"abc"}"#, r#"{"refreshToken":"123"}"#, "{}"] {
        let (status, body) = call(app(), sensors_auth(raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
        assert_eq!(body, json!({ "message": "Missing projectId or refreshToken" }));
    }
}

#[tokio::test]
async fn should_reject_exchange_with_wrong_credentials() {
    for raw in [
        r#"{"projectId":"abc","refreshToken":"321"}"#,
        r#"{"projectId":"cba","refreshToken":"123"}"#,
    ] {
        let (status, body) = call(app(), sensors_auth(raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
        assert_eq!(body, json!({ "message": "Invalid projectId or refreshToken" }));
    }
}

// ---------------------------------------------------------------------------
// Guard
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_require_project_header_on_every_protected_route() {
    for uri in protected_uris() {
        let (status, body) = call(app(), get(&uri, None, Some("Bearer xyz"))).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri}");
        assert_eq!(body, json!({ "message": "Missing 'X-ProjectId' header." }));
    }
}

#[tokio::test]
async fn should_require_exact_bearer_token_on_every_protected_route() {
    for uri in protected_uris() {
        for authorization in [None, Some("Bearer abc"), Some("xyz"), Some("bearer xyz")] {
            let (status, body) = call(app(), get(&uri, Some("abc"), authorization)).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{uri} {authorization:?}");
            assert_eq!(body, json!({ "message": "Unauthorized." }));
        }
    }
}

#[tokio::test]
async fn should_accept_any_project_header_value() {
    let (status, _) = call(app(), get("/sensors", Some("someone-else"), Some("Bearer xyz"))).await;
    assert_eq!(status, StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Sensors
// ---------------------------------------------------------------------------

fn example_sensor() -> Value {
    json!({
        "id": SENSOR_ID,
        "type": "co2_sensor",
        "name": "Sensor #1",
        "localization": "Localization #1",
        "description": "Lorem ipsum",
        "active": true,
        "wireless": true,
        "batteryLife": 0.6,
        "valueUnit": "\u{b0}C",
        "minSafeValue": -8,
        "maxSafeValue": 20,
        "lastMeasurementDate": "2025-02-25T08:45:24.804Z",
        "lastMeasurementValue": 5,
        "lastMeasurementRssi": -49,
        "nextMeasurementDate": "2025-02-25T08:45:24.804Z"
    })
}

#[tokio::test]
async fn should_list_example_project() {
    let (status, body) = call(app(), authorized("/sensors")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "projectId": "abc",
            "projectName": "Fake sensor project",
            "data": [example_sensor()]
        })
    );
}

#[tokio::test]
async fn should_return_example_sensor_status() {
    let (status, body) = call(app(), authorized(&format!("/sensors/{SENSOR_ID}/status"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, example_sensor());
}

#[tokio::test]
async fn should_report_unknown_sensor_as_unauthorized() {
    for id in ["11111111-1111-1111-1111-111111111111", "wrong-id"] {
        for route in ["status", "measurements"] {
            let (status, body) = call(app(), authorized(&format!("/sensors/{id}/{route}"))).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{id} {route}");
            assert_eq!(body, json!({ "message": "Sensor does not exist in a project." }));
        }
    }
}

#[tokio::test]
async fn should_treat_other_spellings_of_example_id_as_unknown() {
    for id in [
        "00000000000000000000000000000000",
        "%7B00000000-0000-0000-0000-000000000000%7D",
        "urn:uuid:00000000-0000-0000-0000-000000000000",
        "%FF",
    ] {
        for route in ["status", "measurements"] {
            let (status, body) = call(app(), authorized(&format!("/sensors/{id}/{route}"))).await;
            assert_eq!(status, StatusCode::UNAUTHORIZED, "{id} {route}");
            assert_eq!(body, json!({ "message": "Sensor does not exist in a project." }));
        }
    }
}

// ---------------------------------------------------------------------------
// Measurements
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_example_measurements_in_order() {
    let (status, body) = call(
        app(),
        authorized(&format!("/sensors/{SENSOR_ID}/measurements")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["valueUnit"], "\u{b0}C");
    assert_eq!(body["minSafeValue"], -8);
    assert_eq!(body["maxSafeValue"], 20);

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 5);
    let values: Vec<i64> = data.iter().map(|m| m["value"].as_i64().unwrap()).collect();
    assert_eq!(values, vec![-2, 1, 8, 2, 5]);
    assert_eq!(data[0]["date"], "2025-02-25T08:42:24.804Z");
    assert_eq!(data[1]["date"], "2025-02-25T08:42:24.804Z");
}

#[tokio::test]
async fn should_narrow_measurements_to_requested_window() {
    let uri = format!(
        "/sensors/{SENSOR_ID}/measurements?from=2025-02-25T08:43:24.804Z&to=2025-02-25T08:44:24.804Z"
    );
    let (status, body) = call(app(), authorized(&uri)).await;

    assert_eq!(status, StatusCode::OK);
    let values: Vec<i64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["value"].as_i64().unwrap())
        .collect();
    assert_eq!(values, vec![8, 2]);
}

#[tokio::test]
async fn should_reject_invalid_measurement_window() {
    let uri = format!("/sensors/{SENSOR_ID}/measurements?to=tomorrow");
    let (status, body) = call(app(), authorized(&uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid 'from' or 'to' date." }));
}

#[tokio::test]
async fn should_reject_repeated_window_bound_as_json() {
    let uri = format!(
        "/sensors/{SENSOR_ID}/measurements?from=2025-02-25T08:42:24.804Z&from=2025-02-25T08:43:24.804Z"
    );
    let (status, body) = call(app(), authorized(&uri)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "message": "Invalid 'from' or 'to' date." }));
}

// ---------------------------------------------------------------------------
// Notifications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_never_implement_notifications() {
    let requests = [
        authorized(&format!("/sensors/{SENSOR_ID}/notifications")),
        authorized("/sensors/wrong-id/notifications"),
        get(&format!("/sensors/{SENSOR_ID}/notifications"), None, None),
        get("/sensors/x/notifications", Some("abc"), Some("Bearer nope")),
    ];

    for request in requests {
        let (status, body) = call(app(), request).await;
        assert_eq!(status, StatusCode::NOT_IMPLEMENTED);
        assert_eq!(body, json!({ "message": "Not implemented." }));
    }
}

// ---------------------------------------------------------------------------
// Full client flow
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_authenticate_then_read_sensor_data() {
    let app = app();

    let (_, body) = call(
        app.clone(),
        sensors_auth(r#"{"projectId":"abc","refreshToken":"123"}"#),
    )
    .await;
    let token = body["accessToken"].as_str().unwrap().to_string();

    let (status, body) = call(
        app.clone(),
        get("/sensors", Some("abc"), Some(&format!("Bearer {token}"))),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let sensor_id = body["data"][0]["id"].as_str().unwrap().to_string();

    let (status, body) = call(
        app,
        get(
            &format!("/sensors/{sensor_id}/measurements"),
            Some("abc"),
            Some(&format!("Bearer {token}")),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}
