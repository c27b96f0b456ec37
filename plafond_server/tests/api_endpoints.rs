//! End-to-end tests against the full router, request to response body.

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use plafond_server::api::create_router;

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = create_router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn error_message(body: &Value) -> &str {
    body["error"].as_str().expect("body has an error field")
}

#[tokio::test]
async fn bereken_fine_grid_returns_all_counts() {
    let (status, body) = send(post_json(
        "/api/bereken",
        &json!({
            "vierkante_meters": 10,
            "strekkende_meters": 5,
            "systeem": "600x600",
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["hoofdprofielen"], 3);
    assert_eq!(body["tussenprofiel_1200"], 14);
    assert_eq!(body["tussenprofiel_600"], 14);
    assert_eq!(body["plafondplaten"], 28);
    assert_eq!(body["hoeklijn"], 2);
    assert_eq!(body["kantlat"], 2);
}

#[tokio::test]
async fn bereken_coarse_grid_omits_600_cross_profile() {
    let (status, body) = send(post_json(
        "/api/bereken",
        &json!({
            "vierkante_meters": 10,
            "strekkende_meters": 5,
            "systeem": "600x1200",
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.get("tussenprofiel_600").is_none());
    assert_eq!(body["plafondplaten"], 14);
}

#[tokio::test]
async fn bereken_rejects_non_positive_measurements() {
    let (status, body) = send(post_json(
        "/api/bereken",
        &json!({
            "vierkante_meters": 0,
            "strekkende_meters": 5,
            "systeem": "600x600",
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("must be > 0"));
}

#[tokio::test]
async fn bereken_rejects_unknown_system_by_name() {
    let (status, body) = send(post_json(
        "/api/bereken",
        &json!({
            "vierkante_meters": 10,
            "strekkende_meters": 5,
            "systeem": "unknown",
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "Unknown system: unknown");
}

#[tokio::test]
async fn bereken_rejects_empty_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/bereken")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "No data received");
}

#[tokio::test]
async fn bereken_rejects_malformed_body() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/bereken")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error_message(&body), "No data received");
}

#[tokio::test]
async fn bereken_rejects_missing_field_naming_it() {
    let (status, body) = send(post_json(
        "/api/bereken",
        &json!({
            "vierkante_meters": 10,
            "strekkende_meters": 5,
        }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("systeem"));
}

#[tokio::test]
async fn afmetingen_returns_exact_area_and_echoes_inputs() {
    let (status, body) = send(post_json(
        "/api/bereken-afmetingen",
        &json!({ "lengte": 4, "breedte": 2.5 }),
    ))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["vierkante_meters"], 10.0);
    assert_eq!(body["lengte"], 4.0);
    assert_eq!(body["breedte"], 2.5);
}

#[tokio::test]
async fn afmetingen_rejects_non_positive_dimensions() {
    let (status, body) = send(post_json(
        "/api/bereken-afmetingen",
        &json!({ "lengte": 4, "breedte": -1 }),
    ))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(error_message(&body).contains("must be > 0"));
}

#[tokio::test]
async fn identical_requests_yield_identical_results() {
    let payload = json!({
        "vierkante_meters": 33.7,
        "strekkende_meters": 21.2,
        "systeem": "600x600",
    });

    let (_, first) = send(post_json("/api/bereken", &payload)).await;
    let (_, second) = send(post_json("/api/bereken", &payload)).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn home_reports_service_info() {
    let (status, body) = send(get("/")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert_eq!(body["message"], "Systeemplafond Rekenmachine API");
}

#[tokio::test]
async fn health_is_ok() {
    let (status, body) = send(get("/api/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
}

#[tokio::test]
async fn keepalive_carries_a_timestamp() {
    let (status, body) = send(get("/api/keepalive")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "OK");
    assert!(body["timestamp"].as_str().is_some());

    // Also reachable via POST for ping services that insist on it.
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/keepalive")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(request).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn unknown_route_is_a_json_404() {
    let (status, body) = send(get("/api/unknown")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error_message(&body), "Endpoint not found");
}

#[tokio::test]
async fn preflight_is_allowed_for_any_origin() {
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/bereken")
        .header(header::ORIGIN, "http://localhost:3000")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .body(Body::empty())
        .unwrap();

    let response = create_router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}
