//! Route handlers and router assembly.
//!
//! The handlers own input extraction and validation; the calculation itself
//! lives in `plafond_core`. All request validation happens before the
//! calculator is invoked, and a request either fully succeeds or is fully
//! rejected - no partial results.

use axum::body::Bytes;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use plafond_core::calculations::{area, takeoff, AreaInput, AreaResult, TakeoffInput, TakeoffResult};
use plafond_core::{CalcError, SystemCatalog};

use crate::error::ApiError;

/// Build the application router.
///
/// CORS is wide open (the front-end is served from a different origin) and
/// every request is traced. Routing faults fall through to a JSON 404.
pub fn create_router() -> Router {
    Router::new()
        .route("/", get(home))
        .route("/api/health", get(health))
        .route("/api/keepalive", get(keepalive).post(keepalive))
        .route("/api/bereken", post(bereken))
        .route("/api/bereken-afmetingen", post(bereken_afmetingen))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

// ============================================================================
// Request Bodies
// ============================================================================

/// Body of `POST /api/bereken`
#[derive(Debug, Deserialize)]
struct BerekenRequest {
    vierkante_meters: f64,
    strekkende_meters: f64,
    systeem: String,
}

/// Body of `POST /api/bereken-afmetingen`
#[derive(Debug, Deserialize)]
struct AfmetingenRequest {
    lengte: f64,
    breedte: f64,
}

/// Parse a JSON request body.
///
/// An empty or syntactically broken body means the client sent us nothing
/// usable; a well-formed body with missing or mistyped fields gets a
/// field-level message instead.
fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, ApiError> {
    if body.is_empty() {
        return Err(ApiError::bad_request("No data received"));
    }
    serde_json::from_slice(body).map_err(|err| match err.classify() {
        serde_json::error::Category::Syntax | serde_json::error::Category::Eof => {
            ApiError::bad_request("No data received")
        }
        _ => ApiError::bad_request(format!("Invalid input: {}", err)),
    })
}

/// Reject non-positive measurements, naming the offending request field.
fn require_positive(field: &str, value: f64) -> Result<(), ApiError> {
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "must be > 0").into());
    }
    Ok(())
}

// ============================================================================
// Handlers
// ============================================================================

async fn bereken(body: Bytes) -> Result<Json<TakeoffResult>, ApiError> {
    let request: BerekenRequest = parse_body(&body)?;
    tracing::debug!(
        vierkante_meters = request.vierkante_meters,
        strekkende_meters = request.strekkende_meters,
        systeem = %request.systeem,
        "takeoff request"
    );

    require_positive("vierkante_meters", request.vierkante_meters)?;
    require_positive("strekkende_meters", request.strekkende_meters)?;
    let system = SystemCatalog::global().lookup(&request.systeem)?.system;

    let input = TakeoffInput {
        area_m2: request.vierkante_meters,
        perimeter_m: request.strekkende_meters,
        system,
    };
    let result = takeoff::calculate(&input)?;

    Ok(Json(result))
}

async fn bereken_afmetingen(body: Bytes) -> Result<Json<AreaResult>, ApiError> {
    let request: AfmetingenRequest = parse_body(&body)?;

    require_positive("lengte", request.lengte)?;
    require_positive("breedte", request.breedte)?;

    let input = AreaInput {
        length_m: request.lengte,
        width_m: request.breedte,
    };
    let result = area::calculate(&input)?;

    Ok(Json(result))
}

async fn home() -> impl IntoResponse {
    Json(json!({
        "message": "Systeemplafond Rekenmachine API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "OK",
    }))
}

async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "message": "Backend is running",
    }))
}

/// Liveness endpoint for external uptime pingers; keeps free-tier hosting
/// from putting the service to sleep.
async fn keepalive() -> impl IntoResponse {
    Json(json!({
        "status": "OK",
        "message": "App is alive!",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}
