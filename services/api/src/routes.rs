use crate::infra::{deserialize_optional_date, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{Local, NaiveDate, NaiveDateTime};
use homestay::workflows::bookings::{Booking, BookingSchedule, BucketCounts};
use homestay::workflows::dates::{deserialize_optional_instant, midnight};
use homestay::workflows::reservation::{validate, Quote, ValidationVerdict};
use homestay::workflows::search::{search_router, PropertyCatalog};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClassifyRequest {
    #[serde(default)]
    pub(crate) bookings: Vec<Booking>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClassifyResponse {
    pub(crate) today: NaiveDate,
    pub(crate) counts: BucketCounts,
    #[serde(flatten)]
    pub(crate) schedule: BookingSchedule,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateRequest {
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub(crate) checkin: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_instant")]
    pub(crate) checkout: Option<NaiveDateTime>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) price_per_day: Option<f64>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ValidateResponse {
    pub(crate) verdict: ValidationVerdict,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) message: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) quote: Option<Quote>,
}

pub(crate) fn with_app_routes(catalog: Arc<PropertyCatalog>) -> axum::Router {
    search_router(catalog)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/bookings/classify",
            axum::routing::post(classify_endpoint),
        )
        .route(
            "/api/v1/bookings/validate",
            axum::routing::post(validate_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn classify_endpoint(
    Json(payload): Json<ClassifyRequest>,
) -> Json<ClassifyResponse> {
    let today = payload
        .today
        .unwrap_or_else(|| Local::now().date_naive());
    let schedule = BookingSchedule::classify(&payload.bookings, today);
    let counts = schedule.counts();

    debug!(
        upcoming = counts.upcoming,
        current = counts.current,
        past = counts.past,
        "classified bookings"
    );

    Json(ClassifyResponse {
        today,
        counts,
        schedule,
    })
}

pub(crate) async fn validate_endpoint(
    Json(payload): Json<ValidateRequest>,
) -> Json<ValidateResponse> {
    let ValidateRequest {
        checkin,
        checkout,
        today,
        price_per_day,
    } = payload;

    let today = midnight(today.unwrap_or_else(|| Local::now().date_naive()));
    let verdict = validate(checkin, checkout, today);

    let quote = match (checkin, checkout, price_per_day) {
        (Some(checkin), Some(checkout), Some(price)) if verdict.is_valid() => {
            Some(Quote::new(checkin, checkout, price))
        }
        _ => None,
    };

    Json(ValidateResponse {
        verdict,
        message: verdict.message(),
        quote,
    })
}
