//! Invoice schedule endpoint.

use crate::dtos::{AbnormalResponse, SubscriptionResponse};
use crate::models::{ScheduleOutcome, SubscriptionParams};
use crate::services::record_error;
use crate::startup::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use service_core::error::AppError;

const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// `GET /subscription`: compute the invoice schedule described by the query string.
///
/// Incomplete parameters still answer 200 with the abnormal body; malformed dates or
/// numbers answer 400. A repeated parameter keeps its first value.
pub async fn get_subscription(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Response, AppError> {
    let Query(pairs) = query.map_err(|e| {
        record_error("query");
        AppError::BadRequest(anyhow::anyhow!(e.body_text()))
    })?;
    let params = SubscriptionParams::from_pairs(pairs);

    let outcome = state.scheduler.schedule(&params)?;

    let body = match outcome {
        ScheduleOutcome::Scheduled(subscription) => {
            serde_json::to_string_pretty(&SubscriptionResponse::from(subscription)).map_err(
                |e| {
                    record_error("serialization");
                    AppError::from(e)
                },
            )?
        }
        ScheduleOutcome::Abnormal(_) => serde_json::to_string(&AbnormalResponse::default())?,
    };

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
        body,
    )
        .into_response())
}
