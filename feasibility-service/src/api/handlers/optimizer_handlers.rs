use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use feasibility_engine::wire::{
    FeasibilityPrecheckRequest, FeasibilityPrecheckResponse, GenerateRequest, GenerateResponse,
};
use tokio_util::sync::CancellationToken;

use crate::api::state::AppState;

/// Proxies a full schedule-generation request to the configured
/// optimizer. The actual optimization algorithm is never implemented
/// locally — only the contract and the forwarding.
#[utoipa::path(
    post,
    path = "/api/v1/generate",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Optimizer response", body = GenerateResponse),
        (status = 502, description = "Optimizer unreachable or returned an error")
    ),
    tag = "optimizer"
)]
pub async fn generate(
    State(state): State<AppState>,
    Json(request): Json<GenerateRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cancellation = CancellationToken::new();
    let response = state
        .optimizer
        .generate(&request, cancellation)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok((StatusCode::OK, Json(response)))
}

/// Proxies a feasibility pre-check to the configured optimizer, called
/// before `/generate` to surface a diagnostic rather than wait for a
/// solver timeout.
#[utoipa::path(
    post,
    path = "/api/v1/check-feasibility",
    request_body = FeasibilityPrecheckRequest,
    responses(
        (status = 200, description = "Pre-check analysis", body = FeasibilityPrecheckResponse),
        (status = 502, description = "Optimizer unreachable or returned an error")
    ),
    tag = "optimizer"
)]
pub async fn check_feasibility(
    State(state): State<AppState>,
    Json(request): Json<FeasibilityPrecheckRequest>,
) -> Result<impl IntoResponse, (StatusCode, String)> {
    let cancellation = CancellationToken::new();
    let response = state
        .optimizer
        .check_feasibility(&request, cancellation)
        .await
        .map_err(|e| (StatusCode::BAD_GATEWAY, e.to_string()))?;

    Ok((StatusCode::OK, Json(response)))
}
