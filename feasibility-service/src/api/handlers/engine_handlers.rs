use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use feasibility_engine::checker::FeasibilityChecker;
use feasibility_engine::config_validator::{validate_config, ConfigWarning};
use feasibility_engine::context::EvaluationContext;
use feasibility_engine::impact::{compute_impact, fold_impact_map, ImpactTarget};
use feasibility_engine::model::{ConstraintConfig, FeasibilityResult, Schedule, ShiftAssignment, Staff};
use feasibility_engine::registry::registry;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::api::state::AppState;

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub staff: Vec<Staff>,
    pub schedule: Schedule,
    #[serde(default)]
    pub config: Option<ConstraintConfig>,
    #[serde(default)]
    pub previous_period_end: Option<Vec<ShiftAssignment>>,
}

/// Runs the full constraint registry against a schedule.
#[utoipa::path(
    post,
    path = "/api/v1/evaluate",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Feasibility result", body = FeasibilityResult),
        (status = 400, description = "Invalid input")
    ),
    tag = "engine"
)]
pub async fn evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> impl IntoResponse {
    let config = request.config.unwrap_or(state.engine_defaults);
    let previous_period = request.previous_period_end.unwrap_or_default();

    let checker = FeasibilityChecker::new();
    let result = checker.evaluate(&request.schedule, &request.staff, &config, &previous_period);

    (StatusCode::OK, Json(result))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpactTargetRequest {
    pub staff_id: uuid::Uuid,
    pub date: chrono::NaiveDate,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpactRequest {
    pub staff: Vec<Staff>,
    pub schedule: Schedule,
    #[serde(default)]
    pub config: Option<ConstraintConfig>,
    #[serde(default)]
    pub previous_period_end: Option<Vec<ShiftAssignment>>,
    pub target: ImpactTargetRequest,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImpactCell {
    pub staff_id: uuid::Uuid,
    pub date: chrono::NaiveDate,
    pub reason: String,
}

/// Computes the set of cells a UI should highlight if `target` changed.
#[utoipa::path(
    post,
    path = "/api/v1/impact",
    request_body = ImpactRequest,
    responses(
        (status = 200, description = "Folded impact map", body = [ImpactCell]),
        (status = 400, description = "Invalid input")
    ),
    tag = "engine"
)]
pub async fn impact(
    State(state): State<AppState>,
    Json(request): Json<ImpactRequest>,
) -> impl IntoResponse {
    let config = request.config.unwrap_or(state.engine_defaults);
    let previous_period = request.previous_period_end.unwrap_or_default();

    let ctx = EvaluationContext::new(
        &request.schedule,
        &request.staff,
        &config,
        &previous_period,
    );
    let target = ImpactTarget {
        staff_id: request.target.staff_id,
        date: request.target.date,
    };
    let entries = compute_impact(&ctx, target);
    let folded = fold_impact_map(entries);

    let cells: Vec<ImpactCell> = folded
        .into_iter()
        .map(|((staff_id, date), reason)| ImpactCell {
            staff_id,
            date,
            reason: format!("{reason:?}").to_lowercase(),
        })
        .collect();

    (StatusCode::OK, Json(cells))
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ValidateConfigRequest {
    pub config: ConstraintConfig,
    pub staff_count: usize,
}

/// Advisory sanity check over a configuration, independent of any
/// particular schedule.
#[utoipa::path(
    post,
    path = "/api/v1/validate-config",
    request_body = ValidateConfigRequest,
    responses(
        (status = 200, description = "Advisory warnings", body = [ConfigWarning])
    ),
    tag = "engine"
)]
pub async fn validate_config_handler(
    Json(request): Json<ValidateConfigRequest>,
) -> impl IntoResponse {
    let warnings = validate_config(&request.config, request.staff_count);
    (StatusCode::OK, Json(warnings))
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintMetadata {
    pub id: &'static str,
    pub name: &'static str,
    pub severity_class: &'static str,
    /// Soft-constraint priority weight (1000/100/10 for tier 1/2/3);
    /// `None` for hard constraints, which carry no tier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tier_weight: Option<u32>,
}

/// Registry metadata for a UI to render constraint toggles against.
#[utoipa::path(
    get,
    path = "/api/v1/constraints",
    responses(
        (status = 200, description = "Constraint registry metadata", body = [ConstraintMetadata])
    ),
    tag = "engine"
)]
pub async fn list_constraints() -> impl IntoResponse {
    let entries: Vec<ConstraintMetadata> = registry()
        .into_iter()
        .map(|entry| ConstraintMetadata {
            id: entry.id,
            name: entry.name,
            severity_class: match entry.class {
                feasibility_engine::registry::SeverityClass::Hard => "hard",
                feasibility_engine::registry::SeverityClass::Soft => "soft",
            },
            tier_weight: entry.tier.map(|t| t.weight()),
        })
        .collect();

    (StatusCode::OK, Json(entries))
}
