use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::handlers;
use crate::api::handlers::engine_handlers::{
    self, ConstraintMetadata, EvaluateRequest, ImpactCell, ImpactRequest, ImpactTargetRequest,
    ValidateConfigRequest,
};
use crate::api::handlers::optimizer_handlers;
use crate::api::state::AppState;
use feasibility_engine::config_validator::ConfigWarning;
use feasibility_engine::model::{
    ConstraintConfig, DailyStaffing, FeasibilityResult, Schedule, Severity, ShiftAssignment,
    ShiftRange, ShiftType, Staff, Violation, ViolationContext,
};
use feasibility_engine::wire::{
    FeasibilityPrecheckRequest, FeasibilityPrecheckResponse, GenerateRequest, GenerateResponse,
    GeneratedSchedule, OptimizerDiagnosis, OptimizerError, PrecheckAnalysis, StaffJuhuDay,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Feasibility Service API",
        version = "1.0.0",
        description = "Shift-schedule feasibility engine and optimizer proxy"
    ),
    paths(
        crate::api::handlers::engine_handlers::evaluate,
        crate::api::handlers::engine_handlers::impact,
        crate::api::handlers::engine_handlers::validate_config_handler,
        crate::api::handlers::engine_handlers::list_constraints,
        crate::api::handlers::optimizer_handlers::generate,
        crate::api::handlers::optimizer_handlers::check_feasibility,
    ),
    components(schemas(
        EvaluateRequest,
        ImpactRequest,
        ImpactTargetRequest,
        ImpactCell,
        ValidateConfigRequest,
        ConstraintMetadata,
        ConfigWarning,
        FeasibilityResult,
        Violation,
        ViolationContext,
        Severity,
        Staff,
        Schedule,
        ShiftAssignment,
        ShiftType,
        ConstraintConfig,
        DailyStaffing,
        ShiftRange,
        GenerateRequest,
        GenerateResponse,
        GeneratedSchedule,
        StaffJuhuDay,
        OptimizerError,
        OptimizerDiagnosis,
        FeasibilityPrecheckRequest,
        FeasibilityPrecheckResponse,
        PrecheckAnalysis,
    ))
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let api_router = Router::new()
        .route("/evaluate", post(engine_handlers::evaluate))
        .route("/impact", post(engine_handlers::impact))
        .route(
            "/validate-config",
            post(engine_handlers::validate_config_handler),
        )
        .route("/constraints", get(engine_handlers::list_constraints))
        .route("/generate", post(optimizer_handlers::generate))
        .route(
            "/check-feasibility",
            post(optimizer_handlers::check_feasibility),
        );

    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/api/v1", api_router)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
