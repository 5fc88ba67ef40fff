use async_trait::async_trait;
use feasibility_engine::wire::{
    FeasibilityPrecheckRequest, FeasibilityPrecheckResponse, GenerateRequest, GenerateResponse,
};
use feasibility_service::api::{create_router, AppState};
use feasibility_service::infrastructure::OptimizerClient;
use mockall::mock;
use shared::DomainResult;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

mock! {
    pub Optimizer {}

    #[async_trait]
    impl OptimizerClient for Optimizer {
        async fn generate(
            &self,
            request: &GenerateRequest,
            cancellation: CancellationToken,
        ) -> DomainResult<GenerateResponse>;

        async fn check_feasibility(
            &self,
            request: &FeasibilityPrecheckRequest,
            cancellation: CancellationToken,
        ) -> DomainResult<FeasibilityPrecheckResponse>;
    }
}

/// A test server wired against real engine defaults and whatever
/// optimizer stub the caller supplies.
pub fn setup_test_server(optimizer: Arc<dyn OptimizerClient>) -> axum_test::TestServer {
    let state = AppState::new(feasibility_engine::config_defaults::default_config(), optimizer);
    let app = create_router(state);
    axum_test::TestServer::new(app).unwrap()
}

/// A test server for endpoints that never touch the optimizer
/// (`/evaluate`, `/impact`, `/validate-config`, `/constraints`) — the
/// stub panics if a handler unexpectedly calls it.
pub fn setup_engine_only_test_server() -> axum_test::TestServer {
    setup_test_server(Arc::new(MockOptimizer::new()))
}
