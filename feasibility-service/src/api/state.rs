use crate::infrastructure::OptimizerClient;
use feasibility_engine::ConstraintConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine_defaults: ConstraintConfig,
    pub optimizer: Arc<dyn OptimizerClient>,
}

impl AppState {
    pub fn new(engine_defaults: ConstraintConfig, optimizer: Arc<dyn OptimizerClient>) -> Self {
        Self {
            engine_defaults,
            optimizer,
        }
    }
}
