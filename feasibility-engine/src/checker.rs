use crate::context::EvaluationContext;
use crate::model::{FeasibilityResult, Schedule, ShiftAssignment, Staff};
use crate::registry::registry;

/// Runs the full constraint registry against a schedule and folds the
/// result into a single feasibility verdict.
///
/// A `FeasibilityChecker` carries no state of its own — it exists so
/// callers have a type to depend on (and, in `feasibility-service`, to
/// mock) rather than a free function. Evaluation itself is pure: the
/// same `(schedule, staff, config, previous_period)` always produces
/// the same violations, modulo `checked_at`.
#[derive(Debug, Default, Clone, Copy)]
pub struct FeasibilityChecker;

impl FeasibilityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(
        &self,
        schedule: &Schedule,
        staff: &[Staff],
        config: &crate::model::ConstraintConfig,
        previous_period: &[ShiftAssignment],
    ) -> FeasibilityResult {
        let ctx = EvaluationContext::new(schedule, staff, config, previous_period);
        self.evaluate_with_context(&ctx)
    }

    /// Same as [`evaluate`](Self::evaluate), but against an
    /// already-built context — useful when a caller (e.g. the impact
    /// calculator) needs to reuse one context across several queries.
    pub fn evaluate_with_context(&self, ctx: &EvaluationContext) -> FeasibilityResult {
        let violations: Vec<_> = registry()
            .into_iter()
            .flat_map(|entry| (entry.check)(ctx))
            .collect();
        let result = FeasibilityResult::from_violations(violations);

        let errors = result
            .violations
            .iter()
            .filter(|v| v.severity == crate::model::Severity::Error)
            .count();
        let warnings = result.violations.len() - errors;
        tracing::info!(
            feasible = result.feasible,
            errors,
            warnings,
            "evaluated schedule"
        );

        result
    }
}
