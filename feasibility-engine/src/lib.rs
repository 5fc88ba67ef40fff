//! Pure, synchronous 28-day shift-schedule constraint registry and
//! feasibility checker. No I/O, no persistence, no async runtime — a
//! `feasibility-service` (or any other host) drives this crate and owns
//! everything around it.

pub mod boundary;
pub mod checker;
pub mod config_defaults;
pub mod config_validator;
pub mod constraints;
pub mod context;
pub mod dates;
pub mod impact;
pub mod model;
pub mod registry;
pub mod stats;
pub mod tier;
pub mod ui_state;
pub mod wire;

pub use checker::FeasibilityChecker;
pub use context::EvaluationContext;
pub use model::{
    ConstraintConfig, FeasibilityResult, Schedule, Severity, ShiftAssignment, ShiftType, Staff,
    StaffId, Violation, ViolationContext,
};
pub use registry::{registry, ConstraintDescriptor, SeverityClass};
pub use tier::{tier_for, SoftTier};
