//! The ten soft constraints. All emit `warning`s only and
//! are individually toggleable via `ConstraintConfig::soft_constraints`.

pub mod gradual_shift_progression;
pub mod max_consecutive_off;
pub mod max_consecutive_work;
pub mod max_period_off;
pub mod max_same_shift_consecutive;
pub mod night_block_policy;
pub mod post_rest_day_shift;
pub mod rest_clustering;
pub mod shift_continuity;
pub mod weekend_fairness;
