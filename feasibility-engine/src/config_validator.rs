use crate::model::ConstraintConfig;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An advisory pre-check finding. Never blocks evaluation — these are
/// sanity warnings about the configuration itself, independent of any
/// particular schedule.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct ConfigWarning {
    pub code: String,
    pub message: String,
}

impl ConfigWarning {
    fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Sanity-checks a configuration against a staff headcount. Independent
/// of the constraint engine — runs before a schedule even exists.
pub fn validate_config(config: &ConstraintConfig, staff_count: usize) -> Vec<ConfigWarning> {
    let mut warnings = Vec::new();

    if staff_count == 0 {
        warnings.push(ConfigWarning::new("zero-staff", "No staff configured"));
        return warnings;
    }

    for (label, staffing) in [
        ("weekday", &config.weekday_staffing),
        ("weekend", &config.weekend_staffing),
    ] {
        let required = staffing.day.min + staffing.evening.min + staffing.night.min;
        if required as usize > staff_count {
            warnings.push(ConfigWarning::new(
                "coverage-infeasible",
                format!(
                    "{label} minimum coverage ({required}) exceeds total staff ({staff_count})"
                ),
            ));
        }
    }

    let required_nights = config.weekday_staffing.night.min as u64 * 28;
    let available_nights = staff_count as u64 * config.monthly_nights_required as u64;
    if required_nights > available_nights {
        warnings.push(ConfigWarning::new(
            "night-supply-shortfall",
            format!(
                "required night-shifts ({required_nights}) exceed what staff can supply at \
                 {} nights each ({available_nights})",
                config.monthly_nights_required
            ),
        ));
    }

    if config.max_consecutive_nights < 1 {
        warnings.push(ConfigWarning::new(
            "invalid-max-consecutive-nights",
            "maxConsecutiveNights must be at least 1",
        ));
    }

    warnings
}
