use crate::model::{
    ConfigSeverity, ConstraintConfig, DailyStaffing, HardConstraintId, JurisdictionProfile,
    ShiftRange, SoftConstraintsConfig,
};
use std::collections::HashMap;

/// A reasonable out-of-the-box configuration, mirroring the defaults a
/// fresh deploy (or a unit test) would start from before any per-facility
/// tuning. Not normative — every field is meant to be overridden.
pub fn default_config() -> ConstraintConfig {
    let weekday_staffing = DailyStaffing {
        day: ShiftRange { min: 2, max: 6 },
        evening: ShiftRange { min: 2, max: 6 },
        night: ShiftRange { min: 1, max: 4 },
    };
    let weekend_staffing = DailyStaffing {
        day: ShiftRange { min: 1, max: 6 },
        evening: ShiftRange { min: 1, max: 6 },
        night: ShiftRange { min: 1, max: 4 },
    };

    let mut enabled_constraints = HashMap::new();
    let mut constraint_severity = HashMap::new();
    for id in HardConstraintId::ALL {
        enabled_constraints.insert(id, true);
        constraint_severity.insert(id, ConfigSeverity::Hard);
    }
    constraint_severity.insert(HardConstraintId::MonthlyNight, ConfigSeverity::Soft);

    ConstraintConfig {
        weekly_work_hours: 40,
        max_consecutive_nights: 4,
        monthly_nights_required: 6,
        weekday_staffing,
        weekend_staffing,
        enabled_constraints,
        constraint_severity,
        soft_constraints: SoftConstraintsConfig::default(),
        jurisdiction_profile: JurisdictionProfile::Default,
        schema_version: 1,
    }
}
