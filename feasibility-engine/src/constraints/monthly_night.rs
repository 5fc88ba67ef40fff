use crate::context::EvaluationContext;
use crate::model::{HardConstraintId, Severity, ShiftType, Violation, ViolationContext};
use crate::stats::count_shifts_for_staff;

const ID: HardConstraintId = HardConstraintId::MonthlyNight;

/// Each staff member's Night count over the period must equal
/// `monthlyNightsRequired`. Listed among the hard constraints but always
/// reported as a `warning`, regardless of `constraintSeverity` — the
/// engine always wins this override rather than the user-facing toggle.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.is_enabled(ID) {
        return Vec::new();
    }
    let required = ctx.config.monthly_nights_required;
    let mut violations = Vec::new();

    for staff in ctx.staff {
        let counts = count_shifts_for_staff(ctx, staff.id);
        let night_count = counts.get(&ShiftType::Night).copied().unwrap_or(0);

        if night_count != required {
            violations.push(Violation::new(
                ID.as_str(),
                "Monthly night quota not met",
                Severity::Warning,
                format!(
                    "{} has {} night shift(s) this period, but {} are required",
                    staff.name, night_count, required
                ),
                ViolationContext {
                    staff_id: Some(staff.id),
                    staff_name: Some(staff.name.clone()),
                    date: None,
                    dates: None,
                },
            ));
        }
    }

    violations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_defaults::default_config;
    use crate::model::{Schedule, ShiftAssignment, Staff};
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn mismatch_is_always_a_warning() {
        let staff_id = Uuid::new_v4();
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let staff = vec![Staff {
            id: staff_id,
            name: "S1".into(),
        }];
        let schedule = Schedule {
            id: Uuid::new_v4(),
            name: "p".into(),
            start_date: start,
            assignments: vec![],
            staff_juhu_days: None,
        };
        let mut cfg = default_config();
        cfg.monthly_nights_required = 6;
        cfg.constraint_severity
            .insert(ID, crate::model::ConfigSeverity::Hard);
        let ctx = EvaluationContext::new(&schedule, &staff, &cfg, &[]);

        let violations = check(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].severity, Severity::Warning);
    }
}
