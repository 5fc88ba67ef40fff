use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "night-block-policy";

/// A Night day whose neighbors on both sides are not Night is an isolated
/// night; `minBlockSize` is informational only.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    let params = ctx.config.soft_constraints.night_block_policy;
    if !params.enabled {
        return Vec::new();
    }
    let mut violations = Vec::new();

    for staff in ctx.staff {
        for date in period_dates(ctx.schedule.start_date) {
            if ctx.current_shift_on(staff.id, date) != Some(ShiftType::Night) {
                continue;
            }
            let before = date.pred_opt().and_then(|d| ctx.shift_on(staff.id, d));
            let after = date.succ_opt().and_then(|d| ctx.shift_on(staff.id, d));
            let isolated = before != Some(ShiftType::Night) && after != Some(ShiftType::Night);

            if isolated {
                violations.push(Violation::new(
                    ID,
                    "Isolated night shift",
                    Severity::Warning,
                    format!(
                        "{} has an isolated single night shift on {} (preferred minimum block size {})",
                        staff.name, date, params.min_block_size
                    ),
                    ViolationContext {
                        staff_id: Some(staff.id),
                        staff_name: Some(staff.name.clone()),
                        date: Some(date),
                        dates: None,
                    },
                ));
            }
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
    fn lone_night_is_flagged() {
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
            assignments: vec![ShiftAssignment {
                staff_id,
                date: start,
                shift: ShiftType::Night,
                locked: false,
            }],
            staff_juhu_days: None,
        };
        let cfg = default_config();
        let ctx = EvaluationContext::new(&schedule, &staff, &cfg, &[]);
        assert_eq!(check(&ctx).len(), 1);
    }
}
