use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "post-rest-day-shift";

/// An Off-then-Night transition is a warning; checked across the left
/// boundary too.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.soft_constraints.post_rest_day_shift.enabled {
        return Vec::new();
    }
    let mut violations = Vec::new();

    for staff in ctx.staff {
        for date in period_dates(ctx.schedule.start_date) {
            let previous_day = date.pred_opt().expect("NaiveDate underflow");
            let (Some(from), Some(to)) = (
                ctx.shift_on(staff.id, previous_day),
                ctx.shift_on(staff.id, date),
            ) else {
                continue;
            };
            if from == ShiftType::Off && to == ShiftType::Night {
                violations.push(Violation::new(
                    ID,
                    "Night shift immediately after rest",
                    Severity::Warning,
                    format!(
                        "{} goes from Off on {} straight to Night on {}",
                        staff.name, previous_day, date
                    ),
                    ViolationContext {
                        staff_id: Some(staff.id),
                        staff_name: Some(staff.name.clone()),
                        date: Some(date),
                        dates: Some(vec![previous_day, date]),
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
    use chrono::{Duration, NaiveDate};
    use uuid::Uuid;

    #[test]
    fn off_then_night_warns() {
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
            assignments: vec![
                ShiftAssignment {
                    staff_id,
                    date: start,
                    shift: ShiftType::Off,
                    locked: false,
                },
                ShiftAssignment {
                    staff_id,
                    date: start + Duration::days(1),
                    shift: ShiftType::Night,
                    locked: false,
                },
            ],
            staff_juhu_days: None,
        };
        let cfg = default_config();
        let ctx = EvaluationContext::new(&schedule, &staff, &cfg, &[]);
        assert_eq!(check(&ctx).len(), 1);
    }
}
