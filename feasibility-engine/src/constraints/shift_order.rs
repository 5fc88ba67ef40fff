use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{HardConstraintId, ShiftType, Violation, ViolationContext};

const ID: HardConstraintId = HardConstraintId::ShiftOrder;

fn forbidden(from: ShiftType, to: ShiftType) -> Option<&'static str> {
    match (from, to) {
        (ShiftType::Night, ShiftType::Day) => Some("N→D"),
        (ShiftType::Night, ShiftType::Evening) => Some("N→E"),
        (ShiftType::Evening, ShiftType::Day) => Some("E→D"),
        _ => None,
    }
}

/// Forbidden day-to-day transitions: N→D, N→E, E→D, checked across the
/// left boundary too.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.is_enabled(ID) {
        return Vec::new();
    }
    let severity = ctx.config.effective_hard_severity(ID);
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
            if let Some(label) = forbidden(from, to) {
                violations.push(Violation::new(
                    ID.as_str(),
                    "Forbidden shift transition",
                    severity,
                    format!(
                        "{} has a forbidden {} transition on {}",
                        staff.name, label, date
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
    use chrono::NaiveDate;
    use uuid::Uuid;

    #[test]
    fn forbidden_transition_within_period() {
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
                    shift: ShiftType::Night,
                    locked: false,
                },
                ShiftAssignment {
                    staff_id,
                    date: start + chrono::Duration::days(1),
                    shift: ShiftType::Day,
                    locked: false,
                },
            ],
            staff_juhu_days: None,
        };
        let cfg = default_config();
        let ctx = EvaluationContext::new(&schedule, &staff, &cfg, &[]);

        let violations = check(&ctx);
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.constraint_id, "shift-order");
        assert_eq!(v.severity, crate::model::Severity::Error);
        assert_eq!(v.context.date, Some(start + chrono::Duration::days(1)));
        assert!(v.message.contains("N→D"));
    }
}
