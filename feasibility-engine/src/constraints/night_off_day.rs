use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{HardConstraintId, ShiftType, Violation, ViolationContext};
use chrono::Duration;

const ID: HardConstraintId = HardConstraintId::NightOffDay;

/// Forbid the three-day pattern N, Off, D (legal rest violation). The
/// window's first day (N) may lie as far back as offset -2 (i.e. inside
/// the previous-period trail), but a violation is only reported when the
/// third day (D) lies inside the current period.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.is_enabled(ID) {
        return Vec::new();
    }
    let severity = ctx.config.effective_hard_severity(ID);
    let mut violations = Vec::new();
    let start = ctx.schedule.start_date;

    for staff in ctx.staff {
        for day3 in period_dates(start) {
            let day1 = day3 - Duration::days(2);
            let day2 = day3 - Duration::days(1);

            let (Some(s1), Some(s2), Some(s3)) = (
                ctx.shift_on(staff.id, day1),
                ctx.shift_on(staff.id, day2),
                ctx.shift_on(staff.id, day3),
            ) else {
                continue;
            };

            if s1 == ShiftType::Night && s2 == ShiftType::Off && s3 == ShiftType::Day {
                violations.push(Violation::new(
                    ID.as_str(),
                    "Night-Off-Day rest violation",
                    severity,
                    format!(
                        "{} works Night on {}, Off on {}, then Day on {} — fewer than 24h rest after a night shift",
                        staff.name, day1, day2, day3
                    ),
                    ViolationContext {
                        staff_id: Some(staff.id),
                        staff_name: Some(staff.name.clone()),
                        date: Some(day3),
                        dates: Some(vec![day1, day2, day3]),
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
    fn boundary_n_off_d() {
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
                shift: ShiftType::Day,
                locked: false,
            }],
            staff_juhu_days: None,
        };
        let previous = vec![
            ShiftAssignment {
                staff_id,
                date: start - Duration::days(2),
                shift: ShiftType::Night,
                locked: false,
            },
            ShiftAssignment {
                staff_id,
                date: start - Duration::days(1),
                shift: ShiftType::Off,
                locked: false,
            },
        ];
        let cfg = default_config();
        let ctx = EvaluationContext::new(&schedule, &staff, &cfg, &previous);

        let violations = check(&ctx);
        assert_eq!(violations.len(), 1);
        let v = &violations[0];
        assert_eq!(v.context.date, Some(start));
        assert_eq!(
            v.context.dates,
            Some(vec![
                start - Duration::days(2),
                start - Duration::days(1),
                start
            ])
        );
    }
}
