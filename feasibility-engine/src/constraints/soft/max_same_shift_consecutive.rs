use crate::boundary::streak_ending_at;
use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "max-same-shift-consecutive";
const THRESHOLD: u32 = 5;
const CHECKED_SHIFTS: [ShiftType; 3] = [ShiftType::Day, ShiftType::Evening, ShiftType::Night];

/// For each shift type separately, a streak of exactly `THRESHOLD`
/// identical shifts (seeded across the boundary) triggers one warning on
/// the fifth day — longer streaks don't re-trigger.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.soft_constraints.max_same_shift_consecutive.enabled {
        return Vec::new();
    }
    let mut violations = Vec::new();

    for staff in ctx.staff {
        for shift in CHECKED_SHIFTS {
            for date in period_dates(ctx.schedule.start_date) {
                let Some((length, streak_start)) =
                    streak_ending_at(ctx, staff.id, date, |s| s == shift)
                else {
                    continue;
                };
                if length == THRESHOLD {
                    violations.push(Violation::new(
                        ID,
                        "Same-shift streak",
                        Severity::Warning,
                        format!(
                            "{} has worked {:?} {} days in a row through {}",
                            staff.name, shift, THRESHOLD, date
                        ),
                        ViolationContext {
                            staff_id: Some(staff.id),
                            staff_name: Some(staff.name.clone()),
                            date: Some(date),
                            dates: Some(vec![streak_start, date]),
                        },
                    ));
                }
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
    fn fifth_identical_day_warns_once() {
        let staff_id = Uuid::new_v4();
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let staff = vec![Staff {
            id: staff_id,
            name: "S1".into(),
        }];
        let assignments = (0..7)
            .map(|o| ShiftAssignment {
                staff_id,
                date: start + Duration::days(o),
                shift: ShiftType::Day,
                locked: false,
            })
            .collect();
        let schedule = Schedule {
            id: Uuid::new_v4(),
            name: "p".into(),
            start_date: start,
            assignments,
            staff_juhu_days: None,
        };
        let cfg = default_config();
        let ctx = EvaluationContext::new(&schedule, &staff, &cfg, &[]);
        let violations = check(&ctx);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].context.date, Some(start + Duration::days(4)));
    }
}
