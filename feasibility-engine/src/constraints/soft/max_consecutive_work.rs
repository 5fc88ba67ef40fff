use crate::boundary::streak_ending_at;
use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "max-consecutive-work";

/// No staff member exceeds `maxConsecutiveWork.maxDays` consecutive
/// non-Off days, seeded across the boundary like every other streak
/// constraint.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    let params = ctx.config.soft_constraints.max_consecutive_work;
    if !params.enabled {
        return Vec::new();
    }
    let mut violations = Vec::new();

    for staff in ctx.staff {
        for date in period_dates(ctx.schedule.start_date) {
            let Some((length, streak_start)) =
                streak_ending_at(ctx, staff.id, date, |s| s != ShiftType::Off)
            else {
                continue;
            };
            if length > params.max_days {
                violations.push(Violation::new(
                    ID,
                    "Max consecutive work days exceeded",
                    Severity::Warning,
                    format!(
                        "{} has worked {} consecutive days through {} (max {})",
                        staff.name, length, date, params.max_days
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

    violations
}
