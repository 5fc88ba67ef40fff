use crate::boundary::streak_ending_at;
use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{HardConstraintId, ShiftType, Violation, ViolationContext};

const ID: HardConstraintId = HardConstraintId::ConsecutiveNight;

/// No staff member may exceed `maxConsecutiveNights` consecutive Night
/// shifts. The streak is seeded from the previous-period trail across the
/// left boundary.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.is_enabled(ID) {
        return Vec::new();
    }
    let severity = ctx.config.effective_hard_severity(ID);
    let limit = ctx.config.max_consecutive_nights;
    let mut violations = Vec::new();

    for staff in ctx.staff {
        for date in period_dates(ctx.schedule.start_date) {
            let Some((length, streak_start)) =
                streak_ending_at(ctx, staff.id, date, |s| s == ShiftType::Night)
            else {
                continue;
            };
            if length > limit {
                violations.push(Violation::new(
                    ID.as_str(),
                    "Consecutive night shifts",
                    severity,
                    format!(
                        "{} has worked {} consecutive nights through {} (연속 {}일 나이트, max {})",
                        staff.name, length, date, length, limit
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
