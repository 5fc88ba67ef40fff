use crate::context::EvaluationContext;
use crate::dates::week_bounds;
use crate::model::{HardConstraintId, ShiftType, Violation, ViolationContext};
use crate::stats::week_completeness_for_staff;
use chrono::Duration;

const ID: HardConstraintId = HardConstraintId::WeeklyOff;
const COMPLETENESS_GATE: f64 = 0.5;

/// Each staff member must have at least `required_off_days_per_week` Off
/// days in each of the four non-overlapping weeks, evaluated only when
/// that week's own completeness is >= 0.5.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.is_enabled(ID) {
        return Vec::new();
    }
    let severity = ctx.config.effective_hard_severity(ID);
    let required = ctx.config.required_off_days_per_week();
    let mut violations = Vec::new();

    for staff in ctx.staff {
        for week_index in 0..4u8 {
            let (week_start, week_end) = week_bounds(ctx.schedule.start_date, week_index);

            if week_completeness_for_staff(ctx, staff.id, week_start) < COMPLETENESS_GATE {
                continue;
            }

            let week_dates: Vec<_> = (0..7).map(|o| week_start + Duration::days(o)).collect();
            let off_count = week_dates
                .iter()
                .filter(|&&d| ctx.current_shift_on(staff.id, d) == Some(ShiftType::Off))
                .count() as u32;

            if off_count < required {
                violations.push(Violation::new(
                    ID.as_str(),
                    "Insufficient weekly Off days",
                    severity,
                    format!(
                        "{} has {} Off day(s) in week {} ({} – {}), but {} are required",
                        staff.name,
                        off_count,
                        week_index + 1,
                        week_start,
                        week_end,
                        required
                    ),
                    ViolationContext {
                        staff_id: Some(staff.id),
                        staff_name: Some(staff.name.clone()),
                        date: None,
                        dates: Some(week_dates),
                    },
                ));
            }
        }
    }

    violations
}
