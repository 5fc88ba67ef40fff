use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "gradual-shift-progression";

/// A Day-then-Night transition is an abrupt shift-type jump; checked
/// across the left boundary too.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.soft_constraints.gradual_shift_progression.enabled {
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
            if from == ShiftType::Day && to == ShiftType::Night {
                violations.push(Violation::new(
                    ID,
                    "Abrupt Day-to-Night progression",
                    Severity::Warning,
                    format!(
                        "{} jumps from Day on {} directly to Night on {}",
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
