use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "rest-clustering";

/// An Off day with no Off neighbor on either side is an isolated rest day
/// — preferred practice clusters rest together.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.soft_constraints.rest_clustering.enabled {
        return Vec::new();
    }
    let mut violations = Vec::new();

    for staff in ctx.staff {
        for date in period_dates(ctx.schedule.start_date) {
            if ctx.current_shift_on(staff.id, date) != Some(ShiftType::Off) {
                continue;
            }
            let before = date.pred_opt().and_then(|d| ctx.shift_on(staff.id, d));
            let after = date.succ_opt().and_then(|d| ctx.shift_on(staff.id, d));
            let isolated = before != Some(ShiftType::Off) && after != Some(ShiftType::Off);

            if isolated {
                violations.push(Violation::new(
                    ID,
                    "Isolated rest day",
                    Severity::Warning,
                    format!("{} has an isolated single Off day on {}", staff.name, date),
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
