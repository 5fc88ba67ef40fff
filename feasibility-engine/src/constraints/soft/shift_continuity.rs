use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "shift-continuity";
const THRESHOLD: u32 = 10;

/// Counts how many times a staff's non-Off shift type differs from
/// their previous non-Off shift across the period; more than
/// `THRESHOLD` changes is a warning.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.soft_constraints.shift_continuity.enabled {
        return Vec::new();
    }
    let mut violations = Vec::new();

    for staff in ctx.staff {
        let mut last_non_off: Option<ShiftType> = None;
        let mut changes = 0u32;

        for date in period_dates(ctx.schedule.start_date) {
            let Some(shift) = ctx.current_shift_on(staff.id, date) else {
                continue;
            };
            if shift == ShiftType::Off {
                continue;
            }
            if let Some(previous) = last_non_off {
                if previous != shift {
                    changes += 1;
                }
            }
            last_non_off = Some(shift);
        }

        if changes > THRESHOLD {
            violations.push(Violation::new(
                ID,
                "Excessive shift-type churn",
                Severity::Warning,
                format!(
                    "{} changes shift type {} times across the period (max {})",
                    staff.name, changes, THRESHOLD
                ),
                ViolationContext {
                    staff_id: Some(staff.id),
                    staff_name: Some(staff.name.clone()),
                    date: None,
                    dates: None,
                },
            ));
        }
    }

    violations
}
