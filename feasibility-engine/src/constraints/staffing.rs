use crate::context::EvaluationContext;
use crate::dates::{is_weekend, period_dates};
use crate::model::{HardConstraintId, ShiftType, Violation, ViolationContext};
use crate::stats::count_staff_on_date_with_shift;

const ID: HardConstraintId = HardConstraintId::Staffing;
const COMPLETENESS_GATE: f64 = 0.5;
const CHECKED_SHIFTS: [ShiftType; 3] = [ShiftType::Day, ShiftType::Evening, ShiftType::Night];

/// Minimum staffing per shift per day, gated globally on schedule
/// completeness to avoid noise on partial schedules.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.is_enabled(ID) {
        return Vec::new();
    }
    if ctx.completeness < COMPLETENESS_GATE {
        return Vec::new();
    }
    let severity = ctx.config.effective_hard_severity(ID);
    let mut violations = Vec::new();

    for date in period_dates(ctx.schedule.start_date) {
        let staffing = if is_weekend(date) {
            &ctx.config.weekend_staffing
        } else {
            &ctx.config.weekday_staffing
        };

        for shift in CHECKED_SHIFTS {
            let Some(range) = staffing.range_for(shift) else {
                continue;
            };
            let count = count_staff_on_date_with_shift(ctx, date, shift);
            if count < range.min {
                violations.push(Violation::new(
                    ID.as_str(),
                    "Understaffed shift",
                    severity,
                    format!(
                        "{} on {} has {} staff assigned, but at least {} are required",
                        shift_label(shift),
                        date,
                        count,
                        range.min
                    ),
                    ViolationContext {
                        staff_id: None,
                        staff_name: None,
                        date: Some(date),
                        dates: None,
                    },
                ));
            }
        }
    }

    violations
}

fn shift_label(shift: ShiftType) -> &'static str {
    match shift {
        ShiftType::Day => "Day",
        ShiftType::Evening => "Evening",
        ShiftType::Night => "Night",
        ShiftType::Off => "Off",
    }
}
