use crate::context::EvaluationContext;
use crate::dates::{day_of_week, period_dates};
use crate::model::{HardConstraintId, JurisdictionProfile, ShiftType, Violation, ViolationContext};

const ID: HardConstraintId = HardConstraintId::Juhu;

/// The legally mandated weekly off-day (주휴). For each staff member with
/// a known `juhuDay`, every current-period date on that weekday bearing
/// an assignment other than Off is a violation. No `juhuDay` known ⇒
/// inert for that staff.
///
/// Immutable (`error`) under the default jurisdiction profile; only the
/// `Overridable` profile consults the user's `constraintSeverity` toggle.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.is_enabled(ID) {
        return Vec::new();
    }
    let severity = match ctx.config.jurisdiction_profile {
        JurisdictionProfile::Default => crate::model::Severity::Error,
        JurisdictionProfile::Overridable => ctx.config.effective_hard_severity(ID),
    };
    let mut violations = Vec::new();

    for staff in ctx.staff {
        let Some(juhu_day) = ctx.schedule.juhu_day_for(staff.id) else {
            continue;
        };

        for date in period_dates(ctx.schedule.start_date) {
            if day_of_week(date) != juhu_day {
                continue;
            }
            match ctx.current_shift_on(staff.id, date) {
                Some(shift) if shift != ShiftType::Off => {
                    violations.push(Violation::new(
                        ID.as_str(),
                        "Juhu (statutory weekly rest) violated",
                        severity,
                        format!(
                            "{} is assigned {:?} on {}, which is their statutory weekly rest day",
                            staff.name, shift, date
                        ),
                        ViolationContext {
                            staff_id: Some(staff.id),
                            staff_name: Some(staff.name.clone()),
                            date: Some(date),
                            dates: None,
                        },
                    ));
                }
                _ => {}
            }
        }
    }

    violations
}
