use crate::context::EvaluationContext;
use crate::dates::period_dates;
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "max-period-off";

/// Total Off days in the 28-day period should not exceed `maxOff`.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    let params = ctx.config.soft_constraints.max_period_off;
    if !params.enabled {
        return Vec::new();
    }
    let mut violations = Vec::new();

    for staff in ctx.staff {
        let off_dates: Vec<_> = period_dates(ctx.schedule.start_date)
            .filter(|&d| ctx.current_shift_on(staff.id, d) == Some(ShiftType::Off))
            .collect();

        if off_dates.len() as u32 > params.max_off {
            violations.push(Violation::new(
                ID,
                "Too many Off days this period",
                Severity::Warning,
                format!(
                    "{} has {} Off day(s) this period, more than the preferred max of {}",
                    staff.name,
                    off_dates.len(),
                    params.max_off
                ),
                ViolationContext {
                    staff_id: Some(staff.id),
                    staff_name: Some(staff.name.clone()),
                    date: None,
                    dates: Some(off_dates),
                },
            ));
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
    fn too_many_off_days_warns() {
        let staff_id = Uuid::new_v4();
        let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let staff = vec![Staff {
            id: staff_id,
            name: "S1".into(),
        }];
        let assignments = (0..10)
            .map(|o| ShiftAssignment {
                staff_id,
                date: start + Duration::days(o * 2),
                shift: ShiftType::Off,
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
        assert_eq!(check(&ctx).len(), 1);
    }
}
