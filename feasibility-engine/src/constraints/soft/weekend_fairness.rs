use crate::context::EvaluationContext;
use crate::dates::{is_weekend, period_dates};
use crate::model::{Severity, ShiftType, Violation, ViolationContext};

const ID: &str = "weekend-fairness";

/// Counts Saturday+Sunday non-Off assignments per staff, compares each
/// against the period mean, and flags anyone more than two above it.
pub fn check(ctx: &EvaluationContext) -> Vec<Violation> {
    if !ctx.config.soft_constraints.weekend_fairness.enabled {
        return Vec::new();
    }
    if ctx.staff.is_empty() {
        return Vec::new();
    }

    let weekend_dates: Vec<_> = period_dates(ctx.schedule.start_date)
        .filter(|d| is_weekend(*d))
        .collect();

    let counts: Vec<(uuid::Uuid, &str, u32)> = ctx
        .staff
        .iter()
        .map(|staff| {
            let count = weekend_dates
                .iter()
                .filter(|d| ctx.current_shift_on(staff.id, **d).is_some_and(|s| s != ShiftType::Off))
                .count() as u32;
            (staff.id, staff.name.as_str(), count)
        })
        .collect();

    let mean = counts.iter().map(|(_, _, c)| *c as f64).sum::<f64>() / counts.len() as f64;
    let threshold = mean + 2.0;

    counts
        .into_iter()
        .filter(|(_, _, count)| *count as f64 > threshold)
        .map(|(staff_id, staff_name, count)| {
            Violation::new(
                ID,
                "Uneven weekend workload",
                Severity::Warning,
                format!(
                    "{} worked {} weekend shifts against a period mean of {:.1}",
                    staff_name, count, mean
                ),
                ViolationContext {
                    staff_id: Some(staff_id),
                    staff_name: Some(staff_name.to_string()),
                    date: None,
                    dates: None,
                },
            )
        })
        .collect()
}
