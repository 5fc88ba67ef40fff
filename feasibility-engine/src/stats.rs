use crate::context::EvaluationContext;
use crate::model::{ShiftType, StaffId};
use chrono::NaiveDate;
use std::collections::HashMap;

/// `|assignments| / (|staff| * 28)`.
pub fn completeness_ratio(assignment_count: usize, staff_count: usize) -> f64 {
    if staff_count == 0 {
        return 0.0;
    }
    assignment_count as f64 / (staff_count * 28) as f64
}

/// Ratio of a single staff member's assigned days within one week (0..1).
pub fn week_completeness_for_staff(
    ctx: &EvaluationContext,
    staff_id: StaffId,
    week_start: NaiveDate,
) -> f64 {
    let assigned = (0..7)
        .filter(|&offset| {
            let date = week_start + chrono::Duration::days(offset);
            ctx.current_shift_on(staff_id, date).is_some()
        })
        .count();
    assigned as f64 / 7.0
}

/// Count of each shift type a staff member holds across the current period.
pub fn count_shifts_for_staff(
    ctx: &EvaluationContext,
    staff_id: StaffId,
) -> HashMap<ShiftType, u32> {
    let mut counts = HashMap::new();
    for date in crate::dates::period_dates(ctx.schedule.start_date) {
        if let Some(shift) = ctx.current_shift_on(staff_id, date) {
            *counts.entry(shift).or_insert(0) += 1;
        }
    }
    counts
}

/// Count of staff assigned to `shift` on `date`, current period only.
pub fn count_staff_on_date_with_shift(ctx: &EvaluationContext, date: NaiveDate, shift: ShiftType) -> u32 {
    ctx.staff
        .iter()
        .filter(|s| ctx.current_shift_on(s.id, date) == Some(shift))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completeness_ratio_zero_staff() {
        assert_eq!(completeness_ratio(10, 0), 0.0);
    }

    #[test]
    fn completeness_ratio_half() {
        assert_eq!(completeness_ratio(28, 2), 0.5);
    }
}
