use crate::context::EvaluationContext;
use crate::model::{ShiftType, StaffId};
use chrono::NaiveDate;

/// Length (and start date) of the run of days ending at (and including)
/// `date` for which `predicate(shift)` holds, walking backward through
/// `ctx.shift_on` — which transparently crosses into the previous-period
/// trail. Returns `None` if `date` itself doesn't satisfy the predicate
/// (no assignment, or an assignment that breaks the streak).
///
/// This is the shared primitive behind every consecutive-X constraint.
/// The trail only holds up to 7 days, so walking past it naturally
/// stops the moment `shift_on` returns `None` — a gap in the trail is
/// a chain-breaker.
pub fn streak_ending_at(
    ctx: &EvaluationContext,
    staff_id: StaffId,
    date: NaiveDate,
    predicate: impl Fn(ShiftType) -> bool,
) -> Option<(u32, NaiveDate)> {
    let today_shift = ctx.shift_on(staff_id, date)?;
    if !predicate(today_shift) {
        return None;
    }

    let mut length = 1u32;
    let mut start = date;
    let mut cursor = date;

    loop {
        let prev_day = cursor.pred_opt()?;
        match ctx.shift_on(staff_id, prev_day) {
            Some(shift) if predicate(shift) => {
                length += 1;
                start = prev_day;
                cursor = prev_day;
            }
            _ => break,
        }
    }

    Some((length, start))
}
