use chrono::{Datelike, Duration, NaiveDate};

/// 0 = Sunday .. 6 = Saturday, per the wire convention
pub fn day_of_week(date: NaiveDate) -> u8 {
    date.weekday().num_days_from_sunday() as u8
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(day_of_week(date), 0 | 6)
}

/// The 28 dates of a period starting at `start`, in order.
pub fn period_dates(start: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..28).map(move |offset| start + Duration::days(offset))
}

/// Start (inclusive) and end (inclusive) of the `week_index`-th (0..4) week
/// of a period beginning at `start`.
pub fn week_bounds(start: NaiveDate, week_index: u8) -> (NaiveDate, NaiveDate) {
    let week_start = start + Duration::days(7 * week_index as i64);
    (week_start, week_start + Duration::days(6))
}

/// Which of the four weeks (0..4) `date` falls in, or `None` if it lies
/// outside `[start, start+28)`.
pub fn week_index_of(date: NaiveDate, start: NaiveDate) -> Option<u8> {
    let offset = (date - start).num_days();
    if !(0..28).contains(&offset) {
        return None;
    }
    Some((offset / 7) as u8)
}

/// Whether `date` lies in the current period `[start, start+28)`.
pub fn in_period(date: NaiveDate, start: NaiveDate) -> bool {
    let offset = (date - start).num_days();
    (0..28).contains(&offset)
}
