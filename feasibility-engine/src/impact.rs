use crate::context::EvaluationContext;
use crate::dates::{day_of_week, in_period, period_dates};
use crate::model::StaffId;
use chrono::{Duration, NaiveDate};
use std::collections::HashMap;

/// Why a cell would be reconsidered if the target cell changed. Priority
/// for color resolution, highest first: `Sequence > Juhu > Staffing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImpactReason {
    Staffing,
    Juhu,
    Sequence,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImpactTarget {
    pub staff_id: StaffId,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImpactEntry {
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub reason: ImpactReason,
}

/// Every cell the engine would reconsider after an edit to `target`.
/// Dense — may list the same `(staff, date)` more than once under
/// different reasons; [`fold_impact_map`] resolves that.
pub fn compute_impact(ctx: &EvaluationContext, target: ImpactTarget) -> Vec<ImpactEntry> {
    let mut entries = Vec::new();
    let start = ctx.schedule.start_date;

    for staff in ctx.staff {
        if staff.id != target.staff_id {
            entries.push(ImpactEntry {
                staff_id: staff.id,
                date: target.date,
                reason: ImpactReason::Staffing,
            });
        }
    }

    for offset in -2..=2i64 {
        if offset == 0 {
            continue;
        }
        let date = target.date + Duration::days(offset);
        if !in_period(date, start) {
            continue;
        }
        entries.push(ImpactEntry {
            staff_id: target.staff_id,
            date,
            reason: ImpactReason::Sequence,
        });
    }

    if let Some(juhu_day) = ctx.schedule.juhu_day_for(target.staff_id) {
        for date in period_dates(start) {
            if date == target.date {
                continue;
            }
            if day_of_week(date) == juhu_day {
                entries.push(ImpactEntry {
                    staff_id: target.staff_id,
                    date,
                    reason: ImpactReason::Juhu,
                });
            }
        }
    }

    entries
}

/// Folds a dense impact list into one reason per cell, keeping the
/// highest-priority reason (`Sequence > Juhu > Staffing`) on collision.
pub fn fold_impact_map(
    entries: Vec<ImpactEntry>,
) -> HashMap<(StaffId, NaiveDate), ImpactReason> {
    let mut map: HashMap<(StaffId, NaiveDate), ImpactReason> = HashMap::new();
    for entry in entries {
        let key = (entry.staff_id, entry.date);
        map.entry(key)
            .and_modify(|existing| {
                if entry.reason > *existing {
                    *existing = entry.reason;
                }
            })
            .or_insert(entry.reason);
    }
    map
}
