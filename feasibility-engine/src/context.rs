use crate::model::{ConstraintConfig, Schedule, ShiftAssignment, ShiftType, Staff, StaffId};
use crate::stats::completeness_ratio;
use chrono::NaiveDate;
use std::collections::HashMap;

/// The immutable bundle every constraint check receives.
///
/// Built once per evaluation. `current` and `previous` are precomputed
/// `(staff, date) -> shift` lookups shared by every constraint, per the
/// "map vs scan" design note — constraints never re-scan
/// `schedule.assignments` themselves.
pub struct EvaluationContext<'a> {
    pub schedule: &'a Schedule,
    pub staff: &'a [Staff],
    pub config: &'a ConstraintConfig,
    pub previous_period: &'a [ShiftAssignment],
    pub completeness: f64,
    current: HashMap<(StaffId, NaiveDate), ShiftType>,
    previous: HashMap<(StaffId, NaiveDate), ShiftType>,
}

impl<'a> EvaluationContext<'a> {
    pub fn new(
        schedule: &'a Schedule,
        staff: &'a [Staff],
        config: &'a ConstraintConfig,
        previous_period: &'a [ShiftAssignment],
    ) -> Self {
        let current = schedule
            .assignments
            .iter()
            .map(|a| ((a.staff_id, a.date), a.shift))
            .collect();
        let previous = previous_period
            .iter()
            .map(|a| ((a.staff_id, a.date), a.shift))
            .collect();
        let completeness = completeness_ratio(schedule.assignments.len(), staff.len());

        Self {
            schedule,
            staff,
            config,
            previous_period,
            completeness,
            current,
            previous,
        }
    }

    /// Shift on `date` within the current 28-day period only.
    pub fn current_shift_on(&self, staff_id: StaffId, date: NaiveDate) -> Option<ShiftType> {
        self.current.get(&(staff_id, date)).copied()
    }

    /// Shift on `date`, transparently falling back to the previous-period
    /// trail for dates before `schedule.start_date`. This is the lookup
    /// every boundary-crossing constraint uses.
    pub fn shift_on(&self, staff_id: StaffId, date: NaiveDate) -> Option<ShiftType> {
        self.current
            .get(&(staff_id, date))
            .or_else(|| self.previous.get(&(staff_id, date)))
            .copied()
    }

    pub fn staff_name(&self, staff_id: StaffId) -> Option<&str> {
        self.staff
            .iter()
            .find(|s| s.id == staff_id)
            .map(|s| s.name.as_str())
    }
}
