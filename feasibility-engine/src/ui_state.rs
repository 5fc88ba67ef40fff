use crate::model::{StaffId, Violation};
use chrono::NaiveDate;

/// Lifecycle of an in-flight optimizer call, as driven by a host UI.
/// Pure data — no widget or rendering code lives here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationStatus {
    Idle,
    Loading,
    Success,
    Error,
}

impl GenerationStatus {
    pub fn on_generate_start(self) -> Self {
        GenerationStatus::Loading
    }

    pub fn on_generate_success(self) -> Self {
        GenerationStatus::Success
    }

    pub fn on_generate_error(self) -> Self {
        GenerationStatus::Error
    }
}

/// Tracks the "show all violations" toggle: manual edits hide the noisy
/// full list, a fresh successful generation restores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViolationVisibility {
    pub showing_all: bool,
}

impl ViolationVisibility {
    pub fn new() -> Self {
        Self { showing_all: true }
    }

    pub fn on_manual_edit_start(&mut self) {
        self.showing_all = false;
    }

    pub fn on_generation_success(&mut self) {
        self.showing_all = true;
    }
}

impl Default for ViolationVisibility {
    fn default() -> Self {
        Self::new()
    }
}

/// Soft violations whose context intersects `(staff_id, date)`: the
/// staff matches, the date matches, or the date falls in `context.dates`.
pub fn filter_soft_violations_for_cell<'a>(
    violations: &'a [Violation],
    staff_id: StaffId,
    date: NaiveDate,
) -> Vec<&'a Violation> {
    violations
        .iter()
        .filter(|v| {
            let ctx = &v.context;
            ctx.staff_id == Some(staff_id)
                || ctx.date == Some(date)
                || ctx.dates.as_ref().is_some_and(|dates| dates.contains(&date))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Severity, ViolationContext};
    use uuid::Uuid;

    #[test]
    fn generation_status_transitions() {
        let status = GenerationStatus::Idle;
        let loading = status.on_generate_start();
        assert_eq!(loading, GenerationStatus::Loading);
        assert_eq!(loading.on_generate_success(), GenerationStatus::Success);
        assert_eq!(loading.on_generate_error(), GenerationStatus::Error);
    }

    #[test]
    fn manual_edit_hides_then_generation_restores() {
        let mut visibility = ViolationVisibility::new();
        assert!(visibility.showing_all);
        visibility.on_manual_edit_start();
        assert!(!visibility.showing_all);
        visibility.on_generation_success();
        assert!(visibility.showing_all);
    }

    #[test]
    fn filter_matches_by_staff_date_or_dates_list() {
        let staff_id = Uuid::new_v4();
        let other_staff = Uuid::new_v4();
        let date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
        let violations = vec![
            Violation::new(
                "a",
                "a",
                Severity::Warning,
                "m",
                ViolationContext {
                    staff_id: Some(staff_id),
                    staff_name: None,
                    date: None,
                    dates: None,
                },
            ),
            Violation::new(
                "b",
                "b",
                Severity::Warning,
                "m",
                ViolationContext {
                    staff_id: Some(other_staff),
                    staff_name: None,
                    date: Some(date),
                    dates: None,
                },
            ),
            Violation::new(
                "c",
                "c",
                Severity::Warning,
                "m",
                ViolationContext {
                    staff_id: Some(other_staff),
                    staff_name: None,
                    date: None,
                    dates: Some(vec![date]),
                },
            ),
            Violation::new(
                "d",
                "d",
                Severity::Warning,
                "m",
                ViolationContext {
                    staff_id: Some(other_staff),
                    staff_name: None,
                    date: None,
                    dates: None,
                },
            ),
        ];

        let matched = filter_soft_violations_for_cell(&violations, staff_id, date);
        assert_eq!(matched.len(), 3);
        assert!(!matched.iter().any(|v| v.constraint_id == "d"));
    }
}
