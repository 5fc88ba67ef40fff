//! End-to-end worked scenarios against the full registry, plus the
//! quantified invariants that don't belong to any single constraint.

use chrono::{Datelike, Duration, NaiveDate};
use feasibility_engine::config_defaults::default_config;
use feasibility_engine::context::EvaluationContext;
use feasibility_engine::impact::{compute_impact, fold_impact_map, ImpactReason, ImpactTarget};
use feasibility_engine::model::{HardConstraintId, Schedule, ShiftAssignment, ShiftType, Staff};
use feasibility_engine::{ConstraintConfig, FeasibilityChecker};
use std::collections::HashMap;
use uuid::Uuid;

fn staff(name: &str) -> (Uuid, Staff) {
    let id = Uuid::new_v4();
    (
        id,
        Staff {
            id,
            name: name.to_string(),
        },
    )
}

fn empty_schedule(start: NaiveDate) -> Schedule {
    Schedule {
        id: Uuid::new_v4(),
        name: "period".into(),
        start_date: start,
        assignments: Vec::new(),
        staff_juhu_days: None,
    }
}

#[test]
fn scenario_impact_map_priority_resolution() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let (s1, staff1) = staff("S1");
    let (s2, staff2) = staff("S2");
    let (s3, staff3) = staff("S3");
    let staffs = vec![staff1, staff2, staff3];

    let mut juhu_days = HashMap::new();
    juhu_days.insert(s1, 5u8); // Friday

    let mut schedule = empty_schedule(start);
    schedule.staff_juhu_days = Some(juhu_days);

    let cfg = default_config();
    let ctx = EvaluationContext::new(&schedule, &staffs, &cfg, &[]);

    let target_date = NaiveDate::from_ymd_opt(2025, 1, 10).unwrap();
    let entries = compute_impact(
        &ctx,
        ImpactTarget {
            staff_id: s1,
            date: target_date,
        },
    );

    let staffing_entries: Vec<_> = entries
        .iter()
        .filter(|e| e.reason == ImpactReason::Staffing)
        .collect();
    assert_eq!(staffing_entries.len(), 2);
    assert!(staffing_entries.iter().all(|e| e.staff_id == s2 || e.staff_id == s3));

    let sequence_count = entries
        .iter()
        .filter(|e| e.reason == ImpactReason::Sequence)
        .count();
    assert!(sequence_count <= 4);

    let folded = fold_impact_map(entries);
    let fridays_in_period: Vec<NaiveDate> = (0..28)
        .map(|o| start + Duration::days(o))
        .filter(|d| d.weekday().num_days_from_sunday() == 5 && *d != target_date)
        .collect();
    for friday in &fridays_in_period {
        assert!(folded.contains_key(&(s1, *friday)));
    }

    let overridden_by_sequence = fridays_in_period
        .iter()
        .any(|f| (*f - target_date).num_days().abs() <= 2);
    if overridden_by_sequence {
        let collided = fridays_in_period
            .iter()
            .find(|f| (**f - target_date).num_days().abs() <= 2)
            .unwrap();
        assert_eq!(folded.get(&(s1, *collided)), Some(&ImpactReason::Sequence));
    }
}

#[test]
fn scenario_config_with_enough_night_supply_has_no_warnings() {
    let cfg = default_config();
    let warnings = feasibility_engine::config_validator::validate_config(&cfg, 15);
    assert!(warnings.is_empty());
}

#[test]
fn feasible_iff_no_error_violations() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let (s1, staff1) = staff("S1");
    let staffs = vec![staff1];

    let schedule = Schedule {
        id: Uuid::new_v4(),
        name: "p".into(),
        start_date: start,
        assignments: vec![
            ShiftAssignment {
                staff_id: s1,
                date: start,
                shift: ShiftType::Night,
                locked: false,
            },
            ShiftAssignment {
                staff_id: s1,
                date: start + Duration::days(1),
                shift: ShiftType::Day,
                locked: false,
            },
        ],
        staff_juhu_days: None,
    };
    let cfg = default_config();
    let checker = FeasibilityChecker::new();
    let result = checker.evaluate(&schedule, &staffs, &cfg, &[]);

    let has_error = result.violations.iter().any(|v| v.severity == feasibility_engine::Severity::Error);
    assert_eq!(result.feasible, !has_error);
    assert!(has_error, "shift-order violation should be an error");
    assert!(!result.feasible);
}

#[test]
fn soft_downgraded_hard_constraint_never_errors() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let (s1, staff1) = staff("S1");
    let staffs = vec![staff1];

    let schedule = Schedule {
        id: Uuid::new_v4(),
        name: "p".into(),
        start_date: start,
        assignments: vec![
            ShiftAssignment {
                staff_id: s1,
                date: start,
                shift: ShiftType::Night,
                locked: false,
            },
            ShiftAssignment {
                staff_id: s1,
                date: start + Duration::days(1),
                shift: ShiftType::Day,
                locked: false,
            },
        ],
        staff_juhu_days: None,
    };

    let mut cfg = default_config();
    cfg.constraint_severity.insert(
        HardConstraintId::ShiftOrder,
        feasibility_engine::model::ConfigSeverity::Soft,
    );

    let checker = FeasibilityChecker::new();
    let result = checker.evaluate(&schedule, &staffs, &cfg, &[]);

    let shift_order_violations: Vec<_> = result
        .violations
        .iter()
        .filter(|v| v.constraint_id == "shift-order")
        .collect();
    assert_eq!(shift_order_violations.len(), 1);
    assert_eq!(
        shift_order_violations[0].severity,
        feasibility_engine::Severity::Warning
    );
}

#[test]
fn evaluation_is_pure_and_order_independent() {
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let (s1, staff1) = staff("S1");
    let staffs = vec![staff1];

    let schedule = Schedule {
        id: Uuid::new_v4(),
        name: "p".into(),
        start_date: start,
        assignments: vec![
            ShiftAssignment {
                staff_id: s1,
                date: start,
                shift: ShiftType::Night,
                locked: false,
            },
            ShiftAssignment {
                staff_id: s1,
                date: start + Duration::days(1),
                shift: ShiftType::Day,
                locked: false,
            },
        ],
        staff_juhu_days: None,
    };
    let cfg = default_config();
    let checker = FeasibilityChecker::new();

    let first = checker.evaluate(&schedule, &staffs, &cfg, &[]);
    let second = checker.evaluate(&schedule, &staffs, &cfg, &[]);

    assert_eq!(first.feasible, second.feasible);
    assert_eq!(first.violations.len(), second.violations.len());
    for (a, b) in first.violations.iter().zip(second.violations.iter()) {
        assert_eq!(a.constraint_id, b.constraint_id);
        assert_eq!(a.context.date, b.context.date);
    }
}

#[test]
fn registry_matches_constraint_config_generic_bounds() {
    // A config built purely from defaults must round-trip through the
    // checker without panicking for every staff-count edge case.
    let cfg: ConstraintConfig = default_config();
    let checker = FeasibilityChecker::new();
    let start = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
    let schedule = empty_schedule(start);
    let result = checker.evaluate(&schedule, &[], &cfg, &[]);
    assert!(result.feasible);
    assert!(result.violations.is_empty());
}
