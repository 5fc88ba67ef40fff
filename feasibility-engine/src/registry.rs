use crate::constraints::{
    consecutive_night, juhu, monthly_night, night_off_day, shift_order, staffing, weekly_off,
};
use crate::constraints::soft::{
    gradual_shift_progression, max_consecutive_off, max_consecutive_work, max_period_off,
    max_same_shift_consecutive, night_block_policy, post_rest_day_shift, rest_clustering,
    shift_continuity, weekend_fairness,
};
use crate::context::EvaluationContext;
use crate::model::Violation;
use crate::tier::{tier_for, SoftTier};

/// Whether a registry entry is one of the seven hard rules or one of
/// the ten soft ones. Hard entries gate themselves
/// internally via `ConstraintConfig::is_enabled`; soft entries gate on
/// their own `ToggleConfig`. `SeverityClass` only labels the entry for
/// callers that need to group results (e.g. `GET /constraints`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityClass {
    Hard,
    Soft,
}

/// One row of the constraint registry: stable id, display name, class,
/// and the `check` function that evaluates it against a context.
///
/// `tier` is `Some` for soft constraints (spec §4.4's priority class, used
/// downstream to scale optimizer penalties) and `None` for hard ones,
/// which have no tier.
pub struct ConstraintDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub class: SeverityClass,
    pub tier: Option<SoftTier>,
    pub check: fn(&EvaluationContext) -> Vec<Violation>,
}

fn descriptor(
    id: &'static str,
    name: &'static str,
    class: SeverityClass,
    check: fn(&EvaluationContext) -> Vec<Violation>,
) -> ConstraintDescriptor {
    let tier = match class {
        SeverityClass::Hard => None,
        SeverityClass::Soft => Some(tier_for(id)),
    };
    ConstraintDescriptor {
        id,
        name,
        class,
        tier,
        check,
    }
}

/// All seventeen constraints, hard first then soft. This is the single
/// source of truth the checker, the `GET /constraints` endpoint, and
/// the config validator all walk.
pub fn registry() -> Vec<ConstraintDescriptor> {
    tracing::debug!("building constraint registry");
    vec![
        descriptor(
            "shift-order",
            "Forbidden shift transition",
            SeverityClass::Hard,
            shift_order::check,
        ),
        descriptor(
            "night-off-day",
            "Night-Off-Day sequence",
            SeverityClass::Hard,
            night_off_day::check,
        ),
        descriptor(
            "consecutive-night",
            "Max consecutive nights",
            SeverityClass::Hard,
            consecutive_night::check,
        ),
        descriptor(
            "weekly-off",
            "Weekly statutory rest",
            SeverityClass::Hard,
            weekly_off::check,
        ),
        descriptor(
            "juhu",
            "Fixed weekly rest day",
            SeverityClass::Hard,
            juhu::check,
        ),
        descriptor(
            "staffing",
            "Minimum daily staffing",
            SeverityClass::Hard,
            staffing::check,
        ),
        descriptor(
            "monthly-night",
            "Monthly night quota",
            SeverityClass::Hard,
            monthly_night::check,
        ),
        descriptor(
            "max-consecutive-work",
            "Max consecutive work days",
            SeverityClass::Soft,
            max_consecutive_work::check,
        ),
        descriptor(
            "night-block-policy",
            "Isolated night shift",
            SeverityClass::Soft,
            night_block_policy::check,
        ),
        descriptor(
            "max-period-off",
            "Max Off days per period",
            SeverityClass::Soft,
            max_period_off::check,
        ),
        descriptor(
            "max-consecutive-off",
            "Max consecutive Off days",
            SeverityClass::Soft,
            max_consecutive_off::check,
        ),
        descriptor(
            "gradual-shift-progression",
            "Gradual shift progression",
            SeverityClass::Soft,
            gradual_shift_progression::check,
        ),
        descriptor(
            "max-same-shift-consecutive",
            "Max identical shift streak",
            SeverityClass::Soft,
            max_same_shift_consecutive::check,
        ),
        descriptor(
            "rest-clustering",
            "Isolated rest day",
            SeverityClass::Soft,
            rest_clustering::check,
        ),
        descriptor(
            "post-rest-day-shift",
            "Night shift after rest",
            SeverityClass::Soft,
            post_rest_day_shift::check,
        ),
        descriptor(
            "weekend-fairness",
            "Weekend workload fairness",
            SeverityClass::Soft,
            weekend_fairness::check,
        ),
        descriptor(
            "shift-continuity",
            "Shift-type continuity",
            SeverityClass::Soft,
            shift_continuity::check,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn registry_has_seven_hard_and_ten_soft() {
        let entries = registry();
        assert_eq!(entries.len(), 17);
        assert_eq!(
            entries.iter().filter(|e| e.class == SeverityClass::Hard).count(),
            7
        );
        assert_eq!(
            entries.iter().filter(|e| e.class == SeverityClass::Soft).count(),
            10
        );
    }

    #[test]
    fn ids_are_unique() {
        let entries = registry();
        let mut ids: Vec<_> = entries.iter().map(|e| e.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), entries.len());
    }

    #[test]
    fn hard_entries_have_no_tier_soft_entries_do() {
        let entries = registry();
        for entry in &entries {
            match entry.class {
                SeverityClass::Hard => assert!(entry.tier.is_none(), "{} should have no tier", entry.id),
                SeverityClass::Soft => assert!(entry.tier.is_some(), "{} should have a tier", entry.id),
            }
        }
    }
}
