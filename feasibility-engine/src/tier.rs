/// Soft-constraint priority class. The feasibility engine only ever emits
/// `warning`s for these; the tier exists so a downstream optimizer can
/// scale its penalty function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SoftTier {
    One,
    Two,
    Three,
}

impl SoftTier {
    pub fn weight(self) -> u32 {
        match self {
            SoftTier::One => 1000,
            SoftTier::Two => 100,
            SoftTier::Three => 10,
        }
    }
}

pub fn tier_for(soft_id: &str) -> SoftTier {
    match soft_id {
        "max-consecutive-work" | "night-block-policy" | "max-period-off" | "max-consecutive-off" => {
            SoftTier::One
        }
        "gradual-shift-progression" | "max-same-shift-consecutive" | "rest-clustering" | "post-rest-day-shift" => {
            SoftTier::Two
        }
        "weekend-fairness" | "shift-continuity" => SoftTier::Three,
        _ => SoftTier::Three,
    }
}
