use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use utoipa::ToSchema;
use uuid::Uuid;

pub type StaffId = Uuid;

/// One of the four shift states a roster cell can hold.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShiftType {
    Day,
    Evening,
    Night,
    Off,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
pub struct Staff {
    pub id: StaffId,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ShiftAssignment {
    pub staff_id: StaffId,
    pub date: NaiveDate,
    pub shift: ShiftType,
    #[serde(default)]
    pub locked: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    pub id: Uuid,
    pub name: String,
    pub start_date: NaiveDate,
    pub assignments: Vec<ShiftAssignment>,
    #[serde(default)]
    pub staff_juhu_days: Option<HashMap<StaffId, u8>>,
}

impl Schedule {
    /// First date not covered by this period (`start_date + 28`).
    pub fn end_date_exclusive(&self) -> NaiveDate {
        self.start_date + chrono::Duration::days(28)
    }

    pub fn juhu_day_for(&self, staff_id: StaffId) -> Option<u8> {
        self.staff_juhu_days.as_ref()?.get(&staff_id).copied()
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ShiftRange {
    pub min: u32,
    pub max: u32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct DailyStaffing {
    pub day: ShiftRange,
    pub evening: ShiftRange,
    pub night: ShiftRange,
}

impl DailyStaffing {
    pub fn range_for(&self, shift: ShiftType) -> Option<ShiftRange> {
        match shift {
            ShiftType::Day => Some(self.day),
            ShiftType::Evening => Some(self.evening),
            ShiftType::Night => Some(self.night),
            ShiftType::Off => None,
        }
    }
}

/// Stable machine identifier for one of the seven hard constraints.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum HardConstraintId {
    ShiftOrder,
    NightOffDay,
    ConsecutiveNight,
    WeeklyOff,
    Juhu,
    Staffing,
    MonthlyNight,
}

impl HardConstraintId {
    pub const ALL: [HardConstraintId; 7] = [
        HardConstraintId::ShiftOrder,
        HardConstraintId::NightOffDay,
        HardConstraintId::ConsecutiveNight,
        HardConstraintId::WeeklyOff,
        HardConstraintId::Juhu,
        HardConstraintId::Staffing,
        HardConstraintId::MonthlyNight,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HardConstraintId::ShiftOrder => "shift-order",
            HardConstraintId::NightOffDay => "night-off-day",
            HardConstraintId::ConsecutiveNight => "consecutive-night",
            HardConstraintId::WeeklyOff => "weekly-off",
            HardConstraintId::Juhu => "juhu",
            HardConstraintId::Staffing => "staffing",
            HardConstraintId::MonthlyNight => "monthly-night",
        }
    }
}

/// A user-facing severity override for a hard constraint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ConfigSeverity {
    Hard,
    Soft,
}

/// Whether `juhu`'s severity can be downgraded by `constraintSeverity`.
///
/// Korean labor law treats the weekly statutory rest day as immutable;
/// `Overridable` exists only for jurisdictions that don't.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum JurisdictionProfile {
    Default,
    Overridable,
}

impl Default for JurisdictionProfile {
    fn default() -> Self {
        JurisdictionProfile::Default
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
pub struct ToggleConfig {
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaxConsecutiveWorkConfig {
    pub enabled: bool,
    pub max_days: u32,
}

impl Default for MaxConsecutiveWorkConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_days: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NightBlockPolicyConfig {
    pub enabled: bool,
    pub min_block_size: u32,
}

impl Default for NightBlockPolicyConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_block_size: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaxPeriodOffConfig {
    pub enabled: bool,
    pub max_off: u32,
}

impl Default for MaxPeriodOffConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_off: 9,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MaxConsecutiveOffConfig {
    pub enabled: bool,
    pub max_days: u32,
}

impl Default for MaxConsecutiveOffConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_days: 2,
        }
    }
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, Default)]
pub struct SoftConstraintsConfig {
    #[serde(rename = "max-consecutive-work")]
    pub max_consecutive_work: MaxConsecutiveWorkConfig,
    #[serde(rename = "night-block-policy")]
    pub night_block_policy: NightBlockPolicyConfig,
    #[serde(rename = "max-period-off")]
    pub max_period_off: MaxPeriodOffConfig,
    #[serde(rename = "max-consecutive-off")]
    pub max_consecutive_off: MaxConsecutiveOffConfig,
    #[serde(rename = "gradual-shift-progression")]
    pub gradual_shift_progression: ToggleConfig,
    #[serde(rename = "max-same-shift-consecutive")]
    pub max_same_shift_consecutive: ToggleConfig,
    #[serde(rename = "rest-clustering")]
    pub rest_clustering: ToggleConfig,
    #[serde(rename = "post-rest-day-shift")]
    pub post_rest_day_shift: ToggleConfig,
    #[serde(rename = "weekend-fairness")]
    pub weekend_fairness: ToggleConfig,
    #[serde(rename = "shift-continuity")]
    pub shift_continuity: ToggleConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConstraintConfig {
    pub weekly_work_hours: u32,
    pub max_consecutive_nights: u32,
    pub monthly_nights_required: u32,
    pub weekday_staffing: DailyStaffing,
    pub weekend_staffing: DailyStaffing,
    pub enabled_constraints: HashMap<HardConstraintId, bool>,
    pub constraint_severity: HashMap<HardConstraintId, ConfigSeverity>,
    pub soft_constraints: SoftConstraintsConfig,
    #[serde(default)]
    pub jurisdiction_profile: JurisdictionProfile,
    #[serde(default = "current_schema_version")]
    pub schema_version: u32,
}

fn current_schema_version() -> u32 {
    1
}

impl ConstraintConfig {
    pub fn is_enabled(&self, id: HardConstraintId) -> bool {
        self.enabled_constraints.get(&id).copied().unwrap_or(true)
    }

    pub fn configured_severity(&self, id: HardConstraintId) -> ConfigSeverity {
        self.constraint_severity
            .get(&id)
            .copied()
            .unwrap_or(ConfigSeverity::Hard)
    }

    /// Minimum Off days required per week
    /// `7 - ceil(weeklyWorkHours / 8)`.
    pub fn required_off_days_per_week(&self) -> u32 {
        let work_days = (self.weekly_work_hours + 7) / 8; // ceil division
        7u32.saturating_sub(work_days)
    }

    /// `error` unless the user has downgraded this hard constraint to
    /// `soft` in `constraintSeverity`.
    pub fn effective_hard_severity(&self, id: HardConstraintId) -> Severity {
        match self.configured_severity(id) {
            ConfigSeverity::Hard => Severity::Error,
            ConfigSeverity::Soft => Severity::Warning,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ViolationContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_id: Option<StaffId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub staff_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dates: Option<Vec<NaiveDate>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub constraint_id: String,
    pub constraint_name: String,
    pub severity: Severity,
    pub message: String,
    pub context: ViolationContext,
}

impl Violation {
    pub fn new(
        constraint_id: impl Into<String>,
        constraint_name: impl Into<String>,
        severity: Severity,
        message: impl Into<String>,
        context: ViolationContext,
    ) -> Self {
        Self {
            constraint_id: constraint_id.into(),
            constraint_name: constraint_name.into(),
            severity,
            message: message.into(),
            context,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityResult {
    pub feasible: bool,
    pub violations: Vec<Violation>,
    pub checked_at: DateTime<Utc>,
}

impl FeasibilityResult {
    pub fn from_violations(violations: Vec<Violation>) -> Self {
        let feasible = !violations.iter().any(|v| v.severity == Severity::Error);
        Self {
            feasible,
            violations,
            checked_at: Utc::now(),
        }
    }
}
