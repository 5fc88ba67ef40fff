//! Serde types mirroring the external optimizer's wire contract
//! and the pure validators/migrations that go with them.
//! `feasibility-service` is the only crate that actually makes the HTTP
//! calls; these types just give both sides a shared, typed shape.

use crate::model::{ConstraintConfig, Schedule, ShiftAssignment, Staff, StaffId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub staff: Vec<Staff>,
    pub start_date: NaiveDate,
    pub constraints: ConstraintConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period_end: Option<Vec<ShiftAssignment>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked_assignments: Option<Vec<ShiftAssignment>>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OptimizerErrorCode {
    Infeasible,
    Timeout,
    InvalidInput,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptimizerDiagnosis {
    #[serde(default)]
    pub conflicting_constraints: Vec<String>,
    #[serde(default)]
    pub conflicting_inputs: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OptimizerError {
    pub code: OptimizerErrorCode,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diagnosis: Option<OptimizerDiagnosis>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GeneratedSchedule {
    pub assignments: Vec<ShiftAssignment>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffJuhuDay {
    pub staff_id: StaffId,
    pub juhu_day: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GenerateResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<GeneratedSchedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub staff_juhu_days: Option<Vec<StaffJuhuDay>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<OptimizerError>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityPrecheckRequest {
    pub staff: Vec<Staff>,
    pub start_date: NaiveDate,
    pub constraints: ConstraintConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period_end: Option<Vec<ShiftAssignment>>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrecheckAnalysis {
    pub staff_count: u32,
    pub weekday_min_staff: u32,
    pub weekend_min_staff: u32,
    pub off_days_required: u32,
    pub weekly_work_hours: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FeasibilityPrecheckResponse {
    pub feasible: bool,
    pub reasons: Vec<String>,
    pub analysis: PrecheckAnalysis,
}

/// Builds the `analysis` block a `/check-feasibility` caller expects,
/// from the same inputs the engine itself would evaluate against.
pub fn precheck_analysis(config: &ConstraintConfig, staff_count: usize) -> PrecheckAnalysis {
    PrecheckAnalysis {
        staff_count: staff_count as u32,
        weekday_min_staff: config.weekday_staffing.day.min
            + config.weekday_staffing.evening.min
            + config.weekday_staffing.night.min,
        weekend_min_staff: config.weekend_staffing.day.min
            + config.weekend_staffing.evening.min
            + config.weekend_staffing.night.min,
        off_days_required: config.required_off_days_per_week(),
        weekly_work_hours: config.weekly_work_hours,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportBundle {
    pub version: u32,
    pub exported_at: DateTime<Utc>,
    pub staff: Vec<Staff>,
    pub schedule: Schedule,
    pub config: ConstraintConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_period_end: Option<Vec<ShiftAssignment>>,
}

/// Checks presence of the four required top-level keys without fully
/// deserializing into typed fields — checks "validates
/// presence of `version, staff, schedule, config`".
pub fn validate_import_bundle(value: &serde_json::Value) -> Result<(), String> {
    let object = value
        .as_object()
        .ok_or_else(|| "import bundle must be a JSON object".to_string())?;
    for key in ["version", "staff", "schedule", "config"] {
        if !object.contains_key(key) {
            return Err(format!("import bundle is missing required key `{key}`"));
        }
    }
    Ok(())
}

/// Deep-merges a stored config (as raw JSON, since it may predate the
/// current schema) over the current defaults: keys absent in storage
/// receive defaults, keys absent in defaults are preserved. Callers
/// bump `schema_version` and strip obsolete fields separately when a
/// breaking change is involved.
pub fn migrate_config(
    stored: serde_json::Value,
    defaults: &ConstraintConfig,
) -> Result<ConstraintConfig, serde_json::Error> {
    let mut merged = serde_json::to_value(defaults)?;
    deep_merge(&mut merged, stored);
    serde_json::from_value(merged)
}

fn deep_merge(base: &mut serde_json::Value, overlay: serde_json::Value) {
    match (base, overlay) {
        (serde_json::Value::Object(base_map), serde_json::Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(&key) {
                    Some(base_value) => deep_merge(base_value, overlay_value),
                    None => {
                        base_map.insert(key, overlay_value);
                    }
                }
            }
        }
        (base_slot, overlay_value) => {
            *base_slot = overlay_value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn import_bundle_requires_all_four_keys() {
        let value = json!({"version": 1, "staff": [], "schedule": {}});
        assert!(validate_import_bundle(&value).is_err());

        let complete = json!({"version": 1, "staff": [], "schedule": {}, "config": {}});
        assert!(validate_import_bundle(&complete).is_ok());
    }

    #[test]
    fn migrate_config_preserves_defaults_not_present_in_storage() {
        let defaults = crate::config_defaults::default_config();
        let stored = json!({ "weeklyWorkHours": 32 });
        let merged = migrate_config(stored, &defaults).unwrap();
        assert_eq!(merged.weekly_work_hours, 32);
        assert_eq!(merged.monthly_nights_required, defaults.monthly_nights_required);
    }
}
