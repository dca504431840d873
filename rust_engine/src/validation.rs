use crate::config::CLINICAL_BOUNDS;
use crate::types::PatientInputs;
use serde::Serialize;
use std::fmt;

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    pub field_id: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field_id, self.message)
    }
}

/// Hard checks. The lookup tables clamp ordered values, so anything that is
/// not a finite, non-negative number is rejected here.
pub fn validate(input: &PatientInputs) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut check = |condition: bool, field: &str, msg: &str| {
        if condition {
            errors.push(ValidationError {
                field_id: field.to_string(),
                message: msg.to_string(),
            });
        }
    };

    // 1. Age
    check(!input.age.is_finite(), "age", "Age must be a finite number.");
    check(input.age < 0.0, "age", "Age must not be negative.");

    // 2. AMH
    check(!input.amh.is_finite(), "amh", "AMH must be a finite number.");
    check(input.amh < 0.0, "amh", "AMH must not be negative.");

    errors
}

/// Soft checks against the ranges the published data covers. These never
/// block a calculation.
pub fn clinical_warnings(input: &PatientInputs) -> Vec<ValidationError> {
    let mut warnings = Vec::new();

    let mut check = |condition: bool, field: &str, msg: String| {
        if condition {
            warnings.push(ValidationError {
                field_id: field.to_string(),
                message: msg,
            });
        }
    };

    let b = &CLINICAL_BOUNDS;
    check(
        input.age < b.min_age || input.age > b.max_age,
        "age",
        format!("Age {} is outside the supported range ({}-{}); nearest published band used.", input.age, b.min_age, b.max_age),
    );
    check(
        input.amh < b.min_amh || input.amh > b.max_amh,
        "amh",
        format!("AMH {} ng/mL is outside the supported range ({}-{}).", input.amh, b.min_amh, b.max_amh),
    );
    check(
        input.time_horizon < b.min_time_horizon || input.time_horizon > b.max_time_horizon,
        "timeHorizon",
        format!("Time horizon of {} months is outside the supported range ({}-{}).", input.time_horizon, b.min_time_horizon, b.max_time_horizon),
    );

    warnings
}
