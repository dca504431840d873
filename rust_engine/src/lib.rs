pub mod types;
pub mod config;
pub mod core;
pub mod validation;
pub mod lookup;
pub mod tables;
pub mod spontaneous;
pub mod ivf;
pub mod percentile;
pub mod comparison;
pub mod sweep;
pub mod format;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use crate::types::{FertilityReport, ReportRequest};
use crate::validation::ValidationError;

pub use crate::comparison::compare_outcomes;
pub use crate::core::calculate_report;
pub use crate::ivf::{calculate_ivf, calculate_ivf_with};
pub use crate::percentile::{amh_percentile_label, classify_amh_percentile, lookup_amh_percentile};
pub use crate::spontaneous::calculate_spontaneous;
pub use crate::types::{EngineOptions, Gravidity, IvfResults, OocyteModel, PatientInputs, SpontaneousResults};

pub type Result<T> = std::result::Result<T, EngineError>;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("Invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}

// --- WASM INTERFACE ---
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen]
pub fn run_fertility_report(val: JsValue) -> std::result::Result<JsValue, JsValue> {
    console_error_panic_hook::set_once();

    // Parse Input
    let request: ReportRequest = serde_wasm_bindgen::from_value(val)
        .map_err(|e| JsValue::from_str(&format!("Invalid Input Structure: {}", e)))?;

    // Execute logic
    match core::calculate_report(&request.inputs, &request.options) {
        Ok(report) => Ok(serde_wasm_bindgen::to_value(&report)?),
        Err(e) => Err(JsValue::from_str(&e.to_string())),
    }
}

// --- NATIVE INTERFACE (for testing) ---
#[cfg(not(target_arch = "wasm32"))]
pub fn run_fertility_report_native(request: ReportRequest) -> Result<FertilityReport> {
    core::calculate_report(&request.inputs, &request.options)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn test_native_interface_from_json_request() {
        let request: ReportRequest = serde_json::from_str(
            r#"{"inputs": {"age": 35, "amh": 2.0, "gravidity": "nulligravid", "timeHorizon": 12}}"#,
        )
        .unwrap();
        assert_eq!(request.options.oocyte_model, OocyteModel::ClinicalStrata);

        let report = run_fertility_report_native(request).unwrap();
        assert!((report.ivf.healthy_baby - 0.6046).abs() < 1e-3, "got {}", report.ivf.healthy_baby);
    }

    #[test]
    fn test_native_interface_selects_log_linear() {
        let request: ReportRequest = serde_json::from_str(
            r#"{"inputs": {"age": 35, "amh": 2.0, "gravidity": "prior_pregnancy", "timeHorizon": 6},
                "options": {"oocyteModel": "logLinear"}}"#,
        )
        .unwrap();

        let report = run_fertility_report_native(request).unwrap();
        assert_eq!(report.ivf.oocyte_model, OocyteModel::LogLinear);
        assert!(report.ivf.oocytes_iqr.is_none());
    }

    #[test]
    fn test_invalid_input_message_lists_fields() {
        let request = ReportRequest {
            inputs: PatientInputs { age: f64::NAN, amh: -1.0, ..PatientInputs::default() },
            options: EngineOptions::default(),
        };

        let err = run_fertility_report_native(request).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Invalid input:"), "got {}", message);
        assert!(message.contains("age:") && message.contains("amh:"), "got {}", message);
    }
}
