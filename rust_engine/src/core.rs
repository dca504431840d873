use crate::comparison::compare_outcomes;
use crate::ivf::ivf_pathway;
use crate::percentile::amh_percentile_summary;
use crate::spontaneous::spontaneous_pathway;
use crate::types::{EngineOptions, FertilityReport, PatientInputs};
use crate::{validation, EngineError, Result};

pub fn calculate_report(inputs: &PatientInputs, options: &EngineOptions) -> Result<FertilityReport> {
    // 1. Validation
    let errors = validation::validate(inputs);
    if !errors.is_empty() {
        log::warn!("report rejected: {:?}", errors.iter().map(|e| &e.message).collect::<Vec<_>>());
        return Err(EngineError::InvalidInput(errors));
    }

    // 2. Advisories for values outside the published ranges
    let warnings: Vec<String> = validation::clinical_warnings(inputs)
        .into_iter()
        .map(|w| w.message)
        .collect();
    for warning in &warnings {
        log::warn!("{}", warning);
    }

    // 3. Pathways
    let spontaneous = spontaneous_pathway(inputs);
    let ivf = ivf_pathway(inputs, options);

    // 4. AMH context and comparison
    let amh_percentile = amh_percentile_summary(inputs.amh, inputs.age);
    let comparison = compare_outcomes(&spontaneous, &ivf, inputs.time_horizon);

    Ok(FertilityReport {
        inputs: *inputs,
        options: *options,
        spontaneous,
        ivf,
        amh_percentile,
        comparison,
        warnings,
    })
}

impl FertilityReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
