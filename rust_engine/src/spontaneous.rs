use crate::tables::{lookup_aneuploidy, lookup_fecundability, lookup_miscarriage, lookup_trisomy21};
use crate::types::{PatientInputs, SpontaneousResults};
use crate::validation;
use crate::{EngineError, Result};

/// Probability of at least one conception in `months` independent cycles.
pub fn cumulative_pregnancy(fecundability: f64, months: u32) -> f64 {
    1.0 - (1.0 - fecundability).powf(f64::from(months))
}

/// Pathway A: natural conception over `time_horizon` months.
pub fn calculate_spontaneous(inputs: &PatientInputs) -> Result<SpontaneousResults> {
    let errors = validation::validate(inputs);
    if !errors.is_empty() {
        log::warn!("spontaneous pathway rejected input: {} error(s)", errors.len());
        return Err(EngineError::InvalidInput(errors));
    }
    Ok(spontaneous_pathway(inputs))
}

// Inputs must already have passed `validation::validate`.
pub(crate) fn spontaneous_pathway(inputs: &PatientInputs) -> SpontaneousResults {
    // 1. Monthly fecundability
    let fecundability = lookup_fecundability(inputs.age, inputs.gravidity);

    // 2. Cumulative pregnancy after N months
    let cumulative_pregnancy = cumulative_pregnancy(fecundability, inputs.time_horizon);

    // 3. Miscarriage
    let miscarriage_rate = lookup_miscarriage(inputs.age, inputs.gravidity);

    // 4. Ongoing pregnancy
    let ongoing_pregnancy = cumulative_pregnancy * (1.0 - miscarriage_rate);

    // 5. Aneuploidy at delivery
    let aneuploidy_risk = lookup_aneuploidy(inputs.age);

    // 6. Trisomy 21 odds (informational)
    let trisomy21 = lookup_trisomy21(inputs.age);

    // 7. Healthy baby
    let healthy_baby = ongoing_pregnancy * (1.0 - aneuploidy_risk);

    log::debug!(
        "spontaneous: age={} months={} fecundability={:.3} healthy_baby={:.4}",
        inputs.age, inputs.time_horizon, fecundability, healthy_baby
    );

    SpontaneousResults {
        fecundability,
        cumulative_pregnancy,
        miscarriage_rate,
        ongoing_pregnancy,
        aneuploidy_risk,
        trisomy21,
        healthy_baby,
    }
}
