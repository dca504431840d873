use crate::config::{IVF_LAB, OOCYTE_LOG_LINEAR};
use crate::tables::{
    lookup_blastulation, lookup_cycle_cancellation_risk, lookup_euploidy, lookup_live_birth_per_euploid,
    lookup_oocyte_retrieval,
};
use crate::types::{EngineOptions, Iqr, IvfResults, OocyteModel, PatientInputs};
use crate::validation;
use crate::{EngineError, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OocyteEstimate {
    pub mean: f64,
    pub iqr: Option<Iqr>,
}

/// ln(oocytes) = intercept - age_coef * age + amh_coef * amh
pub fn log_linear_oocytes(age: f64, amh: f64) -> f64 {
    let m = &OOCYTE_LOG_LINEAR;
    (m.intercept - m.age_coefficient * age + m.amh_coefficient * amh).exp()
}

pub fn estimate_oocytes(age: f64, amh: f64, model: OocyteModel) -> OocyteEstimate {
    match model {
        OocyteModel::ClinicalStrata => {
            let stratum = lookup_oocyte_retrieval(age, amh);
            OocyteEstimate {
                mean: stratum.mean,
                iqr: Some(Iqr {
                    lower: stratum.lower_quartile,
                    upper: stratum.upper_quartile,
                }),
            }
        }
        OocyteModel::LogLinear => OocyteEstimate {
            mean: log_linear_oocytes(age, amh),
            iqr: None,
        },
    }
}

// Lab stages from retrieved oocytes to euploid blastocysts.
struct EmbryoCascade {
    mature_oocytes: f64,
    fertilized: f64,
    blastocysts: f64,
    euploid_blasts: f64,
    p_at_least_one_euploid: f64,
}

fn embryo_cascade(oocytes: f64, blast_rate: f64, euploidy_rate: f64) -> EmbryoCascade {
    let mature_oocytes = oocytes * IVF_LAB.maturation_rate;
    let fertilized = mature_oocytes * IVF_LAB.fertilization_rate;
    let blastocysts = fertilized * blast_rate;
    let euploid_blasts = blastocysts * euploidy_rate;
    // The expected blastocyst count stands in for the number of trials, so the
    // exponent is generally not an integer. This is an approximation.
    let p_at_least_one_euploid = 1.0 - (1.0 - euploidy_rate).powf(blastocysts);

    EmbryoCascade {
        mature_oocytes,
        fertilized,
        blastocysts,
        euploid_blasts,
        p_at_least_one_euploid,
    }
}

/// Pathway B with the default (clinical strata) oocyte estimator.
pub fn calculate_ivf(inputs: &PatientInputs) -> Result<IvfResults> {
    calculate_ivf_with(inputs, &EngineOptions::default())
}

/// Pathway B: one IVF cycle with PGT-A.
pub fn calculate_ivf_with(inputs: &PatientInputs, options: &EngineOptions) -> Result<IvfResults> {
    let errors = validation::validate(inputs);
    if !errors.is_empty() {
        log::warn!("ivf pathway rejected input: {} error(s)", errors.len());
        return Err(EngineError::InvalidInput(errors));
    }
    Ok(ivf_pathway(inputs, options))
}

// Inputs must already have passed `validation::validate`.
pub(crate) fn ivf_pathway(inputs: &PatientInputs, options: &EngineOptions) -> IvfResults {
    // 1. Risk of not reaching retrieval
    let cycle_cancellation_risk = lookup_cycle_cancellation_risk(inputs.age, inputs.amh);

    // 2. Oocyte yield
    let oocytes = estimate_oocytes(inputs.age, inputs.amh, options.oocyte_model);

    // 3.-7. Maturation, fertilization, blastulation, euploidy
    let blast_rate = lookup_blastulation(inputs.age);
    let euploidy_rate = lookup_euploidy(inputs.age);
    let cascade = embryo_cascade(oocytes.mean, blast_rate, euploidy_rate);

    // 8. Live birth per euploid transfer
    let live_birth_per_euploid = lookup_live_birth_per_euploid(inputs.age);

    // 9. Expected live births (informational)
    let expected_live_births = cascade.euploid_blasts * live_birth_per_euploid;

    // 10.-11. Healthy baby, without and with cancellation
    let retrieval_factor = 1.0 - cycle_cancellation_risk;
    let healthy_baby_conditional = cascade.p_at_least_one_euploid * live_birth_per_euploid;
    let healthy_baby = retrieval_factor * healthy_baby_conditional;

    // 12. Cycles to bank one euploid embryo
    let cycles_needed_for_one_euploid = if cascade.euploid_blasts > 0.0 && cascade.euploid_blasts < 1.0 {
        Some(1.0 / cascade.euploid_blasts)
    } else {
        None
    };

    // IQR propagation through the same chain
    let (euploid_blasts_iqr, healthy_baby_iqr) = match oocytes.iqr {
        Some(range) => {
            let low = embryo_cascade(range.lower, blast_rate, euploidy_rate);
            let high = embryo_cascade(range.upper, blast_rate, euploidy_rate);
            (
                Some(Iqr { lower: low.euploid_blasts, upper: high.euploid_blasts }),
                Some(Iqr {
                    lower: retrieval_factor * low.p_at_least_one_euploid * live_birth_per_euploid,
                    upper: retrieval_factor * high.p_at_least_one_euploid * live_birth_per_euploid,
                }),
            )
        }
        None => (None, None),
    };

    log::debug!(
        "ivf: age={} amh={} model={:?} oocytes={:.2} euploid={:.2} healthy_baby={:.4}",
        inputs.age, inputs.amh, options.oocyte_model, oocytes.mean, cascade.euploid_blasts, healthy_baby
    );

    IvfResults {
        oocyte_model: options.oocyte_model,
        cycle_cancellation_risk,
        oocytes: oocytes.mean,
        oocytes_iqr: oocytes.iqr,
        mature_oocytes: cascade.mature_oocytes,
        fertilized: cascade.fertilized,
        blastocysts: cascade.blastocysts,
        euploid_blasts: cascade.euploid_blasts,
        euploid_blasts_iqr,
        p_at_least_one_euploid: cascade.p_at_least_one_euploid,
        live_birth_per_euploid,
        expected_live_births,
        healthy_baby_conditional,
        healthy_baby,
        healthy_baby_iqr,
        cycles_needed_for_one_euploid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Gravidity;
    use proptest::prelude::*;

    fn create_mock_input() -> PatientInputs {
        PatientInputs {
            age: 35.0,
            amh: 2.0,
            gravidity: Gravidity::Nulligravid,
            time_horizon: 12,
        }
    }

    fn assert_close(actual: f64, expected: f64, tol: f64, what: &str) {
        assert!((actual - expected).abs() < tol, "{}: expected {}, got {}", what, expected, actual);
    }

    #[test]
    fn test_reference_scenario() {
        let result = calculate_ivf(&create_mock_input()).unwrap();

        assert_eq!(result.oocyte_model, OocyteModel::ClinicalStrata);
        assert_eq!(result.cycle_cancellation_risk, 0.014);
        assert_eq!(result.oocytes, 11.5);
        assert_eq!(result.oocytes_iqr, Some(Iqr { lower: 8.0, upper: 14.0 }));
        assert_close(result.mature_oocytes, 9.43, 1e-9, "mature");
        assert_close(result.fertilized, 6.7896, 1e-9, "fertilized");
        assert_close(result.blastocysts, 4.7731, 1e-4, "blastocysts");
        assert_close(result.euploid_blasts, 3.1264, 1e-4, "euploid");
        assert_close(result.p_at_least_one_euploid, 0.9938, 1e-4, "p>=1 euploid");
        assert_eq!(result.live_birth_per_euploid, 0.617);
        assert_close(result.expected_live_births, 1.9290, 1e-4, "expected live births");
        assert_close(result.healthy_baby_conditional, 0.6132, 1e-4, "conditional");
        assert_close(result.healthy_baby, 0.6046, 1e-4, "healthy baby");
        assert_eq!(result.cycles_needed_for_one_euploid, None);
    }

    #[test]
    fn test_iqr_brackets_point_estimate() {
        let result = calculate_ivf(&create_mock_input()).unwrap();

        let euploid = result.euploid_blasts_iqr.unwrap();
        assert_close(euploid.lower, 2.1749, 1e-4, "euploid lower");
        assert_close(euploid.upper, 3.8060, 1e-4, "euploid upper");

        let healthy = result.healthy_baby_iqr.unwrap();
        assert_close(healthy.lower, 0.5906, 1e-4, "healthy lower");
        assert_close(healthy.upper, 0.6071, 1e-4, "healthy upper");
        assert!(healthy.lower <= result.healthy_baby && result.healthy_baby <= healthy.upper);
    }

    #[test]
    fn test_log_linear_variant() {
        let options = EngineOptions { oocyte_model: OocyteModel::LogLinear };
        let result = calculate_ivf_with(&create_mock_input(), &options).unwrap();

        assert_eq!(result.oocyte_model, OocyteModel::LogLinear);
        assert_close(result.oocytes, 8.3981, 1e-4, "log-linear oocytes");
        assert_eq!(result.oocytes_iqr, None);
        assert_eq!(result.healthy_baby_iqr, None);
        // Cancellation is applied regardless of the estimator.
        assert_eq!(result.cycle_cancellation_risk, 0.014);
    }

    #[test]
    fn test_log_linear_formula() {
        assert_close(log_linear_oocytes(0.0, 0.0), 3.21f64.exp(), 1e-12, "intercept");
        assert!(log_linear_oocytes(40.0, 1.0) < log_linear_oocytes(30.0, 1.0));
        assert!(log_linear_oocytes(30.0, 4.0) > log_linear_oocytes(30.0, 1.0));
    }

    #[test]
    fn test_cycles_needed_for_poor_prognosis() {
        let input = PatientInputs { age: 43.0, amh: 0.3, ..create_mock_input() };
        let result = calculate_ivf(&input).unwrap();

        assert_eq!(result.oocytes, 3.8);
        assert!(result.euploid_blasts < 1.0);
        let cycles = result.cycles_needed_for_one_euploid.unwrap();
        assert_close(cycles, 4.7025, 1e-3, "cycles needed");
        assert_eq!(result.cycle_cancellation_risk, 0.262);
    }

    #[test]
    fn test_rejects_nan_amh() {
        let input = PatientInputs { amh: f64::NAN, ..create_mock_input() };
        assert!(matches!(calculate_ivf(&input), Err(EngineError::InvalidInput(_))));
    }

    #[test]
    fn test_repeated_calls_identical() {
        let input = create_mock_input();
        let first = calculate_ivf(&input).unwrap();
        let second = calculate_ivf(&input).unwrap();
        assert_eq!(first.healthy_baby.to_bits(), second.healthy_baby.to_bits());
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn prop_healthy_baby_is_probability(
            age in 20.0f64..=45.0,
            amh in 0.01f64..=15.0,
            log_linear in any::<bool>(),
        ) {
            let model = if log_linear { OocyteModel::LogLinear } else { OocyteModel::ClinicalStrata };
            let input = PatientInputs { age, amh, gravidity: Gravidity::Nulligravid, time_horizon: 12 };
            let result = calculate_ivf_with(&input, &EngineOptions { oocyte_model: model }).unwrap();

            for p in [
                result.cycle_cancellation_risk,
                result.p_at_least_one_euploid,
                result.live_birth_per_euploid,
                result.healthy_baby_conditional,
                result.healthy_baby,
            ] {
                prop_assert!((0.0..=1.0).contains(&p), "probability out of range: {}", p);
            }
            prop_assert!(result.healthy_baby <= result.healthy_baby_conditional);
            prop_assert_eq!(result.cycles_needed_for_one_euploid.is_some(), result.euploid_blasts < 1.0);
        }
    }
}
