use crate::ivf::ivf_pathway;
use crate::spontaneous::spontaneous_pathway;
use crate::types::{EngineOptions, PatientInputs};
use crate::{validation, EngineError, Result};
#[cfg(not(target_arch = "wasm32"))]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AgeCurvePoint {
    pub age: u32,
    pub spontaneous_healthy_baby: f64,
    pub ivf_healthy_baby: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HorizonPoint {
    pub month: u32,
    pub cumulative_pregnancy: f64,
    pub healthy_baby: f64,
}

/// Both pathways at each age in `ages`, with AMH, gravidity and time horizon
/// taken from `base`.
pub fn age_curve(base: &PatientInputs, ages: &[u32], options: &EngineOptions) -> Result<Vec<AgeCurvePoint>> {
    ensure_valid(base)?;

    let points = execute_sweep(ages, |&age| {
        let inputs = PatientInputs { age: f64::from(age), ..*base };
        AgeCurvePoint {
            age,
            spontaneous_healthy_baby: spontaneous_pathway(&inputs).healthy_baby,
            ivf_healthy_baby: ivf_pathway(&inputs, options).healthy_baby,
        }
    });

    log::debug!("age curve: {} points", points.len());
    Ok(points)
}

/// Spontaneous outcome for every month from 1 to `months`.
pub fn horizon_curve(base: &PatientInputs, months: u32) -> Result<Vec<HorizonPoint>> {
    ensure_valid(base)?;

    let steps: Vec<u32> = (1..=months).collect();
    let points = execute_sweep(&steps, |&month| {
        let inputs = PatientInputs { time_horizon: month, ..*base };
        let spontaneous = spontaneous_pathway(&inputs);
        HorizonPoint {
            month,
            cumulative_pregnancy: spontaneous.cumulative_pregnancy,
            healthy_baby: spontaneous.healthy_baby,
        }
    });

    log::debug!("horizon curve: {} points", points.len());
    Ok(points)
}

fn ensure_valid(base: &PatientInputs) -> Result<()> {
    let errors = validation::validate(base);
    if errors.is_empty() {
        Ok(())
    } else {
        Err(EngineError::InvalidInput(errors))
    }
}

// Order of the output matches the order of `items` on both targets.
#[cfg(not(target_arch = "wasm32"))]
fn execute_sweep<T, R, F>(items: &[T], evaluate: F) -> Vec<R>
where
    T: Sync,
    R: Send,
    F: Fn(&T) -> R + Sync + Send,
{
    items.par_iter().map(evaluate).collect()
}

#[cfg(target_arch = "wasm32")]
fn execute_sweep<T, R, F>(items: &[T], evaluate: F) -> Vec<R>
where
    F: Fn(&T) -> R,
{
    items.iter().map(evaluate).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ivf::calculate_ivf_with;
    use crate::spontaneous::calculate_spontaneous;
    use crate::types::Gravidity;

    fn create_mock_input() -> PatientInputs {
        PatientInputs {
            age: 35.0,
            amh: 2.0,
            gravidity: Gravidity::Nulligravid,
            time_horizon: 12,
        }
    }

    #[test]
    fn test_age_curve_matches_single_runs() {
        let base = create_mock_input();
        let ages: Vec<u32> = (25..=45).collect();
        let curve = age_curve(&base, &ages, &EngineOptions::default()).unwrap();

        assert_eq!(curve.len(), ages.len());
        for (point, &age) in curve.iter().zip(&ages) {
            assert_eq!(point.age, age);
            let inputs = PatientInputs { age: f64::from(age), ..base };
            assert_eq!(point.spontaneous_healthy_baby, calculate_spontaneous(&inputs).unwrap().healthy_baby);
            assert_eq!(point.ivf_healthy_baby, calculate_ivf_with(&inputs, &EngineOptions::default()).unwrap().healthy_baby);
        }
    }

    #[test]
    fn test_age_curve_declines_with_age() {
        let curve = age_curve(&create_mock_input(), &[30, 45], &EngineOptions::default()).unwrap();
        assert!(curve[1].spontaneous_healthy_baby < curve[0].spontaneous_healthy_baby);
        assert!(curve[1].ivf_healthy_baby < curve[0].ivf_healthy_baby);
    }

    #[test]
    fn test_horizon_curve_is_non_decreasing() {
        let curve = horizon_curve(&create_mock_input(), 24).unwrap();

        assert_eq!(curve.len(), 24);
        assert_eq!(curve[0].month, 1);
        assert!((curve[0].cumulative_pregnancy - 0.113).abs() < 1e-12);
        assert!((curve[11].healthy_baby - 0.6181).abs() < 1e-4);
        for pair in curve.windows(2) {
            assert!(pair[1].cumulative_pregnancy >= pair[0].cumulative_pregnancy);
        }
    }

    #[test]
    fn test_empty_inputs_give_empty_curves() {
        assert!(horizon_curve(&create_mock_input(), 0).unwrap().is_empty());
        assert!(age_curve(&create_mock_input(), &[], &EngineOptions::default()).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_base_is_rejected() {
        let base = PatientInputs { amh: f64::NAN, ..create_mock_input() };
        assert!(matches!(horizon_curve(&base, 12), Err(EngineError::InvalidInput(_))));
        assert!(matches!(age_curve(&base, &[30], &EngineOptions::default()), Err(EngineError::InvalidInput(_))));
    }
}
