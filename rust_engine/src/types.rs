use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gravidity {
    Nulligravid,
    PriorPregnancy,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")] // Match JS naming convention
pub struct PatientInputs {
    pub age: f64,         // years, clinically 20-45
    pub amh: f64,         // ng/mL, clinically 0.01-15
    pub gravidity: Gravidity,
    pub time_horizon: u32, // months of trying, clinically 1-24
}

impl Default for PatientInputs {
    fn default() -> Self {
        PatientInputs {
            age: 35.0,
            amh: 2.0,
            gravidity: Gravidity::Nulligravid,
            time_horizon: 12,
        }
    }
}

/// Oocyte yield estimator used by the IVF pathway.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum OocyteModel {
    /// Mean and quartiles from AMH x age retrieval strata.
    #[default]
    ClinicalStrata,
    /// Earlier closed-form estimate: ln(oocytes) = a - b*age + c*amh.
    LogLinear,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct EngineOptions {
    pub oocyte_model: OocyteModel,
}

/// Interquartile range of a derived quantity.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Iqr {
    pub lower: f64,
    pub upper: f64,
}

/// Trisomy 21 odds expressed as "1 in N".
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Trisomy21Risk {
    pub first_trimester: u32,  // 12 weeks
    pub second_trimester: u32, // 16 weeks
    pub at_term: u32,          // live birth
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SpontaneousResults {
    pub fecundability: f64,
    pub cumulative_pregnancy: f64,
    pub miscarriage_rate: f64,
    pub ongoing_pregnancy: f64,
    pub aneuploidy_risk: f64,
    pub trisomy21: Trisomy21Risk,
    pub healthy_baby: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IvfResults {
    pub oocyte_model: OocyteModel,
    pub cycle_cancellation_risk: f64,
    pub oocytes: f64,
    pub oocytes_iqr: Option<Iqr>,
    pub mature_oocytes: f64,
    pub fertilized: f64,
    pub blastocysts: f64,
    pub euploid_blasts: f64,
    pub euploid_blasts_iqr: Option<Iqr>,
    pub p_at_least_one_euploid: f64,
    pub live_birth_per_euploid: f64,
    pub expected_live_births: f64,
    pub healthy_baby_conditional: f64,
    pub healthy_baby: f64,
    pub healthy_baby_iqr: Option<Iqr>,
    pub cycles_needed_for_one_euploid: Option<f64>,
}

/// Age-matched AMH reference row (ng/mL).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AmhPercentileRow {
    pub age: u32,
    pub median: f64,
    pub p25: f64,
    pub p75: f64,
    pub percent_dor: f64, // share with diminished ovarian reserve, in %
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "camelCase")]
pub enum AmhPercentileBand {
    BelowP25,
    P25ToMedian,
    MedianToP75,
    AboveP75,
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AmhPercentileSummary {
    pub row: AmhPercentileRow,
    pub band: AmhPercentileBand,
    pub label: &'static str,
    pub marker_position: f64,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ComparisonVerdict {
    IvfFavored,
    SpontaneousFavored,
    Comparable,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OutcomeComparison {
    pub time_horizon: u32,
    pub absolute_diff: f64,
    pub relative_diff: f64,
    pub classification: ComparisonVerdict,
    pub summary: &'static str,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FertilityReport {
    pub inputs: PatientInputs,
    pub options: EngineOptions,
    pub spontaneous: SpontaneousResults,
    pub ivf: IvfResults,
    pub amh_percentile: Option<AmhPercentileSummary>,
    pub comparison: OutcomeComparison,
    pub warnings: Vec<String>,
}

/// Request envelope for host interfaces (wasm, native).
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReportRequest {
    pub inputs: PatientInputs,
    #[serde(default)]
    pub options: EngineOptions,
}
