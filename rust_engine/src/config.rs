use crate::types::{AmhPercentileBand, ComparisonVerdict};

pub struct IvfLabConfig {
    pub maturation_rate: f64,   // MII
    pub fertilization_rate: f64, // 2PN
}

pub const IVF_LAB: IvfLabConfig = IvfLabConfig {
    maturation_rate: 0.82,
    fertilization_rate: 0.72,
};

/// La Marca 2012, model 1.
pub struct LogLinearOocyteModel {
    pub intercept: f64,
    pub age_coefficient: f64,
    pub amh_coefficient: f64,
}

pub const OOCYTE_LOG_LINEAR: LogLinearOocyteModel = LogLinearOocyteModel {
    intercept: 3.21,
    age_coefficient: 0.036,
    amh_coefficient: 0.089,
};

pub struct ComparisonConfig {
    pub material_difference: f64,
}

pub const COMPARISON: ComparisonConfig = ComparisonConfig {
    material_difference: 0.05,
};

pub struct AmhReferenceConfig {
    pub min_age: u32,
    pub max_age: u32,
    pub assumed_max_over_p75: f64,
}

pub const AMH_REFERENCE: AmhReferenceConfig = AmhReferenceConfig {
    min_age: 18,
    max_age: 43,
    assumed_max_over_p75: 2.0,
};

pub struct ClinicalBounds {
    pub min_age: f64,
    pub max_age: f64,
    pub min_amh: f64,
    pub max_amh: f64,
    pub min_time_horizon: u32,
    pub max_time_horizon: u32,
}

// Ranges the input form offers. Outside them results are still computed.
pub const CLINICAL_BOUNDS: ClinicalBounds = ClinicalBounds {
    min_age: 20.0,
    max_age: 45.0,
    min_amh: 0.01,
    max_amh: 15.0,
    min_time_horizon: 1,
    max_time_horizon: 24,
};

pub fn get_percentile_band_label(band: AmhPercentileBand) -> &'static str {
    match band {
        AmhPercentileBand::BelowP25 => "<25th",
        AmhPercentileBand::P25ToMedian => "25th-50th",
        AmhPercentileBand::MedianToP75 => "50th-75th",
        AmhPercentileBand::AboveP75 => ">75th",
    }
}

pub const PERCENTILE_NOT_AVAILABLE: &str = "N/A";

pub fn get_comparison_text(verdict: ComparisonVerdict) -> &'static str {
    match verdict {
        ComparisonVerdict::IvfFavored => {
            "IVF + PGT-A shows meaningfully higher success probability for this patient profile."
        }
        ComparisonVerdict::SpontaneousFavored => {
            "Spontaneous conception may be the preferred approach for this patient profile."
        }
        ComparisonVerdict::Comparable => {
            "Both pathways show similar success probabilities for this patient profile."
        }
    }
}
