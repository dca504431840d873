use crate::lookup::{floor_key, nearest_key, resolve_band, single_year, Band, Upper};
use crate::types::{AmhPercentileRow, Gravidity, Trisomy21Risk};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GravidityRates {
    pub nulligravid: f64,
    pub prior_pregnancy: f64,
}

impl GravidityRates {
    fn get(&self, gravidity: Gravidity) -> f64 {
        match gravidity {
            Gravidity::Nulligravid => self.nulligravid,
            Gravidity::PriorPregnancy => self.prior_pregnancy,
        }
    }
}

const fn rates(nulligravid: f64, prior_pregnancy: f64) -> GravidityRates {
    GravidityRates { nulligravid, prior_pregnancy }
}

// --- Spontaneous pathway ---

// Steiner 2016
pub const FECUNDABILITY_DATA: &[(u32, GravidityRates)] = &[
    (30, rates(0.173, 0.234)),
    (32, rates(0.188, 0.232)),
    (34, rates(0.113, 0.222)),
    (36, rates(0.120, 0.160)),
    (38, rates(0.052, 0.171)),
    (40, rates(0.029, 0.098)),
    (42, rates(0.032, 0.089)),
];

// Magnus 2019; nulligravid = nulliparous, prior pregnancy = parous
pub const MISCARRIAGE_DATA: &[(u32, GravidityRates)] = &[
    (20, rates(0.10, 0.05)),
    (25, rates(0.10, 0.05)),
    (30, rates(0.12, 0.06)),
    (35, rates(0.18, 0.09)),
    (40, rates(0.34, 0.17)),
    (45, rates(0.53, 0.53)),
];

// ACOG 2020
pub const ANEUPLOIDY_DATA: &[(u32, f64)] = &[
    (20, 0.00819672),
    (25, 0.00840336),
    (30, 0.00909091),
    (35, 0.01190476),
    (40, 0.025),
    (41, 0.025),
    (42, 0.025),
    (43, 0.025),
    (44, 0.025),
    (45, 0.025),
];

const fn t21(first_trimester: u32, second_trimester: u32, at_term: u32) -> Trisomy21Risk {
    Trisomy21Risk { first_trimester, second_trimester, at_term }
}

// "1 in N" at 12 weeks, 16 weeks and term (Snijders 1999)
pub const TRISOMY21_DATA: &[(u32, Trisomy21Risk)] = &[
    (20, t21(1068, 1200, 1527)),
    (25, t21(946, 1062, 1352)),
    (30, t21(626, 703, 895)),
    (31, t21(543, 610, 776)),
    (32, t21(461, 518, 659)),
    (33, t21(383, 430, 547)),
    (34, t21(312, 350, 446)),
    (35, t21(249, 280, 356)),
    (36, t21(196, 220, 280)),
    (37, t21(152, 171, 218)),
    (38, t21(117, 131, 167)),
    (39, t21(89, 100, 128)),
    (40, t21(68, 76, 97)),
    (41, t21(51, 57, 73)),
    (42, t21(38, 43, 55)),
    (43, t21(29, 32, 41)),
    (44, t21(21, 24, 30)),
    (45, t21(16, 18, 23)),
];

pub fn lookup_fecundability(age: f64, gravidity: Gravidity) -> f64 {
    floor_key(FECUNDABILITY_DATA, age).get(gravidity)
}

pub fn lookup_miscarriage(age: f64, gravidity: Gravidity) -> f64 {
    floor_key(MISCARRIAGE_DATA, age).get(gravidity)
}

pub fn lookup_aneuploidy(age: f64) -> f64 {
    *floor_key(ANEUPLOIDY_DATA, age)
}

pub fn lookup_trisomy21(age: f64) -> Trisomy21Risk {
    *nearest_key(TRISOMY21_DATA, age)
}

// --- IVF pathway ---

// Romanski 2022
pub const BLASTULATION_DATA: &[(u32, f64)] = &[
    (30, 0.667),
    (31, 0.700),
    (32, 0.707),
    (33, 0.667),
    (34, 0.667),
    (35, 0.703),
    (36, 0.667),
    (37, 0.667),
    (38, 0.667),
    (39, 0.667),
    (40, 0.667),
    (41, 0.600),
    (42, 0.547),
    (43, 0.571),
    (44, 0.429),
];
pub const BLASTULATION_FALLBACK_AGE: u32 = 30;

// Franasiak 2014
pub const EUPLOIDY_DATA: &[(u32, f64)] = &[
    (22, 0.556),
    (23, 0.592),
    (24, 0.722),
    (25, 0.556),
    (26, 0.754),
    (27, 0.729),
    (28, 0.773),
    (29, 0.793),
    (30, 0.768),
    (31, 0.690),
    (32, 0.689),
    (33, 0.690),
    (34, 0.687),
    (35, 0.655),
    (36, 0.645),
    (37, 0.574),
    (38, 0.521),
    (39, 0.471),
    (40, 0.418),
    (41, 0.311),
    (42, 0.249),
    (43, 0.166),
    (44, 0.118),
    (45, 0.157),
];
pub const EUPLOIDY_FALLBACK_AGE: u32 = 35;

// Yan 2021, Linder 2025
pub const LIVE_BIRTH_PER_EUPLOID_DATA: &[Band<f64>] = &[
    Band { min: 0.0, upper: Upper::Inclusive(30.0), value: 0.668 },
    Band { min: 31.0, upper: Upper::Inclusive(35.0), value: 0.617 },
    Band { min: 36.0, upper: Upper::Inclusive(37.0), value: 0.558 },
    Band { min: 38.0, upper: Upper::Inclusive(40.0), value: 0.525 },
    Band { min: 41.0, upper: Upper::Inclusive(42.0), value: 0.489 },
    Band { min: 43.0, upper: Upper::Inclusive(44.0), value: 0.478 },
    Band { min: 45.0, upper: Upper::Unbounded, value: 0.434 },
];

const fn age_band<T>(min: f64, upper: Upper, value: T) -> Band<T> {
    Band { min, upper, value }
}

// Cycle cancellation before retrieval. AMH bands are published with
// inclusive upper edges; age bands are half-open.
const CANCEL_AMH_0_05: &[Band<f64>] = &[
    age_band(0.0, Upper::Exclusive(35.0), 0.089),
    age_band(35.0, Upper::Exclusive(38.0), 0.112),
    age_band(38.0, Upper::Exclusive(41.0), 0.158),
    age_band(41.0, Upper::Exclusive(43.0), 0.214),
    age_band(43.0, Upper::Unbounded, 0.262),
];
const CANCEL_AMH_05_1: &[Band<f64>] = &[
    age_band(0.0, Upper::Exclusive(35.0), 0.036),
    age_band(35.0, Upper::Exclusive(38.0), 0.045),
    age_band(38.0, Upper::Exclusive(41.0), 0.067),
    age_band(41.0, Upper::Exclusive(43.0), 0.098),
    age_band(43.0, Upper::Unbounded, 0.131),
];
const CANCEL_AMH_1_2: &[Band<f64>] = &[
    age_band(0.0, Upper::Exclusive(35.0), 0.011),
    age_band(35.0, Upper::Exclusive(38.0), 0.014),
    age_band(38.0, Upper::Exclusive(41.0), 0.022),
    age_band(41.0, Upper::Exclusive(43.0), 0.035),
    age_band(43.0, Upper::Unbounded, 0.051),
];
const CANCEL_AMH_2_UP: &[Band<f64>] = &[
    age_band(0.0, Upper::Exclusive(35.0), 0.005),
    age_band(35.0, Upper::Exclusive(38.0), 0.006),
    age_band(38.0, Upper::Exclusive(41.0), 0.010),
    age_band(41.0, Upper::Exclusive(43.0), 0.017),
    age_band(43.0, Upper::Unbounded, 0.026),
];

pub const CYCLE_CANCELLATION_DATA: &[Band<&[Band<f64>]>] = &[
    Band { min: 0.0, upper: Upper::Inclusive(0.5), value: CANCEL_AMH_0_05 },
    Band { min: 0.51, upper: Upper::Inclusive(1.0), value: CANCEL_AMH_05_1 },
    Band { min: 1.01, upper: Upper::Inclusive(2.0), value: CANCEL_AMH_1_2 },
    Band { min: 2.01, upper: Upper::Unbounded, value: CANCEL_AMH_2_UP },
];

// Reichman et al.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OocyteRetrieval {
    pub mean: f64,
    pub lower_quartile: f64,
    pub upper_quartile: f64,
}

const fn retrieval(mean: f64, lower_quartile: f64, upper_quartile: f64) -> OocyteRetrieval {
    OocyteRetrieval { mean, lower_quartile, upper_quartile }
}

const OOCYTES_AMH_0_05: &[Band<OocyteRetrieval>] = &[
    age_band(0.0, Upper::Exclusive(35.0), retrieval(6.1, 3.0, 8.0)),
    age_band(35.0, Upper::Exclusive(38.0), retrieval(5.4, 3.0, 7.0)),
    age_band(38.0, Upper::Exclusive(41.0), retrieval(4.6, 2.0, 6.0)),
    age_band(41.0, Upper::Unbounded, retrieval(3.8, 2.0, 5.0)),
];
const OOCYTES_AMH_05_1: &[Band<OocyteRetrieval>] = &[
    age_band(0.0, Upper::Exclusive(35.0), retrieval(9.8, 6.0, 13.0)),
    age_band(35.0, Upper::Exclusive(38.0), retrieval(8.9, 6.0, 12.0)),
    age_band(38.0, Upper::Exclusive(41.0), retrieval(7.7, 5.0, 10.0)),
    age_band(41.0, Upper::Unbounded, retrieval(6.2, 4.0, 8.0)),
];
const OOCYTES_AMH_1_2: &[Band<OocyteRetrieval>] = &[
    age_band(0.0, Upper::Exclusive(35.0), retrieval(12.9, 9.0, 16.0)),
    age_band(35.0, Upper::Exclusive(38.0), retrieval(11.5, 8.0, 14.0)),
    age_band(38.0, Upper::Exclusive(41.0), retrieval(10.1, 7.0, 13.0)),
    age_band(41.0, Upper::Unbounded, retrieval(8.3, 5.0, 11.0)),
];
const OOCYTES_AMH_2_3: &[Band<OocyteRetrieval>] = &[
    age_band(0.0, Upper::Exclusive(35.0), retrieval(16.2, 12.0, 20.0)),
    age_band(35.0, Upper::Exclusive(38.0), retrieval(14.6, 11.0, 18.0)),
    age_band(38.0, Upper::Exclusive(41.0), retrieval(12.8, 9.0, 16.0)),
    age_band(41.0, Upper::Unbounded, retrieval(10.4, 7.0, 13.0)),
];
const OOCYTES_AMH_3_UP: &[Band<OocyteRetrieval>] = &[
    age_band(0.0, Upper::Exclusive(35.0), retrieval(21.4, 15.0, 27.0)),
    age_band(35.0, Upper::Exclusive(38.0), retrieval(19.0, 14.0, 24.0)),
    age_band(38.0, Upper::Exclusive(41.0), retrieval(16.3, 11.0, 21.0)),
    age_band(41.0, Upper::Unbounded, retrieval(13.1, 9.0, 17.0)),
];

// Same AMH edge convention as the cancellation table: an AMH of exactly 2.0
// belongs to the 1-2 stratum.
pub const OOCYTE_RETRIEVAL_DATA: &[Band<&[Band<OocyteRetrieval>]>] = &[
    Band { min: 0.0, upper: Upper::Inclusive(0.5), value: OOCYTES_AMH_0_05 },
    Band { min: 0.51, upper: Upper::Inclusive(1.0), value: OOCYTES_AMH_05_1 },
    Band { min: 1.01, upper: Upper::Inclusive(2.0), value: OOCYTES_AMH_1_2 },
    Band { min: 2.01, upper: Upper::Inclusive(3.0), value: OOCYTES_AMH_2_3 },
    Band { min: 3.01, upper: Upper::Unbounded, value: OOCYTES_AMH_3_UP },
];

pub fn lookup_blastulation(age: f64) -> f64 {
    single_year(BLASTULATION_DATA, age, BLASTULATION_FALLBACK_AGE)
}

pub fn lookup_euploidy(age: f64) -> f64 {
    single_year(EUPLOIDY_DATA, age, EUPLOIDY_FALLBACK_AGE)
}

pub fn lookup_live_birth_per_euploid(age: f64) -> f64 {
    *resolve_band(LIVE_BIRTH_PER_EUPLOID_DATA, age)
}

pub fn lookup_cycle_cancellation_risk(age: f64, amh: f64) -> f64 {
    let by_age = resolve_band(CYCLE_CANCELLATION_DATA, amh);
    *resolve_band(by_age, age)
}

pub fn lookup_oocyte_retrieval(age: f64, amh: f64) -> OocyteRetrieval {
    let by_age = resolve_band(OOCYTE_RETRIEVAL_DATA, amh);
    *resolve_band(by_age, age)
}

// --- AMH reference ---

const fn amh_row(age: u32, median: f64, p25: f64, p75: f64, percent_dor: f64) -> (u32, AmhPercentileRow) {
    (age, AmhPercentileRow { age, median, p25, p75, percent_dor })
}

// Aslan 2025, n=22,920
pub const AMH_REFERENCE_DATA: &[(u32, AmhPercentileRow)] = &[
    amh_row(18, 3.8, 1.9, 7.0, 15.9),
    amh_row(19, 4.0, 2.3, 6.8, 11.7),
    amh_row(20, 4.2, 2.5, 6.7, 8.5),
    amh_row(21, 4.2, 2.6, 6.8, 8.2),
    amh_row(22, 4.1, 2.2, 6.4, 10.5),
    amh_row(23, 3.9, 2.1, 6.3, 11.2),
    amh_row(24, 3.6, 2.0, 6.1, 12.2),
    amh_row(25, 3.3, 1.9, 5.7, 13.5),
    amh_row(26, 3.4, 1.9, 6.0, 14.6),
    amh_row(27, 3.1, 1.7, 5.3, 16.2),
    amh_row(28, 2.8, 1.5, 4.9, 18.6),
    amh_row(29, 2.6, 1.3, 4.6, 23.2),
    amh_row(30, 2.5, 1.2, 4.3, 24.3),
    amh_row(31, 2.3, 1.1, 3.9, 27.3),
    amh_row(32, 2.0, 0.9, 3.8, 33.2),
    amh_row(33, 1.8, 0.8, 3.3, 36.7),
    amh_row(34, 1.7, 0.7, 3.3, 39.3),
    amh_row(35, 1.4, 0.5, 2.9, 45.7),
    amh_row(36, 1.1, 0.4, 2.3, 52.9),
    amh_row(37, 1.0, 0.3, 2.3, 55.8),
    amh_row(38, 0.7, 0.2, 1.7, 64.0),
    amh_row(39, 0.7, 0.2, 1.6, 66.0),
    amh_row(40, 0.5, 0.2, 1.3, 73.0),
    amh_row(41, 0.4, 0.1, 0.9, 82.0),
    amh_row(42, 0.3, 0.1, 0.8, 85.0),
    amh_row(43, 0.2, 0.1, 0.6, 89.0),
];

pub fn lookup_amh_reference(age: f64) -> AmhPercentileRow {
    *floor_key(AMH_REFERENCE_DATA, age)
}
