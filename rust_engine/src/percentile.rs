use crate::config::{get_percentile_band_label, AMH_REFERENCE, PERCENTILE_NOT_AVAILABLE};
use crate::tables::lookup_amh_reference;
use crate::types::{AmhPercentileBand, AmhPercentileRow, AmhPercentileSummary};

/// Reference row for the nearest whole year of age, clamped to the published
/// 18-43 range. `None` only when the age is not a number.
pub fn lookup_amh_percentile(age: f64) -> Option<AmhPercentileRow> {
    if age.is_nan() {
        return None;
    }
    let clamped = age
        .round()
        .clamp(f64::from(AMH_REFERENCE.min_age), f64::from(AMH_REFERENCE.max_age));
    Some(lookup_amh_reference(clamped))
}

pub fn percentile_band(amh: f64, row: &AmhPercentileRow) -> AmhPercentileBand {
    if amh < row.p25 {
        AmhPercentileBand::BelowP25
    } else if amh <= row.median {
        AmhPercentileBand::P25ToMedian
    } else if amh <= row.p75 {
        AmhPercentileBand::MedianToP75
    } else {
        AmhPercentileBand::AboveP75
    }
}

pub fn classify_amh_percentile(amh: f64, age: f64) -> Option<AmhPercentileBand> {
    lookup_amh_percentile(age).map(|row| percentile_band(amh, &row))
}

/// Display label for [`classify_amh_percentile`], "N/A" without reference data.
pub fn amh_percentile_label(amh: f64, age: f64) -> &'static str {
    match classify_amh_percentile(amh, age) {
        Some(band) => get_percentile_band_label(band),
        None => PERCENTILE_NOT_AVAILABLE,
    }
}

/// Position of an AMH value on a 0-100 bar where p25, median and p75 sit at
/// 25, 50 and 75. The top segment runs to twice the p75 value.
pub fn amh_marker_position(amh: f64, row: &AmhPercentileRow) -> f64 {
    if amh <= 0.0 {
        return 0.0;
    }

    let segment = |value: f64, from: f64, to: f64, base: f64| {
        if to > from {
            base + (value - from) / (to - from) * 25.0
        } else {
            base + 25.0
        }
    };

    let position = if amh < row.p25 {
        segment(amh, 0.0, row.p25, 0.0)
    } else if amh <= row.median {
        segment(amh, row.p25, row.median, 25.0)
    } else if amh <= row.p75 {
        segment(amh, row.median, row.p75, 50.0)
    } else {
        let assumed_max = row.p75 * AMH_REFERENCE.assumed_max_over_p75;
        segment(amh, row.p75, assumed_max, 75.0)
    };

    position.clamp(0.0, 100.0)
}

pub fn amh_percentile_summary(amh: f64, age: f64) -> Option<AmhPercentileSummary> {
    let row = lookup_amh_percentile(age)?;
    let band = percentile_band(amh, &row);
    Some(AmhPercentileSummary {
        row,
        band,
        label: get_percentile_band_label(band),
        marker_position: amh_marker_position(amh, &row),
    })
}
