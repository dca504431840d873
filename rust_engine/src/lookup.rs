// Tables must be non-empty and sorted ascending.

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Upper {
    Inclusive(f64),
    Exclusive(f64),
    Unbounded,
}

impl Upper {
    fn admits(&self, value: f64) -> bool {
        match *self {
            Upper::Inclusive(max) => value <= max,
            Upper::Exclusive(max) => value < max,
            Upper::Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band<T> {
    pub min: f64,
    pub upper: Upper,
    pub value: T,
}

impl<T> Band<T> {
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && self.upper.admits(value)
    }
}

pub fn floor_key<T>(rows: &[(u32, T)], value: f64) -> &T {
    let mut selected = &rows[0].1;
    for (key, row) in rows {
        if value >= f64::from(*key) {
            selected = row;
        }
    }
    selected
}

// Ties keep the lower key.
pub fn nearest_key<T>(rows: &[(u32, T)], value: f64) -> &T {
    let mut best = &rows[0];
    for entry in rows.iter().skip(1) {
        if (f64::from(entry.0) - value).abs() < (f64::from(best.0) - value).abs() {
            best = entry;
        }
    }
    &best.1
}

/// First band whose upper edge admits the value.
///
/// Lower edges are not consulted, so values between a published `[.., 2.0]`
/// and `[2.01, ..]` band land in the higher one, and values below the first
/// band clamp to it.
pub fn resolve_band<T>(bands: &[Band<T>], value: f64) -> &T {
    match bands.iter().find(|band| band.upper.admits(value)) {
        Some(band) => &band.value,
        None => &bands[bands.len() - 1].value,
    }
}

/// Single-year table with a fixed fallback row.
///
/// Values at or beyond either end clamp to the end rows. In between, only an
/// exact whole-year key matches; anything else (fractional ages, missing
/// years) gets the row keyed by `fallback_key`.
pub fn single_year<T: Copy>(rows: &[(u32, T)], value: f64, fallback_key: u32) -> T {
    let (first_key, first) = rows[0];
    let (last_key, last) = rows[rows.len() - 1];

    if value <= f64::from(first_key) {
        return first;
    }
    if value >= f64::from(last_key) {
        return last;
    }

    let exact = rows.iter().find(|(key, _)| f64::from(*key) == value);
    match exact {
        Some((_, row)) => *row,
        None => rows
            .iter()
            .find(|(key, _)| *key == fallback_key)
            .map(|(_, row)| *row)
            .unwrap_or(first),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &[(u32, f64)] = &[(20, 0.1), (25, 0.2), (30, 0.3)];

    const BANDS: &[Band<&str>] = &[
        Band { min: 0.0, upper: Upper::Inclusive(0.5), value: "low" },
        Band { min: 0.51, upper: Upper::Inclusive(2.0), value: "mid" },
        Band { min: 2.01, upper: Upper::Unbounded, value: "high" },
    ];

    #[test]
    fn test_floor_key_steps_down_and_clamps() {
        assert_eq!(*floor_key(ROWS, 10.0), 0.1);
        assert_eq!(*floor_key(ROWS, 20.0), 0.1);
        assert_eq!(*floor_key(ROWS, 24.9), 0.1);
        assert_eq!(*floor_key(ROWS, 25.0), 0.2);
        assert_eq!(*floor_key(ROWS, 99.0), 0.3);
    }

    #[test]
    fn test_nearest_key_tie_keeps_lower() {
        assert_eq!(*nearest_key(ROWS, 22.5), 0.1);
        assert_eq!(*nearest_key(ROWS, 22.6), 0.2);
        assert_eq!(*nearest_key(ROWS, 28.0), 0.3);
        assert_eq!(*nearest_key(ROWS, -5.0), 0.1);
        assert_eq!(*nearest_key(ROWS, 80.0), 0.3);
    }

    #[test]
    fn test_resolve_band_boundaries() {
        assert_eq!(*resolve_band(BANDS, 0.5), "low");
        assert_eq!(*resolve_band(BANDS, 0.505), "mid");
        assert_eq!(*resolve_band(BANDS, 2.0), "mid");
        assert_eq!(*resolve_band(BANDS, 2.005), "high");
        assert_eq!(*resolve_band(BANDS, 100.0), "high");
        assert_eq!(*resolve_band(BANDS, -1.0), "low");
    }

    #[test]
    fn test_resolve_band_clamps_past_bounded_end() {
        let bands = [
            Band { min: 0.0, upper: Upper::Exclusive(1.0), value: 1 },
            Band { min: 1.0, upper: Upper::Exclusive(2.0), value: 2 },
        ];
        assert_eq!(*resolve_band(&bands, 1.0), 2);
        assert_eq!(*resolve_band(&bands, 5.0), 2);
        assert!(!bands[0].contains(1.0));
        assert!(bands[1].contains(1.0));
    }

    #[test]
    fn test_single_year_fallback() {
        let rows: &[(u32, f64)] = &[(30, 0.5), (31, 0.6), (33, 0.7), (34, 0.8)];
        assert_eq!(single_year(rows, 29.0, 30), 0.5);
        assert_eq!(single_year(rows, 31.0, 30), 0.6);
        // 32 is not listed
        assert_eq!(single_year(rows, 32.0, 30), 0.5);
        assert_eq!(single_year(rows, 31.5, 33), 0.7);
        assert_eq!(single_year(rows, 40.0, 30), 0.8);
    }
}
