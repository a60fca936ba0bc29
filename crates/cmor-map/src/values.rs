//! Coordinate value range heuristics.

use cmor_model::SemanticType;

/// Minimum number of points needed before values are trusted.
pub const MIN_SAMPLES: usize = 2;

/// Upper bound for plausible pressure coordinates, in Pa.
pub const MAX_PRESSURE_PA: f64 = 110_000.0;

/// Classifies a dimension from its coordinate values.
///
/// Latitude is checked before longitude, so a longitude axis that never
/// leaves [-90, 90] is reported as latitude. Callers run this last.
pub fn classify_by_values(samples: &[f64]) -> Option<SemanticType> {
    if samples.len() < MIN_SAMPLES || samples.iter().any(|v| !v.is_finite()) {
        return None;
    }
    let (min, max) = bounds(samples);

    if min >= -90.0 && max <= 90.0 {
        return Some(SemanticType::Latitude);
    }
    if (min >= 0.0 && max <= 360.0) || (min >= -180.0 && max <= 180.0) {
        return Some(SemanticType::Longitude);
    }
    if min > 0.0 && max <= MAX_PRESSURE_PA && is_strictly_monotonic(samples) {
        return Some(SemanticType::Pressure);
    }
    None
}

fn bounds(samples: &[f64]) -> (f64, f64) {
    samples
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(*v), hi.max(*v))
        })
}

fn is_strictly_monotonic(samples: &[f64]) -> bool {
    let increasing = samples.windows(2).all(|w| w[0] < w[1]);
    let decreasing = samples.windows(2).all(|w| w[0] > w[1]);
    increasing || decreasing
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latitude_and_longitude_ranges() {
        assert_eq!(
            classify_by_values(&[-89.5, 0.0, 89.5]),
            Some(SemanticType::Latitude)
        );
        assert_eq!(
            classify_by_values(&[0.0, 120.0, 359.0]),
            Some(SemanticType::Longitude)
        );
        assert_eq!(
            classify_by_values(&[-179.0, 0.0, 179.0]),
            Some(SemanticType::Longitude)
        );
    }

    #[test]
    fn pressure_profiles_must_be_monotonic() {
        assert_eq!(
            classify_by_values(&[100_000.0, 85_000.0, 50_000.0, 1_000.0]),
            Some(SemanticType::Pressure)
        );
        assert_eq!(classify_by_values(&[1_000.0, 50_000.0, 2_000.0]), None);
        assert_eq!(classify_by_values(&[1_000.0, 200_000.0]), None);
    }

    #[test]
    fn too_few_or_non_finite_samples() {
        assert_eq!(classify_by_values(&[]), None);
        assert_eq!(classify_by_values(&[10.0]), None);
        assert_eq!(classify_by_values(&[10.0, f64::NAN]), None);
        assert_eq!(classify_by_values(&[f64::INFINITY, 1.0]), None);
    }
}
