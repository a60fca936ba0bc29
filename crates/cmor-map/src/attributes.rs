//! Attribute-based dimension classification.
//!
//! Uses the CF `standard_name` first, then the `axis` code. A `Z` axis is
//! refined with `units` and `positive`; when neither settles it the result
//! is [`SemanticType::Other`].

use std::collections::BTreeMap;

use cmor_model::{SemanticType, lookup_attribute};

use crate::utils::normalize_value;

const STANDARD_NAMES: &[(&str, SemanticType)] = &[
    ("latitude", SemanticType::Latitude),
    ("grid_latitude", SemanticType::Latitude),
    ("longitude", SemanticType::Longitude),
    ("grid_longitude", SemanticType::Longitude),
    ("air_pressure", SemanticType::Pressure),
    ("depth", SemanticType::Depth),
    ("sea_water_depth", SemanticType::Depth),
    ("ocean_depth", SemanticType::Depth),
    ("height", SemanticType::Height),
    ("altitude", SemanticType::Height),
    ("time", SemanticType::Time),
    ("model_level_number", SemanticType::ModelLevel),
    (
        "atmosphere_hybrid_sigma_pressure_coordinate",
        SemanticType::ModelLevel,
    ),
    ("atmosphere_hybrid_height_coordinate", SemanticType::ModelLevel),
    ("atmosphere_sigma_coordinate", SemanticType::ModelLevel),
    ("ocean_sigma_coordinate", SemanticType::ModelLevel),
    ("ocean_s_coordinate", SemanticType::ModelLevel),
];

const PRESSURE_UNITS: &[&str] = &["pa", "hpa", "kpa", "mbar", "millibar", "bar"];
const LENGTH_UNITS: &[&str] = &["m", "km", "meter", "meters", "metre", "metres"];

/// Classifies a dimension from its coordinate attributes.
pub fn classify_by_attributes(attributes: &BTreeMap<String, String>) -> Option<SemanticType> {
    if let Some(standard_name) = lookup_attribute(attributes, "standard_name") {
        let normalized = normalize_value(standard_name);
        if let Some((_, kind)) = STANDARD_NAMES.iter().find(|(name, _)| *name == normalized) {
            return Some(*kind);
        }
    }

    let axis = lookup_attribute(attributes, "axis")?;
    match axis.to_ascii_uppercase().as_str() {
        "X" => Some(SemanticType::Longitude),
        "Y" => Some(SemanticType::Latitude),
        "T" => Some(SemanticType::Time),
        "Z" => Some(refine_vertical(attributes)),
        _ => None,
    }
}

fn refine_vertical(attributes: &BTreeMap<String, String>) -> SemanticType {
    let units = lookup_attribute(attributes, "units").map(normalize_value);
    let positive = lookup_attribute(attributes, "positive").map(normalize_value);

    if units
        .as_deref()
        .is_some_and(|u| PRESSURE_UNITS.contains(&u))
    {
        return SemanticType::Pressure;
    }
    if positive.as_deref() == Some("down") {
        return SemanticType::Depth;
    }
    if units.as_deref().is_some_and(|u| LENGTH_UNITS.contains(&u)) {
        return SemanticType::Height;
    }
    SemanticType::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    fn attrs(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn standard_name_wins_over_axis() {
        let a = attrs(&[("standard_name", " Latitude "), ("axis", "X")]);
        assert_eq!(classify_by_attributes(&a), Some(SemanticType::Latitude));
        let a = attrs(&[("standard_name", "ocean_s_coordinate")]);
        assert_eq!(classify_by_attributes(&a), Some(SemanticType::ModelLevel));
    }

    #[test]
    fn axis_codes() {
        assert_eq!(
            classify_by_attributes(&attrs(&[("axis", "Y")])),
            Some(SemanticType::Latitude)
        );
        assert_eq!(
            classify_by_attributes(&attrs(&[("AXIS", "t")])),
            Some(SemanticType::Time)
        );
        assert_eq!(classify_by_attributes(&attrs(&[("axis", "W")])), None);
        assert_eq!(classify_by_attributes(&attrs(&[])), None);
    }

    #[test]
    fn vertical_axis_refinement() {
        let z = |extra: &[(&str, &str)]| {
            let mut a = attrs(extra);
            a.insert("axis".to_string(), "Z".to_string());
            classify_by_attributes(&a)
        };
        assert_eq!(z(&[("units", "hPa")]), Some(SemanticType::Pressure));
        assert_eq!(
            z(&[("units", "m"), ("positive", "down")]),
            Some(SemanticType::Depth)
        );
        assert_eq!(
            z(&[("units", "m"), ("positive", "up")]),
            Some(SemanticType::Height)
        );
        assert_eq!(z(&[("units", "1")]), Some(SemanticType::Other));
    }
}
