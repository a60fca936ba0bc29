//! Detector chain: attributes, then name, then values.

use cmor_model::{DetectionMethod, DimensionDescriptor, SemanticType};

use crate::attributes::classify_by_attributes;
use crate::patterns::classify_by_name;
use crate::values::classify_by_values;

type Detector = fn(&DimensionDescriptor) -> Option<SemanticType>;

const DETECTORS: [(DetectionMethod, Detector); 3] = [
    (DetectionMethod::Attribute, by_attributes),
    (DetectionMethod::NamePattern, by_name),
    (DetectionMethod::ValueRange, by_values),
];

fn by_attributes(dimension: &DimensionDescriptor) -> Option<SemanticType> {
    classify_by_attributes(&dimension.attributes)
}

fn by_name(dimension: &DimensionDescriptor) -> Option<SemanticType> {
    classify_by_name(&dimension.name)
}

fn by_values(dimension: &DimensionDescriptor) -> Option<SemanticType> {
    classify_by_values(dimension.samples())
}

/// Semantic type of a dimension and the detector that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detection {
    pub semantic_type: SemanticType,
    pub method: DetectionMethod,
}

/// Runs the detector chain and returns the first detector's result.
///
/// One exception: an unrefined vertical axis (`Other`, e.g. `axis = Z`
/// without pressure or length units) does not stop the chain. It is kept
/// only when no later detector finds a specific type.
pub fn detect(dimension: &DimensionDescriptor) -> Option<Detection> {
    let mut fallback = None;
    for (method, detector) in DETECTORS {
        let Some(semantic_type) = detector(dimension) else {
            continue;
        };
        let detection = Detection {
            semantic_type,
            method,
        };
        if semantic_type.is_specific() {
            return Some(detection);
        }
        fallback.get_or_insert(detection);
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attributes_take_precedence_over_name() {
        let dim = DimensionDescriptor::new("y", 180).with_attribute("axis", "Y");
        assert_eq!(
            detect(&dim),
            Some(Detection {
                semantic_type: SemanticType::Latitude,
                method: DetectionMethod::Attribute,
            })
        );
    }

    #[test]
    fn unrefined_vertical_axis_defers_to_name() {
        let dim = DimensionDescriptor::new("plev", 19).with_attribute("axis", "Z");
        let detection = detect(&dim).expect("detected");
        assert_eq!(detection.semantic_type, SemanticType::Pressure);
        assert_eq!(detection.method, DetectionMethod::NamePattern);

        let dim = DimensionDescriptor::new("k", 19).with_attribute("axis", "Z");
        let detection = detect(&dim).expect("detected");
        assert_eq!(detection.semantic_type, SemanticType::Other);
        assert_eq!(detection.method, DetectionMethod::Attribute);
    }

    #[test]
    fn values_are_the_last_resort() {
        let dim = DimensionDescriptor::new("dim0", 3).with_samples(vec![-45.0, 0.0, 45.0]);
        let detection = detect(&dim).expect("detected");
        assert_eq!(detection.semantic_type, SemanticType::Latitude);
        assert_eq!(detection.method, DetectionMethod::ValueRange);
        assert_eq!(detect(&DimensionDescriptor::new("bnds", 2)), None);
    }
}
