//! Name-based dimension classification.

use std::sync::LazyLock;

use cmor_model::SemanticType;
use regex::Regex;

use crate::utils::normalize_name;

/// Category pattern sets, tested in this order. The first category with a
/// matching pattern wins, so `lev` is pressure and `z` is depth.
const NAME_PATTERN_TABLE: &[(SemanticType, &[&str])] = &[
    (
        SemanticType::Latitude,
        &[
            r"^lat(itude)?(_\w+)?$",
            r"^ylat$",
            r"^rlat$",
            r"^nav_lat$",
            r"^gridlat(itude)?$",
        ],
    ),
    (
        SemanticType::Longitude,
        &[
            r"^lon(gitude)?(_\w+)?$",
            r"^x(lon)?$",
            r"^rlon$",
            r"^nav_lon$",
            r"^gridlon(gitude)?$",
        ],
    ),
    (
        SemanticType::Pressure,
        &[
            r"^(p)?lev(el)?s?$",
            r"^plev\d*$",
            r"^pres(sure)?(_\w+)?$",
            r"^air_pressure$",
            r"^isobaric\w*$",
        ],
    ),
    (
        SemanticType::Depth,
        &[
            r"^(o)?lev(el)?s?$",
            r"^depth(_\w+)?$",
            r"^olevel\d*$",
            r"^olevhalf$",
            r"^z(_\w+)?$",
        ],
    ),
    (SemanticType::Height, &[r"^(alt|height)(_?\d+m?)?$", r"^z$"]),
    (
        SemanticType::Time,
        &[r"^time\d*$", r"^t$", r"^time_counter$", r"^valid_time$"],
    ),
    (
        SemanticType::ModelLevel,
        &[
            r"^alev(el)?s?$",
            r"^(model_)?level(_\w+)?$",
            r"^lev$",
            r"^alevhalf$",
        ],
    ),
    (
        SemanticType::ScalarPoint,
        &[
            r"^p\d{1,4}$",
            r"^sdepth\d*$",
            r"^depth\d+m$",
            r"^olayer\d+m$",
            r"^scalar(_\w+)?$",
        ],
    ),
];

static NAME_PATTERNS: LazyLock<Vec<(SemanticType, Regex)>> = LazyLock::new(|| {
    NAME_PATTERN_TABLE
        .iter()
        .flat_map(|(kind, patterns)| {
            patterns.iter().map(move |pattern| {
                let regex = Regex::new(pattern).expect("Invalid dimension name regex");
                (*kind, regex)
            })
        })
        .collect()
});

/// Classifies a dimension by its name alone.
pub fn classify_by_name(name: &str) -> Option<SemanticType> {
    let normalized = normalize_name(name);
    if normalized.is_empty() {
        return None;
    }
    NAME_PATTERNS
        .iter()
        .find(|(_, regex)| regex.is_match(&normalized))
        .map(|(kind, _)| *kind)
}

/// Every category whose pattern set matches `name`, in precedence order.
/// Used to report ambiguous names in debug output.
pub fn matching_categories(name: &str) -> Vec<SemanticType> {
    let normalized = normalize_name(name);
    let mut categories: Vec<SemanticType> = Vec::new();
    for (kind, regex) in NAME_PATTERNS.iter() {
        if !categories.contains(kind) && regex.is_match(&normalized) {
            categories.push(*kind);
        }
    }
    categories
}
