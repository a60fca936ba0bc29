use std::collections::{BTreeMap, BTreeSet};

use cmor_map::DimensionMapper;
use cmor_model::{DimensionDescriptor, DimensionMappingOptions, ValidationMode};
use cmor_standards::CandidateCatalog;
use proptest::prelude::*;

const NAMES: &[&str] = &[
    "lat", "latitude", "y", "x", "lon", "longitude", "lev", "plev", "olevel", "depth", "z",
    "height", "time", "t", "alevel", "p850", "bnds", "member", "nav_lat", "rlon",
];

const TARGETS: &[&str] = &[
    "lat", "lon", "time", "plev19", "plev8", "olevel", "height2m", "alevel", "p850",
];

fn dimensions() -> impl Strategy<Value = Vec<DimensionDescriptor>> {
    prop::collection::btree_map(prop::sample::select(NAMES), 1usize..40, 0..8).prop_map(|dims| {
        dims.into_iter()
            .map(|(name, size)| DimensionDescriptor::new(name, size))
            .collect()
    })
}

fn required() -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(prop::sample::select(TARGETS), 0..6)
        .prop_map(|set| set.into_iter().map(str::to_string).collect())
}

proptest! {
    #[test]
    fn mapping_is_deterministic(dims in dimensions(), required in required(), allow in any::<bool>()) {
        let catalog = CandidateCatalog::embedded().expect("embedded catalog");
        let mapper = DimensionMapper::new(&catalog);
        let options = DimensionMappingOptions::default().with_allow_override(allow);
        let first = mapper.create_mapping(&dims, &required, &options);
        let second = mapper.create_mapping(&dims, &required, &options);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn mapping_is_injective(dims in dimensions(), required in required()) {
        let catalog = CandidateCatalog::embedded().expect("embedded catalog");
        let result = DimensionMapper::new(&catalog)
            .create_mapping(&dims, &required, &DimensionMappingOptions::default());

        let targets: BTreeSet<&String> = result.mapping.values().collect();
        prop_assert_eq!(targets.len(), result.mapping.len());

        for dim in &dims {
            let mapped = result.mapping.contains_key(&dim.name);
            let unmapped = result.unmapped_sources.contains(&dim.name);
            prop_assert!(mapped != unmapped, "{} must be exactly one of mapped/unmapped", dim.name);
        }
        for target in &required {
            let covered = targets.contains(&target);
            prop_assert_eq!(covered, !result.unmapped_targets.contains(target));
        }
    }

    #[test]
    fn allowed_overrides_are_honored(dims in dimensions(), required in required()) {
        let catalog = CandidateCatalog::embedded().expect("embedded catalog");
        let user: BTreeMap<String, String> = dims
            .iter()
            .enumerate()
            .filter(|(idx, _)| idx % 2 == 0)
            .map(|(idx, dim)| (dim.name.clone(), format!("user_target_{idx}")))
            .collect();
        let options = DimensionMappingOptions::default()
            .with_validation_mode(ValidationMode::Ignore)
            .with_user_mapping(user.clone());
        let result = DimensionMapper::new(&catalog).create_mapping(&dims, &required, &options);

        for (source, target) in &user {
            prop_assert_eq!(result.target_for(source), Some(target.as_str()));
        }
    }
}
