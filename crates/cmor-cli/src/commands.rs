use std::path::PathBuf;

use anyhow::{Context, Result};
use cmor_map::{DimensionMapper, MappingValidationError};
use cmor_model::{DimensionMappingOptions, MappingResult};
use cmor_standards::{CandidateCatalog, load_catalog};
use tracing::{debug, info, info_span};

use cmor_cli::config::{CliConfig, OptionOverrides};
use cmor_cli::dataset::{DatasetDocument, parse_required_list};

use crate::cli::{CatalogArgs, MapArgs};

/// Everything `cmor-dims map` needs to report.
pub struct MapReport {
    pub dataset: PathBuf,
    pub catalog_origin: String,
    pub catalog_fingerprint: String,
    pub required: Vec<String>,
    pub options: DimensionMappingOptions,
    pub outcome: Result<MappingResult, MappingValidationError>,
}

impl MapReport {
    pub fn result(&self) -> &MappingResult {
        match &self.outcome {
            Ok(result) => result,
            Err(error) => &error.result,
        }
    }

    pub fn failed(&self) -> bool {
        self.outcome.is_err()
    }
}

pub fn run_map(args: &MapArgs) -> Result<MapReport> {
    let span = info_span!("map", dataset = %args.dataset.display());
    let _guard = span.enter();

    let catalog = load_catalog(args.catalog.as_deref()).context("load dimension catalog")?;
    debug!(
        origin = catalog.origin(),
        fingerprint = catalog.fingerprint(),
        candidates = catalog.len(),
        "catalog loaded"
    );
    let config = CliConfig::load(args.config.as_deref())?;
    let options = config.resolve_options(&OptionOverrides {
        validation_mode: args.mode.map(Into::into),
        disable_override: args.no_override,
        disable_mapping: args.disable,
        user_entries: args.map.clone(),
    });
    let document = DatasetDocument::load(&args.dataset)?;
    let required = parse_required_list(&args.required);
    info!(
        dimensions = document.dimensions.len(),
        required = required.len(),
        mode = %options.validation_mode,
        allow_override = options.allow_override,
        "mapping dataset dimensions"
    );

    let outcome =
        DimensionMapper::new(&catalog).map_dimensions(&document.dimensions, &required, &options);
    Ok(MapReport {
        dataset: args.dataset.clone(),
        catalog_origin: catalog.origin().to_string(),
        catalog_fingerprint: catalog.fingerprint().to_string(),
        required,
        options,
        outcome,
    })
}

pub fn run_catalog(args: &CatalogArgs) -> Result<CandidateCatalog> {
    load_catalog(args.catalog.as_deref()).context("load dimension catalog")
}
