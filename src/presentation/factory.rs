//! Use Case Factory
//!
//! Creates use cases with infrastructure dependencies wired up.
//! This is the dependency injection point for the application.

use std::path::{Path, PathBuf};

use tracing::warn;

use crate::application::{AllocateOptions, AllocateUseCase};
use crate::config::{with_env_overrides, Config};
use crate::domain::value_objects::Crs;
use crate::error::{AllocError, AllocResult};
use crate::infrastructure::{CrsRegistry, FsSourceDiscovery, GeoEngine, GeoJsonLayerLoader};

/// Type alias for the concrete AllocateUseCase with all dependencies
pub type ConcreteAllocateUseCase = AllocateUseCase<FsSourceDiscovery, GeoJsonLayerLoader, GeoEngine>;

/// Load the explicit config file, or fall back to the implicit lookup.
///
/// Unknown keys are logged as warnings; a broken explicit file is an error.
pub fn load_config(explicit: Option<&Path>) -> AllocResult<Config> {
    match explicit {
        Some(path) => {
            let (config, warnings) = Config::load_with_warnings(path)?;
            for warning in warnings {
                warn!("{}", warning);
            }
            Ok(with_env_overrides(config))
        }
        None => {
            let cwd = std::env::current_dir().ok();
            Ok(Config::load_or_default(cwd.as_deref()))
        }
    }
}

/// Registry with built-in systems plus the config's `[[crs]]` entries
pub fn create_registry(config: &Config) -> CrsRegistry {
    CrsRegistry::with_custom(config.custom_crs())
}

/// Resolve the equal-area target; it must be a projected system
pub fn resolve_equal_area(registry: &CrsRegistry, code: &str) -> AllocResult<Crs> {
    registry
        .resolve(code)
        .filter(Crs::is_projected)
        .ok_or_else(|| AllocError::InvalidEqualAreaCrs {
            code: code.to_string(),
        })
}

/// Resolve the CRS assumed for files without a `crs` member
pub fn resolve_assumed_crs(registry: &CrsRegistry, code: Option<&str>) -> AllocResult<Option<Crs>> {
    code.map(|code| {
        registry.resolve(code).ok_or_else(|| AllocError::UnknownCrs {
            name: code.to_string(),
            path: PathBuf::from("allocation.assume_crs"),
        })
    })
    .transpose()
}

/// Build allocate options from an (already CLI-overridden) config
pub fn create_allocate_options(
    config: &Config,
    registry: &CrsRegistry,
    master: &Path,
    components: &Path,
) -> AllocResult<AllocateOptions> {
    let equal_area = resolve_equal_area(registry, &config.allocation.equal_area_crs)?;
    Ok(AllocateOptions::new(master, components)
        .with_naming(config.allocation.naming)
        .with_order(config.allocation.processing_order())
        .with_sort(config.output.sort)
        .with_equal_area(equal_area))
}

/// Create an allocate use case with all dependencies wired up
///
/// `master` is excluded from discovery when it lives under the components root.
pub fn create_allocate_use_case(
    config: &Config,
    master: Option<&Path>,
) -> AllocResult<ConcreteAllocateUseCase> {
    let registry = create_registry(config);
    let assumed = resolve_assumed_crs(&registry, config.allocation.assume_crs.as_deref())?;
    let engine = GeoEngine::new(registry);

    let mut discovery = FsSourceDiscovery::new(config.discovery.extensions.clone());
    if let Some(master) = master {
        discovery = discovery.excluding(master);
    }
    let loader = GeoJsonLayerLoader::new(engine.clone()).with_assumed_crs(assumed);

    Ok(AllocateUseCase::new(discovery, loader, engine))
}
