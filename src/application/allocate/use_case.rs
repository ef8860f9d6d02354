//! Allocate Use Case
//!
//! Wires discovery, loading, allocation and aggregation together.

use tracing::info;

use crate::domain::ports::{GeometryEngine, LayerLoader, SourceDiscovery};
use crate::domain::services::{aggregate, name_for, Allocator};
use crate::error::{AllocError, AllocResult};

use super::options::AllocateOptions;
use super::result::{AllocationOutcome, PlannedSource};

/// Allocate use case - splits a master footprint among component layers
pub struct AllocateUseCase<D, L, E>
where
    D: SourceDiscovery,
    L: LayerLoader,
    E: GeometryEngine,
{
    discovery: D,
    loader: L,
    engine: E,
}

impl<D, L, E> AllocateUseCase<D, L, E>
where
    D: SourceDiscovery,
    L: LayerLoader,
    E: GeometryEngine,
{
    /// Create a new allocate use case
    pub fn new(discovery: D, loader: L, engine: E) -> Self {
        Self {
            discovery,
            loader,
            engine,
        }
    }

    /// Component sources in processing order with their layer names.
    ///
    /// Reads no geometry.
    pub fn plan(&self, options: &AllocateOptions) -> AllocResult<Vec<PlannedSource>> {
        let sources = self.discovery.discover(&options.components)?;
        let naming = options.naming;
        let ordered = options
            .order
            .arrange(sources, |path| name_for(path, naming));

        Ok(ordered
            .into_iter()
            .map(|path| PlannedSource {
                name: name_for(&path, naming),
                path,
            })
            .collect())
    }

    /// Run the allocation.
    ///
    /// Components are loaded one at a time; once the master is used up the
    /// rest are never read.
    pub fn execute(&self, options: &AllocateOptions) -> AllocResult<AllocationOutcome> {
        let plan = self.plan(options)?;
        info!(
            master = %options.master.display(),
            components = %options.components.display(),
            sources = plan.len(),
            order = ?options.order,
            "starting allocation"
        );

        let master_name = name_for(&options.master, options.naming);
        let master = self.loader.load(&options.master, &master_name)?;
        let allocator = Allocator::new(&self.engine, master, options.equal_area.clone())?;
        let crs = allocator.master_crs().code().to_string();

        let loader = &self.loader;
        let components = plan.iter().map(|source| {
            loader
                .load(&source.path, &source.name)
                .map(|layer| (source.name.clone(), layer))
                .map_err(AllocError::from)
        });
        let run = allocator.run(components)?;

        let table = aggregate(&run.records).sorted(options.sort);
        let allocated_ha = run.allocated_ha();
        info!(
            layers = table.len(),
            visited = run.records.len(),
            master_ha = run.master_ha,
            allocated_ha,
            remaining_ha = run.remaining_ha,
            "allocation finished"
        );

        Ok(AllocationOutcome {
            table,
            crs,
            master_ha: run.master_ha,
            allocated_ha,
            remaining_ha: run.remaining_ha,
            discovered: plan.len(),
            visited: run.records.len(),
            exhausted: run.exhausted,
            records: run.records,
        })
    }
}
