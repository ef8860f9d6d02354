//! Sequential non-overlap allocation
//!
//! The allocator owns the "remaining" master footprint. Each component takes
//! whatever part of the remaining area it covers, and that part is subtracted
//! before the next component is visited. Ground claimed earlier can never be
//! claimed again, so the first component in processing order wins any overlap.
//!
//! ```text
//! remaining₀ = normalize(master)
//! for component in order:
//!     allocated  = component ∩ remaining
//!     remaining' = remaining − allocated
//!     stop when remaining' is empty
//! ```

use std::path::PathBuf;

use tracing::{debug, info};

use crate::domain::entities::{AllocationRecord, Footprint, LoadedLayer};
use crate::domain::ports::{GeometryEngine, GeometryError};
use crate::domain::services::normalize;
use crate::domain::value_objects::Crs;
use crate::error::{AllocError, AllocResult};

pub const SQUARE_METRES_PER_HECTARE: f64 = 10_000.0;

/// Result of running the allocator over a sequence of components
#[derive(Debug, Clone)]
pub struct AllocationRun {
    /// One record per visited component, in processing order
    pub records: Vec<AllocationRecord>,
    /// Master area after normalization
    pub master_ha: f64,
    /// Master area no component claimed
    pub remaining_ha: f64,
    /// Whether the loop stopped because the master was used up
    pub exhausted: bool,
    /// Unclaimed part of the master
    pub remaining: Footprint,
}

impl AllocationRun {
    pub fn allocated_ha(&self) -> f64 {
        self.records.iter().map(|r| r.area_ha).sum()
    }
}

pub struct Allocator<'e, E: GeometryEngine + ?Sized> {
    engine: &'e E,
    equal_area: Crs,
    remaining: Footprint,
    master_ha: f64,
}

impl<'e, E: GeometryEngine + ?Sized> Allocator<'e, E> {
    /// Prepare the remaining state from the master layer.
    ///
    /// Fails with `EmptyMaster` when the master has no usable geometry and
    /// `MissingCrs` when it declares no CRS.
    pub fn new(engine: &'e E, master: LoadedLayer, equal_area: Crs) -> AllocResult<Self> {
        let layer = match master {
            LoadedLayer::Layer(layer) => layer,
            LoadedLayer::Empty { source, .. } => {
                return Err(AllocError::EmptyMaster { path: source });
            }
        };

        let path = layer.source().to_path_buf();
        let footprint = normalize(engine, layer.into_footprint()?, &equal_area)?;
        if engine.is_empty(&footprint) {
            return Err(AllocError::EmptyMaster { path });
        }

        let master_ha = hectares(engine, &footprint)?;
        info!(master = %path.display(), crs = %footprint.crs(), master_ha, "master footprint ready");

        Ok(Self {
            engine,
            equal_area,
            remaining: footprint,
            master_ha,
        })
    }

    pub fn master_ha(&self) -> f64 {
        self.master_ha
    }

    pub fn master_crs(&self) -> &Crs {
        self.remaining.crs()
    }

    pub fn remaining(&self) -> &Footprint {
        &self.remaining
    }

    pub fn is_exhausted(&self) -> bool {
        self.engine.is_empty(&self.remaining)
    }

    pub fn remaining_ha(&self) -> AllocResult<f64> {
        if self.is_exhausted() {
            return Ok(0.0);
        }
        Ok(hectares(self.engine, &self.remaining)?)
    }

    /// Allocate one component and advance the remaining state.
    pub fn allocate(&mut self, name: &str, component: LoadedLayer) -> AllocResult<AllocationRecord> {
        let layer = match component {
            LoadedLayer::Empty { source, reason } => {
                debug!(layer = name, source = %source.display(), %reason, "empty component");
                return Ok(AllocationRecord::new(name, source, 0.0));
            }
            LoadedLayer::Layer(layer) => layer,
        };

        let source: PathBuf = layer.source().to_path_buf();
        let mut footprint = layer.into_footprint()?;

        if footprint.crs() != self.remaining.crs() {
            footprint = self.engine.reproject(&footprint, self.remaining.crs())?;
        }
        let footprint = normalize(self.engine, footprint, &self.equal_area)?;

        let allocated = self.engine.intersection(&footprint, &self.remaining)?;
        let area_ha = if self.engine.is_empty(&allocated) {
            0.0
        } else {
            let area_ha = hectares(self.engine, &allocated)?;
            self.remaining = self.engine.difference(&self.remaining, &allocated)?;
            area_ha
        };

        debug!(layer = name, source = %source.display(), area_ha, "allocated");
        Ok(AllocationRecord::new(name, source, area_ha))
    }

    /// Allocate components in order until they run out or the master is used up.
    ///
    /// Components are pulled lazily, so anything after exhaustion is never loaded.
    pub fn run<I>(mut self, components: I) -> AllocResult<AllocationRun>
    where
        I: IntoIterator<Item = AllocResult<(String, LoadedLayer)>>,
    {
        let mut records = Vec::new();
        let mut exhausted = false;

        for component in components {
            let (name, layer) = component?;
            records.push(self.allocate(&name, layer)?);

            if self.is_exhausted() {
                info!(visited = records.len(), "master footprint fully allocated, stopping");
                exhausted = true;
                break;
            }
        }

        let remaining_ha = self.remaining_ha()?;
        Ok(AllocationRun {
            records,
            master_ha: self.master_ha,
            remaining_ha,
            exhausted,
            remaining: self.remaining,
        })
    }
}

/// Area in hectares, converting axis units to metres explicitly
pub fn hectares<E>(engine: &E, footprint: &Footprint) -> Result<f64, GeometryError>
where
    E: GeometryEngine + ?Sized,
{
    let area = engine.area(footprint)?;
    let scale = footprint
        .crs()
        .square_metres_per_unit()
        .ok_or_else(|| GeometryError::GeographicArea {
            crs: footprint.crs().code().to_string(),
        })?;
    Ok(area * scale / SQUARE_METRES_PER_HECTARE)
}
