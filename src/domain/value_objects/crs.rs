//! Coordinate reference system value object
//!
//! A `Crs` is a canonical code (`EPSG:6933`, `OGC:CRS84`) plus the kind of
//! units its coordinates are expressed in. Area is only meaningful for
//! projected systems.

use serde::Serialize;

/// Default equal-area CRS used to normalize geographic layers.
///
/// WGS 84 / NSIDC EASE-Grid 2.0 Global: Lambert cylindrical equal-area on the
/// WGS 84 ellipsoid with standard parallel 30°.
pub const DEFAULT_EQUAL_AREA_CRS: &str = "EPSG:6933";

/// Unit kind of a coordinate reference system
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CrsKind {
    /// Angular units (longitude/latitude degrees)
    Geographic,
    /// Linear units; `metres_per_unit` converts one axis unit to metres
    Projected { metres_per_unit: f64 },
}

/// A coordinate reference system
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Crs {
    code: String,
    #[serde(flatten)]
    kind: CrsKind,
}

impl Crs {
    pub fn new(code: impl Into<String>, kind: CrsKind) -> Self {
        Self {
            code: code.into(),
            kind,
        }
    }

    pub fn geographic(code: impl Into<String>) -> Self {
        Self::new(code, CrsKind::Geographic)
    }

    /// Projected CRS with metre axis units
    pub fn metric(code: impl Into<String>) -> Self {
        Self::new(code, CrsKind::Projected { metres_per_unit: 1.0 })
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn kind(&self) -> CrsKind {
        self.kind
    }

    pub fn is_geographic(&self) -> bool {
        matches!(self.kind, CrsKind::Geographic)
    }

    pub fn is_projected(&self) -> bool {
        !self.is_geographic()
    }

    /// Square metres per square axis unit, `None` for geographic systems
    pub fn square_metres_per_unit(&self) -> Option<f64> {
        match self.kind {
            CrsKind::Geographic => None,
            CrsKind::Projected { metres_per_unit } => Some(metres_per_unit * metres_per_unit),
        }
    }
}

impl std::fmt::Display for Crs {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}
