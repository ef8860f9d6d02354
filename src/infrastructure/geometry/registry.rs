//! CRS registry
//!
//! Resolves CRS names as they appear in source files to `Crs` values and
//! knows which projection backs each built-in code. Codes declared in the
//! configuration are opaque: usable for area, not for reprojection.

use crate::domain::value_objects::Crs;

use super::projection::Projection;

const EASE2_STANDARD_PARALLEL: f64 = 30.0;

#[derive(Debug, Clone, Default)]
pub struct CrsRegistry {
    custom: Vec<Crs>,
}

impl CrsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry that also knows the given user-declared systems
    pub fn with_custom(custom: Vec<Crs>) -> Self {
        Self { custom }
    }

    /// Resolve a CRS name (`EPSG:4326`, `urn:ogc:def:crs:EPSG::32633`, ...)
    pub fn resolve(&self, name: &str) -> Option<Crs> {
        let code = canonical_code(name)?;
        if let Some(crs) = self.custom.iter().find(|crs| crs.code() == code) {
            return Some(crs.clone());
        }
        let projection = builtin_projection(&code)?;
        Some(match projection {
            Projection::LonLat => Crs::geographic(code),
            _ => Crs::metric(code),
        })
    }

    /// Projection backing a CRS, `None` for opaque (user-declared) systems
    pub fn projection(&self, crs: &Crs) -> Option<Projection> {
        if self.custom.iter().any(|custom| custom.code() == crs.code()) {
            return None;
        }
        builtin_projection(crs.code())
    }

    /// Built-in codes followed by user-declared ones, UTM zones summarized
    pub fn describe(&self) -> Vec<(String, String)> {
        let mut rows: Vec<(String, String)> = [
            ("EPSG:4326", "WGS 84 geographic (lon, lat)"),
            ("OGC:CRS84", "WGS 84 geographic (lon, lat)"),
            ("EPSG:6933", "WGS 84 / EASE-Grid 2.0 Global, cylindrical equal-area"),
            ("EPSG:3857", "WGS 84 / Pseudo-Mercator"),
            ("EPSG:32601-32660", "WGS 84 / UTM zones 1N-60N"),
            ("EPSG:32701-32760", "WGS 84 / UTM zones 1S-60S"),
        ]
        .iter()
        .map(|(code, label)| (code.to_string(), label.to_string()))
        .collect();

        rows.extend(self.custom.iter().map(|crs| {
            let label = match crs.square_metres_per_unit() {
                Some(scale) => format!("declared projected, {} m per unit", scale.sqrt()),
                None => "declared geographic".to_string(),
            };
            (crs.code().to_string(), label)
        }));
        rows
    }
}

/// Normalize the many spellings of a CRS identifier to `AUTHORITY:CODE`.
pub fn canonical_code(name: &str) -> Option<String> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    let upper = name.to_uppercase();

    let (authority, code) = if upper.starts_with("URN:OGC:DEF:CRS:") {
        // urn:ogc:def:crs:{authority}:{version}:{code}
        let parts: Vec<&str> = upper.split(':').collect();
        (parts.get(4)?.to_string(), parts.last()?.to_string())
    } else if upper.starts_with("HTTP://") || upper.starts_with("HTTPS://") {
        // http://www.opengis.net/def/crs/{authority}/{version}/{code}
        let parts: Vec<&str> = upper.trim_end_matches('/').split('/').collect();
        if parts.len() < 3 {
            return None;
        }
        (
            parts[parts.len() - 3].to_string(),
            parts[parts.len() - 1].to_string(),
        )
    } else if let Some((authority, code)) = upper.split_once(':') {
        (authority.to_string(), code.to_string())
    } else if upper == "CRS84" {
        ("OGC".to_string(), upper)
    } else {
        return None;
    };

    if authority.is_empty() || code.is_empty() {
        return None;
    }
    Some(format!("{}:{}", authority, code))
}

fn builtin_projection(code: &str) -> Option<Projection> {
    match code {
        "EPSG:4326" | "OGC:CRS84" => Some(Projection::LonLat),
        "EPSG:6933" => Some(Projection::CylindricalEqualArea {
            standard_parallel: EASE2_STANDARD_PARALLEL,
        }),
        "EPSG:3857" | "EPSG:900913" => Some(Projection::WebMercator),
        _ => {
            let number: u32 = code.strip_prefix("EPSG:")?.parse().ok()?;
            match number {
                32601..=32660 => Some(Projection::Utm {
                    zone: (number - 32600) as u8,
                    south: false,
                }),
                32701..=32760 => Some(Projection::Utm {
                    zone: (number - 32700) as u8,
                    south: true,
                }),
                _ => None,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::value_objects::CrsKind;

    #[test]
    fn canonical_code_spellings() {
        assert_eq!(canonical_code("EPSG:4326").as_deref(), Some("EPSG:4326"));
        assert_eq!(canonical_code(" epsg:6933 ").as_deref(), Some("EPSG:6933"));
        assert_eq!(
            canonical_code("urn:ogc:def:crs:EPSG::32633").as_deref(),
            Some("EPSG:32633")
        );
        assert_eq!(
            canonical_code("urn:ogc:def:crs:OGC:1.3:CRS84").as_deref(),
            Some("OGC:CRS84")
        );
        assert_eq!(
            canonical_code("http://www.opengis.net/def/crs/EPSG/0/3857").as_deref(),
            Some("EPSG:3857")
        );
        assert_eq!(canonical_code("CRS84").as_deref(), Some("OGC:CRS84"));
        assert_eq!(canonical_code("mercator"), None);
        assert_eq!(canonical_code(""), None);
    }

    #[test]
    fn resolves_builtin_kinds() {
        let registry = CrsRegistry::new();
        assert!(registry.resolve("EPSG:4326").unwrap().is_geographic());
        assert!(registry.resolve("urn:ogc:def:crs:OGC:1.3:CRS84").unwrap().is_geographic());
        assert!(registry.resolve("EPSG:6933").unwrap().is_projected());
        assert!(registry.resolve("EPSG:32756").unwrap().is_projected());
        assert!(registry.resolve("EPSG:32661").is_none());
        assert!(registry.resolve("EPSG:2154").is_none());
    }

    #[test]
    fn utm_codes_map_to_zones() {
        let registry = CrsRegistry::new();
        let crs = registry.resolve("EPSG:32733").unwrap();
        assert_eq!(
            registry.projection(&crs),
            Some(Projection::Utm { zone: 33, south: true })
        );
    }

    #[test]
    fn custom_crs_resolves_but_has_no_projection() {
        let lambert = Crs::new("EPSG:2154", CrsKind::Projected { metres_per_unit: 1.0 });
        let registry = CrsRegistry::with_custom(vec![lambert.clone()]);

        let resolved = registry.resolve("urn:ogc:def:crs:EPSG::2154").unwrap();
        assert_eq!(resolved, lambert);
        assert_eq!(registry.projection(&resolved), None);
    }

    #[test]
    fn describe_lists_custom_codes_last() {
        let registry = CrsRegistry::with_custom(vec![Crs::metric("EPSG:2154")]);
        let rows = registry.describe();
        assert_eq!(rows.first().unwrap().0, "EPSG:4326");
        assert_eq!(rows.last().unwrap().0, "EPSG:2154");
    }
}
