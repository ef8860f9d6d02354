//! Map projections on the WGS 84 ellipsoid
//!
//! Every supported CRS converts to and from geodetic longitude/latitude in
//! degrees; reprojection between two systems goes through that pivot.

use std::f64::consts::FRAC_PI_4;

/// WGS 84 semi-major axis (metres)
pub const WGS84_A: f64 = 6_378_137.0;
/// WGS 84 flattening
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;

const UTM_K0: f64 = 0.9996;
const UTM_FALSE_EASTING: f64 = 500_000.0;
const UTM_FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

/// Web Mercator is undefined at the poles; EPSG:3857 clips here.
const WEB_MERCATOR_MAX_LAT: f64 = 85.051_128_779_806_59;

fn eccentricity_squared() -> f64 {
    WGS84_F * (2.0 - WGS84_F)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Projection {
    /// Geodetic degrees, longitude first
    LonLat,
    /// Spherical Mercator on the WGS 84 semi-major axis
    WebMercator,
    /// Ellipsoidal Lambert cylindrical equal-area
    CylindricalEqualArea { standard_parallel: f64 },
    /// Universal Transverse Mercator
    Utm { zone: u8, south: bool },
}

impl Projection {
    /// Geodetic (lon, lat) in degrees to projected (x, y)
    pub fn forward(&self, lon: f64, lat: f64) -> Option<(f64, f64)> {
        if !lon.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return None;
        }
        match *self {
            Projection::LonLat => Some((lon, lat)),
            Projection::WebMercator => {
                if lat.abs() > WEB_MERCATOR_MAX_LAT {
                    return None;
                }
                let x = WGS84_A * lon.to_radians();
                let y = WGS84_A * (FRAC_PI_4 + lat.to_radians() / 2.0).tan().ln();
                Some((x, y))
            }
            Projection::CylindricalEqualArea { standard_parallel } => {
                let k0 = cea_scale(standard_parallel);
                let x = WGS84_A * k0 * lon.to_radians();
                let y = WGS84_A * authalic_q(lat.to_radians().sin()) / (2.0 * k0);
                Some((x, y))
            }
            Projection::Utm { zone, south } => utm_forward(zone, south, lon, lat),
        }
    }

    /// Projected (x, y) to geodetic (lon, lat) in degrees
    pub fn inverse(&self, x: f64, y: f64) -> Option<(f64, f64)> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        match *self {
            Projection::LonLat => {
                if (-90.0..=90.0).contains(&y) {
                    Some((x, y))
                } else {
                    None
                }
            }
            Projection::WebMercator => {
                let lon = (x / WGS84_A).to_degrees();
                let lat = (2.0 * (y / WGS84_A).exp().atan() - 2.0 * FRAC_PI_4).to_degrees();
                Some((lon, lat))
            }
            Projection::CylindricalEqualArea { standard_parallel } => {
                let k0 = cea_scale(standard_parallel);
                let qp = authalic_q(1.0);
                let ratio = 2.0 * y * k0 / (WGS84_A * qp);
                if ratio.abs() > 1.0 + 1e-12 {
                    return None;
                }
                let beta = ratio.clamp(-1.0, 1.0).asin();
                let lat = authalic_to_geodetic(beta);
                let lon = (x / (WGS84_A * k0)).to_degrees();
                Some((lon, lat.to_degrees()))
            }
            Projection::Utm { zone, south } => utm_inverse(zone, south, x, y),
        }
    }
}

/// Scale along the parallels for a cylindrical equal-area projection
fn cea_scale(standard_parallel: f64) -> f64 {
    let e2 = eccentricity_squared();
    let sin = standard_parallel.to_radians().sin();
    standard_parallel.to_radians().cos() / (1.0 - e2 * sin * sin).sqrt()
}

/// Snyder's q for the authalic latitude
fn authalic_q(sin_lat: f64) -> f64 {
    let e2 = eccentricity_squared();
    let e = e2.sqrt();
    let es = e * sin_lat;
    (1.0 - e2) * (sin_lat / (1.0 - es * es) - (1.0 / (2.0 * e)) * ((1.0 - es) / (1.0 + es)).ln())
}

fn authalic_to_geodetic(beta: f64) -> f64 {
    let e2 = eccentricity_squared();
    let e4 = e2 * e2;
    let e6 = e4 * e2;
    beta + (e2 / 3.0 + 31.0 * e4 / 180.0 + 517.0 * e6 / 5040.0) * (2.0 * beta).sin()
        + (23.0 * e4 / 360.0 + 251.0 * e6 / 3780.0) * (4.0 * beta).sin()
        + (761.0 * e6 / 45360.0) * (6.0 * beta).sin()
}

/// Krüger series coefficients, third order in n
struct Kruger {
    rectifying_radius: f64,
    alpha: [f64; 3],
    beta: [f64; 3],
    delta: [f64; 3],
}

impl Kruger {
    fn wgs84() -> Self {
        let n = WGS84_F / (2.0 - WGS84_F);
        let n2 = n * n;
        let n3 = n2 * n;
        Self {
            rectifying_radius: WGS84_A / (1.0 + n) * (1.0 + n2 / 4.0 + n2 * n2 / 64.0),
            alpha: [
                n / 2.0 - 2.0 * n2 / 3.0 + 5.0 * n3 / 16.0,
                13.0 * n2 / 48.0 - 3.0 * n3 / 5.0,
                61.0 * n3 / 240.0,
            ],
            beta: [
                n / 2.0 - 2.0 * n2 / 3.0 + 37.0 * n3 / 96.0,
                n2 / 48.0 + n3 / 15.0,
                17.0 * n3 / 480.0,
            ],
            delta: [
                2.0 * n - 2.0 * n2 / 3.0 - 2.0 * n3,
                7.0 * n2 / 3.0 - 8.0 * n3 / 5.0,
                56.0 * n3 / 15.0,
            ],
        }
    }
}

fn utm_central_meridian(zone: u8) -> f64 {
    f64::from(zone) * 6.0 - 183.0
}

fn utm_forward(zone: u8, south: bool, lon: f64, lat: f64) -> Option<(f64, f64)> {
    let dlon = (lon - utm_central_meridian(zone)).to_radians();
    if lat.abs() >= 90.0 || dlon.abs() >= std::f64::consts::FRAC_PI_2 {
        return None;
    }

    let k = Kruger::wgs84();
    let e = eccentricity_squared().sqrt();
    let sin_lat = lat.to_radians().sin();
    let t = (sin_lat.atanh() - e * (e * sin_lat).atanh()).sinh();
    let xi_prime = t.atan2(dlon.cos());
    let eta_prime = (dlon.sin() / (1.0 + t * t).sqrt()).atanh();

    let mut xi = xi_prime;
    let mut eta = eta_prime;
    for (j, alpha) in k.alpha.iter().enumerate() {
        let m = 2.0 * (j as f64 + 1.0);
        xi += alpha * (m * xi_prime).sin() * (m * eta_prime).cosh();
        eta += alpha * (m * xi_prime).cos() * (m * eta_prime).sinh();
    }

    let scale = UTM_K0 * k.rectifying_radius;
    let false_northing = if south { UTM_FALSE_NORTHING_SOUTH } else { 0.0 };
    Some((UTM_FALSE_EASTING + scale * eta, false_northing + scale * xi))
}

fn utm_inverse(zone: u8, south: bool, easting: f64, northing: f64) -> Option<(f64, f64)> {
    let k = Kruger::wgs84();
    let scale = UTM_K0 * k.rectifying_radius;
    let false_northing = if south { UTM_FALSE_NORTHING_SOUTH } else { 0.0 };
    let xi = (northing - false_northing) / scale;
    let eta = (easting - UTM_FALSE_EASTING) / scale;

    let mut xi_prime = xi;
    let mut eta_prime = eta;
    for (j, beta) in k.beta.iter().enumerate() {
        let m = 2.0 * (j as f64 + 1.0);
        xi_prime -= beta * (m * xi).sin() * (m * eta).cosh();
        eta_prime -= beta * (m * xi).cos() * (m * eta).sinh();
    }

    let chi = (xi_prime.sin() / eta_prime.cosh()).asin();
    let mut lat = chi;
    for (j, delta) in k.delta.iter().enumerate() {
        lat += delta * (2.0 * (j as f64 + 1.0) * chi).sin();
    }
    let lon = utm_central_meridian(zone) + eta_prime.sinh().atan2(xi_prime.cos()).to_degrees();

    if !lat.is_finite() || !lon.is_finite() {
        return None;
    }
    Some((lon, lat.to_degrees()))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASE2: Projection = Projection::CylindricalEqualArea {
        standard_parallel: 30.0,
    };

    fn assert_round_trip(projection: Projection, lon: f64, lat: f64) {
        let (x, y) = projection.forward(lon, lat).unwrap();
        let (lon2, lat2) = projection.inverse(x, y).unwrap();
        assert!(
            (lon - lon2).abs() < 1e-6 && (lat - lat2).abs() < 1e-6,
            "{projection:?}: ({lon}, {lat}) -> ({x}, {y}) -> ({lon2}, {lat2})"
        );
    }

    #[test]
    fn ease2_extent_matches_published_bounds() {
        let (x, _) = EASE2.forward(180.0, 0.0).unwrap();
        assert!((x - 17_367_530.445).abs() < 1.0, "{x}");
        let (_, y) = EASE2.forward(0.0, 0.0).unwrap();
        assert!(y.abs() < 1e-9);
    }

    #[test]
    fn ease2_round_trips() {
        for &(lon, lat) in &[(0.0, 0.0), (12.5, 45.2), (-120.0, -33.3), (179.9, 84.0)] {
            assert_round_trip(EASE2, lon, lat);
        }
    }

    #[test]
    fn web_mercator_known_value_and_round_trip() {
        let (x, y) = Projection::WebMercator.forward(180.0, 0.0).unwrap();
        assert!((x - 20_037_508.342_789_244).abs() < 1e-6);
        assert!(y.abs() < 1e-6);
        assert_round_trip(Projection::WebMercator, -73.98, 40.75);
        assert!(Projection::WebMercator.forward(0.0, 89.0).is_none());
    }

    #[test]
    fn utm_central_meridian_on_equator_is_false_origin() {
        let zone31 = Projection::Utm { zone: 31, south: false };
        let (e, n) = zone31.forward(3.0, 0.0).unwrap();
        assert!((e - 500_000.0).abs() < 1e-6);
        assert!(n.abs() < 1e-6);

        let zone31s = Projection::Utm { zone: 31, south: true };
        let (_, n) = zone31s.forward(3.0, 0.0).unwrap();
        assert!((n - 10_000_000.0).abs() < 1e-6);
    }

    #[test]
    fn utm_round_trips_inside_zone() {
        let zone33 = Projection::Utm { zone: 33, south: false };
        assert_round_trip(zone33, 15.0, 52.0);
        assert_round_trip(zone33, 12.1, 60.3);
        let (_, n) = zone33.forward(15.0, 52.0).unwrap();
        assert!((n - 5_761_038.213).abs() < 0.01, "{n}");
        let zone56s = Projection::Utm { zone: 56, south: true };
        assert_round_trip(zone56s, 151.2, -33.9);
    }

    #[test]
    fn rejects_latitudes_outside_range() {
        assert!(Projection::LonLat.forward(0.0, 91.0).is_none());
        assert!(EASE2.forward(0.0, f64::NAN).is_none());
        assert!(EASE2.inverse(0.0, 1e9).is_none());
    }
}
