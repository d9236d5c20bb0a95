//! Geographic primitives: WKT point derivation, great-circle distance, and
//! the bounding box used to prefilter radius queries in SQL.
//!
//! Points are `geo_types::Point<f64>` with `x = longitude`, `y = latitude`
//! in WGS84 degrees. Distances are meters.

use geo_types::Point;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Render the canonical WKT form of a coordinate pair: `POINT(lon lat)`.
///
/// This is the derived `geo` value stored alongside every song point. It is
/// always recomputed from the supplied longitude/latitude, so parsing the
/// coordinates back out yields exactly the stored column values.
pub fn wkt_point(longitude: f64, latitude: f64) -> String {
    format!("POINT({longitude} {latitude})")
}

/// Great-circle distance between two points in meters (haversine).
pub fn distance_m(a: Point<f64>, b: Point<f64>) -> f64 {
    let lat_a = a.y().to_radians();
    let lat_b = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / 2.0).sin().powi(2) + lat_a.cos() * lat_b.cos() * (dlon / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}

/// Coordinate window guaranteed to contain every point within `radius_m`
/// of `center`.
///
/// The window deliberately overshoots (parallels shrink toward the poles,
/// and no antimeridian splitting is attempted -- a window that would cross
/// it widens to the full longitude range). Callers must still apply the
/// exact [`distance_m`] filter to rows inside the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min_longitude: f64,
    pub max_longitude: f64,
    pub min_latitude: f64,
    pub max_latitude: f64,
}

pub fn bounding_box(center: Point<f64>, radius_m: f64) -> BoundingBox {
    let lat_delta = (radius_m / EARTH_RADIUS_M).to_degrees();
    let min_latitude = (center.y() - lat_delta).max(-90.0);
    let max_latitude = (center.y() + lat_delta).min(90.0);

    // Size the longitude window for the pole-ward edge of the box, where
    // parallel circles are smallest and the required delta is largest.
    let widest_lat = (center.y().abs() + lat_delta).min(90.0);
    let lon_delta = if widest_lat >= 89.0 {
        180.0
    } else {
        lat_delta / widest_lat.to_radians().cos()
    };

    let (min_longitude, max_longitude) = if lon_delta >= 180.0
        || center.x() - lon_delta < -180.0
        || center.x() + lon_delta > 180.0
    {
        (-180.0, 180.0)
    } else {
        (center.x() - lon_delta, center.x() + lon_delta)
    };

    BoundingBox {
        min_longitude,
        max_longitude,
        min_latitude,
        max_latitude,
    }
}
