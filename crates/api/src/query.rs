//! Shared query parameter types for API handlers.

use serde::Deserialize;
use validator::Validate;

fn default_radius() -> f64 {
    50.0
}

fn default_limit() -> i64 {
    100
}

/// Parameters for radius searches
/// (`?longitude=&latitude=&radius=&skip=&limit=`).
///
/// `radius` is in meters. `skip`/`limit` paginate the already
/// distance-filtered result.
#[derive(Debug, Deserialize, Validate)]
pub struct RadiusParams {
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[serde(default = "default_radius")]
    #[validate(range(min = 0.0))]
    pub radius: f64,
    #[serde(default)]
    #[validate(range(min = 0))]
    pub skip: i64,
    #[serde(default = "default_limit")]
    #[validate(range(min = 0))]
    pub limit: i64,
}
