// src/services/distance.rs
// DOCUMENTATION: Great-circle distance
// PURPOSE: Local proximity ranking without any provider call

use crate::models::Coordinates;

/// Mean Earth radius in meters
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate distance between two coordinates in meters
/// Uses Haversine formula
pub fn haversine_distance(from: &Coordinates, to: &Coordinates) -> f64 {
    let phi1 = from.lat().to_radians();
    let phi2 = to.lat().to_radians();
    let d_phi = (to.lat() - from.lat()).to_radians();
    let d_lambda = (to.lng() - from.lng()).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);

    // rounding can push `a` a hair past 1 for antipodal points
    let a = a.clamp(0.0, 1.0);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_M * c
}
