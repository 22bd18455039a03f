//! Great-circle distance between coordinates

use haversine::{Location as HaversineLocation, Units, distance};

use crate::models::Coordinate;

/// Great-circle distance between two coordinates in kilometres
///
/// Haversine on a spherical Earth (radius 6371 km), accurate to within
/// about 0.5% at Earth scale. Identical endpoints return zero up to
/// floating-point noise and antipodal pairs are handled fine. Inputs are
/// not range-checked here; non-finite components propagate as NaN, so
/// callers validate at the boundary where coordinates enter the system.
#[must_use]
pub fn distance_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let from_haversine = HaversineLocation {
        latitude: from.latitude,
        longitude: from.longitude,
    };
    let to_haversine = HaversineLocation {
        latitude: to.latitude,
        longitude: to.longitude,
    };
    distance(from_haversine, to_haversine, Units::Kilometers)
}
