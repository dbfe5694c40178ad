//! Geographic inputs and great-circle distance.
//!
//! [`distance_meters`] is the only computation in this module that the
//! engine depends on. It is stateless and safe to call from any thread.

mod quality;
mod types;

pub use quality::{FixQuality, FixQualityTracker, ACCEPTABLE_ACCURACY_M, GOOD_ACCURACY_M};
pub use types::{GeoFix, PinLocation};

/// Mean Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Great-circle distance between two points using the haversine formula.
///
/// Inputs are degrees. Uses a spherical Earth of radius [`EARTH_RADIUS_M`],
/// which is accurate enough for sub-kilometer start-line distances.
///
/// Finite inputs always give a finite, non-negative result, including
/// identical and antipodal points.
///
/// # Example
///
/// ```rust
/// use pursuit_start::geo::distance_meters;
///
/// let d = distance_meters(0.0, 0.0, 0.0, 1.0);
/// assert!((d - 111_195.0).abs() < 1.0);
/// assert_eq!(distance_meters(37.8, -122.4, 37.8, -122.4), 0.0);
/// ```
#[inline]
pub fn distance_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let d_lat = (lat2 - lat1).to_radians();
    let d_lon = (lon2 - lon1).to_radians();
    let r_lat1 = lat1.to_radians();
    let r_lat2 = lat2.to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + r_lat1.cos() * r_lat2.cos() * (d_lon / 2.0).sin().powi(2);
    // Rounding can push `a` a hair outside [0, 1] near identical or antipodal points.
    let a = a.clamp(0.0, 1.0);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
    EARTH_RADIUS_M * c
}

/// Distance from a fix to the pin.
#[inline]
pub fn distance_to_pin(fix: &GeoFix, pin: &PinLocation) -> f64 {
    distance_meters(fix.latitude, fix.longitude, pin.latitude, pin.longitude)
}
