//! Unit conversion to the base length unit
//!
//! Every function here is a single multiplication or division, so IEEE-754
//! rules decide what happens to NaN and infinity.

use crate::types::Meters;
use crate::units::LengthUnit;

/// Express `value` (given in `unit`) in meters.
#[inline]
pub fn to_base_meters(value: f64, unit: LengthUnit) -> Meters {
    Meters(value * unit.factor())
}

/// Inverse of [`to_base_meters`].
#[inline]
pub fn from_base_meters(meters: Meters, unit: LengthUnit) -> f64 {
    meters.raw() / unit.factor()
}

#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * (180.0 / std::f64::consts::PI)
}

#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * (std::f64::consts::PI / 180.0)
}
