//! Default selections and display settings

use crate::kind::ShapeKind;
use crate::units::{AngleUnit, LengthUnit};

/// Shape a fresh (or cleared) form starts on
pub const SHAPE: ShapeKind = ShapeKind::Rectangle;
pub const LENGTH_UNIT: LengthUnit = LengthUnit::Meter;
pub const ANGLE_UNIT: AngleUnit = AngleUnit::Degrees;
/// Decimal places on the final trace line
pub const AREA_DECIMALS: usize = 2;
pub const AREA_SUFFIX: &str = "m²";
