//! Strongly-typed numeric primitives (zero-cost newtypes).
//!
//! Formulas work on [`Meters`] and [`SquareMeters`], never on bare `f64`.
//! None of these types reject NaN or infinity: an unparseable field reaches
//! the evaluator as NaN and must come out the other side as a NaN area.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Add, Div, Mul};

use crate::defaults;
use crate::kind::Field;
use crate::units::{AngleUnit, LengthUnit, Unit};

/// Length normalized to meters
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Meters(pub f64);

impl Meters {
    /// Square of this length
    #[inline]
    pub fn squared(self) -> SquareMeters {
        self * self
    }

    /// Get the raw value (use sparingly, prefer typed operations)
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl Add for Meters {
    type Output = Meters;
    fn add(self, rhs: Meters) -> Meters {
        Meters(self.0 + rhs.0)
    }
}

/// Meters * Meters = SquareMeters
impl Mul for Meters {
    type Output = SquareMeters;
    fn mul(self, rhs: Meters) -> SquareMeters {
        SquareMeters(self.0 * rhs.0)
    }
}

impl Mul<f64> for Meters {
    type Output = Meters;
    fn mul(self, rhs: f64) -> Meters {
        Meters(self.0 * rhs)
    }
}

/// Area in square meters
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct SquareMeters(pub f64);

impl SquareMeters {
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }

    #[inline]
    pub fn is_nan(self) -> bool {
        self.0.is_nan()
    }
}

impl Mul<f64> for SquareMeters {
    type Output = SquareMeters;
    fn mul(self, rhs: f64) -> SquareMeters {
        SquareMeters(self.0 * rhs)
    }
}

impl Div<f64> for SquareMeters {
    type Output = SquareMeters;
    fn div(self, rhs: f64) -> SquareMeters {
        SquareMeters(self.0 / rhs)
    }
}

/// Rounded to the display precision; the stored value keeps full precision.
impl fmt::Display for SquareMeters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match non_finite(self.0) {
            Some(text) => f.write_str(text)?,
            None => {
                let decimals = defaults::AREA_DECIMALS;
                write!(f, "{:.*}", decimals, round_half_away(self.0, decimals))?;
            }
        }
        write!(f, " {}", defaults::AREA_SUFFIX)
    }
}

/// Round to `decimals` places, ties away from zero (0.125 -> 0.13)
fn round_half_away(value: f64, decimals: usize) -> f64 {
    let scale = 10f64.powi(decimals as i32);
    let rounded = (value * scale).round() / scale;
    if rounded.is_finite() { rounded } else { value }
}

/// Text for values that have no digits
fn non_finite(value: f64) -> Option<&'static str> {
    if value.is_nan() {
        Some("NaN")
    } else if value == f64::INFINITY {
        Some("Infinity")
    } else if value == f64::NEG_INFINITY {
        Some("-Infinity")
    } else {
        None
    }
}

/// A raw value paired with the unit it was entered in
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Measure<U> {
    pub value: f64,
    pub unit: U,
}

impl<U> Measure<U> {
    pub fn new(value: f64, unit: U) -> Self {
        Self { value, unit }
    }
}

pub type LengthMeasure = Measure<LengthUnit>;

impl LengthMeasure {
    /// Normalize to meters
    pub fn meters(self) -> Meters {
        crate::convert::to_base_meters(self.value, self.unit)
    }
}

/// Shows the value as entered, e.g. `2.5 foot`
impl<U: fmt::Display> fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match non_finite(self.value) {
            Some(text) => write!(f, "{} {}", text, self.unit),
            None => write!(f, "{} {}", self.value, self.unit),
        }
    }
}

/// One user-supplied dimension, unit of either kind
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimension {
    pub value: f64,
    pub unit: Unit,
}

impl Dimension {
    pub fn new(value: f64, unit: impl Into<Unit>) -> Self {
        Self {
            value,
            unit: unit.into(),
        }
    }

    /// A length dimension
    pub fn length(value: f64, unit: LengthUnit) -> Self {
        Self::new(value, unit)
    }

    /// An angle dimension
    pub fn angle(value: f64, unit: AngleUnit) -> Self {
        Self::new(value, unit)
    }
}

/// Dimensions keyed by field name
pub type DimensionMap = BTreeMap<Field, Dimension>;
