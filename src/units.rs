//! Length and angle unit tags
//!
//! Both enumerations are closed. Tags coming from outside the crate are
//! either parsed strictly through `FromStr` or resolved permissively, in
//! which case an unknown tag falls back to the base unit.

use std::fmt;
use std::str::FromStr;

use crate::errors::UnknownUnit;
use crate::log::warn;

/// Unit of a linear dimension
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum LengthUnit {
    #[default]
    Meter,
    Centimeter,
    Millimeter,
    Kilometer,
    Inch,
    Foot,
    Yard,
    Mile,
}

impl LengthUnit {
    /// Every length unit, in the order a unit picker lists them
    pub const ALL: [LengthUnit; 8] = [
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Kilometer,
        LengthUnit::Inch,
        LengthUnit::Foot,
        LengthUnit::Yard,
        LengthUnit::Mile,
    ];

    /// Multiplier that takes a value in this unit to meters.
    pub const fn factor(self) -> f64 {
        match self {
            LengthUnit::Meter => 1.0,
            LengthUnit::Centimeter => 0.01,
            LengthUnit::Millimeter => 0.001,
            LengthUnit::Kilometer => 1000.0,
            LengthUnit::Inch => 0.0254,
            LengthUnit::Foot => 0.3048,
            LengthUnit::Yard => 0.9144,
            LengthUnit::Mile => 1609.34,
        }
    }

    /// Canonical tag, as shown in derivation traces
    pub const fn tag(self) -> &'static str {
        match self {
            LengthUnit::Meter => "meter",
            LengthUnit::Centimeter => "centimeter",
            LengthUnit::Millimeter => "millimeter",
            LengthUnit::Kilometer => "kilometer",
            LengthUnit::Inch => "inch",
            LengthUnit::Foot => "foot",
            LengthUnit::Yard => "yard",
            LengthUnit::Mile => "mile",
        }
    }

    /// Resolve a tag, treating anything unrecognized as meters.
    pub fn resolve(tag: &str) -> LengthUnit {
        tag.parse().unwrap_or_else(|_| {
            warn!("unknown length unit {:?}, using meter", tag);
            LengthUnit::Meter
        })
    }
}

impl FromStr for LengthUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unit = match s.trim().to_ascii_lowercase().as_str() {
            "meter" | "meters" | "metre" | "metres" | "m" => LengthUnit::Meter,
            "centimeter" | "centimeters" | "centimetre" | "centimetres" | "cm" => {
                LengthUnit::Centimeter
            }
            "millimeter" | "millimeters" | "millimetre" | "millimetres" | "mm" => {
                LengthUnit::Millimeter
            }
            "kilometer" | "kilometers" | "kilometre" | "kilometres" | "km" => {
                LengthUnit::Kilometer
            }
            "inch" | "inches" | "in" => LengthUnit::Inch,
            "foot" | "feet" | "ft" => LengthUnit::Foot,
            "yard" | "yards" | "yd" => LengthUnit::Yard,
            "mile" | "miles" | "mi" => LengthUnit::Mile,
            _ => {
                return Err(UnknownUnit {
                    tag: s.to_string(),
                    expected: "length",
                });
            }
        };
        Ok(unit)
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unit of a sector's included angle
///
/// The two units select different sector formulas, so an angle is never
/// converted between them before evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    pub const ALL: [AngleUnit; 2] = [AngleUnit::Degrees, AngleUnit::Radians];

    pub const fn tag(self) -> &'static str {
        match self {
            AngleUnit::Degrees => "degrees",
            AngleUnit::Radians => "radians",
        }
    }

    /// Resolve a tag, treating anything unrecognized as degrees.
    pub fn resolve(tag: &str) -> AngleUnit {
        tag.parse().unwrap_or_else(|_| {
            warn!("unknown angle unit {:?}, using degrees", tag);
            AngleUnit::Degrees
        })
    }
}

impl FromStr for AngleUnit {
    type Err = UnknownUnit;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "degrees" | "degree" | "deg" | "°" => Ok(AngleUnit::Degrees),
            "radians" | "radian" | "rad" => Ok(AngleUnit::Radians),
            _ => Err(UnknownUnit {
                tag: s.to_string(),
                expected: "angle",
            }),
        }
    }
}

impl fmt::Display for AngleUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// A unit of either kind, as carried by a keyed [`Dimension`](crate::types::Dimension)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unit {
    Length(LengthUnit),
    Angle(AngleUnit),
}

impl Unit {
    /// The length unit, if this is one
    pub fn as_length(self) -> Option<LengthUnit> {
        match self {
            Unit::Length(u) => Some(u),
            Unit::Angle(_) => None,
        }
    }

    /// The angle unit, if this is one
    pub fn as_angle(self) -> Option<AngleUnit> {
        match self {
            Unit::Angle(u) => Some(u),
            Unit::Length(_) => None,
        }
    }
}

impl From<LengthUnit> for Unit {
    fn from(u: LengthUnit) -> Self {
        Unit::Length(u)
    }
}

impl From<AngleUnit> for Unit {
    fn from(u: AngleUnit) -> Self {
        Unit::Angle(u)
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unit::Length(u) => u.fmt(f),
            Unit::Angle(u) => u.fmt(f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn factors_are_positive() {
        for unit in LengthUnit::ALL {
            assert!(unit.factor() > 0.0, "{unit} has a non-positive factor");
        }
    }

    #[test]
    fn tags_round_trip_through_from_str() {
        for unit in LengthUnit::ALL {
            assert_eq!(unit.tag().parse::<LengthUnit>(), Ok(unit));
        }
        for unit in AngleUnit::ALL {
            assert_eq!(unit.tag().parse::<AngleUnit>(), Ok(unit));
        }
    }

    #[test]
    fn abbreviations() {
        assert_eq!("ft".parse::<LengthUnit>(), Ok(LengthUnit::Foot));
        assert_eq!("KM".parse::<LengthUnit>(), Ok(LengthUnit::Kilometer));
        assert_eq!("in".parse::<LengthUnit>(), Ok(LengthUnit::Inch));
        assert_eq!("rad".parse::<AngleUnit>(), Ok(AngleUnit::Radians));
        assert_eq!("°".parse::<AngleUnit>(), Ok(AngleUnit::Degrees));
    }

    #[test]
    fn strict_parse_rejects_unknown_tag() {
        let err = "furlong".parse::<LengthUnit>().unwrap_err();
        assert_eq!(err.tag, "furlong");
        assert_eq!(err.expected, "length");
    }

    #[test]
    fn resolve_falls_back_to_base_unit() {
        assert_eq!(LengthUnit::resolve("furlong"), LengthUnit::Meter);
        assert_eq!(LengthUnit::resolve(""), LengthUnit::Meter);
        assert_eq!(LengthUnit::resolve("yard"), LengthUnit::Yard);
        assert_eq!(AngleUnit::resolve("gradians"), AngleUnit::Degrees);
        assert_eq!(AngleUnit::resolve("radians"), AngleUnit::Radians);
    }

    #[test]
    fn unit_kind_accessors() {
        let u = Unit::from(LengthUnit::Inch);
        assert_eq!(u.as_length(), Some(LengthUnit::Inch));
        assert_eq!(u.as_angle(), None);
        assert_eq!(Unit::from(AngleUnit::Radians).to_string(), "radians");
    }
}
