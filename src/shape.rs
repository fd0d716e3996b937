//! Shape types and their area formulas
//!
//! Each shape is its own type that knows how to:
//! - Compute its area in square meters
//! - Name its symbolic formula
//! - Substitute the values as the user entered them into that formula
//!
//! [`Shape`] is the tagged variant over all of them. It carries only the
//! measures its own kind needs, so nothing entered for one shape can reach
//! another shape's formula.

use std::f64::consts::PI;

use enum_dispatch::enum_dispatch;

use crate::kind::{Field, ShapeKind};
use crate::types::{Dimension, DimensionMap, LengthMeasure, SquareMeters};
use crate::units::{AngleUnit, LengthUnit};

/// Common behavior for all shapes
#[enum_dispatch]
pub trait AreaFormula {
    fn kind(&self) -> ShapeKind;

    /// Heading of the result block
    fn title(&self) -> &'static str {
        self.kind().title()
    }

    /// Symbolic formula, e.g. `Length × Width`
    fn formula(&self) -> &'static str;

    /// The formula with the raw values and units substituted in
    fn substitution(&self) -> String;

    /// Area with every length normalized to meters first
    fn area(&self) -> SquareMeters;
}

/// A shape with its dimensions
#[enum_dispatch(AreaFormula)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    Rectangle,
    Circle,
    Triangle,
    Trapezoid,
    Ellipse,
    Sector,
}

impl Shape {
    /// Build the shape for `kind` from a keyed mapping.
    ///
    /// Only `kind`'s own fields are read. A missing field behaves like an
    /// unparseable one (NaN, default unit) and a unit of the wrong kind is
    /// replaced by the field's default unit.
    pub fn from_dimensions(kind: ShapeKind, dims: &DimensionMap) -> Shape {
        let len = |field| length_of(dims, field);
        match kind {
            ShapeKind::Rectangle => Rectangle {
                length: len(Field::Length),
                width: len(Field::Width),
            }
            .into(),
            ShapeKind::Circle => Circle {
                radius: len(Field::Radius),
            }
            .into(),
            ShapeKind::Triangle => Triangle {
                base: len(Field::Base),
                height: len(Field::Height),
            }
            .into(),
            ShapeKind::Trapezoid => Trapezoid {
                base: len(Field::Base),
                top_base: len(Field::TopBase),
                height: len(Field::Height),
            }
            .into(),
            ShapeKind::Ellipse => Ellipse {
                semi_major_axis: len(Field::SemiMajorAxis),
                semi_minor_axis: len(Field::SemiMinorAxis),
            }
            .into(),
            ShapeKind::Sector => Sector {
                radius: len(Field::Radius),
                angle: angle_of(dims),
            }
            .into(),
        }
    }
}

fn length_of(dims: &DimensionMap, field: Field) -> LengthMeasure {
    match dims.get(&field) {
        Some(Dimension { value, unit }) => {
            LengthMeasure::new(*value, unit.as_length().unwrap_or_default())
        }
        None => LengthMeasure::new(f64::NAN, LengthUnit::default()),
    }
}

fn angle_of(dims: &DimensionMap) -> SectorAngle {
    match dims.get(&Field::Angle) {
        Some(Dimension { value, unit }) => {
            SectorAngle::new(*value, unit.as_angle().unwrap_or_default())
        }
        None => SectorAngle::new(f64::NAN, AngleUnit::default()),
    }
}

// ============================================================================
// Shape Types
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    pub length: LengthMeasure,
    pub width: LengthMeasure,
}

impl AreaFormula for Rectangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Rectangle
    }

    fn formula(&self) -> &'static str {
        "Length × Width"
    }

    fn substitution(&self) -> String {
        format!("{} × {}", self.length, self.width)
    }

    fn area(&self) -> SquareMeters {
        self.length.meters() * self.width.meters()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub radius: LengthMeasure,
}

impl AreaFormula for Circle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Circle
    }

    fn formula(&self) -> &'static str {
        "π × Radius²"
    }

    fn substitution(&self) -> String {
        format!("π × ({})²", self.radius)
    }

    fn area(&self) -> SquareMeters {
        self.radius.meters().squared() * PI
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    pub base: LengthMeasure,
    pub height: LengthMeasure,
}

impl AreaFormula for Triangle {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Triangle
    }

    fn formula(&self) -> &'static str {
        "(Base × Height) / 2"
    }

    fn substitution(&self) -> String {
        format!("({} × {}) / 2", self.base, self.height)
    }

    fn area(&self) -> SquareMeters {
        (self.base.meters() * self.height.meters()) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Trapezoid {
    pub base: LengthMeasure,
    pub top_base: LengthMeasure,
    pub height: LengthMeasure,
}

impl AreaFormula for Trapezoid {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Trapezoid
    }

    fn formula(&self) -> &'static str {
        "((Base 1 + Base 2) × Height) / 2"
    }

    fn substitution(&self) -> String {
        format!(
            "(({} + {}) × {}) / 2",
            self.base, self.top_base, self.height
        )
    }

    fn area(&self) -> SquareMeters {
        ((self.base.meters() + self.top_base.meters()) * self.height.meters()) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    pub semi_major_axis: LengthMeasure,
    pub semi_minor_axis: LengthMeasure,
}

impl AreaFormula for Ellipse {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Ellipse
    }

    fn formula(&self) -> &'static str {
        "π × Semi-Major Axis × Semi-Minor Axis"
    }

    fn substitution(&self) -> String {
        format!("π × {} × {}", self.semi_major_axis, self.semi_minor_axis)
    }

    fn area(&self) -> SquareMeters {
        (self.semi_major_axis.meters() * self.semi_minor_axis.meters()) * PI
    }
}

/// Included angle of a sector.
///
/// The unit picks the formula: degrees use the fraction-of-a-circle form,
/// radians use the closed form on the raw radian value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectorAngle {
    Degrees(f64),
    Radians(f64),
}

impl SectorAngle {
    pub fn new(value: f64, unit: AngleUnit) -> Self {
        match unit {
            AngleUnit::Degrees => SectorAngle::Degrees(value),
            AngleUnit::Radians => SectorAngle::Radians(value),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sector {
    pub radius: LengthMeasure,
    pub angle: SectorAngle,
}

impl AreaFormula for Sector {
    fn kind(&self) -> ShapeKind {
        ShapeKind::Sector
    }

    fn formula(&self) -> &'static str {
        match self.angle {
            SectorAngle::Degrees(_) => "(θ/360) × π × r²",
            SectorAngle::Radians(_) => "(θ × r²)/2",
        }
    }

    fn substitution(&self) -> String {
        match self.angle {
            SectorAngle::Degrees(deg) => {
                format!("({} degrees/360) × π × ({})²", deg, self.radius)
            }
            SectorAngle::Radians(rad) => {
                format!("({} radians × ({})²)/2", rad, self.radius)
            }
        }
    }

    fn area(&self) -> SquareMeters {
        let r_squared = self.radius.meters().squared();
        match self.angle {
            SectorAngle::Degrees(deg) => r_squared * (deg / 360.0 * PI),
            SectorAngle::Radians(rad) => r_squared * rad / 2.0,
        }
    }
}
