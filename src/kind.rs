//! Shape kinds and the dimension fields each one requires

use std::fmt;
use std::str::FromStr;

use crate::defaults;
use crate::errors::UnknownShape;
use crate::units::Unit;

/// Which shape an area is computed for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    Rectangle,
    Circle,
    Triangle,
    Trapezoid,
    Ellipse,
    Sector,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::Rectangle,
        ShapeKind::Circle,
        ShapeKind::Triangle,
        ShapeKind::Trapezoid,
        ShapeKind::Ellipse,
        ShapeKind::Sector,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "rectangle",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
            ShapeKind::Trapezoid => "trapezoid",
            ShapeKind::Ellipse => "ellipse",
            ShapeKind::Sector => "sector",
        }
    }

    /// Heading of the result block
    pub const fn title(self) -> &'static str {
        match self {
            ShapeKind::Rectangle => "Rectangle Area",
            ShapeKind::Circle => "Circle Area",
            ShapeKind::Triangle => "Triangle Area",
            ShapeKind::Trapezoid => "Trapezoid Area",
            ShapeKind::Ellipse => "Ellipse Area",
            ShapeKind::Sector => "Sector Area",
        }
    }

    /// Required fields, in input order
    pub const fn fields(self) -> &'static [Field] {
        match self {
            ShapeKind::Rectangle => &[Field::Length, Field::Width],
            ShapeKind::Circle => &[Field::Radius],
            ShapeKind::Triangle => &[Field::Base, Field::Height],
            ShapeKind::Trapezoid => &[Field::Base, Field::TopBase, Field::Height],
            ShapeKind::Ellipse => &[Field::SemiMajorAxis, Field::SemiMinorAxis],
            ShapeKind::Sector => &[Field::Radius, Field::Angle],
        }
    }

    pub fn has_field(self, field: Field) -> bool {
        self.fields().contains(&field)
    }
}

impl Default for ShapeKind {
    fn default() -> Self {
        defaults::SHAPE
    }
}

impl FromStr for ShapeKind {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name() == name)
            .ok_or_else(|| UnknownShape {
                name: s.to_string(),
            })
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Whether a field holds a length or an angle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Length,
    Angle,
}

/// A named dimension input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Length,
    Width,
    Radius,
    Base,
    TopBase,
    Height,
    SemiMajorAxis,
    SemiMinorAxis,
    Angle,
}

impl Field {
    pub const ALL: [Field; 9] = [
        Field::Length,
        Field::Width,
        Field::Radius,
        Field::Base,
        Field::TopBase,
        Field::Height,
        Field::SemiMajorAxis,
        Field::SemiMinorAxis,
        Field::Angle,
    ];

    /// Mapping key, e.g. `topBase`
    pub const fn key(self) -> &'static str {
        match self {
            Field::Length => "length",
            Field::Width => "width",
            Field::Radius => "radius",
            Field::Base => "base",
            Field::TopBase => "topBase",
            Field::Height => "height",
            Field::SemiMajorAxis => "semiMajorAxis",
            Field::SemiMinorAxis => "semiMinorAxis",
            Field::Angle => "angle",
        }
    }

    /// Input label, e.g. `Top Base`
    pub const fn label(self) -> &'static str {
        match self {
            Field::Length => "Length",
            Field::Width => "Width",
            Field::Radius => "Radius",
            Field::Base => "Base",
            Field::TopBase => "Top Base",
            Field::Height => "Height",
            Field::SemiMajorAxis => "Semi-Major Axis",
            Field::SemiMinorAxis => "Semi-Minor Axis",
            Field::Angle => "Angle",
        }
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Field::Angle => FieldKind::Angle,
            _ => FieldKind::Length,
        }
    }

    /// Unit a field starts with before the user picks one
    pub const fn default_unit(self) -> Unit {
        match self.kind() {
            FieldKind::Length => Unit::Length(defaults::LENGTH_UNIT),
            FieldKind::Angle => Unit::Angle(defaults::ANGLE_UNIT),
        }
    }

    /// Look up a field by key. Case, `_` and `-` are ignored, so
    /// `topBase`, `top_base` and `TOP-BASE` all name [`Field::TopBase`].
    pub fn from_key(key: &str) -> Option<Field> {
        let wanted = normalize_key(key);
        Field::ALL
            .into_iter()
            .find(|field| normalize_key(field.key()) == wanted)
    }
}

fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
