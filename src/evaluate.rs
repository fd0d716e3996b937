//! Area evaluation and derivation traces
//!
//! Evaluation is a pure function of its input: no state survives between
//! calls, and malformed numbers surface as a NaN area instead of an error.

use std::fmt;

use crate::kind::ShapeKind;
use crate::log::debug;
use crate::shape::{AreaFormula, Shape};
use crate::types::{DimensionMap, SquareMeters};

/// Outcome of one area calculation
#[derive(Debug, Clone, PartialEq)]
pub struct AreaResult {
    pub title: String,
    /// Formula, substituted values, numeric result (in that order)
    pub derivation_lines: Vec<String>,
    /// Full-precision area; only the trace is rounded
    pub area: SquareMeters,
}

impl AreaResult {
    /// The final numeric line, e.g. `Area = 6.00 m²`
    pub fn numeric_line(&self) -> &str {
        self.derivation_lines
            .last()
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Text offered for copying to the clipboard
    pub fn copy_text(&self) -> &str {
        self.numeric_line()
    }

    pub fn is_nan(&self) -> bool {
        self.area.is_nan()
    }
}

/// Title, then one derivation line per row
impl fmt::Display for AreaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        for line in &self.derivation_lines {
            write!(f, "\n{}", line)?;
        }
        Ok(())
    }
}

/// Compute the area of `shape` along with its derivation trace.
pub fn compute_area(shape: &Shape) -> AreaResult {
    let area = shape.area();
    debug!(shape = %shape.kind(), area = area.raw(), "evaluated area");

    // Sector traces lead with the branch-specific label.
    let formula_line = match shape {
        Shape::Sector(_) => format!("Formula = {}", shape.formula()),
        _ => format!("Area = {}", shape.formula()),
    };

    AreaResult {
        title: shape.title().to_string(),
        derivation_lines: vec![
            formula_line,
            format!("Area = {}", shape.substitution()),
            format!("Area = {}", area),
        ],
        area,
    }
}

/// Compute an area from a keyed dimension mapping.
///
/// Entries for fields that `kind` does not use are ignored.
pub fn compute_area_from(kind: ShapeKind, dims: &DimensionMap) -> AreaResult {
    compute_area(&Shape::from_dimensions(kind, dims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Field;
    use crate::shape::{Circle, Rectangle, Sector, SectorAngle, Trapezoid};
    use crate::types::{Dimension, LengthMeasure};
    use crate::units::{AngleUnit, LengthUnit};
    use insta::assert_snapshot;

    fn m(value: f64) -> LengthMeasure {
        LengthMeasure::new(value, LengthUnit::Meter)
    }

    #[test]
    fn rectangle_trace() {
        let result = compute_area(
            &Rectangle {
                length: m(2.0),
                width: m(3.0),
            }
            .into(),
        );
        assert_snapshot!(result.to_string(), @r"
        Rectangle Area
        Area = Length × Width
        Area = 2 meter × 3 meter
        Area = 6.00 m²
        ");
        assert_eq!(result.area, SquareMeters(6.0));
    }

    #[test]
    fn circle_keeps_full_precision() {
        let result = compute_area(&Circle { radius: m(1.0) }.into());
        assert_eq!(result.numeric_line(), "Area = 3.14 m²");
        assert_eq!(result.area.raw(), std::f64::consts::PI);
    }

    #[test]
    fn trapezoid_trace_with_mixed_units() {
        let result = compute_area(
            &Trapezoid {
                base: LengthMeasure::new(400.0, LengthUnit::Centimeter),
                top_base: m(2.0),
                height: LengthMeasure::new(3000.0, LengthUnit::Millimeter),
            }
            .into(),
        );
        assert_snapshot!(result.to_string(), @r"
        Trapezoid Area
        Area = ((Base 1 + Base 2) × Height) / 2
        Area = ((400 centimeter + 2 meter) × 3000 millimeter) / 2
        Area = 9.00 m²
        ");
    }

    #[test]
    fn sector_degrees_trace() {
        let result = compute_area(
            &Sector {
                radius: m(2.0),
                angle: SectorAngle::Degrees(90.0),
            }
            .into(),
        );
        assert_snapshot!(result.to_string(), @r"
        Sector Area
        Formula = (θ/360) × π × r²
        Area = (90 degrees/360) × π × (2 meter)²
        Area = 3.14 m²
        ");
    }

    #[test]
    fn sector_radians_trace() {
        let result = compute_area(
            &Sector {
                radius: m(2.0),
                angle: SectorAngle::Radians(1.5708),
            }
            .into(),
        );
        assert_snapshot!(result.to_string(), @r"
        Sector Area
        Formula = (θ × r²)/2
        Area = (1.5708 radians × (2 meter)²)/2
        Area = 3.14 m²
        ");
    }

    #[test]
    fn nan_flows_through_to_the_trace() {
        let result = compute_area(
            &Rectangle {
                length: m(f64::NAN),
                width: m(3.0),
            }
            .into(),
        );
        assert!(result.is_nan());
        assert_eq!(result.derivation_lines[1], "Area = NaN meter × 3 meter");
        assert_eq!(result.copy_text(), "Area = NaN m²");
    }

    #[test]
    fn keyed_mapping_ignores_foreign_fields() {
        let mut dims = DimensionMap::new();
        dims.insert(Field::Length, Dimension::length(5.0, LengthUnit::Meter));
        dims.insert(Field::Width, Dimension::length(7.0, LengthUnit::Meter));
        dims.insert(Field::Radius, Dimension::length(2.0, LengthUnit::Meter));
        dims.insert(Field::Angle, Dimension::angle(90.0, AngleUnit::Degrees));

        let result = compute_area_from(ShapeKind::Sector, &dims);
        assert_eq!(result.title, "Sector Area");
        assert_eq!(result.derivation_lines[1], "Area = (90 degrees/360) × π × (2 meter)²");
        assert!(!result.derivation_lines.iter().any(|l| l.contains('5') || l.contains('7')));
    }

    #[test]
    fn every_trace_has_three_lines() {
        for kind in ShapeKind::ALL {
            let result = compute_area_from(kind, &DimensionMap::new());
            assert_eq!(result.derivation_lines.len(), 3, "{kind}");
            assert_eq!(result.title, kind.title());
            assert!(result.is_nan(), "{kind} with no dimensions should be NaN");
        }
    }
}
