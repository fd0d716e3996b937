//! Area of 2-D shapes from dimensions in mixed units.
//!
//! Every length is normalized to meters, the shape's formula is applied,
//! and the result comes back with a short derivation trace:
//!
//! ```
//! let result = areacalc::calculate("sector radius=2m angle=90 degrees").unwrap();
//! assert_eq!(result.title, "Sector Area");
//! assert_eq!(result.numeric_line(), "Area = 3.14 m²");
//! ```
//!
//! Callers that already hold typed values use [`compute_area`] or
//! [`compute_area_from`] directly; UI code keeps a [`CalculatorForm`].

use pest_derive::Parser;

pub mod convert;
pub mod defaults;
pub mod errors;
pub mod evaluate;
pub mod form;
pub mod kind;
mod log;
pub mod request;
pub mod shape;
pub mod types;
pub mod units;

pub use convert::{degrees_to_radians, from_base_meters, radians_to_degrees, to_base_meters};
pub use errors::{FormError, RequestError};
pub use evaluate::{AreaResult, compute_area, compute_area_from};
pub use form::CalculatorForm;
pub use kind::{Field, ShapeKind};
pub use request::{Request, parse_request};
pub use shape::{AreaFormula, Sector, SectorAngle, Shape};
pub use types::{Dimension, DimensionMap, Meters, SquareMeters};
pub use units::{AngleUnit, LengthUnit, Unit};

#[derive(Parser)]
#[grammar = "area.pest"]
pub struct AreaParser;

/// Parse and evaluate a one-line request.
///
/// Returns the result on success, or a report with diagnostics.
pub fn calculate(source: &str) -> Result<AreaResult, miette::Report> {
    let request = parse_request(source)?;
    Ok(request.evaluate())
}
