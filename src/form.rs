//! Caller-owned calculator form state
//!
//! The form holds raw strings exactly as typed, one unit selection per
//! field, and the last result. Only the active shape's fields exist, and
//! picking another shape (or clearing) throws everything away.

use std::collections::BTreeMap;

use crate::defaults;
use crate::errors::FormError;
use crate::evaluate::{AreaResult, compute_area_from};
use crate::kind::{Field, FieldKind, ShapeKind};
use crate::log::debug;
use crate::types::{Dimension, DimensionMap};
use crate::units::{AngleUnit, LengthUnit, Unit};

/// Parse a raw field string. Anything that is not a number becomes NaN,
/// including the empty string.
pub fn parse_raw_value(raw: &str) -> f64 {
    raw.trim().parse().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, PartialEq)]
struct FieldState {
    raw: String,
    unit: Unit,
}

impl FieldState {
    fn empty(field: Field) -> Self {
        Self {
            raw: String::new(),
            unit: field.default_unit(),
        }
    }
}

/// Input state for one shape at a time
#[derive(Debug, Clone, PartialEq)]
pub struct CalculatorForm {
    shape: ShapeKind,
    fields: BTreeMap<Field, FieldState>,
    result: Option<AreaResult>,
}

impl Default for CalculatorForm {
    fn default() -> Self {
        Self::for_shape(defaults::SHAPE)
    }
}

impl CalculatorForm {
    pub fn new() -> Self {
        Self::default()
    }

    fn for_shape(shape: ShapeKind) -> Self {
        Self {
            shape,
            fields: shape
                .fields()
                .iter()
                .map(|&field| (field, FieldState::empty(field)))
                .collect(),
            result: None,
        }
    }

    pub fn shape(&self) -> ShapeKind {
        self.shape
    }

    /// Switch shapes, discarding every value, unit and result.
    pub fn select_shape(&mut self, shape: ShapeKind) {
        debug!(from = %self.shape, to = %shape, "shape changed, resetting form");
        *self = Self::for_shape(shape);
    }

    /// Back to the default shape with empty fields.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Fields of the active shape, in input order
    pub fn fields(&self) -> &'static [Field] {
        self.shape.fields()
    }

    fn field_mut(&mut self, field: Field) -> Result<&mut FieldState, FormError> {
        let shape = self.shape;
        self.fields
            .get_mut(&field)
            .ok_or(FormError::FieldNotOnShape { field, shape })
    }

    fn field(&self, field: Field) -> Result<&FieldState, FormError> {
        self.fields.get(&field).ok_or(FormError::FieldNotOnShape {
            field,
            shape: self.shape,
        })
    }

    /// Store the raw text typed into `field`.
    pub fn set_value(&mut self, field: Field, raw: impl Into<String>) -> Result<(), FormError> {
        self.field_mut(field)?.raw = raw.into();
        Ok(())
    }

    /// Select a unit for `field` by tag. Unknown tags fall back to the
    /// field's base unit.
    pub fn set_unit(&mut self, field: Field, tag: &str) -> Result<(), FormError> {
        let unit = match field.kind() {
            FieldKind::Length => Unit::Length(LengthUnit::resolve(tag)),
            FieldKind::Angle => Unit::Angle(AngleUnit::resolve(tag)),
        };
        self.field_mut(field)?.unit = unit;
        Ok(())
    }

    pub fn value(&self, field: Field) -> Result<&str, FormError> {
        Ok(self.field(field)?.raw.as_str())
    }

    pub fn unit(&self, field: Field) -> Result<Unit, FormError> {
        Ok(self.field(field)?.unit)
    }

    /// The typed dimensions the current fields parse to
    pub fn dimensions(&self) -> DimensionMap {
        self.fields
            .iter()
            .map(|(&field, state)| {
                (
                    field,
                    Dimension::new(parse_raw_value(&state.raw), state.unit),
                )
            })
            .collect()
    }

    /// Evaluate the current fields and keep the result.
    pub fn calculate(&mut self) -> &AreaResult {
        let result = compute_area_from(self.shape, &self.dimensions());
        self.result.insert(result)
    }

    /// The last result, until the shape changes or the form is cleared
    pub fn result(&self) -> Option<&AreaResult> {
        self.result.as_ref()
    }

    /// Numeric line of the last result
    pub fn copy_text(&self) -> Option<&str> {
        self.result.as_ref().map(AreaResult::copy_text)
    }
}
