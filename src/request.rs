//! Parse pest pairs into an area request

use std::collections::BTreeMap;

use miette::SourceSpan;
use pest::Parser;
use pest::error::{ErrorVariant, InputLocation};
use pest::iterators::Pair;

use crate::errors::{RequestError, SourceContext};
use crate::evaluate::{AreaResult, compute_area_from};
use crate::form::parse_raw_value;
use crate::kind::{Field, FieldKind, ShapeKind};
use crate::log::debug;
use crate::types::{Dimension, DimensionMap};
use crate::units::{AngleUnit, LengthUnit, Unit};
use crate::{AreaParser, Rule};

/// A shape and the dimensions given for it
#[derive(Debug, Clone, PartialEq)]
pub struct Request {
    pub kind: ShapeKind,
    pub dimensions: DimensionMap,
}

impl Request {
    pub fn evaluate(&self) -> AreaResult {
        compute_area_from(self.kind, &self.dimensions)
    }
}

/// Parse a one-line request such as `circle radius=3 ft`.
///
/// Dimensions left out are not an error; they evaluate as NaN.
pub fn parse_request(source: &str) -> Result<Request, RequestError> {
    let ctx = SourceContext::new("<request>", source);
    let pairs =
        AreaParser::parse(Rule::request, source).map_err(|e| syntax_error(&ctx, e))?;

    let mut kind = None;
    let mut dimensions = DimensionMap::new();
    let mut seen: BTreeMap<Field, SourceSpan> = BTreeMap::new();

    for pair in pairs.filter(|p| p.as_rule() == Rule::request) {
        for inner in pair.into_inner() {
            match inner.as_rule() {
                Rule::shape_name => kind = Some(parse_shape_name(&ctx, inner)?),
                Rule::dimension => {
                    let shape = kind.ok_or_else(|| missing_shape(&ctx))?;
                    let (field, dim, span) = parse_dimension(&ctx, shape, inner)?;
                    if let Some(first) = seen.insert(field, span) {
                        return Err(RequestError::DuplicateDimension {
                            field,
                            src: ctx.named_source(),
                            first,
                            second: span,
                        });
                    }
                    dimensions.insert(field, dim);
                }
                _ => {}
            }
        }
    }

    let kind = kind.ok_or_else(|| missing_shape(&ctx))?;
    debug!(shape = %kind, dimensions = dimensions.len(), "parsed request");
    Ok(Request { kind, dimensions })
}

fn span_of(pair: &Pair<Rule>) -> SourceSpan {
    let span = pair.as_span();
    (span.start(), span.end() - span.start()).into()
}

fn syntax_error(ctx: &SourceContext, err: pest::error::Error<Rule>) -> RequestError {
    let span = match err.location {
        InputLocation::Pos(pos) => (pos, 0),
        InputLocation::Span((start, end)) => (start, end - start),
    };
    let message = match &err.variant {
        ErrorVariant::ParsingError { positives, .. } if !positives.is_empty() => {
            let expected: Vec<&str> = positives.iter().map(|r| describe_rule(*r)).collect();
            format!("expected {}", expected.join(" or "))
        }
        ErrorVariant::ParsingError { .. } => "unexpected input".to_string(),
        ErrorVariant::CustomError { message } => message.clone(),
    };
    RequestError::Syntax {
        message,
        src: ctx.named_source(),
        span: span.into(),
    }
}

fn describe_rule(rule: Rule) -> &'static str {
    match rule {
        Rule::shape_name => "a shape name",
        Rule::dimension | Rule::key => "a dimension like `radius=2`",
        Rule::value | Rule::number | Rule::string => "a number",
        Rule::unit => "a unit",
        Rule::EOI => "end of input",
        _ => "more input",
    }
}

fn syntax_at(ctx: &SourceContext, span: SourceSpan, message: &str) -> RequestError {
    RequestError::Syntax {
        message: message.to_string(),
        src: ctx.named_source(),
        span,
    }
}

fn missing_shape(ctx: &SourceContext) -> RequestError {
    syntax_at(ctx, (0, 0).into(), "expected a shape name")
}

fn parse_shape_name(ctx: &SourceContext, pair: Pair<Rule>) -> Result<ShapeKind, RequestError> {
    pair.as_str()
        .parse()
        .map_err(|_| RequestError::UnknownShape {
            name: pair.as_str().to_string(),
            src: ctx.named_source(),
            span: span_of(&pair),
        })
}

fn parse_dimension(
    ctx: &SourceContext,
    shape: ShapeKind,
    pair: Pair<Rule>,
) -> Result<(Field, Dimension, SourceSpan), RequestError> {
    let mut field = None;
    let mut span = span_of(&pair);
    let mut value = f64::NAN;
    let mut unit_tag = None;

    for part in pair.into_inner() {
        match part.as_rule() {
            Rule::key => {
                span = span_of(&part);
                field = Some(resolve_field(ctx, shape, &part)?);
            }
            Rule::value => value = parse_value(part),
            Rule::unit => unit_tag = Some(part.as_str()),
            _ => {}
        }
    }

    let field = field.ok_or_else(|| syntax_at(ctx, span, "expected a dimension name"))?;
    let unit = match (field.kind(), unit_tag) {
        (_, None) => field.default_unit(),
        (FieldKind::Length, Some(tag)) => Unit::Length(LengthUnit::resolve(tag)),
        (FieldKind::Angle, Some(tag)) => Unit::Angle(AngleUnit::resolve(tag)),
    };
    Ok((field, Dimension::new(value, unit), span))
}

fn resolve_field(
    ctx: &SourceContext,
    shape: ShapeKind,
    key: &Pair<Rule>,
) -> Result<Field, RequestError> {
    match Field::from_key(key.as_str()) {
        Some(field) if shape.has_field(field) => Ok(field),
        _ => {
            let expected: Vec<&str> = shape.fields().iter().map(|f| f.key()).collect();
            Err(RequestError::UnknownDimension {
                name: key.as_str().to_string(),
                shape,
                src: ctx.named_source(),
                span: span_of(key),
                expected: Some(format!("{} takes {}", shape, expected.join(", "))),
            })
        }
    }
}

/// Numbers parse directly; quoted text goes through the same lenient path
/// as a form field, so `"abc"` becomes NaN.
fn parse_value(pair: Pair<Rule>) -> f64 {
    match pair.into_inner().next() {
        Some(inner) if inner.as_rule() == Rule::string => {
            parse_raw_value(inner.as_str().trim_matches('"'))
        }
        Some(inner) => parse_raw_value(inner.as_str()),
        None => f64::NAN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_rectangle() {
        let req = parse_request("rectangle length=2 width=3").unwrap();
        assert_eq!(req.kind, ShapeKind::Rectangle);
        assert_eq!(
            req.dimensions[&Field::Length],
            Dimension::length(2.0, LengthUnit::Meter)
        );
        assert_eq!(
            req.dimensions[&Field::Width],
            Dimension::length(3.0, LengthUnit::Meter)
        );
    }

    #[test]
    fn glued_and_spaced_units() {
        let req = parse_request("rectangle length=2m, width=3 ft").unwrap();
        assert_eq!(
            req.dimensions[&Field::Length],
            Dimension::length(2.0, LengthUnit::Meter)
        );
        assert_eq!(
            req.dimensions[&Field::Width],
            Dimension::length(3.0, LengthUnit::Foot)
        );
    }

    #[test]
    fn sector_angle_units() {
        let req = parse_request("sector radius=2 angle=1.5708 rad").unwrap();
        assert_eq!(
            req.dimensions[&Field::Angle],
            Dimension::angle(1.5708, AngleUnit::Radians)
        );
        let req = parse_request("sector radius=2 angle=90").unwrap();
        assert_eq!(
            req.dimensions[&Field::Angle],
            Dimension::angle(90.0, AngleUnit::Degrees)
        );
    }

    #[test]
    fn key_spellings() {
        let req = parse_request("trapezoid base=4 top_base=2 height=3").unwrap();
        assert!(req.dimensions.contains_key(&Field::TopBase));
        let req = parse_request("ellipse semi-major-axis=3 semiMinorAxis=2").unwrap();
        assert_eq!(req.dimensions.len(), 2);
    }

    #[test]
    fn unitless_value_then_separated_key() {
        for source in [
            "ellipse semiMajorAxis=3 semi_minor_axis=2",
            "ellipse semiMajorAxis=3 semi-minor-axis=2",
        ] {
            let req = parse_request(source).unwrap();
            assert_eq!(
                req.dimensions[&Field::SemiMajorAxis],
                Dimension::length(3.0, LengthUnit::Meter),
                "{source}"
            );
            assert_eq!(
                req.dimensions[&Field::SemiMinorAxis],
                Dimension::length(2.0, LengthUnit::Meter),
                "{source}"
            );
        }
    }

    #[test]
    fn quoted_garbage_is_nan() {
        let req = parse_request(r#"circle radius="abc""#).unwrap();
        assert!(req.dimensions[&Field::Radius].value.is_nan());
        assert!(req.evaluate().is_nan());
    }

    #[test]
    fn quoted_number_parses() {
        let req = parse_request(r#"circle radius=" 1.5 " in"#).unwrap();
        assert_eq!(
            req.dimensions[&Field::Radius],
            Dimension::length(1.5, LengthUnit::Inch)
        );
    }

    #[test]
    fn unknown_unit_falls_back() {
        let req = parse_request("circle radius=2 furlongs").unwrap();
        assert_eq!(
            req.dimensions[&Field::Radius],
            Dimension::length(2.0, LengthUnit::Meter)
        );
    }

    #[test]
    fn missing_dimension_is_not_an_error() {
        let req = parse_request("triangle base=4").unwrap();
        assert_eq!(req.dimensions.len(), 1);
        assert!(req.evaluate().is_nan());
    }

    #[test]
    fn unknown_shape() {
        let err = parse_request("hexagon side=2").unwrap_err();
        match err {
            RequestError::UnknownShape { name, span, .. } => {
                assert_eq!(name, "hexagon");
                assert_eq!(span, SourceSpan::from((0, 7)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn foreign_dimension() {
        let err = parse_request("circle radius=1 width=2").unwrap_err();
        match err {
            RequestError::UnknownDimension {
                name,
                shape,
                span,
                expected,
                ..
            } => {
                assert_eq!(name, "width");
                assert_eq!(shape, ShapeKind::Circle);
                assert_eq!(span, SourceSpan::from((16, 5)));
                assert_eq!(expected.as_deref(), Some("circle takes radius"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn duplicate_dimension() {
        let err = parse_request("circle radius=1 RADIUS=2").unwrap_err();
        match err {
            RequestError::DuplicateDimension {
                field,
                first,
                second,
                ..
            } => {
                assert_eq!(field, Field::Radius);
                assert_eq!(first, SourceSpan::from((7, 6)));
                assert_eq!(second, SourceSpan::from((16, 6)));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn syntax_error_points_at_input() {
        let err = parse_request("circle radius=").unwrap_err();
        match err {
            RequestError::Syntax { span, .. } => assert_eq!(span.offset(), 14),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_request_is_a_syntax_error() {
        assert!(matches!(
            parse_request("   ").unwrap_err(),
            RequestError::Syntax { .. }
        ));
    }
}
