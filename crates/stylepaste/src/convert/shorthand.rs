use regex::Regex;
use smallvec::SmallVec;
use stylepaste_core::{
    format_js_number, is_box_shorthand, is_percentage_property, is_spacing_property, BORDER_UNIT,
    SPACING_UNIT,
};

lazy_static! {
    /// `8px 16px 8px 16px`
    static ref FOUR_SIDES_RE: Regex =
        Regex::new(r"^-?[0-9]+(?:px)?(?:\s+-?[0-9]+(?:px)?){3}$").unwrap();
}

/// Formatted value of a property in the `sx` dialect
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShorthandValue {
    /// A single value, e.g. `2` or `'auto'`
    Scalar(String),
    /// `margin: 8px 16px 8px 16px` expanded to a nested object
    Sides(BoxSides),
}

/// The four sides of `margin` or `padding`, already in spacing units
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoxSides {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

/// Checks whether the value has the `top right bottom left` form
#[inline]
pub fn is_four_sided(value: &str) -> bool {
    FOUR_SIDES_RE.is_match(value)
}

/// Formats a numeric `value` of an (already renamed) `property` for the `sx` prop.
///
/// - `%` values become fractions for sizing properties (`50%` -> `0.5`)
///   and are kept as they are otherwise;
/// - spacing properties are divided by the spacing unit (`16px` -> `2`);
/// - integer border values are divided by the border unit (`2px` -> `0.5`);
/// - everything else loses its `px`.
///
/// A value which cannot be parsed is returned as is.
pub fn format_shorthand_value(property: &str, value: &str) -> ShorthandValue {
    // Percentages must be handled before anything else
    if let Some(percentage) = value.strip_suffix('%') {
        if is_percentage_property(property) {
            if let Some(percentage) = parse_number(percentage) {
                return ShorthandValue::Scalar(format_js_number(percentage / 100.0));
            }
        }
        return ShorthandValue::Scalar(value.to_owned());
    }

    let Some(number) = parse_pixels(value) else {
        return ShorthandValue::Scalar(value.to_owned());
    };

    let formatted = if is_spacing_property(property) {
        format_js_number(number / SPACING_UNIT)
    } else if property.starts_with("border") && number.fract() == 0.0 {
        format_js_number(number / BORDER_UNIT)
    } else {
        format_js_number(number)
    };

    ShorthandValue::Scalar(formatted)
}

/// Expands `margin: 8px 16px 8px 16px` (or `padding`) into [`ShorthandValue::Sides`].
/// `source_property` is the camel-cased name before the shorthand substitution,
/// so an input property already called `m` or `p` is never expanded.
pub fn format_box_shorthand(source_property: &str, value: &str) -> Option<ShorthandValue> {
    if !is_box_shorthand(source_property) {
        return None;
    }

    BoxSides::parse(value).map(ShorthandValue::Sides)
}

impl BoxSides {
    /// Parses `top right bottom left`, converting each side to spacing units
    pub fn parse(value: &str) -> Option<BoxSides> {
        if !is_four_sided(value) {
            return None;
        }

        let sides: SmallVec<[String; 4]> = value
            .split_whitespace()
            .map(|side| parse_pixels(side).map(|n| format_js_number(n / SPACING_UNIT)))
            .collect::<Option<_>>()?;

        let [top, right, bottom, left]: [String; 4] = sides.into_inner().ok()?;
        Some(BoxSides {
            top,
            right,
            bottom,
            left,
        })
    }

    /// Writes `{ top: .., right: .., bottom: .., left: .. }` over several lines.
    /// `indent` is the indentation of the line holding the opening brace.
    pub fn write_object(&self, indent: &str, out: &mut String) {
        let entries = [
            ("top", &self.top),
            ("right", &self.right),
            ("bottom", &self.bottom),
            ("left", &self.left),
        ];

        out.push('{');
        for (idx, (side, value)) in entries.into_iter().enumerate() {
            if idx > 0 {
                out.push(',');
            }
            out.push('\n');
            out.push_str(indent);
            out.push_str("  ");
            out.push_str(side);
            out.push_str(": ");
            out.push_str(value);
        }
        out.push('\n');
        out.push_str(indent);
        out.push('}');
    }
}

/// `12px` -> `12.0`, `12` -> `12.0`
#[inline]
fn parse_pixels(value: &str) -> Option<f64> {
    parse_number(value.strip_suffix("px").unwrap_or(value))
}

#[inline]
fn parse_number(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    macro_rules! test_scalar {
        ($property: expr, $value: expr, $expected: expr) => {
            assert_eq!(
                ShorthandValue::Scalar(String::from($expected)),
                format_shorthand_value($property, $value),
                "{}: {}",
                $property,
                $value
            );
        };
    }

    #[test]
    fn it_divides_spacing() {
        test_scalar!("mt", "16px", "2");
        test_scalar!("p", "12", "1.5");
        test_scalar!("pl", "-4px", "-0.5");
        test_scalar!("gap", "10px", "1.25");
        test_scalar!("columnGap", "1px", "0.125");
        test_scalar!("mb", "0", "0");
    }

    #[test]
    fn it_divides_spacing_for_every_pixel_value() {
        for v in -64..=64 {
            let expected = format_js_number(f64::from(v) / 8.0);
            test_scalar!("mr", &format!("{v}px"), expected.as_str());
            test_scalar!("rowGap", &v.to_string(), expected.as_str());
        }
    }

    #[test]
    fn it_converts_percentages() {
        test_scalar!("width", "50%", "0.5");
        test_scalar!("maxHeight", "100%", "1");
        test_scalar!("minWidth", "7%", "0.07");
        test_scalar!("height", "-25%", "-0.25");
    }

    #[test]
    fn it_keeps_other_percentages() {
        test_scalar!("mt", "50%", "50%");
        test_scalar!("top", "10%", "10%");
        test_scalar!("borderRadius", "50%", "50%");
    }

    #[test]
    fn it_scales_borders() {
        test_scalar!("border", "2px", "0.5");
        test_scalar!("borderWidth", "4", "1");
        test_scalar!("borderRadius", "6px", "1.5");
        test_scalar!("borderTopWidth", "1.5px", "1.5");
    }

    #[test]
    fn it_strips_pixels_from_other_properties() {
        test_scalar!("fontSize", "12px", "12");
        test_scalar!("zIndex", "10", "10");
        test_scalar!("width", "320px", "320");
        test_scalar!("top", "-3px", "-3");
    }

    #[test]
    fn it_keeps_unparseable_values() {
        test_scalar!("mt", "auto", "auto");
        test_scalar!("fontSize", "large", "large");
        test_scalar!("width", "abc%", "abc%");
    }

    #[test]
    fn it_expands_four_sides() {
        assert_eq!(
            ShorthandValue::Sides(BoxSides {
                top: "1".into(),
                right: "2".into(),
                bottom: "0.5".into(),
                left: "-1".into(),
            }),
            format_box_shorthand("margin", "8px 16px 4 -8px").unwrap()
        );
        assert!(format_box_shorthand("padding", "0 0 0 0").is_some());

        // Only `margin` and `padding` have sides
        assert_eq!(None, format_box_shorthand("marginTop", "8px 16px 8px 16px"));
        // Already renamed properties are not expanded
        assert_eq!(None, format_box_shorthand("m", "8px 16px 8px 16px"));
        assert_eq!(None, format_box_shorthand("p", "8px 8px 8px 8px"));
        // Only four sides are expanded
        assert_eq!(None, format_box_shorthand("padding", "8px 16px"));

        // The scalar formatter never expands
        test_scalar!("m", "8px 16px 8px 16px", "8px 16px 8px 16px");
    }

    #[test]
    fn it_writes_sides_object() {
        let sides = BoxSides::parse("8px 16px 8px 16px").unwrap();
        let mut out = String::new();
        sides.write_object("  ", &mut out);
        assert_eq!(
            "{\n    top: 1,\n    right: 2,\n    bottom: 1,\n    left: 2\n  }",
            out
        );
    }
}
