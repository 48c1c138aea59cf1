mod declarations;
mod error;
mod shorthand;

use regex::Regex;
use stylepaste_core::{shorthand_for, to_camel_case, ConversionConfig, Dialect};

pub use declarations::{parse_declarations, strip_comments, Declaration};
pub use error::{ConvertError, ConvertErrorKind};
pub use shorthand::{
    format_box_shorthand, format_shorthand_value, is_four_sided, BoxSides, ShorthandValue,
};

/// Indentation of every emitted entry
const INDENT: &str = "  ";

lazy_static! {
    /// `12`, `-12px` or `50%`
    static ref NUMERIC_RE: Regex = Regex::new(r"^-?[0-9]+(px|%)?$").unwrap();
    /// `#abc` or `#aabbcc`
    static ref HEX_COLOR_RE: Regex = Regex::new(r"(?i)^#(?:[0-9a-f]{3}|[0-9a-f]{6})$").unwrap();
}

/// Converts CSS declarations to the entries of a JS object, without the braces.
///
/// Declarations which cannot be parsed are silently dropped.
/// Use [`convert_with_errors`] to know about them.
pub fn convert(css: &str, dialect: Dialect, config: &ConversionConfig) -> String {
    let mut errors = Vec::new();
    convert_with_errors(css, dialect, config, &mut errors)
}

/// Same as [`convert`], but reports dropped declarations and suspicious values to `errors`
pub fn convert_with_errors(
    css: &str,
    dialect: Dialect,
    config: &ConversionConfig,
    errors: &mut Vec<ConvertError>,
) -> String {
    let css = strip_comments(css);
    let declarations = parse_declarations(&css, errors);

    let mut out = String::with_capacity(css.len() + INDENT.len());
    out.push_str(INDENT);

    let mut property = String::new();
    for (idx, declaration) in declarations.iter().enumerate() {
        if idx > 0 {
            out.push_str(",\n");
            out.push_str(INDENT);
        }

        property.clear();
        to_camel_case(declaration.property, &mut property);

        let final_property = match dialect {
            Dialect::Shorthand => shorthand_for(&property).unwrap_or(property.as_str()),
            Dialect::Plain => property.as_str(),
        };

        out.push_str(final_property);
        out.push_str(": ");
        write_value(
            &property,
            final_property,
            declaration.value,
            dialect,
            config,
            &mut out,
            errors,
        );
    }

    out
}

/// Writes the value of a declaration which was renamed from `source_property` to `property`
fn write_value(
    source_property: &str,
    property: &str,
    value: &str,
    dialect: Dialect,
    config: &ConversionConfig,
    out: &mut String,
    errors: &mut Vec<ConvertError>,
) {
    if let Some(numeric) = NUMERIC_RE.captures(value) {
        let formatted = match dialect {
            Dialect::Shorthand => match format_shorthand_value(property, value) {
                ShorthandValue::Scalar(scalar) => scalar,
                ShorthandValue::Sides(sides) => {
                    sides.write_object(INDENT, out);
                    return;
                }
            },
            Dialect::Plain => match numeric.get(1).map(|unit| unit.as_str()) {
                Some("px") if config.remove_pixel_unit => value.replacen("px", "", 1),
                _ => value.to_owned(),
            },
        };

        if formatted.ends_with('%') || formatted.ends_with("px") {
            errors.push(ConvertError::new(value, ConvertErrorKind::UnquotedUnit));
        }
        out.push_str(&formatted);
        return;
    }

    if dialect.is_shorthand() {
        if let Some(ShorthandValue::Sides(sides)) = format_box_shorthand(source_property, value) {
            sides.write_object(INDENT, out);
            return;
        }
    }

    // Hex colors are never quoted
    if HEX_COLOR_RE.is_match(value) {
        out.push_str(value);
        return;
    }

    if config.quote_values {
        out.push('\'');
        out.push_str(&value.replace('\'', "\""));
        out.push('\'');
    } else {
        out.push_str(value);
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use stylepaste_core::error::Severity;

    use super::*;

    macro_rules! test_plain {
        ($input: expr, $expected: expr) => {
            test_plain!($input, $expected, ConversionConfig::default());
        };
        ($input: expr, $expected: expr, $config: expr) => {
            assert_eq!($expected, convert($input, Dialect::Plain, &$config));
        };
    }

    macro_rules! test_sx {
        ($input: expr, $expected: expr) => {
            assert_eq!(
                $expected,
                convert($input, Dialect::Shorthand, &ConversionConfig::default())
            );
        };
    }

    #[test]
    fn it_converts_plain_declarations() {
        test_plain!(
            "color: red; font-size: 12px;",
            "  color: 'red',\n  fontSize: 12"
        );
        test_plain!(
            "display: flex;\njustify-content: space-between;\nz-index: 10;",
            "  display: 'flex',\n  justifyContent: 'space-between',\n  zIndex: 10"
        );
    }

    #[test]
    fn it_keeps_plain_numbers_with_other_units() {
        test_plain!("width: 50%;", "  width: 50%");
        test_plain!("line-height: 1.5;", "  lineHeight: '1.5'");
        test_plain!("margin-top: -8px", "  marginTop: -8");
        test_plain!("font-size: 2em", "  fontSize: '2em'");
    }

    #[test]
    fn it_respects_remove_pixel_unit() {
        let config = ConversionConfig {
            remove_pixel_unit: false,
            ..Default::default()
        };
        test_plain!("font-size: 12px;", "  fontSize: 12px", config);
        test_plain!("z-index: 3;", "  zIndex: 3", config);
    }

    #[test]
    fn it_respects_quote_values() {
        let config = ConversionConfig {
            quote_values: false,
            ..Default::default()
        };
        test_plain!(
            "color: red; font-size: 12px; transition: all 0.2s ease-in-out",
            "  color: red,\n  fontSize: 12,\n  transition: all 0.2s ease-in-out",
            config
        );
    }

    #[test]
    fn it_never_quotes_hex_colors() {
        for color in ["#fff", "#FFF", "#a1B2c3", "#000000"] {
            test_plain!(
                &format!("border-color: {color};"),
                format!("  borderColor: {color}")
            );
            test_sx!(
                &format!("background-color: {color};"),
                format!("  bgcolor: {color}")
            );
        }

        // Not a 3 or 6 digit color
        test_plain!("color: #ffff;", "  color: '#ffff'");
        test_plain!("color: #ggg;", "  color: '#ggg'");
    }

    #[test]
    fn it_replaces_single_quotes() {
        test_plain!(
            "font-family: 'Open Sans', sans-serif;",
            "  fontFamily: '\"Open Sans\", sans-serif'"
        );
        test_plain!("content: \"\";", "  content: '\"\"'");
    }

    #[test]
    fn it_keeps_order_and_duplicates() {
        test_plain!(
            "color: red; background: blue; color: green",
            "  color: 'red',\n  background: 'blue',\n  color: 'green'"
        );
    }

    #[test]
    fn it_camelizes_every_property() {
        let output = convert(
            "-webkit-box-shadow: none; border-top-left-radius: 4px; --custom: 1",
            Dialect::Plain,
            &ConversionConfig::default(),
        );
        assert_eq!(
            "  WebkitBoxShadow: 'none',\n  borderTopLeftRadius: 4,\n  Custom: 1",
            output
        );

        for line in output.lines() {
            let (property, _) = line.split_once(':').unwrap();
            assert!(!property.contains('-'), "{property}");
        }
    }

    #[test]
    fn it_accepts_camel_case_input() {
        test_plain!("marginTop: 4px", "  marginTop: 4");
        test_sx!("marginTop: 16px", "  mt: 2");
    }

    #[test]
    fn it_drops_malformed_declarations() {
        test_plain!("color red", "  ");
        test_plain!(
            "color red; font-size: 12px",
            "  fontSize: 12"
        );
        test_plain!("", "  ");
    }

    #[test]
    fn it_strips_comments() {
        test_plain!(
            "/* brand */ color: #333; /* spacing */\nmargin: 0;",
            "  color: #333,\n  margin: 0"
        );
    }

    #[test]
    fn it_converts_sx_declarations() {
        test_sx!("margin-top: 16px;", "  mt: 2");
        test_sx!("width: 50%;", "  width: 0.5");
        test_sx!(
            "padding: 12px; gap: 4px; background-color: #fafafa; color: red",
            "  p: 1.5,\n  gap: 0.5,\n  bgcolor: #fafafa,\n  color: 'red'"
        );
        test_sx!(
            "border-width: 2px; border-radius: 5px; font-size: 14px",
            "  borderWidth: 0.5,\n  borderRadius: 1.25,\n  fontSize: 14"
        );
    }

    #[test]
    fn it_keeps_sx_percentages_of_other_properties() {
        test_sx!("margin-left: 10%;", "  ml: 10%");
        test_sx!("max-width: 80%; top: 5%", "  maxWidth: 0.8,\n  top: 5%");
    }

    #[test]
    fn it_expands_four_sided_box_in_sx() {
        test_sx!(
            "padding: 8px 16px 8px 16px; color: red",
            "  p: {\n    top: 1,\n    right: 2,\n    bottom: 1,\n    left: 2\n  },\n  color: 'red'"
        );

        // Two sides are left as a string
        test_sx!("margin: 8px 16px;", "  m: '8px 16px'");
        // Only `margin` and `padding` themselves are expanded, not `m` or `p`
        test_sx!("m: 8px 8px 8px 8px", "  m: '8px 8px 8px 8px'");
        test_sx!("p: 8px 16px 8px 16px", "  p: '8px 16px 8px 16px'");
        // Plain dialect never expands
        test_plain!(
            "padding: 8px 16px 8px 16px",
            "  padding: '8px 16px 8px 16px'"
        );
    }

    #[test]
    fn it_divides_spacing_by_unit() {
        for property in ["margin", "margin-top", "padding-right", "gap", "row-gap"] {
            for v in [0, 1, 3, 8, 12, 20, 100, -16] {
                let output = convert(
                    &format!("{property}: {v}px;"),
                    Dialect::Shorthand,
                    &ConversionConfig::default(),
                );
                let (_, value) = output.split_once(": ").unwrap();
                assert_eq!(f64::from(v) / 8.0, value.parse::<f64>().unwrap(), "{output}");
            }
        }
    }

    #[test]
    fn it_reports_errors() {
        let mut errors = Vec::new();
        let output = convert_with_errors(
            "color red; width: 50%; margin:",
            Dialect::Plain,
            &ConversionConfig::default(),
            &mut errors,
        );

        assert_eq!("  width: 50%", output);
        assert_eq!(
            vec![
                ConvertError::new("color red", ConvertErrorKind::MissingColon),
                ConvertError::new("margin:", ConvertErrorKind::EmptyValue),
                ConvertError::new("50%", ConvertErrorKind::UnquotedUnit),
            ],
            errors
        );
        assert!(errors[0].is_recoverable_error());
        assert!(errors[2].is_warning());
        assert!(!errors.iter().any(Severity::is_unrecoverable_error));
    }
}
