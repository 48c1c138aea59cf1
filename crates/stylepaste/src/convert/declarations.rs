use std::borrow::Cow;

use regex::Regex;

use super::error::{ConvertError, ConvertErrorKind};

lazy_static! {
    static ref BLOCK_COMMENT_RE: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
}

/// A single `property: value` pair, both sides trimmed and non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Declaration<'s> {
    pub property: &'s str,
    pub value: &'s str,
}

/// Removes `/* ... */` comments. Nested comments are not supported.
pub fn strip_comments(css: &str) -> Cow<'_, str> {
    BLOCK_COMMENT_RE.replace_all(css, "")
}

/// Splits the text on `;` and line breaks and extracts the declarations in source order.
/// Malformed segments are skipped and reported to `errors`.
pub fn parse_declarations<'s>(
    css: &'s str,
    errors: &mut Vec<ConvertError>,
) -> Vec<Declaration<'s>> {
    let mut declarations = Vec::new();

    for segment in css.split([';', '\n', '\r']) {
        let segment = segment.trim();
        if segment.is_empty() {
            continue;
        }

        match parse_declaration(segment) {
            Ok(declaration) => declarations.push(declaration),
            Err(kind) => errors.push(ConvertError::new(segment, kind)),
        }
    }

    declarations
}

/// Splits a segment at its first `:`
fn parse_declaration(segment: &str) -> Result<Declaration<'_>, ConvertErrorKind> {
    let Some((property, value)) = segment.split_once(':') else {
        return Err(ConvertErrorKind::MissingColon);
    };

    let property = property.trim();
    let value = value.trim();

    if property.is_empty() {
        return Err(ConvertErrorKind::EmptyProperty);
    }
    if value.is_empty() {
        return Err(ConvertErrorKind::EmptyValue);
    }

    Ok(Declaration { property, value })
}
