use regex::Regex;

lazy_static! {
    /// `{ color: 'red'` and alike, an object literal which is already converted
    static ref OBJECT_LITERAL_RE: Regex =
        Regex::new(r#"\{\s*[A-Za-z0-9_]+:\s*['"]"#).unwrap();

    static ref CSS_PATTERNS: [Regex; 4] = [
        // property: value;
        Regex::new(r"[a-zA-Z-]+:\s*[^;\n]+;").unwrap(),
        // property:value on its own line, no terminator
        Regex::new(r"(?mR)^[a-zA-Z-]+:[^;\n]+$").unwrap(),
        // a lonely property name
        Regex::new(r"(?mR)^[a-z-]+$").unwrap(),
        // property: value on a single line
        Regex::new(r"(?mR)^[a-z-]+:\s*[^;\n]+$").unwrap(),
    ];
}

/// Properties which only show up in the output of a conversion
const CONVERTED_PROPERTIES: [&str; 2] = ["fontSize", "backgroundColor"];

/// Checks whether `text` looks like CSS declarations (and not like a JS object).
///
/// This is a cheap heuristic which rather declines than risks converting
/// something which is not CSS. Blocks made only of single-word properties
/// (e.g. `color: red`) have no hyphen and are not recognized.
pub fn is_css_like(text: &str) -> bool {
    if CONVERTED_PROPERTIES.iter().any(|p| text.contains(p)) || OBJECT_LITERAL_RE.is_match(text) {
        return false;
    }

    if !text.contains('-') {
        return false;
    }

    text.contains(':') && CSS_PATTERNS.iter().any(|pattern| pattern.is_match(text))
}
