use regex::Regex;
use strum_macros::{AsRefStr, IntoStaticStr};

/// How many lines (the paste line included) are searched for a style object
pub const STYLE_CONTEXT_WINDOW: usize = 5;

/// How many lines above the paste line are searched for an `sx={` prop
pub const SHORTHAND_CONTEXT_WINDOW: usize = 3;

lazy_static! {
    static ref STYLE_PATTERNS: [(StyleContext, Regex); 6] = [
        (StyleContext::StyleConst, Regex::new(r"(?mR)const\s+styles?\s*=\s*\{\s*$").unwrap()),
        (
            StyleContext::NamedStyleConst,
            Regex::new(r"(?mR)const\s+[A-Za-z0-9_]*style[A-Za-z0-9_]*\s*=\s*\{\s*$").unwrap(),
        ),
        (StyleContext::StyleAttribute, Regex::new(r"(?mR)style\s*=\s*\{\s*$").unwrap()),
        (StyleContext::StyleProperty, Regex::new(r"(?mR)style:\s*\{\s*$").unwrap()),
        (StyleContext::SxAttribute, Regex::new(r"(?mR)sx\s*=\s*\{\s*$").unwrap()),
        (StyleContext::OpenBrace, Regex::new(r"(?mR)\{\s*$").unwrap()),
    ];

    /// `sx={` which opens at the very end of the line
    static ref SX_PROP_OPENED_RE: Regex = Regex::new(r"sx\s*=\s*\{\s*$").unwrap();

    /// `sx={` anywhere in the line
    static ref SX_PROP_RE: Regex = Regex::new(r"sx\s*=\s*\{").unwrap();
}

/// Read-only access to the lines of a document by their index
pub trait LineAccessor {
    /// Returns `None` when `index` is past the end of the document
    fn line(&self, index: usize) -> Option<&str>;
}

impl<S: AsRef<str>> LineAccessor for [S] {
    #[inline]
    fn line(&self, index: usize) -> Option<&str> {
        self.get(index).map(AsRef::as_ref)
    }
}

impl<S: AsRef<str>, const N: usize> LineAccessor for [S; N] {
    #[inline]
    fn line(&self, index: usize) -> Option<&str> {
        self.as_slice().line(index)
    }
}

impl<S: AsRef<str>> LineAccessor for Vec<S> {
    #[inline]
    fn line(&self, index: usize) -> Option<&str> {
        self.as_slice().line(index)
    }
}

impl<T: LineAccessor + ?Sized> LineAccessor for &T {
    #[inline]
    fn line(&self, index: usize) -> Option<&str> {
        (**self).line(index)
    }
}

/// Which kind of object literal was opened on a line
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum StyleContext {
    /// `const styles = {`
    StyleConst,
    /// `const buttonstyle = {`
    NamedStyleConst,
    /// `style={`
    StyleAttribute,
    /// `style: {`
    StyleProperty,
    /// `sx={`
    SxAttribute,
    /// Any other `{` at the end of the line
    OpenBrace,
}

/// Finds out which style object (if any) is opened on this line.
/// The patterns are checked in the order of [`StyleContext`] variants.
pub fn detect_style_context(line: &str) -> Option<StyleContext> {
    STYLE_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(line))
        .map(|(kind, _)| *kind)
}

/// Checks whether `line` opens an object literal meant for style declarations
#[inline]
pub fn is_style_context(line: &str) -> bool {
    detect_style_context(line).is_some()
}

/// Walks up from `line_number` (inclusive) through at most [`STYLE_CONTEXT_WINDOW`] lines
/// and returns the first line which opens a style object.
pub fn find_style_context(
    line_number: usize,
    lines: &impl LineAccessor,
) -> Option<(usize, StyleContext)> {
    let first_line = line_number.saturating_sub(STYLE_CONTEXT_WINDOW - 1);

    (first_line..=line_number).rev().find_map(|idx| {
        let line = lines.line(idx)?;
        detect_style_context(line).map(|kind| (idx, kind))
    })
}

/// Checks whether the paste lands inside an `sx={` prop.
///
/// This is a textual check and it does not track braces:
/// an `sx={` closed right above the paste line still counts.
pub fn is_shorthand_prop_context(
    current_line: &str,
    line_number: usize,
    lines: &impl LineAccessor,
) -> bool {
    if SX_PROP_OPENED_RE.is_match(current_line) {
        return true;
    }

    let first_line = line_number.saturating_sub(SHORTHAND_CONTEXT_WINDOW);
    (first_line..=line_number)
        .rev()
        .filter_map(|idx| lines.line(idx))
        .any(|line| SX_PROP_RE.is_match(line))
}
