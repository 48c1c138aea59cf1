use std::fmt::Display;

use regex::Regex;
use strum_macros::{AsRefStr, IntoStaticStr};
use stylepaste_core::{
    error::{Severity, SeverityLevel},
    is_supported_language, ConversionConfig, Dialect, PasteOptions,
};

use crate::{convert, find_style_context, is_css_like, is_shorthand_prop_context, LineAccessor};

lazy_static! {
    /// `a: function`, `, function`
    static ref FUNCTION_VALUE_RE: Regex = Regex::new(r"[:,]\s*function").unwrap();
}

/// Clipboard contents and where they are being pasted
#[derive(Debug, Clone, Copy)]
pub struct PasteRequest<'t> {
    /// Raw clipboard text
    pub text: &'t str,
    /// Editor language of the document, e.g. `typescriptreact`
    pub language_id: &'t str,
    /// Zero-based line of the cursor
    pub line_number: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasteOutcome {
    /// Insert `text` at the cursor instead of the clipboard contents
    Insert { text: String, dialect: Dialect },
    /// Paste the clipboard contents as they are
    Passthrough(DeclineReason),
}

/// Why a paste was not converted
#[derive(Debug, Clone, Copy, PartialEq, Eq, AsRefStr, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
pub enum DeclineReason {
    Disabled,
    UnsupportedLanguage,
    Empty,
    /// Starts with `{`
    AlreadyObject,
    /// Has upper-case letters, `:{` or function values
    LooksLikeJs,
    NotCss,
    /// No style object is opened near the cursor
    NoStyleContext,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteError {
    /// The manual conversion was invoked without a selection
    EmptySelection,
}

/// Decides whether the clipboard contents should be converted and converts them.
///
/// The caller is responsible for inserting the text and re-formatting the document,
/// or for performing the default paste when the outcome is [`PasteOutcome::Passthrough`].
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(language_id = request.language_id, line_number = request.line_number)
)]
pub fn handle_paste(
    request: &PasteRequest,
    lines: &impl LineAccessor,
    options: &PasteOptions,
) -> PasteOutcome {
    if !options.enabled {
        return decline(DeclineReason::Disabled);
    }

    if !is_supported_language(request.language_id) {
        return decline(DeclineReason::UnsupportedLanguage);
    }

    let text = request.text.trim();
    if text.is_empty() {
        return decline(DeclineReason::Empty);
    }

    if text.starts_with('{') {
        return decline(DeclineReason::AlreadyObject);
    }

    if looks_like_js(text) {
        return decline(DeclineReason::LooksLikeJs);
    }

    if !is_css_like(text) {
        return decline(DeclineReason::NotCss);
    }

    let Some((context_line, context)) = find_style_context(request.line_number, lines) else {
        return decline(DeclineReason::NoStyleContext);
    };

    let current_line = lines.line(request.line_number).unwrap_or_default();
    let dialect = Dialect::from_shorthand(is_shorthand_prop_context(
        current_line,
        request.line_number,
        lines,
    ));

    tracing::debug!(
        context_line,
        context = context.as_ref(),
        dialect = dialect.as_ref(),
        "converting pasted CSS"
    );

    PasteOutcome::Insert {
        text: convert(text, dialect, &options.conversion),
        dialect,
    }
}

/// Converts a selection to plain style-object entries.
/// Unlike pasting, no heuristics are applied: the user asked for it explicitly.
pub fn convert_selection(
    selection: &str,
    config: &ConversionConfig,
) -> Result<String, PasteError> {
    if selection.is_empty() {
        return Err(PasteError::EmptySelection);
    }

    Ok(convert(selection, Dialect::Plain, config))
}

/// Camel-cased names, nested objects and functions only happen in JS
fn looks_like_js(text: &str) -> bool {
    text.contains(":{")
        || text.bytes().any(|b| b.is_ascii_uppercase())
        || FUNCTION_VALUE_RE.is_match(text)
}

#[inline]
fn decline(reason: DeclineReason) -> PasteOutcome {
    tracing::debug!(reason = reason.as_ref(), "pasting as is");
    PasteOutcome::Passthrough(reason)
}

impl PasteOutcome {
    #[inline]
    pub fn is_insert(&self) -> bool {
        matches!(self, PasteOutcome::Insert { .. })
    }
}

impl Severity for PasteError {
    fn get_severity(&self) -> SeverityLevel {
        match self {
            PasteError::EmptySelection => SeverityLevel::UnrecoverableError,
        }
    }
}

impl Display for PasteError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PasteError::EmptySelection => write!(f, "No text selected!"),
        }
    }
}

impl std::error::Error for PasteError {}
