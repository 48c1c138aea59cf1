use napi_derive::napi;
use stylepaste::{ConvertError, PasteOutcome, Severity};
use stylepaste_core::{ConversionConfig, PasteOptions};

/// Raw conversion options passed from the Node.js side
#[napi(object)]
#[derive(Default, Clone)]
pub struct StylePasteConvertOptions {
    /// Strip `px` from plain integer values. Default: true
    pub remove_pixel_unit: Option<bool>,
    /// Quote values which are neither numbers nor hex colors. Default: true
    pub quote_values: Option<bool>,
}

/// Raw paste options, usually read from the `autoCssToJs` settings section
#[napi(object)]
#[derive(Default, Clone)]
pub struct StylePastePasteOptions {
    /// Master switch. Default: true
    pub enabled: Option<bool>,
    pub remove_pixel_unit: Option<bool>,
    pub quote_values: Option<bool>,
}

#[napi(object)]
pub struct StylePastePasteRequest {
    /// Clipboard text
    pub text: String,
    /// Language of the active document, e.g. `typescriptreact`
    pub language_id: String,
    /// Zero-based cursor line
    pub line_number: u32,
}

#[napi(object)]
pub struct StylePastePasteResult {
    /// Text to insert at the cursor. When absent, do the default paste.
    pub text: Option<String>,
    /// `plain` or `sx`, present together with `text`
    pub dialect: Option<String>,
    /// Why the paste was not converted, e.g. `no-style-context`
    pub declined: Option<String>,
}

#[napi(object)]
pub struct StylePasteConvertResult {
    pub code: String,
    pub errors: Vec<SerializedError>,
}

#[napi(object)]
pub struct SerializedError {
    pub segment: String,
    pub message: String,
    pub is_warning: bool,
}

impl From<&StylePasteConvertOptions> for ConversionConfig {
    fn from(value: &StylePasteConvertOptions) -> Self {
        let defaults = ConversionConfig::default();
        ConversionConfig {
            remove_pixel_unit: value.remove_pixel_unit.unwrap_or(defaults.remove_pixel_unit),
            quote_values: value.quote_values.unwrap_or(defaults.quote_values),
        }
    }
}

impl From<&StylePastePasteOptions> for PasteOptions {
    fn from(value: &StylePastePasteOptions) -> Self {
        let defaults = PasteOptions::default();
        PasteOptions {
            enabled: value.enabled.unwrap_or(defaults.enabled),
            conversion: ConversionConfig::from(&StylePasteConvertOptions {
                remove_pixel_unit: value.remove_pixel_unit,
                quote_values: value.quote_values,
            }),
        }
    }
}

impl From<PasteOutcome> for StylePastePasteResult {
    fn from(value: PasteOutcome) -> Self {
        match value {
            PasteOutcome::Insert { text, dialect } => StylePastePasteResult {
                text: Some(text),
                dialect: Some(dialect.as_ref().to_owned()),
                declined: None,
            },
            PasteOutcome::Passthrough(reason) => StylePastePasteResult {
                text: None,
                dialect: None,
                declined: Some(reason.as_ref().to_owned()),
            },
        }
    }
}

impl From<ConvertError> for SerializedError {
    fn from(value: ConvertError) -> Self {
        SerializedError {
            message: value.kind.to_string(),
            is_warning: value.is_warning(),
            segment: value.segment,
        }
    }
}
