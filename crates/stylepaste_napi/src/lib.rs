#![deny(clippy::all)]

#[cfg(not(all(target_os = "linux", target_env = "musl", target_arch = "aarch64")))]
#[global_allocator]
static ALLOC: mimalloc_rust::GlobalMiMalloc = mimalloc_rust::GlobalMiMalloc;

use napi::bindgen_prelude::*;
use napi_derive::napi;
use stylepaste::{Dialect, PasteRequest};
use stylepaste_core::{ConversionConfig, PasteOptions};

mod structs;

pub use structs::*;

#[napi]
pub fn is_css_like(text: String) -> bool {
    stylepaste::is_css_like(&text)
}

#[napi]
pub fn is_style_context(line: String) -> bool {
    stylepaste::is_style_context(&line)
}

#[napi]
pub fn is_shorthand_prop_context(
    current_line: String,
    line_number: u32,
    lines: Vec<String>,
) -> bool {
    stylepaste::is_shorthand_prop_context(&current_line, line_number as usize, &lines)
}

#[napi]
pub fn convert(
    css: String,
    is_sx_prop: Option<bool>,
    options: Option<StylePasteConvertOptions>,
) -> String {
    let config = resolve_convert_options(options.as_ref());
    stylepaste::convert(&css, Dialect::from_shorthand(is_sx_prop.unwrap_or(false)), &config)
}

/// Same as `convert`, but also returns the dropped declarations
#[napi]
pub fn convert_with_errors(
    css: String,
    is_sx_prop: Option<bool>,
    options: Option<StylePasteConvertOptions>,
) -> StylePasteConvertResult {
    let config = resolve_convert_options(options.as_ref());
    let mut errors = Vec::new();
    let code = stylepaste::convert_with_errors(
        &css,
        Dialect::from_shorthand(is_sx_prop.unwrap_or(false)),
        &config,
        &mut errors,
    );

    StylePasteConvertResult {
        code,
        errors: errors.into_iter().map(From::from).collect(),
    }
}

/// The manual "convert selection" command
#[napi]
pub fn convert_selection(
    selection: String,
    options: Option<StylePasteConvertOptions>,
) -> Result<String> {
    let config = resolve_convert_options(options.as_ref());
    stylepaste::convert_selection(&selection, &config)
        .map_err(|e| Error::from_reason(e.to_string()))
}

/// Decides what to do with the clipboard contents.
/// `lines` must contain the document lines at least up to the cursor line.
#[napi]
pub fn handle_paste(
    request: StylePastePasteRequest,
    lines: Vec<String>,
    options: Option<StylePastePasteOptions>,
) -> StylePastePasteResult {
    let options = options
        .as_ref()
        .map(PasteOptions::from)
        .unwrap_or_default();

    let request = PasteRequest {
        text: &request.text,
        language_id: &request.language_id,
        line_number: request.line_number as usize,
    };

    stylepaste::handle_paste(&request, &lines, &options).into()
}

fn resolve_convert_options(options: Option<&StylePasteConvertOptions>) -> ConversionConfig {
    options.map(ConversionConfig::from).unwrap_or_default()
}
