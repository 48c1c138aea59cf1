//! Shared building blocks of `stylepaste`: the static property tables,
//! resolved conversion options, error severities and small text helpers.

pub mod error;
pub mod options;
mod shorthands;
mod utils;

pub use options::{ConversionConfig, Dialect, PasteOptions};
pub use shorthands::*;
pub use utils::{format_js_number, to_camel_case};
