//! Converts CSS declarations pasted into JS/TS code into style-object entries
//!
//! ## Example
//! ```
//! use stylepaste::{convert, is_css_like, ConversionConfig, Dialect};
//!
//! let input = "color: red; font-size: 12px;";
//! assert!(is_css_like(input));
//!
//! let plain = convert(input, Dialect::Plain, &ConversionConfig::default());
//! assert_eq!("  color: 'red',\n  fontSize: 12", plain);
//!
//! let sx = convert("margin-top: 16px;", Dialect::Shorthand, &ConversionConfig::default());
//! assert_eq!("  mt: 2", sx);
//! ```
//!
//! The host editor is expected to check [`is_css_like`] and the paste context
//! ([`find_style_context`], [`is_shorthand_prop_context`]) before converting,
//! or to delegate the whole decision to [`handle_paste`].

#[macro_use]
extern crate lazy_static;

mod context;
mod convert;
mod likeness;
mod paste;

pub use context::*;
pub use convert::*;
pub use likeness::is_css_like;
pub use paste::*;

pub use stylepaste_core::error::{Severity, SeverityLevel};
pub use stylepaste_core::{ConversionConfig, Dialect, PasteOptions};
