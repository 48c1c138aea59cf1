use strum_macros::{AsRefStr, EnumString, IntoStaticStr};

/// Options which change how a single declaration value is emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConversionConfig {
    /// Strip the trailing `px` from plain integer values,
    /// e.g. `12px` -> `12`. Ignored for the shorthand dialect,
    /// which always works with unitless numbers.
    /// Default: true
    pub remove_pixel_unit: bool,

    /// Wrap non-numeric, non-hex-color values in single quotes,
    /// e.g. `red` -> `'red'`.
    /// Default: true
    pub quote_values: bool,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            remove_pixel_unit: true,
            quote_values: true,
        }
    }
}

/// Naming and unit convention of the produced object
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, AsRefStr, EnumString, IntoStaticStr)]
pub enum Dialect {
    /// `background-color: red` -> `backgroundColor: 'red'`
    #[default]
    #[strum(serialize = "plain")]
    Plain,
    /// The `sx` prop convention: `margin-top: 16px` -> `mt: 2`
    #[strum(serialize = "sx")]
    Shorthand,
}

impl Dialect {
    #[inline]
    pub fn from_shorthand(is_shorthand: bool) -> Self {
        if is_shorthand {
            Dialect::Shorthand
        } else {
            Dialect::Plain
        }
    }

    #[inline]
    pub fn is_shorthand(self) -> bool {
        matches!(self, Dialect::Shorthand)
    }
}

/// Everything the paste handler needs to know about the user settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasteOptions {
    /// Master switch. When off, every paste passes through untouched.
    /// Default: true
    pub enabled: bool,
    pub conversion: ConversionConfig,
}

impl Default for PasteOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            conversion: ConversionConfig::default(),
        }
    }
}
