use std::fmt::Display;

use stylepaste_core::error::{Severity, SeverityLevel};

/// A problem with a single declaration of the converted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertError {
    /// Trimmed source of the declaration (comments already stripped)
    pub segment: String,
    pub kind: ConvertErrorKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvertErrorKind {
    /// No `:` between property and value, e.g. `color red`
    MissingColon,
    /// Nothing before the `:`, e.g. `: red`
    EmptyProperty,
    /// Nothing after the `:`, e.g. `color:`
    EmptyValue,
    /// A number with `px` or `%` was emitted as-is, without quotes,
    /// which the host may need to fix by hand
    UnquotedUnit,
}

impl ConvertError {
    pub fn new(segment: &str, kind: ConvertErrorKind) -> ConvertError {
        ConvertError {
            segment: segment.to_owned(),
            kind,
        }
    }
}

impl Severity for ConvertError {
    fn get_severity(&self) -> SeverityLevel {
        match self.kind {
            ConvertErrorKind::MissingColon
            | ConvertErrorKind::EmptyProperty
            | ConvertErrorKind::EmptyValue => SeverityLevel::RecoverableError,
            ConvertErrorKind::UnquotedUnit => SeverityLevel::Warning,
        }
    }
}

impl Display for ConvertErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConvertErrorKind::MissingColon => write!(f, "declaration has no `:`"),
            ConvertErrorKind::EmptyProperty => write!(f, "declaration has an empty property"),
            ConvertErrorKind::EmptyValue => write!(f, "declaration has an empty value"),
            ConvertErrorKind::UnquotedUnit => write!(f, "value with a unit is left unquoted"),
        }
    }
}

impl Display for ConvertError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} in `{}`", self.kind, self.segment)
    }
}

impl std::error::Error for ConvertError {}
