pub trait Severity {
    fn get_severity(&self) -> SeverityLevel;

    /// Returns `true` if the severity level is [`RecoverableError`].
    /// The offending piece of input was dropped, but the rest of it was processed.
    ///
    /// [`RecoverableError`]: SeverityLevel::RecoverableError
    #[must_use]
    fn is_recoverable_error(&self) -> bool {
        matches!(self.get_severity(), SeverityLevel::RecoverableError)
    }

    /// Returns `true` if the severity level is [`UnrecoverableError`].
    /// Nothing should be emitted and the host falls back to the unmodified input.
    ///
    /// [`UnrecoverableError`]: SeverityLevel::UnrecoverableError
    #[must_use]
    fn is_unrecoverable_error(&self) -> bool {
        matches!(self.get_severity(), SeverityLevel::UnrecoverableError)
    }

    /// Returns `true` if the severity level is [`Warning`].
    ///
    /// [`Warning`]: SeverityLevel::Warning
    #[must_use]
    fn is_warning(&self) -> bool {
        matches!(self.get_severity(), SeverityLevel::Warning)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeverityLevel {
    UnrecoverableError,
    RecoverableError,
    Warning,
}
