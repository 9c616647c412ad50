//! Common error infrastructure for grimoire-core.
//!
//! Domain-specific errors (e.g. [`crate::catalog::CatalogError`],
//! [`crate::filter::LookupError`]) are defined next to the code that raises
//! them. This module only provides the shared classification used when
//! reporting them.

/// Severity level of an error, used for categorization and reporting.
///
/// - **Validation**: invalid input that should be rejected without retry
/// - **Internal**: an invariant the crate itself is responsible for was broken
/// - **Fatal**: the data source is unusable; no catalog can be published
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: unknown action id passed to `set_unlocked`
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// Examples: a filter key missing from the pre-populated filter map
    Internal,

    /// Fatal error - the catalog cannot be built.
    ///
    /// Examples: missing joined row, stats text outside the closed grammar
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all grimoire errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait DexError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_names() {
        assert_eq!(ErrorSeverity::Internal.as_str(), "internal");
        assert_eq!(ErrorSeverity::Validation.as_str(), "validation");
        assert_eq!(ErrorSeverity::Fatal.as_str(), "fatal");
    }
}
