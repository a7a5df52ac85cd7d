//! Domain error types.
//!
//! These errors represent validation failures in the domain layer. They are
//! distinct from topology loading and routing errors.

/// Domain-level errors for validation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomainError {
    /// A line token that is not one of the known lines
    #[error("unknown line: {0:?}")]
    UnknownLine(String),

    /// A line label with no tokens, or with an empty token between slashes
    #[error("line label must name at least one line: {0:?}")]
    EmptyLines(String),
}
