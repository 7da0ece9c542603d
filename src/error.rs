// ─── Error ──────────────────────────────────────────────────────────────────
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArrayError {
    /// Malformed construction parameter, e.g. a negative or fractional count.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Can't build a record from a non-object value")]
    NotAnObject,
}
