//! Error type shared by the sorting code and table bindings.

/// Failures surfaced while reading or writing a table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The table has no body to sort.
    #[error("table has no body element")]
    MissingBody,
    /// The UI tree rejected a query or update.
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
