use thiserror::Error;

/// Rejected input. The only error the extension ever returns.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidArgument {
    #[error("resource name must not be empty")]
    EmptyResourceName,
    #[error("database name must not be empty (omit it to default to the resource name)")]
    EmptyDatabaseName,
}
