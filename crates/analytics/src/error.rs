use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Failed to fetch records for the dashboard: {0}")]
    Repository(#[from] RepositoryError),

    #[error("Invalid analytics option: {0}")]
    InvalidOption(String),
}

/// Errors raised by a [`crate::SalesRepository`] implementation.
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("The backend query failed: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Failed to read the repository snapshot: {0}")]
    Snapshot(#[from] serde_json::Error),
}
