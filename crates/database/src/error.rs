use analytics::RepositoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("Failed to load environment variables for database connection: {0}")]
    ConnectionConfigError(String),

    #[error("Database query failed: {0}")]
    QueryError(#[from] sqlx::Error),
}

impl From<DbError> for RepositoryError {
    fn from(err: DbError) -> Self {
        RepositoryError::Backend(Box::new(err))
    }
}
