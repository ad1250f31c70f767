use thiserror::Error;

/// SQLSTATE raised by PostgreSQL for a UNIQUE constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Email already exists")]
    EmailTaken,
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) {
                return RepositoryError::EmailTaken;
            }
        }
        RepositoryError::Database(err)
    }
}
