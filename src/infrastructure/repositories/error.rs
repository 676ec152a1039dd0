use crate::domain::errors::DomainError;

/// SQLite names the offending columns rather than the constraint.
const CNT_USER_USERNAME: &str = "users.username";

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if db_err.is_unique_violation() {
                if db_err.message().contains(CNT_USER_USERNAME) {
                    return DomainError::Conflict("username already exists".into());
                }
                return DomainError::Conflict("unique constraint violated".into());
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
