// sqlx::Error -> AppError mapping
//
// Lives here because of the orphan rule (no From<sqlx::Error> for AppError in core).

use tally_core::error::AppError;

// Helper to convert sqlx::Error to AppError with structured information
pub(crate) fn map_sqlx_error(err: sqlx::Error) -> AppError {
    match &err {
        sqlx::Error::Database(db_err) => {
            // SQLite extended result codes: https://www.sqlite.org/rescode.html
            match db_err.code().as_deref() {
                Some("2067") | Some("1555") => {
                    // UNIQUE / PRIMARY KEY constraint failed
                    AppError::Conflict(unique_violation_message(db_err.message()))
                }
                Some("787") => {
                    // FOREIGN KEY constraint failed
                    AppError::Conflict("Record is still referenced by other records".to_string())
                }
                Some("275") => {
                    // CHECK constraint failed
                    AppError::Validation(format!("Constraint failed: {}", db_err.message()))
                }
                Some("5") => {
                    // SQLITE_BUSY - database is locked
                    AppError::Database(format!(
                        "Database locked (SQLITE_BUSY): {}",
                        db_err.message()
                    ))
                }
                Some("13") => {
                    // SQLITE_FULL - database or disk is full
                    AppError::Database(format!("Database full: {}", db_err.message()))
                }
                Some(code) => {
                    AppError::Database(format!("Database error [{}]: {}", code, db_err.message()))
                }
                None => AppError::Database(format!("Database error: {}", db_err.message())),
            }
        }
        sqlx::Error::RowNotFound => AppError::Database("Row not found".to_string()),
        sqlx::Error::ColumnNotFound(col) => {
            AppError::Database(format!("Column not found: {}", col))
        }
        _ => {
            // Connection, pool, protocol errors
            AppError::Database(err.to_string())
        }
    }
}

/// "UNIQUE constraint failed: users.email" -> "email is already taken"
fn unique_violation_message(message: &str) -> String {
    message
        .rsplit('.')
        .next()
        .filter(|column| !column.contains(' '))
        .map(|column| format!("{} is already taken", column))
        .unwrap_or_else(|| "Duplicate record".to_string())
}
