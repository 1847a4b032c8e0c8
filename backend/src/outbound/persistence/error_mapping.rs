//! Translation of pool, Diesel and deadline failures into port errors.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::{BookRepositoryError, UserRepositoryError};

use super::pool::PoolError;

/// Constructors shared by every repository port error.
pub(crate) trait StorageError: Sized {
    fn connection(message: String) -> Self;
    fn query(message: String) -> Self;
    fn constraint(message: String) -> Self;
    fn timeout(operation: &'static str, millis: u64) -> Self;
}

macro_rules! impl_storage_error {
    ($($error:ty),+ $(,)?) => {
        $(
            impl StorageError for $error {
                fn connection(message: String) -> Self {
                    <$error>::connection(message)
                }

                fn query(message: String) -> Self {
                    <$error>::query(message)
                }

                fn constraint(message: String) -> Self {
                    <$error>::constraint(message)
                }

                fn timeout(operation: &'static str, millis: u64) -> Self {
                    <$error>::timeout(operation, millis)
                }
            }
        )+
    };
}

impl_storage_error!(BookRepositoryError, UserRepositoryError);

/// Checkout failures always surface as connection errors.
pub(crate) fn map_pool_error<E: StorageError>(error: PoolError) -> E {
    E::connection(error.into_message())
}

/// Classify a Diesel failure, keeping the database's own message.
pub(crate) fn map_diesel_error<E: StorageError>(error: DieselError) -> E {
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        _ => debug!(error = %error, "diesel operation failed"),
    }

    match error {
        DieselError::DatabaseError(kind, info) => {
            let message = info.message().to_owned();
            match kind {
                DatabaseErrorKind::ClosedConnection => E::connection(message),
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation => E::constraint(message),
                _ => E::query(message),
            }
        }
        DieselError::BrokenTransactionManager => E::connection(error.to_string()),
        other => E::query(other.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diesel::result::DatabaseErrorInformation;
    use rstest::rstest;

    struct Info(&'static str);

    impl DatabaseErrorInformation for Info {
        fn message(&self) -> &str {
            self.0
        }
        fn details(&self) -> Option<&str> {
            None
        }
        fn hint(&self) -> Option<&str> {
            None
        }
        fn table_name(&self) -> Option<&str> {
            None
        }
        fn column_name(&self) -> Option<&str> {
            None
        }
        fn constraint_name(&self) -> Option<&str> {
            None
        }
        fn statement_position(&self) -> Option<i32> {
            None
        }
    }

    fn database_error(kind: DatabaseErrorKind, message: &'static str) -> DieselError {
        DieselError::DatabaseError(kind, Box::new(Info(message)))
    }

    #[rstest]
    #[case(DatabaseErrorKind::UniqueViolation)]
    #[case(DatabaseErrorKind::ForeignKeyViolation)]
    #[case(DatabaseErrorKind::NotNullViolation)]
    #[case(DatabaseErrorKind::CheckViolation)]
    fn integrity_violations_become_constraint_errors(#[case] kind: DatabaseErrorKind) {
        let mapped: BookRepositoryError = map_diesel_error(database_error(kind, "violates"));
        assert_eq!(mapped, BookRepositoryError::constraint("violates"));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        let mapped: UserRepositoryError = map_diesel_error(database_error(
            DatabaseErrorKind::ClosedConnection,
            "server closed the connection",
        ));
        assert_eq!(
            mapped,
            UserRepositoryError::connection("server closed the connection")
        );
    }

    #[rstest]
    fn other_failures_are_query_errors_with_the_driver_text() {
        let mapped: BookRepositoryError = map_diesel_error(DieselError::NotFound);
        assert_eq!(mapped, BookRepositoryError::query("Record not found"));
    }

    #[rstest]
    fn pool_errors_are_connection_errors() {
        let mapped: UserRepositoryError = map_pool_error(PoolError::checkout("timed out"));
        assert_eq!(mapped, UserRepositoryError::connection("timed out"));
    }
}
