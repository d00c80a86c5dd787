// Error classification for consistent exit codes

use crate::Error;

/// Exit code for user-correctable errors (bad or missing configuration).
pub const EXIT_USER_ERROR: i32 = 1;

/// Exit code for internal failures (store unreachable, query failed,
/// malformed row shape).
pub const EXIT_INTERNAL_ERROR: i32 = 2;

/// Map a pipeline failure to the process exit code.
///
/// Configuration problems are the operator's to fix and exit 1; everything
/// else means the store or the data let us down and exits 2.
pub fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(err) if err.is_user_error() => EXIT_USER_ERROR,
        _ => EXIT_INTERNAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_is_user_error() {
        let err = anyhow::Error::new(Error::configuration("DB_HOST is not set"));
        assert_eq!(exit_code(&err), EXIT_USER_ERROR);
    }

    #[test]
    fn test_shape_mismatch_is_internal() {
        let err = anyhow::Error::new(Error::ShapeMismatch {
            row: 0,
            expected: 7,
            actual: 3,
        });
        assert_eq!(exit_code(&err), EXIT_INTERNAL_ERROR);
    }

    #[test]
    fn test_classification_survives_context() {
        use anyhow::Context;
        let err: anyhow::Error = Err::<(), _>(Error::configuration("DB_USER is not set"))
            .context("refresh failed")
            .unwrap_err();
        assert_eq!(exit_code(&err), EXIT_USER_ERROR);
    }

    #[test]
    fn test_unknown_error_is_internal() {
        let err = anyhow::anyhow!("something else entirely");
        assert_eq!(exit_code(&err), EXIT_INTERNAL_ERROR);
    }
}
