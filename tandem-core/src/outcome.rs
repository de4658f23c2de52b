//! Callback outcome conversion.

use crate::error::BoxError;

/// Trait for converting a callback's return value into an outcome.
///
/// Return values are never collected by `emit`; only failure is observed.
///
/// # Default Implementations
///
/// - `()` → Success
/// - `Result<T, E>` → Delegates to inner `T` or propagates `E`
/// - `Option<T>` → Delegates to inner `T`, `None` is success
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not an `IntoOutcome`",
    label = "callbacks must return `()`, `Result` or `Option`",
    note = "IntoOutcome must implement the `into_outcome` method."
)]
pub trait IntoOutcome {
    /// Convert the return value into success or a boxed error.
    fn into_outcome(self) -> Result<(), BoxError>;
}

impl IntoOutcome for () {
    fn into_outcome(self) -> Result<(), BoxError> {
        Ok(())
    }
}

impl<T, E> IntoOutcome for Result<T, E>
where
    T: IntoOutcome,
    E: Into<BoxError>,
{
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Ok(t) => t.into_outcome(),
            Err(e) => Err(e.into()),
        }
    }
}

impl<T: IntoOutcome> IntoOutcome for Option<T> {
    fn into_outcome(self) -> Result<(), BoxError> {
        match self {
            Some(t) => t.into_outcome(),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fmt;

    #[derive(Debug)]
    struct Refused;

    impl fmt::Display for Refused {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("refused")
        }
    }

    impl std::error::Error for Refused {}

    #[test]
    fn test_unit_is_success() {
        assert!(().into_outcome().is_ok());
    }

    #[test]
    fn test_result_propagates_error() {
        let ok: Result<(), Refused> = Ok(());
        assert!(ok.into_outcome().is_ok());

        let err: Result<(), Refused> = Err(Refused);
        assert_eq!(err.into_outcome().unwrap_err().to_string(), "refused");
    }

    #[test]
    fn test_string_errors_convert() {
        let err: Result<(), &str> = Err("bad payload");
        assert_eq!(err.into_outcome().unwrap_err().to_string(), "bad payload");
    }

    #[test]
    fn test_option_none_is_success() {
        assert!(None::<()>.into_outcome().is_ok());
        let nested: Option<Result<(), Refused>> = Some(Err(Refused));
        assert!(nested.into_outcome().is_err());
    }
}
