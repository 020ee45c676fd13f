//! Error types for mealprep-rs.
//!
//! A single `thiserror`-derived enum covers every fatal failure in the
//! workspace. The `ensure!` macro gives precondition checks a uniform
//! shape.

use thiserror::Error;

/// The top-level error type used throughout mealprep-rs.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// A date could not be constructed or moved out of the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// A date string could not be parsed.
    ///
    /// The message is surfaced verbatim to callers of the calculator, so it
    /// names the offending input.
    #[error("Invalid date format: {input}")]
    Parse {
        /// The raw string that failed to parse.
        input: String,
    },

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A configuration source (holiday table, rule file) is malformed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Build a [`Error::Parse`] for the given raw input.
    pub fn parse(input: impl Into<String>) -> Self {
        Error::Parse {
            input: input.into(),
        }
    }

    /// Return `true` for errors caused by caller-supplied input, as opposed
    /// to configuration or internal failures.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Error::Parse { .. } | Error::InvalidArgument(_) | Error::Date(_)
        )
    }
}

/// Shorthand `Result` type used throughout mealprep-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use mp_core::{ensure, errors::Error};
/// fn non_negative(days: i32) -> mp_core::errors::Result<i32> {
///     ensure!(days >= 0, "days must be non-negative, got {days}");
///     Ok(days)
/// }
/// assert!(non_negative(3).is_ok());
/// assert!(matches!(non_negative(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}
