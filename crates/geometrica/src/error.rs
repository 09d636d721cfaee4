//! Error taxonomy shared by the transform and trig modules.
//!
//! All validation is eager: an error is returned before any arithmetic runs,
//! so callers never observe partially transformed output.

use std::fmt;

/// Convenience alias used throughout the crate.
pub type GeomResult<T> = Result<T, GeomError>;

/// Errors surfaced by transforms and triangle solvers.
#[derive(Clone, Debug, PartialEq)]
pub enum GeomError {
    /// A value is not numeric, or an enumerated field got an out-of-domain value.
    InvalidArgument { field: String, reason: String },
    /// A solver got the wrong number of known/unknown quantities.
    ArgumentCount { op: &'static str, supplied: usize },
    /// A field that must be a string is some other kind of value.
    InvalidType {
        field: String,
        expected: &'static str,
        found: String,
    },
    /// The inputs are numeric but describe no triangle (asin/acos out of range).
    NoSolution { reason: String },
}

impl GeomError {
    pub(crate) fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            reason: reason.into(),
        }
    }

    pub(crate) fn no_solution(reason: impl Into<String>) -> Self {
        Self::NoSolution {
            reason: reason.into(),
        }
    }

    /// Build an `InvalidType` error; used by dynamic front-ends (CLI, bindings).
    pub fn invalid_type(
        field: impl Into<String>,
        expected: &'static str,
        found: impl Into<String>,
    ) -> Self {
        Self::InvalidType {
            field: field.into(),
            expected,
            found: found.into(),
        }
    }

    /// Build an `InvalidArgument` error from outside the crate.
    pub fn invalid_argument(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::invalid(field, reason)
    }
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::InvalidArgument { field, reason } => {
                write!(f, "invalid argument `{field}`: {reason}")
            }
            GeomError::ArgumentCount { op, supplied } => write!(
                f,
                "{op}() needs exactly one unknown quantity, got {supplied} known values"
            ),
            GeomError::InvalidType {
                field,
                expected,
                found,
            } => write!(f, "`{field}` must be {expected}, not '{found}'"),
            GeomError::NoSolution { reason } => write!(f, "no triangle satisfies inputs: {reason}"),
        }
    }
}

impl std::error::Error for GeomError {}

#[cfg(test)]
mod tests {
    use super::GeomError;

    #[test]
    fn display_names_the_field() {
        let err = GeomError::invalid("side1", "must be a number, not 'NaN'");
        assert_eq!(
            err.to_string(),
            "invalid argument `side1`: must be a number, not 'NaN'"
        );
        let err = GeomError::invalid_type("hand", "a string", "100");
        assert_eq!(err.to_string(), "`hand` must be a string, not '100'");
    }
}
