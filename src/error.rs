use core::fmt;

/// Result alias for `geocluster`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering algorithms.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input was empty.
    EmptyInput,

    /// Length mismatch between two inputs that must agree.
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Found length.
        found: usize,
    },

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of items.
        n_items: usize,
    },

    /// Invalid parameter value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::DimensionMismatch { expected, found } => {
                write!(f, "length mismatch: expected {expected}, found {found}")
            }
            Error::InvalidClusterCount { requested, n_items } => {
                write!(f, "cannot create {requested} clusters from {n_items} points")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::EmptyInput.to_string(), "empty input provided");
        assert_eq!(
            Error::InvalidClusterCount {
                requested: 5,
                n_items: 2
            }
            .to_string(),
            "cannot create 5 clusters from 2 points"
        );
        assert_eq!(
            Error::InvalidParameter {
                name: "damping",
                message: "must be in [0, 1)"
            }
            .to_string(),
            "invalid parameter 'damping': must be in [0, 1)"
        );
    }
}
