//! Errors surfaced for rejected property updates.

use scenery_core::AlignmentParseError;

/// A configuration error in a property map.
///
/// Any of these rejects the whole update; nothing is applied partially.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PropsError {
    /// A compound alignment token failed to parse.
    #[error(transparent)]
    Alignment(#[from] AlignmentParseError),

    /// A recognized key carried a value of the wrong shape.
    #[error("property `{key}`: expected {expected}")]
    InvalidValue {
        /// The property key.
        key: String,
        /// What a valid value looks like.
        expected: &'static str,
    },
}

impl PropsError {
    pub(crate) fn invalid(key: &str, expected: &'static str) -> Self {
        Self::InvalidValue {
            key: key.to_string(),
            expected,
        }
    }
}
