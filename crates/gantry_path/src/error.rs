//! Errors raised by strict path parsing.

/// Error when a textual path is malformed.
///
/// Only [`Path::parse_strict`](crate::Path::parse_strict) and the `FromStr`
/// impl produce these; [`Path::new`](crate::Path::new) is lenient and never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PathError {
    /// Two separators in a row, or a trailing separator.
    #[error("identity path `{path}` has an empty segment at position {index}")]
    EmptySegment { path: String, index: usize },
    /// A segment made only of whitespace.
    #[error("identity path `{path}` has a blank segment at position {index}")]
    BlankSegment { path: String, index: usize },
}
