//! Core error types for the unparser writer layer.
//!
//! Grammar-specific unparsers should define their own error types and
//! implement `From<unparser_core::Error>` to carry these through.

use core::fmt;

/// Core unparser error type.
///
/// # Example
///
/// ```ignore
/// use thiserror::Error;
///
/// #[derive(Error, Debug)]
/// pub enum MyUnparseError {
///     #[error("no renderer for `{kind}`")]
///     UnsupportedKind { kind: String },
///
///     #[error(transparent)]
///     Limit(#[from] unparser_core::Error),
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Recursion limit exceeded during rendering.
    ///
    /// Rendering is recursive over the input tree, so a pathologically deep
    /// tree would otherwise overflow the stack. The limit comes from
    /// [`RenderConfig::max_recursion_depth`](crate::RenderConfig).
    RecursionLimitExceeded {
        /// Current recursion depth when limit was exceeded.
        depth: usize,
        /// Maximum allowed recursion depth.
        limit: usize,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::RecursionLimitExceeded { depth, limit } => {
                write!(
                    f,
                    "recursion limit exceeded: depth {} > limit {}",
                    depth, limit
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
