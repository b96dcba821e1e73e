#![deny(
    unsafe_code,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro
)]
//! Render Ruby syntax trees back into source text.
//!
//! Trees are built from [`Node`]s, either directly or by reading the
//! s-expression dump a parser produces:
//!
//! ```
//! let tree: unparser::Node = "(and_asgn (lvasgn :a) (lvar :b))".parse()?;
//! assert_eq!(unparser::unparse(&tree)?, "a &&= b");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Rendering fails instead of guessing: a node kind that cannot be
//! rendered where it appears, or a node whose children do not fit its
//! kind, aborts with an [`UnparseError`].

pub mod ast;
mod buffer;
pub mod emitter;
mod error;
mod quote;
pub mod token;

use tracing::debug;

pub use ast::{Child, Node, NodeKind, SexpError};
pub use buffer::SourceBuffer;
pub use emitter::literal::{Ident, StrLit, SymLit};
pub use emitter::{Emitter, RenderContext};
pub use error::UnparseError;
pub use token::Token;
pub use unparser_core::{RenderConfig, ToSource, Writer};

/// Render `root` with the default [`RenderConfig`].
pub fn unparse(root: &Node) -> Result<String, UnparseError> {
    unparse_with(root, RenderConfig::DEFAULT)
}

pub fn unparse_with(root: &Node, config: RenderConfig) -> Result<String, UnparseError> {
    debug!(kind = %root.kind(), nodes = root.size(), "unparse");
    let mut emitter = Emitter::new(config);
    emitter.emit(root)?;
    Ok(emitter.into_source())
}
