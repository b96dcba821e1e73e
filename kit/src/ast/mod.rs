//! Syntax tree consumed by the unparser.
//!
//! The tree comes from an external parser; this module only models it
//! ([`Node`], [`Child`], [`NodeKind`]) and reads/writes the s-expression
//! interchange format (see [`sexp`]).

mod kind;
mod node;
pub mod sexp;

pub use kind::NodeKind;
pub use node::{Child, Node};
pub use sexp::SexpError;
