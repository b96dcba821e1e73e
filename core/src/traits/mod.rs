//! Core traits for the unparser writer layer.
//!
//! This module defines the output side shared by every grammar-specific
//! unparser: a [`Writer`] that owns the text buffer and indentation state,
//! and [`ToSource`] for leaf values that render without tree context.
//!
//! # Trait Hierarchy
//!
//! ```text
//! Writer (text buffer, lazy indentation)
//!     └── write::<T>() where T: ToSource
//!
//! ToSource (leaf rendering)
//!     └── to_source() -> String
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use unparser_core::{ToSource, Writer};
//!
//! impl ToSource for Keyword {
//!     type Writer = SourceBuffer;
//!
//!     fn write(&self, w: &mut SourceBuffer) {
//!         w.word(self.as_str());
//!     }
//! }
//! ```
//!
//! # Feature Flags
//!
//! - `std`: Enables `std::error::Error` implementations
//! - `serde`: Enables serialization for [`RenderConfig`](crate::RenderConfig)

mod to_source;
mod writer;

pub use to_source::ToSource;
pub use writer::Writer;
