pub mod config;
mod error;
pub mod traits;

pub use config::{RecursionGuard, RenderConfig};
pub use error::Error;
pub use traits::{ToSource, Writer};
