//! Render configuration for layout and resource limits.
//!
//! This module provides [`RenderConfig`] for controlling output layout and
//! the recursion limit that protects the renderer from very deep trees.
//!
//! # Example
//!
//! ```ignore
//! use unparser_core::config::RenderConfig;
//!
//! // Two-space indentation, recursion depth 256
//! let config = RenderConfig::default();
//!
//! // Tabs, deeper trees
//! let config = RenderConfig::new()
//!     .with_tabs()
//!     .with_max_recursion_depth(1024);
//! ```

use crate::Error;

/// Configuration for rendering layout and resource limits.
///
/// # Default Values
///
/// | Setting | Default |
/// |---------|---------|
/// | `max_recursion_depth` | 256 |
/// | `indent_width` | 2 |
/// | `use_tabs` | `false` |
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderConfig {
    /// Maximum allowed recursion depth.
    ///
    /// Each rendered node nests one level deeper than its parent. If the
    /// depth exceeds this limit, rendering fails with
    /// [`Error::RecursionLimitExceeded`].
    pub max_recursion_depth: usize,

    /// Spaces per indentation level when `use_tabs` is off.
    pub indent_width: usize,

    /// Indent with one tab per level instead of spaces.
    pub use_tabs: bool,
}

impl Default for RenderConfig {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl RenderConfig {
    /// Default configuration, usable in const contexts.
    pub const DEFAULT: Self = Self {
        max_recursion_depth: 256,
        indent_width: 2,
        use_tabs: false,
    };

    /// Creates a new configuration with default values.
    #[inline]
    pub const fn new() -> Self {
        Self::DEFAULT
    }

    /// Sets the maximum recursion depth.
    ///
    /// # Arguments
    ///
    /// * `depth` - Maximum nesting level. Use `usize::MAX` to disable the limit.
    #[inline]
    pub const fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Sets the number of spaces per indentation level.
    #[inline]
    pub const fn with_indent_width(mut self, width: usize) -> Self {
        self.indent_width = width;
        self
    }

    /// Indents with tabs.
    #[inline]
    pub const fn with_tabs(mut self) -> Self {
        self.use_tabs = true;
        self
    }

    /// Disables the recursion limit.
    ///
    /// # Warning
    ///
    /// Only use this for trees from a trusted parser; a deep enough tree
    /// will overflow the stack.
    #[inline]
    pub const fn disable_recursion_limit(self) -> Self {
        self.with_max_recursion_depth(usize::MAX)
    }
}

/// Tracks recursion depth during rendering.
///
/// Pairs with [`RenderConfig`], which provides the limit.
///
/// # Example
///
/// ```ignore
/// fn visit(&mut self, node: &Node) -> Result<(), Error> {
///     self.depth.enter(self.config.max_recursion_depth)?;
///     let result = self.render(node);
///     self.depth.exit();
///     result
/// }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct RecursionGuard {
    depth: usize,
}

impl RecursionGuard {
    /// Creates a new guard with depth 0.
    #[inline]
    pub const fn new() -> Self {
        Self { depth: 0 }
    }

    /// Current recursion depth.
    #[inline]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Enter a nested node, incrementing depth.
    ///
    /// Returns `Err(Error::RecursionLimitExceeded)` if the new depth would
    /// exceed `limit`. The depth stays incremented either way, so every
    /// `enter` must be paired with an `exit`.
    #[inline]
    pub fn enter(&mut self, limit: usize) -> Result<(), Error> {
        self.depth = self.depth.saturating_add(1);
        if self.depth > limit {
            Err(Error::RecursionLimitExceeded {
                depth: self.depth,
                limit,
            })
        } else {
            Ok(())
        }
    }

    /// Leave a nested node, decrementing depth.
    ///
    /// Uses saturating subtraction so extra `exit()` calls don't underflow.
    #[inline]
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.max_recursion_depth, 256);
        assert_eq!(config.indent_width, 2);
        assert!(!config.use_tabs);
    }

    #[test]
    fn test_render_config_builder() {
        let config = RenderConfig::new()
            .with_max_recursion_depth(64)
            .with_indent_width(4)
            .with_tabs();

        assert_eq!(config.max_recursion_depth, 64);
        assert_eq!(config.indent_width, 4);
        assert!(config.use_tabs);
    }

    #[test]
    fn test_render_config_disable_recursion() {
        let config = RenderConfig::new().disable_recursion_limit();
        assert_eq!(config.max_recursion_depth, usize::MAX);
    }

    #[test]
    fn test_recursion_guard_basic() {
        let mut guard = RecursionGuard::new();
        assert_eq!(guard.depth(), 0);

        guard.enter(16).unwrap();
        guard.enter(16).unwrap();
        assert_eq!(guard.depth(), 2);

        guard.exit();
        assert_eq!(guard.depth(), 1);
    }

    #[test]
    fn test_recursion_guard_limit_exceeded() {
        let mut guard = RecursionGuard::new();

        for _ in 0..3 {
            guard.enter(3).unwrap();
        }

        let result = guard.enter(3);
        assert!(matches!(
            result,
            Err(Error::RecursionLimitExceeded { depth: 4, limit: 3 })
        ));
    }

    #[test]
    fn test_recursion_guard_exit_saturates() {
        let mut guard = RecursionGuard::new();
        guard.exit();
        guard.exit();
        assert_eq!(guard.depth(), 0);
    }

    #[test]
    fn test_recursion_guard_failed_enter_still_pairs_with_exit() {
        let mut guard = RecursionGuard::new();
        guard.enter(1).unwrap();
        assert!(guard.enter(1).is_err());
        guard.exit();
        guard.exit();
        assert_eq!(guard.depth(), 0);
    }
}
