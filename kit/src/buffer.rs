use unparser_core::{RenderConfig, Writer};

use crate::token::Token;

/// Output buffer for Ruby source.
pub struct SourceBuffer {
    buf: String,
    indent_level: usize,
    indent_width: usize,
    use_tabs: bool,
}

impl Default for SourceBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceBuffer {
    pub fn new() -> Self {
        Self::from_config(&RenderConfig::DEFAULT)
    }

    pub fn from_config(config: &RenderConfig) -> Self {
        Self {
            buf: String::with_capacity(1024),
            indent_level: 0,
            indent_width: config.indent_width,
            use_tabs: config.use_tabs,
        }
    }

    pub fn with_capacity(cap: usize) -> Self {
        Self {
            buf: String::with_capacity(cap),
            ..Self::default()
        }
    }
}

impl Writer for SourceBuffer {
    type Token = Token;

    fn buf(&self) -> &str {
        &self.buf
    }

    fn buf_mut(&mut self) -> &mut String {
        &mut self.buf
    }

    fn indent_level(&self) -> usize {
        self.indent_level
    }

    fn set_indent(&mut self, level: usize) {
        self.indent_level = level;
    }

    fn into_string(self) -> String {
        self.buf
    }

    fn indent_width(&self) -> usize {
        self.indent_width
    }

    fn use_tabs(&self) -> bool {
        self.use_tabs
    }

    /// Consecutive line breaks collapse into one, so nested indented
    /// sections never leave blank lines behind.
    fn newline(&mut self) {
        if !self.at_line_start() {
            self.buf.push('\n');
        }
    }

    fn token(&mut self, t: &Token) {
        self.word(t.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unparser_core::ToSource;

    #[test]
    fn tokens_follow_indentation() {
        let mut buf = SourceBuffer::new();
        buf.write(&Token::Begin);
        buf.indent();
        buf.newline();
        buf.word("work");
        buf.dedent();
        buf.newline();
        buf.write(&Token::End);
        assert_eq!(buf.into_string(), "begin\n  work\nend");
    }

    #[test]
    fn tab_indentation() {
        let mut buf = SourceBuffer::from_config(&RenderConfig::new().with_tabs());
        buf.indent();
        buf.newline();
        buf.token(&Token::Nil);
        assert_eq!(buf.buf(), "\n\tnil");
    }

    #[test]
    fn repeated_line_breaks_collapse() {
        let mut buf = SourceBuffer::new();
        buf.token(&Token::Ensure);
        buf.indent();
        buf.newline();
        buf.indent();
        buf.newline();
        buf.word("work");
        buf.newline();
        buf.dedent();
        buf.newline();
        buf.dedent();
        buf.token(&Token::End);
        assert_eq!(buf.into_string(), "ensure\n    work\nend");
    }

    #[test]
    fn token_to_source() {
        assert_eq!(Token::OrAsgn.to_source(), "||=");
        assert_eq!(Some(Token::Rocket).to_source(), "=>");
        assert_eq!(None::<Token>.to_source(), "");
    }
}
