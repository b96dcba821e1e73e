use super::to_source::ToSource;

/// Trait for building formatted source text.
///
/// `Writer` is the output side of the unparser: renderers push tokens and
/// words into it, open and close indentation levels, and break lines. It is
/// used by [`ToSource`] implementations and by node renderers alike.
///
/// Indentation is *lazy*: [`newline`](Writer::newline) only records the line
/// break, and the indentation prefix for the new line is written when the
/// first word arrives. Levels may therefore change between a line break and
/// the next token, and empty lines never carry trailing whitespace.
///
/// # Associated Types
///
/// - `Token`: The token type for grammar-specific keywords and punctuation
///
/// # Required Methods
///
/// - `buf()`: Get current buffer contents
/// - `buf_mut()`: Get mutable buffer for appending
/// - `indent_level()`: Current indentation depth
/// - `set_indent(level)`: Set indentation depth
/// - `into_string()`: Consume and return final output
/// - `token(t)`: Format a token (grammar-specific)
///
/// # Provided Methods
///
/// Basic output:
/// - `word(s)`, `char(c)`: Append text, indenting first at the start of a line
/// - `space()`: Single space
/// - `newline()`: Line break
///
/// Indentation:
/// - `indent()`, `dedent()`: Change indent level
///
/// Structured output:
/// - `write(value)`: Write a `ToSource` value
///
/// # Example
///
/// ```ignore
/// use unparser_core::Writer;
///
/// #[derive(Default)]
/// struct MyWriter {
///     buf: String,
///     indent: usize,
/// }
///
/// impl Writer for MyWriter {
///     type Token = MyTok;
///
///     fn buf(&self) -> &str { &self.buf }
///     fn buf_mut(&mut self) -> &mut String { &mut self.buf }
///     fn indent_level(&self) -> usize { self.indent }
///     fn set_indent(&mut self, level: usize) { self.indent = level; }
///     fn into_string(self) -> String { self.buf }
///
///     fn token(&mut self, t: &Self::Token) {
///         match t {
///             MyTok::End => self.word("end"),
///             MyTok::Comma => self.word(","),
///             // ...
///         }
///     }
/// }
/// ```
pub trait Writer: Sized {
    /// The token type for grammar-specific formatting.
    type Token;

    /// Get the current buffer contents.
    fn buf(&self) -> &str;
    /// Get a mutable reference to the buffer for appending.
    fn buf_mut(&mut self) -> &mut String;
    /// Get the current indentation level.
    fn indent_level(&self) -> usize;
    /// Set the indentation level.
    fn set_indent(&mut self, level: usize);
    /// Consume the writer and return the final string.
    fn into_string(self) -> String;

    /// Format a token to text.
    ///
    /// This is grammar-specific and should convert tokens to their
    /// textual representation (e.g., `End` -> `"end"`).
    fn token(&mut self, t: &Self::Token);

    /// Whether the next word starts a fresh line.
    fn at_line_start(&self) -> bool {
        self.buf().ends_with('\n')
    }

    /// Append a string to the buffer, writing the pending indentation first
    /// when it opens a line.
    fn word(&mut self, s: &str) {
        if s.is_empty() {
            return;
        }
        if self.at_line_start() {
            self.add_indent();
        }
        self.buf_mut().push_str(s);
    }

    /// Append a single character to the buffer.
    fn char(&mut self, c: char) {
        let mut tmp = [0u8; 4];
        self.word(c.encode_utf8(&mut tmp));
    }

    /// Append a single space.
    fn space(&mut self) {
        self.char(' ');
    }

    /// Append a line break. Indentation for the next line is deferred.
    fn newline(&mut self) {
        self.buf_mut().push('\n');
    }

    /// Add indentation at the current level.
    fn add_indent(&mut self) {
        let (ch, n) = if self.use_tabs() {
            ('\t', self.indent_level())
        } else {
            (' ', self.spaces_width())
        };
        self.buf_mut().extend(std::iter::repeat_n(ch, n));
    }

    /// Get the number of spaces per indent level.
    ///
    /// Default: 2 spaces
    fn indent_width(&self) -> usize {
        2
    }

    /// Calculate total spaces for current indent level.
    fn spaces_width(&self) -> usize {
        self.indent_level() * self.indent_width()
    }

    /// Whether to use tabs for indentation.
    ///
    /// Default: `false` (spaces)
    fn use_tabs(&self) -> bool {
        false
    }

    /// Increase indentation level by 1.
    fn indent(&mut self) {
        self.set_indent(self.indent_level() + 1);
    }

    /// Decrease indentation level by 1.
    ///
    /// Saturates at 0 (won't go negative).
    fn dedent(&mut self) {
        let level = self.indent_level();
        if level > 0 {
            self.set_indent(level - 1);
        }
    }

    /// Write a value implementing `ToSource`.
    fn write<T: ToSource<Writer = Self>>(&mut self, value: &T) {
        value.write(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Plain {
        buf: String,
        indent: usize,
    }

    impl Writer for Plain {
        type Token = &'static str;

        fn buf(&self) -> &str {
            &self.buf
        }

        fn buf_mut(&mut self) -> &mut String {
            &mut self.buf
        }

        fn indent_level(&self) -> usize {
            self.indent
        }

        fn set_indent(&mut self, level: usize) {
            self.indent = level;
        }

        fn into_string(self) -> String {
            self.buf
        }

        fn token(&mut self, t: &Self::Token) {
            self.word(t);
        }
    }

    #[test]
    fn test_indent_is_written_lazily() {
        let mut w = Plain::default();
        w.token(&"begin");
        w.indent();
        w.newline();
        w.word("body");
        w.newline();
        w.dedent();
        w.token(&"end");
        assert_eq!(w.into_string(), "begin\n  body\nend");
    }

    #[test]
    fn test_blank_lines_have_no_trailing_whitespace() {
        let mut w = Plain::default();
        w.word("a");
        w.indent();
        w.newline();
        w.newline();
        w.dedent();
        w.word("b");
        assert_eq!(w.into_string(), "a\n\nb");
    }

    #[test]
    fn test_dedent_saturates() {
        let mut w = Plain::default();
        w.dedent();
        assert_eq!(w.indent_level(), 0);
    }

    #[test]
    fn test_empty_word_does_not_indent() {
        let mut w = Plain::default();
        w.indent();
        w.newline();
        w.word("");
        assert_eq!(w.buf(), "\n");
    }
}
