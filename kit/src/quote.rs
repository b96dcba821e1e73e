//! Quoting and escaping for double-quoted Ruby literals and symbol names.

use std::fmt::Write as _;

const OPERATOR_SYMBOLS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "==", "!=", "<", ">", "<=", ">=", "<=>", "===", "=~", "!~",
    "<<", ">>", "&", "|", "^", "~", "!", "+@", "-@", "[]", "[]=", "`",
];

/// `value` as a double-quoted literal.
pub(crate) fn quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    escape_into(&mut out, value);
    out.push('"');
    out
}

fn escape_into(out: &mut String, value: &str) {
    let mut chars = value.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '\u{1b}' => out.push_str("\\e"),
            '#' if matches!(chars.peek(), Some('{' | '$' | '@')) => out.push_str("\\#"),
            c if c.is_ascii_control() => {
                let _ = write!(out, "\\x{:02X}", c as u32);
            }
            // `\xNN` above 0x7F is a raw byte, not a code point.
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:X}}}", c as u32);
            }
            c => out.push(c),
        }
    }
}

/// Reverse of [`quoted`] for the text between the quotes.
///
/// On failure returns the byte offset of the offending backslash within
/// `raw`.
pub(crate) fn unescape(raw: &str) -> Result<String, usize> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.char_indices();
    while let Some((offset, c)) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some((_, escaped)) = chars.next() else {
            return Err(offset);
        };
        match escaped {
            '\\' | '"' | '#' | '\'' => out.push(escaped),
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'e' => out.push('\u{1b}'),
            's' => out.push(' '),
            'a' => out.push('\u{7}'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' => out.push('\0'),
            'x' => {
                let digits: String = chars
                    .clone()
                    .take(2)
                    .map(|(_, d)| d)
                    .take_while(char::is_ascii_hexdigit)
                    .collect();
                let code = u32::from_str_radix(&digits, 16).map_err(|_| offset)?;
                if code > 0x7F {
                    return Err(offset);
                }
                for _ in 0..digits.len() {
                    chars.next();
                }
                out.push(char::from_u32(code).ok_or(offset)?);
            }
            'u' => {
                let rest = &raw[offset + 2..];
                let (digits, consumed) = if let Some(braced) = rest.strip_prefix('{') {
                    let end = braced.find('}').ok_or(offset)?;
                    (&braced[..end], end + 2)
                } else {
                    let digits = rest.get(..4).ok_or(offset)?;
                    (digits, 4)
                };
                let code = u32::from_str_radix(digits, 16).map_err(|_| offset)?;
                out.push(char::from_u32(code).ok_or(offset)?);
                for _ in 0..rest[..consumed].chars().count() {
                    chars.next();
                }
            }
            _ => return Err(offset),
        }
    }
    Ok(out)
}

/// `[A-Za-z_][A-Za-z0-9_]*`
pub(crate) fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `:name` reads back as the same symbol without quoting.
pub(crate) fn is_bare_symbol(name: &str) -> bool {
    if OPERATOR_SYMBOLS.contains(&name) {
        return true;
    }
    let unsigiled = name
        .strip_prefix("@@")
        .or_else(|| name.strip_prefix('@'))
        .or_else(|| name.strip_prefix('$'));
    if let Some(rest) = unsigiled {
        return is_identifier(rest);
    }
    let stem = name
        .strip_suffix(['?', '!', '='])
        .unwrap_or(name);
    is_identifier(stem)
}

/// Float text that always reads back as a float literal.
pub(crate) fn float(value: f64) -> String {
    format!("{:?}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quotes_special_characters() {
        assert_eq!(quoted("a\"b\\c\n"), r#""a\"b\\c\n""#);
        assert_eq!(quoted("#{x} #y"), r##""\#{x} #y""##);
        assert_eq!(quoted("\u{1}"), r#""\x01""#);
        assert_eq!(quoted("\u{85}\u{7f}"), r#""\u{85}\x7F""#);
        assert_eq!(quoted("é"), r#""é""#);
    }

    #[test]
    fn unescape_reverses_quoting() {
        let source = "tab\there \"quoted\" #{interp} \u{1b}\u{2}";
        let text = quoted(source);
        assert_eq!(unescape(&text[1..text.len() - 1]), Ok(source.to_owned()));
    }

    #[test]
    fn unescape_unicode() {
        assert_eq!(unescape(r"é\u{1F600}"), Ok("\u{e9}\u{1F600}".to_owned()));
    }

    #[test]
    fn unescape_rejects_unknown_escape() {
        assert_eq!(unescape(r"ok\q"), Err(2));
        assert_eq!(unescape("dangling\\"), Err(8));
    }

    #[test]
    fn hex_escapes_stay_ascii() {
        assert_eq!(unescape(r"\x41\x7F"), Ok("A\u{7f}".to_owned()));
        assert_eq!(unescape(r"ab\x85"), Err(2));
        assert_eq!(unescape(r"\u{85}"), Ok("\u{85}".to_owned()));
    }

    #[test]
    fn bare_symbols() {
        for name in ["foo", "foo?", "bar!", "baz=", "Const", "@ivar", "@@cvar", "$gvar", "<=>", "[]=", "-@"] {
            assert!(is_bare_symbol(name), "{name}");
        }
        for name in ["foo bar", "", "1abc", "foo?=", "@", "a-b"] {
            assert!(!is_bare_symbol(name), "{name}");
        }
    }

    #[test]
    fn floats_keep_a_fraction() {
        assert_eq!(float(1.0), "1.0");
        assert_eq!(float(-2.5), "-2.5");
    }
}
