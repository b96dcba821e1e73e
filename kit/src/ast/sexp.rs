//! Reader for the s-expression dump produced by the external parser.
//!
//! ```text
//! (case
//!   (lvar :x)
//!   (when (int 1) (int 2)
//!     (send nil :foo))
//!   nil)
//! ```
//!
//! Children are nested nodes, `:symbols` (plain, operator or
//! `:"quoted"`), `"strings"`, integers, floats and `nil`. Whitespace and
//! line breaks between tokens are insignificant.

use core::ops::Range;
use core::str::FromStr;

use logos::Logos;
use thiserror::Error;
use unparser_core::{RecursionGuard, RenderConfig};

use super::{Child, Node, NodeKind};
use crate::quote;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SexpError {
    #[error("invalid token at byte {offset}")]
    InvalidToken { offset: usize },

    #[error("expected {expect} at byte {offset}")]
    Expected { expect: &'static str, offset: usize },

    #[error("expected {expect}, found end of input")]
    Empty { expect: &'static str },

    #[error("unknown node kind `{tag}` at byte {offset}")]
    UnknownKind { tag: String, offset: usize },

    #[error("invalid escape sequence at byte {offset}")]
    InvalidEscape { offset: usize },

    #[error("unexpected input after node at byte {offset}")]
    TrailingInput { offset: usize },

    #[error(transparent)]
    Limit(#[from] unparser_core::Error),
}

#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum SexpToken {
    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    // kind tags, and `nil` in child position
    #[regex(r"[a-z_][a-z0-9_]*")]
    Tag,

    #[regex(r":(@@|@|\$)?[A-Za-z_][A-Za-z0-9_]*[?!=]?")]
    Symbol,

    #[regex(r":(\[\]=?|[-+*/%<>=!~^&|`]+@?)")]
    OperatorSymbol,

    #[regex(r#":"([^"\\]|\\.)*""#)]
    QuotedSymbol,

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"-?[0-9]+(\.[0-9]+([eE][-+]?[0-9]+)?|[eE][-+]?[0-9]+)", |lex| lex.slice().parse::<f64>().ok().filter(|value| value.is_finite()))]
    Float(f64),
}

struct Reader<'s> {
    input: &'s str,
    tokens: Vec<(SexpToken, Range<usize>)>,
    pos: usize,
    depth: RecursionGuard,
    limit: usize,
}

impl<'s> Reader<'s> {
    fn lex(input: &'s str) -> Result<Self, SexpError> {
        let mut lexer = SexpToken::lexer(input);
        let mut tokens = Vec::new();
        while let Some(token) = lexer.next() {
            let span = lexer.span();
            match token {
                Ok(token) => tokens.push((token, span)),
                Err(()) => return Err(SexpError::InvalidToken { offset: span.start }),
            }
        }
        Ok(Self {
            input,
            tokens,
            pos: 0,
            depth: RecursionGuard::new(),
            limit: RenderConfig::DEFAULT.max_recursion_depth,
        })
    }

    fn next(&mut self, expect: &'static str) -> Result<(SexpToken, Range<usize>), SexpError> {
        let token = self
            .tokens
            .get(self.pos)
            .cloned()
            .ok_or(SexpError::Empty { expect })?;
        self.pos += 1;
        Ok(token)
    }

    fn peek(&self) -> Option<&SexpToken> {
        self.tokens.get(self.pos).map(|(token, _)| token)
    }

    fn node(&mut self) -> Result<Node, SexpError> {
        match self.next("`(`")? {
            (SexpToken::LParen, _) => self.node_body(),
            (_, span) => Err(SexpError::Expected {
                expect: "`(`",
                offset: span.start,
            }),
        }
    }

    /// Everything after the opening parenthesis.
    fn node_body(&mut self) -> Result<Node, SexpError> {
        if let Err(err) = self.depth.enter(self.limit) {
            self.depth.exit();
            return Err(err.into());
        }
        let result = self.kind_and_children();
        self.depth.exit();
        result
    }

    fn kind_and_children(&mut self) -> Result<Node, SexpError> {
        let kind = match self.next("node kind")? {
            (SexpToken::Tag, span) => {
                let tag = &self.input[span.clone()];
                NodeKind::from_tag(tag).ok_or_else(|| SexpError::UnknownKind {
                    tag: tag.to_owned(),
                    offset: span.start,
                })?
            }
            (_, span) => {
                return Err(SexpError::Expected {
                    expect: "node kind",
                    offset: span.start,
                });
            }
        };

        let mut children = Vec::new();
        loop {
            if self.peek() == Some(&SexpToken::RParen) {
                self.pos += 1;
                return Ok(Node::new(kind, children));
            }
            children.push(self.child()?);
        }
    }

    fn child(&mut self) -> Result<Child, SexpError> {
        let (token, span) = self.next("`)`")?;
        let text = &self.input[span.clone()];
        let child = match token {
            SexpToken::LParen => Child::Node(self.node_body()?),
            SexpToken::Tag if text == "nil" => Child::Nil,
            SexpToken::Symbol | SexpToken::OperatorSymbol => Child::Symbol(text[1..].to_owned()),
            SexpToken::QuotedSymbol => Child::Symbol(unquote(&text[1..], span.start + 1)?),
            SexpToken::Str => Child::Str(unquote(text, span.start)?),
            SexpToken::Int(value) => Child::Int(value),
            SexpToken::Float(value) => Child::Float(value),
            SexpToken::Tag | SexpToken::RParen => {
                return Err(SexpError::Expected {
                    expect: "child",
                    offset: span.start,
                });
            }
        };
        Ok(child)
    }

    fn finish(self) -> Result<(), SexpError> {
        match self.tokens.get(self.pos) {
            Some((_, span)) => Err(SexpError::TrailingInput { offset: span.start }),
            None => Ok(()),
        }
    }
}

/// Strip the surrounding quotes of `text` (found at `offset`) and resolve
/// its escapes.
fn unquote(text: &str, offset: usize) -> Result<String, SexpError> {
    let inner = &text[1..text.len() - 1];
    quote::unescape(inner).map_err(|at| SexpError::InvalidEscape {
        offset: offset + 1 + at,
    })
}

/// Read a single node from its s-expression text.
pub fn parse(input: &str) -> Result<Node, SexpError> {
    let mut reader = Reader::lex(input)?;
    let node = reader.node()?;
    reader.finish()?;
    Ok(node)
}

impl FromStr for Node {
    type Err = SexpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
