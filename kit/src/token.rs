use core::fmt;

use unparser_core::{ToSource, Writer};

use crate::SourceBuffer;

/// Keywords and punctuation written by the renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    Begin,
    Case,
    Def,
    Do,
    Else,
    End,
    Ensure,
    False,
    Nil,
    Rescue,
    SelfRef,
    True,
    When,

    Amp,
    Star,
    DStar,
    Colon,
    DColon,
    Assign,
    Comma,
    Semicolon,
    Dot,
    Pipe,
    Rocket,
    AndAnd,
    OrOr,
    AndAsgn,
    OrAsgn,

    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
}

impl Token {
    pub const fn as_str(self) -> &'static str {
        match self {
            Token::Begin => "begin",
            Token::Case => "case",
            Token::Def => "def",
            Token::Do => "do",
            Token::Else => "else",
            Token::End => "end",
            Token::Ensure => "ensure",
            Token::False => "false",
            Token::Nil => "nil",
            Token::Rescue => "rescue",
            Token::SelfRef => "self",
            Token::True => "true",
            Token::When => "when",
            Token::Amp => "&",
            Token::Star => "*",
            Token::DStar => "**",
            Token::Colon => ":",
            Token::DColon => "::",
            Token::Assign => "=",
            Token::Comma => ",",
            Token::Semicolon => ";",
            Token::Dot => ".",
            Token::Pipe => "|",
            Token::Rocket => "=>",
            Token::AndAnd => "&&",
            Token::OrOr => "||",
            Token::AndAsgn => "&&=",
            Token::OrAsgn => "||=",
            Token::LParen => "(",
            Token::RParen => ")",
            Token::LBracket => "[",
            Token::RBracket => "]",
            Token::LBrace => "{",
            Token::RBrace => "}",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSource for Token {
    type Writer = SourceBuffer;

    fn write(&self, w: &mut SourceBuffer) {
        w.token(self);
    }
}
