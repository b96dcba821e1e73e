use unparser_core::{ToSource, Writer};

use super::{Emitter, RenderContext, Result, malformed};
use crate::SourceBuffer;
use crate::ast::{Child, NodeKind};
use crate::quote;
use crate::token::Token;

/// A name written verbatim.
#[derive(Debug, Clone, Copy)]
pub struct Ident<'a>(pub &'a str);

impl ToSource for Ident<'_> {
    type Writer = SourceBuffer;

    fn write(&self, w: &mut SourceBuffer) {
        w.word(self.0);
    }
}

/// A double-quoted string literal.
#[derive(Debug, Clone, Copy)]
pub struct StrLit<'a>(pub &'a str);

impl ToSource for StrLit<'_> {
    type Writer = SourceBuffer;

    fn write(&self, w: &mut SourceBuffer) {
        w.word(&quote::quoted(self.0));
    }
}

/// A symbol literal, quoted only when the bare form would not read back.
#[derive(Debug, Clone, Copy)]
pub struct SymLit<'a>(pub &'a str);

impl ToSource for SymLit<'_> {
    type Writer = SourceBuffer;

    fn write(&self, w: &mut SourceBuffer) {
        w.token(&Token::Colon);
        if quote::is_bare_symbol(self.0) {
            w.word(self.0);
        } else {
            w.write(&StrLit(self.0));
        }
    }
}

pub(super) fn emit_int(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    match ctx.node().child(0) {
        Some(Child::Int(value)) => {
            e.out.word(&value.to_string());
            Ok(())
        }
        _ => Err(malformed(ctx.node(), "expected an integer value")),
    }
}

pub(super) fn emit_float(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    match ctx.node().child(0) {
        Some(Child::Float(value)) if value.is_finite() => {
            e.out.word(&quote::float(*value));
            Ok(())
        }
        _ => Err(malformed(ctx.node(), "expected a finite float value")),
    }
}

pub(super) fn emit_str(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    match ctx.node().child(0) {
        Some(Child::Str(value)) => {
            e.out.write(&StrLit(value));
            Ok(())
        }
        _ => Err(malformed(ctx.node(), "expected a string value")),
    }
}

pub(super) fn emit_sym(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    match ctx.node().child(0) {
        Some(Child::Symbol(name)) => {
            e.out.write(&SymLit(name));
            Ok(())
        }
        _ => Err(malformed(ctx.node(), "expected a symbol name")),
    }
}

pub(super) fn emit_keyword(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let token = match ctx.kind() {
        NodeKind::Nil => Token::Nil,
        NodeKind::True => Token::True,
        NodeKind::False => Token::False,
        NodeKind::SelfRef => Token::SelfRef,
        _ => return Err(malformed(ctx.node(), "not a keyword literal")),
    };
    e.out.token(&token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_sources() {
        assert_eq!(Ident("value").to_source(), "value");
        assert_eq!(StrLit("say \"hi\"").to_source(), r#""say \"hi\"""#);
        assert_eq!(SymLit("name?").to_source(), ":name?");
        assert_eq!(SymLit("two words").to_source(), r#":"two words""#);
        assert_eq!(None::<Ident<'_>>.to_source(), "");
    }

    #[test]
    fn keyword_renderer_rejects_other_kinds() {
        let node = crate::Node::named(NodeKind::Lvar, "x");
        let mut e = Emitter::new(unparser_core::RenderConfig::DEFAULT);
        assert_eq!(
            emit_keyword(&mut e, &RenderContext::root(&node)),
            Err(malformed(&node, "not a keyword literal"))
        );

        let node = crate::Node::leaf(NodeKind::SelfRef);
        let mut e = Emitter::new(unparser_core::RenderConfig::DEFAULT);
        assert_eq!(emit_keyword(&mut e, &RenderContext::root(&node)), Ok(()));
        assert_eq!(e.into_source(), "self");
    }
}
