use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots, malformed};
use crate::ast::{Child, NodeKind};
use crate::quote;
use crate::token::Token;

pub(super) fn emit_array(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let elements = ctx.node().nodes(.., "array elements must be nodes")?;
    e.out.token(&Token::LBracket);
    e.delimited(elements, ctx)?;
    e.out.token(&Token::RBracket);
    Ok(())
}

pub(super) fn emit_hash(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let pairs = ctx.node().nodes(.., "hash entries must be nodes")?;
    e.out.token(&Token::LBrace);
    if !pairs.is_empty() {
        e.out.space();
        e.delimited(pairs, ctx)?;
        e.out.space();
    }
    e.out.token(&Token::RBrace);
    Ok(())
}

pub(super) fn emit_pair_rocket(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let key = node.required(0, "missing key")?;
    let value = node.required(1, "missing value")?;
    e.visit(key, ctx)?;
    e.out.space();
    e.out.token(&Token::Rocket);
    e.out.space();
    e.visit(value, ctx)
}

/// `key: value`, the key being a symbol written without its colon.
pub(super) fn emit_pair_colon(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let key = node.required(0, "missing key")?;
    let value = node.required(1, "missing value")?;
    let name = match (key.kind(), key.child(0)) {
        (NodeKind::Sym, Some(Child::Symbol(name))) => name,
        _ => return Err(malformed(node, "key must be a symbol")),
    };
    if quote::is_identifier(name.strip_suffix(['?', '!']).unwrap_or(name)) {
        e.out.word(name);
    } else {
        e.out.word(&quote::quoted(name));
    }
    e.out.token(&Token::Colon);
    e.out.space();
    e.visit(value, ctx)
}
