//! Parameter lists.
//!
//! An `args` node renders its parameters comma separated. Block-local
//! variables (`shadowarg`) are split out wherever they appear and written
//! after a `; `, so `|a; b|` comes out the same no matter how the
//! parameters were ordered. A nested destructuring pattern (`mlhs`) among
//! the parameters is parenthesized.

use std::borrow::Cow;

use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots, malformed};
use crate::ast::{Child, Node, NodeKind};
use crate::emitter::literal::Ident;
use crate::token::Token;

pub(super) fn emit_args(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let mut normal: Vec<Cow<'_, Node>> = Vec::new();
    let mut shadow: Vec<&Node> = Vec::new();

    for child in node.children() {
        let Some(param) = child.as_node() else {
            return Err(malformed(node, "parameters must be nodes"));
        };
        match param.kind() {
            NodeKind::Shadowarg => shadow.push(param),
            NodeKind::Mlhs => normal.push(Cow::Owned(Node::new(
                NodeKind::ArgExpr,
                vec![Child::Node(param.clone())],
            ))),
            _ => normal.push(Cow::Borrowed(param)),
        }
    }

    e.delimited(normal.iter().map(|param| &**param), ctx)?;
    if !shadow.is_empty() {
        e.out.token(&Token::Semicolon);
        e.out.space();
        e.delimited(shadow, ctx)?;
    }
    Ok(())
}

/// `arg` and `shadowarg`.
pub(super) fn emit_name(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    e.out.word(ctx.node().name(0)?);
    Ok(())
}

pub(super) fn emit_optarg(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let name = node.name(0)?;
    let default = node.required(1, "missing default value")?;
    e.out.word(name);
    e.out.space();
    e.out.token(&Token::Assign);
    e.out.space();
    e.visit(default, ctx)
}

pub(super) fn emit_restarg(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let name = ctx.node().optional_name(0)?;
    e.out.token(&Token::Star);
    e.out.write(&name.map(Ident));
    Ok(())
}

pub(super) fn emit_kwarg(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    e.out.word(ctx.node().name(0)?);
    e.out.token(&Token::Colon);
    Ok(())
}

pub(super) fn emit_kwoptarg(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let name = node.name(0)?;
    let default = node.required(1, "missing default value")?;
    e.out.word(name);
    e.out.token(&Token::Colon);
    e.out.space();
    e.visit(default, ctx)
}

pub(super) fn emit_kwrestarg(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let name = ctx.node().optional_name(0)?;
    e.out.token(&Token::DStar);
    e.out.write(&name.map(Ident));
    Ok(())
}

pub(super) fn emit_blockarg(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let name = ctx.node().optional_name(0)?;
    e.out.token(&Token::Amp);
    e.out.write(&name.map(Ident));
    Ok(())
}

/// `&expr` in an argument list; a bare `&` forwards the caller's block.
pub(super) fn emit_block_pass(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    e.out.token(&Token::Amp);
    match ctx.node().slot(0)? {
        Some(value) => e.visit_terminated(value, ctx),
        None => Ok(()),
    }
}

pub(super) fn emit_arg_expr(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let inner = ctx.node().required(0, "missing wrapped expression")?;
    e.parentheses(|e| e.visit(inner, ctx))
}

/// `a, (b, c), *d`
pub(super) fn emit_mlhs(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let targets = ctx.node().nodes(.., "targets must be nodes")?;
    for (idx, target) in targets.into_iter().enumerate() {
        if idx > 0 {
            e.out.token(&Token::Comma);
            e.out.space();
        }
        if target.kind() == NodeKind::Mlhs {
            e.parentheses(|e| e.visit(target, ctx))?;
        } else {
            e.visit(target, ctx)?;
        }
    }
    Ok(())
}
