use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots, malformed};
use crate::ast::NodeKind;
use crate::token::Token;

/// `case subject`, the `when` clauses in order, an optional `else`, `end`.
///
/// Children are the subject (or nil), one or more `when` nodes and the
/// else branch (or nil).
pub(super) fn emit_case(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let len = node.children().len();
    if len < 3 {
        return Err(malformed(node, "expected a subject, clauses and an else slot"));
    }
    let subject = node.slot(0)?;
    let clauses = node.nodes(1..len - 1, "when clauses must be nodes")?;
    if clauses.iter().any(|clause| clause.kind() != NodeKind::When) {
        return Err(malformed(node, "expected only when clauses between subject and else"));
    }
    let otherwise = node.slot(len - 1)?;

    e.out.token(&Token::Case);
    if let Some(subject) = subject {
        e.out.space();
        e.visit_terminated(subject, ctx)?;
    }
    e.out.newline();
    for clause in clauses {
        e.visit(clause, ctx)?;
    }
    if let Some(otherwise) = otherwise {
        e.out.token(&Token::Else);
        e.visit_indented(otherwise, ctx)?;
    }
    e.k_end()
}

/// `when a, b` followed by the clause body.
pub(super) fn emit_when(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let len = node.children().len();
    if len < 2 {
        return Err(malformed(node, "expected patterns and a body slot"));
    }
    let patterns = node.nodes(..len - 1, "patterns must be nodes")?;
    let body = node.slot(len - 1)?;

    e.out.token(&Token::When);
    e.out.space();
    e.delimited(patterns, ctx)?;
    e.emit_body(body, ctx)
}
