//! `rescue` nodes.
//!
//! The same node has two textual forms and the choice depends only on
//! where it sits. Inside a method body, a `begin` block or as the protected
//! body of an `ensure` it is the block form:
//!
//! ```ruby
//! def work
//!   compute
//! rescue Error => error
//!   fallback
//! end
//! ```
//!
//! Everywhere else it is the modifier form, `compute rescue fallback`,
//! which is pushed one indent level deeper unless its parent is a
//! statement-like kind where the modifier reads as the statement itself.

use tracing::debug;
use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots, malformed, resbody};
use crate::ast::{Node, NodeKind};
use crate::token::Token;

/// Parents under which the block form is used.
const EMBEDDED_PARENTS: &[NodeKind] = &[
    NodeKind::Def,
    NodeKind::Defs,
    NodeKind::Kwbegin,
    NodeKind::Ensure,
];

/// Parents under which the modifier form stays at the current indent.
/// The top-level program (no parent) is also one of them.
const NOINDENT_PARENTS: &[NodeKind] = &[
    NodeKind::Begin,
    NodeKind::PairRocket,
    NodeKind::PairColon,
    NodeKind::Lvasgn,
    NodeKind::Ivasgn,
];

fn is_standalone(ctx: &RenderContext<'_>) -> bool {
    let Some(parent) = ctx.parent() else {
        return true;
    };
    if parent.kind() == NodeKind::Ensure {
        // The protected body of an `ensure` is its first child; a rescue in
        // any other slot is an ordinary expression.
        let first = parent.node().child(0).and_then(|child| child.as_node());
        return !first.is_some_and(|first| core::ptr::eq(first, ctx.node()));
    }
    !EMBEDDED_PARENTS.contains(&parent.kind())
}

fn needs_indent(ctx: &RenderContext<'_>) -> bool {
    ctx.parent_kind()
        .is_some_and(|kind| !NOINDENT_PARENTS.contains(&kind))
}

/// Children: the protected body (or nil), one or more `resbody` clauses and
/// the else branch (or nil).
pub(super) fn emit_rescue(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let len = node.children().len();
    if len < 3 {
        return Err(malformed(node, "expected a body, clauses and an else slot"));
    }
    let clauses = node.nodes(1..len - 1, "rescue clauses must be nodes")?;
    if clauses.iter().any(|clause| clause.kind() != NodeKind::Resbody) {
        return Err(malformed(node, "expected only resbody clauses"));
    }

    if is_standalone(ctx) {
        let indent = needs_indent(ctx);
        debug!(parent = ?ctx.parent_kind(), indent, "rescue modifier");
        if indent {
            e.indented(|e| emit_standalone(e, ctx, &clauses))
        } else {
            emit_standalone(e, ctx, &clauses)
        }
    } else {
        debug!(parent = ?ctx.parent_kind(), clauses = clauses.len(), "rescue block");
        emit_embedded(e, ctx, &clauses)
    }
}

fn emit_standalone(e: &mut Emitter, ctx: &RenderContext<'_>, clauses: &[&Node]) -> Result {
    let node = ctx.node();
    let body = node.required(0, "a rescue modifier needs a body")?;
    let [clause] = clauses else {
        return Err(malformed(node, "a rescue modifier takes exactly one clause"));
    };
    if node.slot(clauses.len() + 1)?.is_some() {
        return Err(malformed(node, "a rescue modifier cannot have an else branch"));
    }
    e.visit(body, ctx)?;
    e.out.space();
    e.run(clause, ctx, resbody::emit_standalone)
}

fn emit_embedded(e: &mut Emitter, ctx: &RenderContext<'_>, clauses: &[&Node]) -> Result {
    let node = ctx.node();
    match node.slot(0)? {
        Some(body) => e.visit_indented(body, ctx)?,
        None => e.out.newline(),
    }
    for clause in clauses {
        e.run(clause, ctx, resbody::emit_embedded)?;
    }
    if let Some(otherwise) = node.slot(clauses.len() + 1)? {
        e.out.token(&Token::Else);
        e.visit_indented(otherwise, ctx)?;
    }
    Ok(())
}
