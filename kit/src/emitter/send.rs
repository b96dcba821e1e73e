use unparser_core::Writer;

use super::{Emitter, RenderContext, Result, Slots};
use crate::ast::{Child, Node, NodeKind};
use crate::quote;
use crate::token::Token;

const BINARY_OPERATORS: &[&str] = &[
    "+", "-", "*", "/", "%", "**", "==", "!=", "<", ">", "<=", ">=", "<=>", "===", "=~", "!~",
    "<<", ">>", "&", "|", "^",
];

const UNARY_OPERATORS: &[(&str, &str)] = &[("-@", "-"), ("+@", "+"), ("!", "!"), ("~", "~")];

/// Textual shape of a method call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Binary,
    Unary(&'static str),
    Index,
    IndexAssign,
    AttributeAssign,
    Call,
}

fn shape(receiver: bool, selector: &str, arity: usize) -> Shape {
    if !receiver {
        return Shape::Call;
    }
    if arity == 1 && BINARY_OPERATORS.contains(&selector) {
        return Shape::Binary;
    }
    if arity == 0 {
        if let Some((_, op)) = UNARY_OPERATORS.iter().find(|(name, _)| *name == selector) {
            return Shape::Unary(op);
        }
    }
    match selector {
        "[]" => Shape::Index,
        "[]=" if arity >= 1 => Shape::IndexAssign,
        _ if arity == 1 && is_attribute_writer(selector) => Shape::AttributeAssign,
        _ => Shape::Call,
    }
}

/// `foo=`, but not `==` or `!=`.
fn is_attribute_writer(selector: &str) -> bool {
    selector
        .strip_suffix('=')
        .is_some_and(quote::is_identifier)
}

fn shape_of(node: &Node) -> Option<Shape> {
    let receiver = !node.child(0)?.is_nil();
    let Child::Symbol(selector) = node.child(1)? else {
        return None;
    };
    Some(shape(receiver, selector, node.children().len().saturating_sub(2)))
}

pub(super) fn is_terminated(node: &Node) -> bool {
    !matches!(
        shape_of(node),
        Some(Shape::Binary | Shape::IndexAssign | Shape::AttributeAssign)
    )
}

/// Left operands that `**` would otherwise take in: `-a ** 2` is
/// `-(a ** 2)`, and so is `-2 ** 2`.
fn binds_looser_than_power(node: &Node) -> bool {
    match (node.kind(), node.child(0)) {
        (NodeKind::Int, Some(Child::Int(value))) => *value < 0,
        (NodeKind::Float, Some(Child::Float(value))) => value.is_sign_negative(),
        (NodeKind::Send, _) => matches!(shape_of(node), Some(Shape::Unary(_))),
        _ => false,
    }
}

pub(super) fn emit_send(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let receiver = node.slot(0)?;
    let selector = node.name(1)?;
    let args = node.nodes(2.., "call arguments must be nodes")?;

    match (shape(receiver.is_some(), selector, args.len()), receiver) {
        (Shape::Binary, Some(receiver)) => {
            if selector == "**" && binds_looser_than_power(receiver) {
                e.parentheses(|e| e.visit(receiver, ctx))?;
            } else {
                e.visit_terminated(receiver, ctx)?;
            }
            e.out.space();
            e.out.word(selector);
            e.out.space();
            e.visit_terminated(args[0], ctx)
        }
        (Shape::Unary(op), Some(receiver)) => {
            e.out.word(op);
            if matches!(op, "-" | "+") && matches!(receiver.kind(), NodeKind::Int | NodeKind::Float) {
                // `-1` would read back as a literal.
                e.parentheses(|e| e.visit(receiver, ctx))
            } else {
                e.visit_terminated(receiver, ctx)
            }
        }
        (Shape::Index, Some(receiver)) => {
            e.visit_terminated(receiver, ctx)?;
            e.out.token(&Token::LBracket);
            e.delimited(args, ctx)?;
            e.out.token(&Token::RBracket);
            Ok(())
        }
        (Shape::IndexAssign, Some(receiver)) => {
            let Some((value, index)) = args.split_last() else {
                return Ok(());
            };
            e.visit_terminated(receiver, ctx)?;
            e.out.token(&Token::LBracket);
            e.delimited(index.iter().copied(), ctx)?;
            e.out.token(&Token::RBracket);
            emit_assigned(e, value, ctx)
        }
        (Shape::AttributeAssign, Some(receiver)) => {
            e.visit_terminated(receiver, ctx)?;
            e.out.token(&Token::Dot);
            e.out.word(selector.trim_end_matches('='));
            emit_assigned(e, args[0], ctx)
        }
        (_, receiver) => {
            if let Some(receiver) = receiver {
                e.visit_terminated(receiver, ctx)?;
                e.out.token(&Token::Dot);
            }
            e.out.word(selector);
            if args.is_empty() {
                return Ok(());
            }
            e.parentheses(|e| e.delimited(args, ctx))
        }
    }
}

fn emit_assigned(e: &mut Emitter, value: &Node, ctx: &RenderContext<'_>) -> Result {
    e.out.space();
    e.out.token(&Token::Assign);
    e.out.space();
    e.visit(value, ctx)
}

/// `*expr`, or a bare `*` when forwarding anonymously.
pub(super) fn emit_splat(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    e.out.token(&Token::Star);
    match ctx.node().slot(0)? {
        Some(value) => e.visit_terminated(value, ctx),
        None => Ok(()),
    }
}

/// `and` / `or`, written with the symbolic operators.
pub(super) fn emit_connective(e: &mut Emitter, ctx: &RenderContext<'_>) -> Result {
    let node = ctx.node();
    let left = node.required(0, "missing left operand")?;
    let right = node.required(1, "missing right operand")?;
    let operator = if node.kind() == NodeKind::And {
        Token::AndAnd
    } else {
        Token::OrOr
    };
    e.visit_terminated(left, ctx)?;
    e.out.space();
    e.out.token(&operator);
    e.out.space();
    e.visit_terminated(right, ctx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn call_shapes() {
        assert_eq!(shape(true, "+", 1), Shape::Binary);
        assert_eq!(shape(true, "-@", 0), Shape::Unary("-"));
        assert_eq!(shape(true, "-", 0), Shape::Call);
        assert_eq!(shape(true, "[]", 2), Shape::Index);
        assert_eq!(shape(true, "[]=", 2), Shape::IndexAssign);
        assert_eq!(shape(true, "name=", 1), Shape::AttributeAssign);
        assert_eq!(shape(true, "==", 1), Shape::Binary);
        assert_eq!(shape(false, "+", 1), Shape::Call);
        assert_eq!(shape(true, "puts", 3), Shape::Call);
    }
}
