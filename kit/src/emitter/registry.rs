//! Node kind to renderer table.

use super::{
    Handler, argument, block, case, collection, def, literal, op_assign, rescue, send, statement,
    variable,
};
use crate::ast::{Node, NodeKind};

/// The renderer for `kind`, if the kind can be rendered on its own.
///
/// `resbody` is only rendered by its enclosing `rescue`, which picks the
/// clause form, and `cbase` only as the scope of a `const`.
pub(crate) fn handler(kind: NodeKind) -> Option<Handler> {
    use NodeKind::*;

    let handler: Handler = match kind {
        Int => literal::emit_int,
        Float => literal::emit_float,
        Str => literal::emit_str,
        Sym => literal::emit_sym,
        Nil | True | False | SelfRef => literal::emit_keyword,

        Lvar | Ivar | Gvar | Cvar => variable::emit_variable,
        Const => variable::emit_const,
        Lvasgn | Ivasgn | Gvasgn | Cvasgn => variable::emit_assignment,

        OpAsgn => op_assign::emit_op_assign,
        AndAsgn | OrAsgn => op_assign::emit_logical_assign,

        Array => collection::emit_array,
        Hash => collection::emit_hash,
        PairRocket => collection::emit_pair_rocket,
        PairColon => collection::emit_pair_colon,

        Send => send::emit_send,
        Splat => send::emit_splat,
        And | Or => send::emit_connective,
        Block => block::emit_block,

        Begin => statement::emit_begin,
        Kwbegin => statement::emit_kwbegin,
        Ensure => statement::emit_ensure,
        Rescue => rescue::emit_rescue,

        Def => def::emit_def,
        Defs => def::emit_defs,

        Case => case::emit_case,
        When => case::emit_when,

        Args => argument::emit_args,
        Arg | Shadowarg => argument::emit_name,
        Optarg => argument::emit_optarg,
        Restarg => argument::emit_restarg,
        Kwarg => argument::emit_kwarg,
        Kwoptarg => argument::emit_kwoptarg,
        Kwrestarg => argument::emit_kwrestarg,
        Blockarg => argument::emit_blockarg,
        BlockPass => argument::emit_block_pass,
        Mlhs => argument::emit_mlhs,
        ArgExpr => argument::emit_arg_expr,

        Resbody | Cbase => return None,
    };
    Some(handler)
}

/// Whether `node` renders as a self-delimiting expression.
///
/// Anything else is parenthesized where an operand or argument is expected.
pub(crate) fn is_terminated(node: &Node) -> bool {
    match node.kind() {
        kind if kind.is_variable_assignment() => false,
        NodeKind::OpAsgn
        | NodeKind::AndAsgn
        | NodeKind::OrAsgn
        | NodeKind::And
        | NodeKind::Or
        | NodeKind::Rescue => false,
        NodeKind::Send => send::is_terminated(node),
        _ => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_kind_but_clause_and_scope_has_a_renderer() {
        let missing: Vec<_> = NodeKind::ALL
            .iter()
            .copied()
            .filter(|kind| handler(*kind).is_none())
            .collect();
        assert_eq!(missing, vec![NodeKind::Cbase, NodeKind::Resbody]);
    }
}
