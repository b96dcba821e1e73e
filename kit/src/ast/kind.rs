use core::fmt;

macro_rules! node_kinds {
    ($( $(#[$meta:meta])* $variant:ident => $tag:literal, )*) => {
        /// Closed set of node kinds the unparser understands.
        ///
        /// Every variant carries the tag the external parser uses for it
        /// (`op_asgn`, `pair_rocket`, ...); see [`NodeKind::as_str`] and
        /// [`NodeKind::from_tag`].
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum NodeKind {
            $(
                $(#[$meta])*
                #[cfg_attr(feature = "serde", serde(rename = $tag))]
                $variant,
            )*
        }

        impl NodeKind {
            /// Every kind, in declaration order.
            pub const ALL: &'static [NodeKind] = &[$(NodeKind::$variant,)*];

            /// The parser tag for this kind.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(NodeKind::$variant => $tag,)*
                }
            }

            /// Look a kind up by its parser tag.
            pub fn from_tag(tag: &str) -> Option<Self> {
                match tag {
                    $($tag => Some(NodeKind::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

node_kinds! {
    // literals
    Int => "int",
    Float => "float",
    Str => "str",
    Sym => "sym",
    Nil => "nil",
    True => "true",
    False => "false",
    SelfRef => "self",

    // variables
    Lvar => "lvar",
    Ivar => "ivar",
    Gvar => "gvar",
    Cvar => "cvar",
    Const => "const",
    /// Top-level constant scope, the leading `::` of `::Foo`.
    Cbase => "cbase",

    // assignment
    Lvasgn => "lvasgn",
    Ivasgn => "ivasgn",
    Gvasgn => "gvasgn",
    Cvasgn => "cvasgn",
    /// `target op= value` for any binary operator.
    OpAsgn => "op_asgn",
    AndAsgn => "and_asgn",
    OrAsgn => "or_asgn",

    // collections
    Array => "array",
    Hash => "hash",
    PairRocket => "pair_rocket",
    PairColon => "pair_colon",

    // calls
    Send => "send",
    BlockPass => "block_pass",
    Splat => "splat",
    Block => "block",
    And => "and",
    Or => "or",

    // statements
    /// Implicit statement sequence, or a parenthesized group.
    Begin => "begin",
    /// Explicit `begin ... end` block.
    Kwbegin => "kwbegin",
    Ensure => "ensure",
    Rescue => "rescue",
    /// One `rescue` clause; only reachable through its enclosing `rescue`.
    Resbody => "resbody",

    // definitions
    Def => "def",
    Defs => "defs",

    // conditionals
    Case => "case",
    When => "when",

    // parameters
    Args => "args",
    Arg => "arg",
    Optarg => "optarg",
    Restarg => "restarg",
    Kwarg => "kwarg",
    Kwoptarg => "kwoptarg",
    Kwrestarg => "kwrestarg",
    Blockarg => "blockarg",
    /// Block-local name declared after `;` in block parameters.
    Shadowarg => "shadowarg",
    Mlhs => "mlhs",
    /// Parenthesized destructuring group inside a parameter list.
    ArgExpr => "arg_expr",
}

impl NodeKind {
    /// Plain variable assignments: `lvasgn`, `ivasgn`, `gvasgn`, `cvasgn`.
    pub const fn is_variable_assignment(self) -> bool {
        matches!(
            self,
            NodeKind::Lvasgn | NodeKind::Ivasgn | NodeKind::Gvasgn | NodeKind::Cvasgn
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip() {
        for kind in NodeKind::ALL {
            assert_eq!(NodeKind::from_tag(kind.as_str()), Some(*kind));
        }
    }

    #[test]
    fn unknown_tag() {
        assert_eq!(NodeKind::from_tag("while"), None);
    }
}
