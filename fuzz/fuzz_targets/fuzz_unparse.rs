#![no_main]

use arbitrary::{Arbitrary, Result, Unstructured};
use libfuzzer_sys::fuzz_target;
use unparser::{Child, Node, NodeKind};

const MAX_DEPTH: usize = 12;
const NAMES: &[&str] = &["a", "b", "Foo", "@x", "$g", "+", "[]=", "name=", "two words"];

/// A structurally unconstrained tree: any kind with any children.
#[derive(Debug)]
struct Tree(Node);

impl<'a> Arbitrary<'a> for Tree {
    fn arbitrary(u: &mut Unstructured<'a>) -> Result<Self> {
        node(u, 0).map(Tree)
    }
}

fn node(u: &mut Unstructured<'_>, depth: usize) -> Result<Node> {
    let kind = *u.choose(NodeKind::ALL)?;
    let len = u.int_in_range(0..=4)?;
    let mut children = Vec::with_capacity(len);
    for _ in 0..len {
        children.push(child(u, depth)?);
    }
    Ok(Node::new(kind, children))
}

fn child(u: &mut Unstructured<'_>, depth: usize) -> Result<Child> {
    Ok(match u.int_in_range(0..=5)? {
        0 if depth < MAX_DEPTH => Child::Node(node(u, depth + 1)?),
        1 => Child::Symbol((*u.choose(NAMES)?).to_owned()),
        2 => Child::Str(String::arbitrary(u)?),
        3 => Child::Int(i64::arbitrary(u)?),
        4 => Child::Float(f64::arbitrary(u)?),
        _ => Child::Nil,
    })
}

fuzz_target!(|tree: Tree| {
    let _ = unparser::unparse(&tree.0);
});
