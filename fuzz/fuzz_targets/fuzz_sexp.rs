#![no_main]

use libfuzzer_sys::fuzz_target;
use unparser::Node;

fuzz_target!(|data: &str| {
    let Ok(node) = data.parse::<Node>() else {
        return;
    };
    // Whatever reads must print back to the same tree.
    assert_eq!(node.to_string().parse::<Node>().as_ref(), Ok(&node));
    let _ = unparser::unparse(&node);
});
