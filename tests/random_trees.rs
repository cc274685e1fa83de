//! Random specification trees checked against a reference evaluator

#![cfg(feature = "proptest")]

use proptest::prelude::*;
use specs::testing::strategies::{spec_tree, SpecTree};

proptest! {
    #[test]
    fn prop_tree_matches_reference(tree in spec_tree(), value in -200i32..200) {
        prop_assert_eq!(tree.build().evaluate(&value), tree.expected(&value));
    }

    #[test]
    fn prop_negated_tree(tree in spec_tree(), value in -200i32..200) {
        let negated = tree.build().not();
        if tree.is_nil() {
            prop_assert!(negated.is_identity());
        } else {
            prop_assert_eq!(negated.evaluate(&value), !tree.expected(&value));
        }
    }

    #[test]
    fn prop_describe_is_stable(tree in spec_tree()) {
        prop_assert_eq!(tree.build().describe(), tree.build().describe());
    }
}

#[test]
fn test_conjunction_with_identity_child() {
    let tree = SpecTree::All(vec![SpecTree::Nil, SpecTree::GreaterThan(0)]);
    let spec = tree.build();
    assert_eq!(spec.describe(), "all(nil, gt0)");
    assert!(spec.evaluate(&1));
    assert!(!spec.evaluate(&0));
}
