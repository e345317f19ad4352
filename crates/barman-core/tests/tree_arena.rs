use barman_core::PhyloTree;

#[test]
fn builder_assigns_sequential_indices() {
    let mut tree = PhyloTree::new();
    assert_eq!(tree.root(), 0);
    assert_eq!(tree.node_count(), 1);

    let a = tree.add_child(tree.root(), "SpeciesA", 0.2).unwrap();
    let b = tree.add_child(tree.root(), "SpeciesB", 0.3).unwrap();
    assert_eq!((a, b), (1, 2));
    assert_eq!(tree.node(tree.root()).children(), &[1, 2]);
    assert!(tree.node(a).is_leaf());
    assert_eq!(tree.node(b).name(), "SpeciesB");
}

#[test]
fn rejects_unknown_parent() {
    let mut tree = PhyloTree::new();
    let err = tree.add_child(5, "SpeciesA", 0.2).unwrap_err();
    assert_eq!(err.info().code, "tree-bad-parent");
}

#[test]
fn rejects_negative_or_nan_length() {
    let mut tree = PhyloTree::new();
    let root = tree.root();
    assert!(tree.add_child(root, "SpeciesA", -0.1).is_err());
    assert!(tree.add_child(root, "SpeciesA", f64::NAN).is_err());
    assert!(tree.add_child(root, "SpeciesA", 0.0).is_ok());
}
