//! Receiver-form coverage for the slice-clone strategy: a value-bound
//! element type and an address-bound element type, each stored directly and
//! behind a pointer. All four combinations must match a direct per-element
//! capability call and share no backing storage with the source.

use opt_caps::prelude::*;

// Value-bound element type.
#[derive(Debug, Clone, PartialEq, Probe)]
#[probe(clone)]
struct Tag {
    name: String,
}

impl Tag {
    fn new(name: &str) -> Self {
        Tag {
            name: String::from(name),
        }
    }
}

impl DeepClone for Tag {
    fn deep_clone(&self) -> Self {
        Tag {
            name: self.name.clone(),
        }
    }
}

// Address-bound element type.
#[derive(Debug, Clone, PartialEq, Probe)]
#[probe(boxed_clone)]
struct Node {
    label: String,
}

impl Node {
    fn new(label: &str) -> Self {
        Node {
            label: String::from(label),
        }
    }
}

impl DeepCloneBoxed for Node {
    fn deep_clone_boxed(&self) -> Box<Self> {
        Box::new(Node {
            label: self.label.clone(),
        })
    }
}

// =============================================================================
// (a) Vec<E>, value-bound
// =============================================================================

#[test]
fn direct_elements_with_value_binding() {
    let mut original = Optional::with_value(vec![Tag::new("x"), Tag::new("y")]);
    let copy = original.deep_clone().unwrap();

    let expected: Vec<Tag> = original
        .as_ref()
        .unwrap()
        .iter()
        .map(DeepClone::deep_clone)
        .collect();
    assert_eq!(*copy.as_ref().unwrap(), expected);
    assert_ne!(
        original.as_ref().unwrap().as_ptr(),
        copy.as_ref().unwrap().as_ptr()
    );

    original.as_mut().unwrap()[0].name.push_str("-mutated");
    assert_eq!(copy.unwrap()[0], Tag::new("x"));
}

// =============================================================================
// (b) Vec<E>, address-bound
// =============================================================================

#[test]
fn direct_elements_with_address_binding() {
    let mut original = Optional::with_value(vec![Node::new("a"), Node::new("b")]);
    let copy = original.deep_clone().unwrap();

    let expected: Vec<Node> = original
        .as_ref()
        .unwrap()
        .iter()
        .map(|n| *n.deep_clone_boxed())
        .collect();
    assert_eq!(*copy.as_ref().unwrap(), expected);

    original.as_mut().unwrap()[1].label.clear();
    assert_eq!(copy.unwrap()[1], Node::new("b"));
}

// =============================================================================
// (c) Vec<Box<E>>, address-bound
// =============================================================================

#[test]
fn boxed_elements_with_address_binding() {
    let original =
        Optional::with_value(vec![Box::new(Node::new("a")), Box::new(Node::new("b"))]);
    let copy = original.deep_clone().unwrap();

    let original = original.unwrap();
    let copy = copy.unwrap();
    assert_eq!(copy, original);
    // The returned cells are fresh allocations, stored as-is.
    for (old, new) in original.iter().zip(&copy) {
        assert_ne!(&**old as *const Node, &**new as *const Node);
    }
}

// =============================================================================
// (d) Vec<Box<E>>, value-bound
// =============================================================================

#[test]
fn boxed_elements_with_value_binding() {
    let original =
        Optional::with_value(vec![Box::new(Tag::new("x")), Box::new(Tag::new("y"))]);
    let copy = original.deep_clone().unwrap();

    let original = original.unwrap();
    let copy = copy.unwrap();
    assert_eq!(copy, original);
    // Each result was rehomed into a newly allocated cell.
    for (old, new) in original.iter().zip(&copy) {
        assert_ne!(&**old as *const Tag, &**new as *const Tag);
    }
}

// =============================================================================
// Helper type over a slice: whole-slice capability beats per-element work
// =============================================================================

#[derive(Debug, PartialEq, Probe)]
#[probe(clone)]
struct Tags(Vec<Tag>);

impl DeepClone for Tags {
    fn deep_clone(&self) -> Self {
        Tags(self.0.iter().map(DeepClone::deep_clone).collect())
    }
}

#[test]
fn slice_newtype_capability_resolves_in_the_dispatcher() {
    let original = Optional::with_value(Tags(vec![Tag::new("x")]));
    let copy = original.deep_clone().unwrap();
    assert_eq!(copy, original);
}
