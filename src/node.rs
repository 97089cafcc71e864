use crate::Content;

/// An owning edge to a subtree. `None` marks the empty spot below a leaf.
pub(crate) type Link = Option<Box<Node>>;

/// A `Node` has a key that is used for searching/sorting and the content
/// associated with that key. Each child link exclusively owns its subtree.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) key: char,
    pub(crate) content: Content,
    pub(crate) left: Link,
    pub(crate) right: Link,
}

impl Node {
    /// Allocates a new leaf holding `key` and `content`.
    pub(crate) fn new_boxed(key: char, content: Content) -> Box<Self> {
        Box::new(Self {
            key,
            content,
            left: None,
            right: None,
        })
    }

    /// Whether both child links are occupied.
    pub(crate) fn has_two_children(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }

    /// Consumes a node with at most one child and returns that child.
    pub(crate) fn into_only_child(self) -> Link {
        let Self { left, right, .. } = self;
        left.or(right)
    }
}
