//! The output collector filled by tree traversals.

use crate::node::Node;
use crate::Content;

/// An append-only record of visited nodes, in visiting order. Entries
/// borrow their content from the tree that was traversed.
///
/// # Examples
///
/// ```
/// use assoc::recursive::Tree;
/// use assoc::{Content, Items};
///
/// let mut tree = Tree::new();
/// tree.insert('b', Content::Integer(2));
/// tree.insert('a', Content::from("one"));
///
/// let mut items = Items::new();
/// tree.inorder(&mut items);
///
/// let printed: Vec<String> = items
///     .iter()
///     .map(|(key, content)| format!("{}={}", key, content))
///     .collect();
/// assert_eq!(printed, vec!["a=one", "b=2"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Items<'a> {
    entries: Vec<(char, &'a Content)>,
}

impl<'a> Items<'a> {
    /// An empty collector.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends one visited `(key, content)` pair.
    pub fn push(&mut self, key: char, content: &'a Content) {
        self.entries.push((key, content));
    }

    pub(crate) fn add_node(&mut self, node: &'a Node) {
        self.push(node.key, &node.content);
    }

    /// Number of visits recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing was visited.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The recorded visits in order.
    pub fn iter(&self) -> std::slice::Iter<'_, (char, &'a Content)> {
        self.entries.iter()
    }

    /// Just the visited keys, in order.
    pub fn keys(&self) -> Vec<char> {
        self.entries.iter().map(|(key, _)| *key).collect()
    }

    /// Forgets every recorded visit.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<'a> Extend<(char, &'a Content)> for Items<'a> {
    fn extend<I: IntoIterator<Item = (char, &'a Content)>>(&mut self, iter: I) {
        self.entries.extend(iter);
    }
}

impl<'i, 'a> IntoIterator for &'i Items<'a> {
    type Item = &'i (char, &'a Content);
    type IntoIter = std::slice::Iter<'i, (char, &'a Content)>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
