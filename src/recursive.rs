//! A BST where every operation is written as direct structural recursion.
//! Call depth is bounded by the height of the tree, so a degenerate tree
//! (keys inserted in sorted order) recurses once per node.
//!
//! # Examples
//!
//! ```
//! use assoc::recursive::Tree;
//! use assoc::{Content, Items};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert_eq!(tree.search('a'), None);
//!
//! tree.insert('b', Content::Integer(2));
//! tree.insert('a', Content::Integer(1));
//! tree.insert('c', Content::Integer(3));
//! assert_eq!(tree.search('a'), Some(&Content::Integer(1)));
//!
//! let mut items = Items::new();
//! tree.inorder(&mut items);
//! assert_eq!(items.keys(), vec!['a', 'b', 'c']);
//!
//! tree.delete('b');
//! assert_eq!(tree.search('b'), None);
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::node::{Link, Node};
use crate::{Content, Items, SearchTree};

/// A Binary Search Tree keyed by `char`. This can be used for inserting,
/// finding, and deleting keys and their content.
pub struct Tree {
    root: Link,
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Tree {
    fn drop(&mut self) {
        self.dispose();
    }
}

impl Clone for Tree {
    fn clone(&self) -> Self {
        // Re-inserting in preorder rebuilds the exact same shape.
        let mut items = Items::new();
        self.preorder(&mut items);

        let mut tree = Self::new();
        for (key, content) in &items {
            tree.insert(*key, (*content).clone());
        }
        tree
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tree").field("root", &self.root).finish()
    }
}

impl Tree {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// The key stored at the root, if any.
    pub fn root_key(&self) -> Option<char> {
        self.root.as_ref().map(|root| root.key)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        len(&self.root)
    }

    /// Number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        height(&self.root)
    }

    /// Potentially finds the content associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc::recursive::Tree;
    /// use assoc::Content;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('x', Content::Char('y'));
    ///
    /// assert_eq!(tree.search('x'), Some(&Content::Char('y')));
    /// assert_eq!(tree.search('z'), None);
    /// ```
    pub fn search(&self, key: char) -> Option<&Content> {
        search(&self.root, key)
    }

    /// Like [`search`][Tree::search] but hands out a mutable reference so
    /// the content can be updated in place.
    pub fn search_mut(&mut self, key: char) -> Option<&mut Content> {
        search_mut(&mut self.root, key)
    }

    /// Inserts `content` at `key`. Inserting at an existing key replaces
    /// (and drops) the old content without adding a node.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc::recursive::Tree;
    /// use assoc::Content;
    ///
    /// let mut tree = Tree::new();
    ///
    /// tree.insert('k', Content::Integer(1));
    /// tree.insert('k', Content::Integer(2));
    ///
    /// assert_eq!(tree.search('k'), Some(&Content::Integer(2)));
    /// assert_eq!(tree.len(), 1);
    /// ```
    pub fn insert(&mut self, key: char, content: Content) {
        insert(&mut self.root, key, content);
    }

    /// Removes the node with the given key. Does nothing if the key is
    /// absent. A node with two children takes the key and content of its
    /// in-order predecessor, and the predecessor's node is removed instead.
    pub fn delete(&mut self, key: char) {
        delete(&mut self.root, key);
    }

    /// Releases every node, leaving the tree as if freshly created.
    /// Disposing an empty tree does nothing.
    pub fn dispose(&mut self) {
        let released = dispose(&mut self.root);
        if released > 0 {
            debug!("disposed recursive tree of {} nodes", released);
        }
    }

    /// Appends each node to `items` in node, left, right order.
    pub fn preorder<'a>(&'a self, items: &mut Items<'a>) {
        preorder(&self.root, items);
    }

    /// Appends each node to `items` in left, node, right order, which is
    /// ascending key order.
    pub fn inorder<'a>(&'a self, items: &mut Items<'a>) {
        inorder(&self.root, items);
    }

    /// Appends each node to `items` in left, right, node order.
    pub fn postorder<'a>(&'a self, items: &mut Items<'a>) {
        postorder(&self.root, items);
    }
}

impl SearchTree for Tree {
    fn search(&self, key: char) -> Option<&Content> {
        Tree::search(self, key)
    }

    fn search_mut(&mut self, key: char) -> Option<&mut Content> {
        Tree::search_mut(self, key)
    }

    fn insert(&mut self, key: char, content: Content) {
        Tree::insert(self, key, content)
    }

    fn delete(&mut self, key: char) {
        Tree::delete(self, key)
    }

    fn dispose(&mut self) {
        Tree::dispose(self)
    }

    fn preorder<'a>(&'a self, items: &mut Items<'a>) {
        Tree::preorder(self, items)
    }

    fn inorder<'a>(&'a self, items: &mut Items<'a>) {
        Tree::inorder(self, items)
    }

    fn postorder<'a>(&'a self, items: &mut Items<'a>) {
        Tree::postorder(self, items)
    }

    fn is_empty(&self) -> bool {
        Tree::is_empty(self)
    }
}

fn search(link: &Link, key: char) -> Option<&Content> {
    let node = link.as_deref()?;
    match key.cmp(&node.key) {
        Ordering::Less => search(&node.left, key),
        Ordering::Equal => Some(&node.content),
        Ordering::Greater => search(&node.right, key),
    }
}

fn search_mut(link: &mut Link, key: char) -> Option<&mut Content> {
    let node = link.as_deref_mut()?;
    match key.cmp(&node.key) {
        Ordering::Less => search_mut(&mut node.left, key),
        Ordering::Equal => Some(&mut node.content),
        Ordering::Greater => search_mut(&mut node.right, key),
    }
}

fn insert(link: &mut Link, key: char, content: Content) {
    match link {
        None => {
            trace!("insert {:?}", key);
            *link = Some(Node::new_boxed(key, content));
        }
        Some(node) => match key.cmp(&node.key) {
            Ordering::Less => insert(&mut node.left, key, content),
            Ordering::Equal => {
                trace!("replace content of {:?}", key);
                node.content = content;
            }
            Ordering::Greater => insert(&mut node.right, key, content),
        },
    }
}

fn delete(link: &mut Link, key: char) {
    let node = match link {
        Some(node) => node,
        None => {
            trace!("delete {:?}: not found", key);
            return;
        }
    };

    match key.cmp(&node.key) {
        Ordering::Less => delete(&mut node.left, key),
        Ordering::Greater => delete(&mut node.right, key),
        Ordering::Equal if node.has_two_children() => {
            trace!("delete {:?}: promoting in-order predecessor", key);
            let mut left = node.left.take();
            replace_by_rightmost(node, &mut left);
            node.left = left;
        }
        Ordering::Equal => {
            trace!("delete {:?}", key);
            if let Some(removed) = link.take() {
                *link = removed.into_only_child();
            }
        }
    }
}

/// Moves the key and content of the largest node in `subtree` into
/// `target`, dropping `target`'s old content, then unlinks that node by
/// putting its left child in its place. An empty `subtree` is left alone.
fn replace_by_rightmost(target: &mut Node, subtree: &mut Link) {
    let node = match subtree {
        Some(node) => node,
        None => return,
    };
    if node.right.is_some() {
        return replace_by_rightmost(target, &mut node.right);
    }

    if let Some(rightmost) = subtree.take() {
        let Node {
            key, content, left, ..
        } = *rightmost;
        target.key = key;
        target.content = content;
        *subtree = left;
    }
}

/// Releases the subtree under `link` and returns how many nodes it held.
fn dispose(link: &mut Link) -> usize {
    match link.take() {
        Some(mut node) => 1 + dispose(&mut node.left) + dispose(&mut node.right),
        None => 0,
    }
}

fn preorder<'a>(link: &'a Link, items: &mut Items<'a>) {
    if let Some(node) = link {
        items.add_node(node);
        preorder(&node.left, items);
        preorder(&node.right, items);
    }
}

fn inorder<'a>(link: &'a Link, items: &mut Items<'a>) {
    if let Some(node) = link {
        inorder(&node.left, items);
        items.add_node(node);
        inorder(&node.right, items);
    }
}

fn postorder<'a>(link: &'a Link, items: &mut Items<'a>) {
    if let Some(node) = link {
        postorder(&node.left, items);
        postorder(&node.right, items);
        items.add_node(node);
    }
}

fn len(link: &Link) -> usize {
    match link {
        Some(node) => 1 + len(&node.left) + len(&node.right),
        None => 0,
    }
}

fn height(link: &Link) -> usize {
    match link {
        Some(node) => 1 + height(&node.left).max(height(&node.right)),
        None => 0,
    }
}
