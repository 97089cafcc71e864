//! A BST where no operation recurses. Lookups walk down with a cursor and
//! the traversals and disposal keep their pending work on a [`Stack`], so
//! call-stack usage stays constant however lopsided the tree gets.
//!
//! The traversals are also available as lazy iterators ([`Preorder`],
//! [`Inorder`], [`Postorder`]) that perform one visit per call to `next`.
//!
//! # Examples
//!
//! ```
//! use assoc::iterative::Tree;
//! use assoc::Content;
//!
//! let mut tree = Tree::new();
//! for (i, key) in "dbfacg".chars().enumerate() {
//!     tree.insert(key, Content::Integer(i as i64));
//! }
//!
//! let keys: Vec<char> = tree.inorder_iter().map(|(key, _)| key).collect();
//! assert_eq!(keys, vec!['a', 'b', 'c', 'd', 'f', 'g']);
//!
//! // 'd' has two children so 'c' takes its place.
//! tree.delete('d');
//! assert_eq!(tree.root_key(), Some('c'));
//!
//! tree.dispose();
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;

use log::{debug, trace};

use crate::node::{Link, Node};
use crate::{Content, Items, SearchTree, Stack};

/// A Binary Search Tree keyed by `char` whose operations are all loops.
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
        let mut tree = Self::new();
        for (key, content) in self.preorder_iter() {
            tree.insert(key, content.clone());
        }
        tree
    }
}

impl fmt::Debug for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.inorder_iter()).finish()
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
        self.preorder_iter().count()
    }

    /// Number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        let mut to_visit = Stack::new();
        if let Some(root) = self.root.as_deref() {
            to_visit.push((root, 1));
        }

        let mut height = 0;
        while let Some((node, depth)) = to_visit.pop() {
            height = height.max(depth);
            if let Some(left) = node.left.as_deref() {
                to_visit.push((left, depth + 1));
            }
            if let Some(right) = node.right.as_deref() {
                to_visit.push((right, depth + 1));
            }
        }
        height
    }

    /// Potentially finds the content associated with the given key in this
    /// tree. If no node has the corresponding key, `None` is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use assoc::iterative::Tree;
    /// use assoc::Content;
    ///
    /// let mut tree = Tree::new();
    /// tree.insert('x', Content::Float(0.5));
    ///
    /// assert_eq!(tree.search('x'), Some(&Content::Float(0.5)));
    /// assert_eq!(tree.search('y'), None);
    /// ```
    pub fn search(&self, key: char) -> Option<&Content> {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref(),
                Ordering::Equal => return Some(&node.content),
                Ordering::Greater => current = node.right.as_deref(),
            }
        }
        None
    }

    /// Like [`search`][Tree::search] but hands out a mutable reference so
    /// the content can be updated in place.
    pub fn search_mut(&mut self, key: char) -> Option<&mut Content> {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            match key.cmp(&node.key) {
                Ordering::Less => current = node.left.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.content),
                Ordering::Greater => current = node.right.as_deref_mut(),
            }
        }
        None
    }

    /// Inserts `content` at `key`. Inserting at an existing key replaces
    /// (and drops) the old content without adding a node.
    pub fn insert(&mut self, key: char, content: Content) {
        let link = find_link(&mut self.root, key);
        match link {
            Some(node) => {
                trace!("replace content of {:?}", key);
                node.content = content;
            }
            None => {
                trace!("insert {:?}", key);
                *link = Some(Node::new_boxed(key, content));
            }
        }
    }

    /// Removes the node with the given key. Does nothing if the key is
    /// absent. A node with two children takes the key and content of its
    /// in-order predecessor, and the predecessor's node is removed instead.
    pub fn delete(&mut self, key: char) {
        let link = find_link(&mut self.root, key);
        let node = match link {
            Some(node) => node,
            None => {
                trace!("delete {:?}: not found", key);
                return;
            }
        };

        if node.has_two_children() {
            trace!("delete {:?}: promoting in-order predecessor", key);
            let mut left = node.left.take();
            replace_by_rightmost(node, &mut left);
            node.left = left;
        } else if let Some(removed) = link.take() {
            trace!("delete {:?}", key);
            *link = removed.into_only_child();
        }
    }

    /// Releases every node, leaving the tree as if freshly created.
    /// Disposing an empty tree does nothing.
    pub fn dispose(&mut self) {
        let mut to_release = Stack::new();
        if let Some(root) = self.root.take() {
            to_release.push(root);
        }

        let mut released = 0usize;
        while let Some(mut node) = to_release.pop() {
            if let Some(left) = node.left.take() {
                to_release.push(left);
            }
            if let Some(right) = node.right.take() {
                to_release.push(right);
            }
            // The node and its content are dropped here, childless.
            released += 1;
        }

        if released > 0 {
            debug!("disposed iterative tree of {} nodes", released);
        }
    }

    /// Visits nodes in node, left, right order.
    pub fn preorder_iter(&self) -> Preorder<'_> {
        Preorder::new(self.root.as_deref())
    }

    /// Visits nodes in ascending key order.
    pub fn inorder_iter(&self) -> Inorder<'_> {
        Inorder::new(self.root.as_deref())
    }

    /// Visits nodes in left, right, node order.
    pub fn postorder_iter(&self) -> Postorder<'_> {
        Postorder::new(self.root.as_deref())
    }

    /// Appends each node to `items` in node, left, right order.
    pub fn preorder<'a>(&'a self, items: &mut Items<'a>) {
        items.extend(self.preorder_iter());
    }

    /// Appends each node to `items` in ascending key order.
    pub fn inorder<'a>(&'a self, items: &mut Items<'a>) {
        items.extend(self.inorder_iter());
    }

    /// Appends each node to `items` in left, right, node order.
    pub fn postorder<'a>(&'a self, items: &mut Items<'a>) {
        items.extend(self.postorder_iter());
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

/// Walks down from `link` and returns the link that either holds `key` or
/// is the empty spot where `key` belongs.
fn find_link(mut link: &mut Link, key: char) -> &mut Link {
    loop {
        let ordering = match link.as_deref() {
            Some(node) => key.cmp(&node.key),
            None => Ordering::Equal,
        };
        link = match (ordering, link) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Returns the link holding the largest node under `link`.
fn rightmost_link(mut link: &mut Link) -> &mut Link {
    loop {
        let has_right = link
            .as_deref()
            .map_or(false, |node| node.right.is_some());
        link = match (has_right, link) {
            (true, Some(node)) => &mut node.right,
            (_, link) => return link,
        };
    }
}

/// Moves the key and content of the largest node in `subtree` into
/// `target`, dropping `target`'s old content, then unlinks that node by
/// putting its left child in its place. An empty `subtree` is left alone.
fn replace_by_rightmost(target: &mut Node, subtree: &mut Link) {
    let link = rightmost_link(subtree);
    if let Some(rightmost) = link.take() {
        let Node {
            key, content, left, ..
        } = *rightmost;
        target.key = key;
        target.content = content;
        *link = left;
    }
}

/// Preorder traversal driven by a stack of pending right subtrees.
pub struct Preorder<'a> {
    to_visit: Stack<&'a Node>,
    current: Option<&'a Node>,
}

impl<'a> Preorder<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        Self {
            to_visit: Stack::new(),
            current: root,
        }
    }
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (char, &'a Content);

    fn next(&mut self) -> Option<Self::Item> {
        // Continue down the current left spine, or resume at the most
        // recently deferred right subtree.
        let node = match self.current.take() {
            Some(node) => node,
            None => self.to_visit.pop()?,
        };
        if let Some(right) = node.right.as_deref() {
            self.to_visit.push(right);
        }
        self.current = node.left.as_deref();
        Some((node.key, &node.content))
    }
}

/// Inorder traversal driven by a stack of ancestors still to be visited.
pub struct Inorder<'a> {
    to_visit: Stack<&'a Node>,
}

impl<'a> Inorder<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self {
            to_visit: Stack::new(),
        };
        iter.push_leftmost(root);
        iter
    }

    fn push_leftmost(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.to_visit.push(node);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Inorder<'a> {
    type Item = (char, &'a Content);

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.to_visit.pop()?;
        self.push_leftmost(node.right.as_deref());
        Some((node.key, &node.content))
    }
}

/// Postorder traversal. A node sits on the stack until both subtrees are
/// done; the parallel flag stack records whether its right subtree has
/// been started yet.
pub struct Postorder<'a> {
    to_visit: Stack<&'a Node>,
    first_visit: Stack<bool>,
}

impl<'a> Postorder<'a> {
    fn new(root: Option<&'a Node>) -> Self {
        let mut iter = Self {
            to_visit: Stack::new(),
            first_visit: Stack::new(),
        };
        iter.push_leftmost(root);
        iter
    }

    fn push_leftmost(&mut self, mut current: Option<&'a Node>) {
        while let Some(node) = current {
            self.to_visit.push(node);
            self.first_visit.push(true);
            current = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Postorder<'a> {
    type Item = (char, &'a Content);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let node = *self.to_visit.top()?;
            let first = self.first_visit.top_mut()?;
            if *first {
                *first = false;
                self.push_leftmost(node.right.as_deref());
            } else {
                self.to_visit.pop();
                self.first_visit.pop();
                return Some((node.key, &node.content));
            }
        }
    }
}
