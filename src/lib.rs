//! This crate implements two associative containers from first principles,
//! mostly for educational purposes: a `char`-keyed Binary Search Tree (in a
//! recursive and an iterative flavour) and a string-keyed hash table with
//! chained buckets.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! insert, find, and delete stored records. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` stores a key and the
//! [`Content`] associated with it and may have up to two child `Node`s. The
//! most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    key less than its own key.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    key greater than its own key.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! Searching takes `O(height)`. These trees never rebalance, so inserting
//! keys in sorted order degrades a tree into a linked list with a height
//! equal to its size. [`recursive::Tree`] recurses once per level for every
//! operation; [`iterative::Tree`] uses loops and an explicit [`Stack`]
//! instead, so it copes with such lists without growing the call stack.
//!
//! Both implement [`SearchTree`] and produce identical results for identical
//! operations, down to the shape of the tree.
//!
//! ## Hash Table
//!
//! [`HashTable`] maps string keys to `f32` values using a fixed number of
//! buckets, each a singly linked chain.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod content;
pub mod error;
pub mod frequency;
pub mod hashtable;
pub mod items;
pub mod iterative;
mod node;
pub mod recursive;
pub mod stack;


pub use content::{Content, ContentType};
pub use error::Error;
pub use hashtable::HashTable;
pub use items::Items;
pub use stack::Stack;

/// The operations shared by every BST flavour in this crate.
///
/// A tree is created empty through [`Default`]. Re-initialising a tree is
/// done by assigning a new one; the old tree releases its nodes as it is
/// dropped.
pub trait SearchTree: Default {
    /// The content stored at `key`, if any.
    fn search(&self, key: char) -> Option<&Content>;

    /// A mutable reference to the content stored at `key`, if any.
    fn search_mut(&mut self, key: char) -> Option<&mut Content>;

    /// Stores `content` at `key`, replacing the content of an existing node.
    fn insert(&mut self, key: char, content: Content);

    /// Removes `key` from the tree. Absent keys are ignored.
    fn delete(&mut self, key: char);

    /// Releases every node.
    fn dispose(&mut self);

    /// Appends nodes to `items` in node, left, right order.
    fn preorder<'a>(&'a self, items: &mut Items<'a>);

    /// Appends nodes to `items` in ascending key order.
    fn inorder<'a>(&'a self, items: &mut Items<'a>);

    /// Appends nodes to `items` in left, right, node order.
    fn postorder<'a>(&'a self, items: &mut Items<'a>);

    /// Whether the tree has no nodes.
    fn is_empty(&self) -> bool;
}
