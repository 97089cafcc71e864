//! Character frequency counting on top of a [`SearchTree`].
//!
//! Letters are counted case-insensitively, spaces are counted as spaces and
//! everything else is lumped together under `'_'`.
//!
//! # Examples
//!
//! ```
//! use assoc::frequency::letter_count;
//! use assoc::iterative::Tree;
//! use assoc::Content;
//!
//! let tree: Tree = letter_count("abBccc_ 123 *");
//!
//! assert_eq!(tree.search('b'), Some(&Content::Integer(2)));
//! assert_eq!(tree.search('_'), Some(&Content::Integer(5)));
//! assert_eq!(tree.search('B'), None);
//! ```

use crate::{Content, SearchTree};

/// Key used for every character that is neither a letter nor a space.
pub const OTHER: char = '_';

/// Maps `c` to the key it is counted under: ASCII letters lowercased,
/// space kept, anything else [`OTHER`].
pub fn normalize(c: char) -> char {
    match c {
        'A'..='Z' => c.to_ascii_lowercase(),
        'a'..='z' | ' ' => c,
        _ => OTHER,
    }
}

/// Builds a fresh tree holding one [`Content::Integer`] counter per
/// normalized character of `input`.
pub fn letter_count<T: SearchTree>(input: &str) -> T {
    let mut tree = T::default();
    count_into(&mut tree, input);
    tree
}

/// Adds the characters of `input` to the counters already in `tree`. A
/// key whose content is not an integer restarts at 1.
pub fn count_into<T: SearchTree>(tree: &mut T, input: &str) {
    for key in input.chars().map(normalize) {
        match tree.search_mut(key) {
            Some(Content::Integer(count)) => *count += 1,
            Some(content) => *content = Content::Integer(1),
            None => tree.insert(key, Content::Integer(1)),
        }
    }
}
