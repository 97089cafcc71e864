use assoc::frequency::{letter_count, normalize};
use assoc::{iterative, recursive, Content, Items, SearchTree};
use quickcheck_macros::quickcheck;

use std::collections::{BTreeMap, HashSet};

use crate::{Key, Op};

/// Applies a set of operations to a tree and a `BTreeMap`.
/// This way we can ensure that after a random smattering of inserts
/// and deletes we have the same keys, in the same order, as the map.
fn do_ops<T: SearchTree>(ops: &[Op<Key, i64>], tree: &mut T, map: &mut BTreeMap<char, i64>) {
    for op in ops {
        match op {
            Op::Insert(Key(k), v) => {
                tree.insert(*k, Content::Integer(*v));
                map.insert(*k, *v);
            }
            Op::Remove(Key(k)) => {
                tree.delete(*k);
                map.remove(k);
            }
        }
    }
}

fn matches_model<T: SearchTree>(ops: Vec<Op<Key, i64>>) -> bool {
    let mut tree = T::default();
    let mut map = BTreeMap::new();
    do_ops(&ops, &mut tree, &mut map);

    let mut items = Items::new();
    tree.inorder(&mut items);
    let visited: Vec<(char, i64)> = items
        .iter()
        .map(|(key, content)| (*key, content.as_integer().unwrap()))
        .collect();
    let expected: Vec<(char, i64)> = map.into_iter().collect();

    visited == expected
}

#[quickcheck]
fn recursive_matches_btreemap(ops: Vec<Op<Key, i64>>) -> bool {
    matches_model::<recursive::Tree>(ops)
}

#[quickcheck]
fn iterative_matches_btreemap(ops: Vec<Op<Key, i64>>) -> bool {
    matches_model::<iterative::Tree>(ops)
}

#[quickcheck]
fn contains(xs: Vec<char>) -> bool {
    let mut tree = iterative::Tree::new();
    for x in &xs {
        tree.insert(*x, Content::Char(*x));
    }

    xs.iter().all(|x| tree.search(*x) == Some(&Content::Char(*x)))
}

#[quickcheck]
fn contains_not(xs: Vec<char>, nots: Vec<char>) -> bool {
    let mut tree = recursive::Tree::new();
    for x in &xs {
        tree.insert(*x, Content::Char(*x));
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(*x).is_none())
}

fn deleting_everything_empties<T: SearchTree>(xs: Vec<char>) -> bool {
    let mut tree = T::default();
    for x in &xs {
        tree.insert(*x, Content::Char(*x));
    }
    for x in &xs {
        tree.delete(*x);
    }

    tree.is_empty()
}

#[quickcheck]
fn delete_completeness(xs: Vec<char>) -> bool {
    deleting_everything_empties::<recursive::Tree>(xs.clone())
        && deleting_everything_empties::<iterative::Tree>(xs)
}

#[quickcheck]
fn letter_count_matches_model(input: String) -> bool {
    let mut expected = BTreeMap::new();
    for c in input.chars().map(normalize) {
        *expected.entry(c).or_insert(0i64) += 1;
    }

    let tree: iterative::Tree = letter_count(&input);
    let counted: BTreeMap<char, i64> = tree
        .inorder_iter()
        .map(|(key, content)| (key, content.as_integer().unwrap()))
        .collect();

    counted == expected
}

#[test]
fn scenario_delete_root_with_two_children() {
    let mut tree = recursive::Tree::new();
    for key in [5u8, 3, 8, 1, 4].iter().map(|&n| char::from(n)) {
        tree.insert(key, Content::Integer(i64::from(key as u8)));
    }

    let mut items = Items::new();
    tree.inorder(&mut items);
    assert_eq!(items.keys(), [1u8, 3, 4, 5, 8].iter().map(|&n| char::from(n)).collect::<Vec<_>>());

    tree.delete(char::from(5));

    assert_eq!(tree.root_key(), Some(char::from(4)));
    assert!(tree.search(char::from(8)).is_some());
}

#[test]
fn reinitializing_releases_old_tree() {
    let mut tree = iterative::Tree::new();
    for key in 'a'..='z' {
        tree.insert(key, Content::Integer(1));
    }

    tree = iterative::Tree::new();

    assert!(tree.is_empty());
    assert_eq!(tree.search('a'), None);
}
