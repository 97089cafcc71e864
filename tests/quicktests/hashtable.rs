use assoc::hashtable::{hash, HashTable};
use quickcheck_macros::quickcheck;

use std::collections::HashMap;

use crate::Op;

/// Applies a set of operations to a table and a `HashMap` model.
fn do_ops(ops: &[Op<String, i16>], table: &mut HashTable, map: &mut HashMap<String, f32>) {
    for op in ops {
        match op {
            Op::Insert(k, v) => {
                table.insert(k, f32::from(*v));
                map.insert(k.clone(), f32::from(*v));
            }
            Op::Remove(k) => {
                table.delete(k);
                map.remove(k);
            }
        }
    }
}

#[quickcheck]
fn matches_hashmap(ops: Vec<Op<String, i16>>, capacity: u8) -> bool {
    let mut table = HashTable::with_capacity(usize::from(capacity) + 1);
    let mut map = HashMap::new();
    do_ops(&ops, &mut table, &mut map);

    table.len() == map.len() && map.iter().all(|(k, v)| table.get(k) == Some(v))
}

#[quickcheck]
fn items_live_in_their_hash_bucket(keys: Vec<String>) -> bool {
    let mut table = HashTable::with_capacity(7);
    for key in &keys {
        table.insert(key, 0.0);
    }

    (0..table.capacity()).all(|index| {
        table
            .chain(index)
            .all(|item| hash(item.key(), table.capacity()) == index)
    })
}

#[quickcheck]
fn delete_all_empties(keys: Vec<String>) -> bool {
    let mut table = HashTable::new();
    for key in &keys {
        table.insert(key, 1.0);
    }
    table.delete_all();

    table.is_empty() && keys.iter().all(|key| table.get(key).is_none())
}

#[test]
fn overwrite_keeps_single_entry() {
    let mut table = HashTable::new();
    table.insert("k", 1.0);
    table.insert("k", 2.0);

    assert_eq!(table.get("k"), Some(&2.0));
    assert_eq!(table.chain(hash("k", table.capacity())).count(), 1);
}
