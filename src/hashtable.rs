//! A hash table with explicitly chained synonyms.
//!
//! The table is a fixed number of buckets chosen at construction. Each
//! bucket is a singly linked chain of [`Item`]s that own their key. New keys
//! are prepended to their chain, so the most recent insert is found first.
//!
//! The hash function is deliberately simple (one plus the byte sum, modulo
//! the capacity) and clusters badly; see [`hash`].
//!
//! # Examples
//!
//! ```
//! use assoc::HashTable;
//!
//! let mut table = HashTable::new();
//! table.insert("k", 1.0);
//! table.insert("k", 2.0);
//!
//! assert_eq!(table.get("k"), Some(&2.0));
//! assert_eq!(table.len(), 1);
//!
//! table.delete("k");
//! assert_eq!(table.get("k"), None);
//! ```

use std::fmt;

use log::{debug, trace};

use crate::Error;

/// Number of buckets used by [`HashTable::new`].
pub const DEFAULT_CAPACITY: usize = 101;

type Link = Option<Box<Item>>;

/// One key/value entry in a bucket chain.
pub struct Item {
    key: String,
    value: f32,
    next: Link,
}

impl fmt::Debug for Item {
    // Stops at this item: `next` is the rest of the bucket.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Item")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

impl Item {
    /// The key this item was stored under.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The stored value.
    pub fn value(&self) -> f32 {
        self.value
    }
}

/// Maps `key` to a bucket index in `0..capacity`.
///
/// ```
/// use assoc::hashtable::hash;
///
/// // 1 + 'a' (97) + 'b' (98)
/// assert_eq!(hash("ab", 101), 196 % 101);
/// // Anagrams always collide.
/// assert_eq!(hash("ab", 101), hash("ba", 101));
/// ```
///
/// # Panics
///
/// Panics if `capacity` is zero.
pub fn hash(key: &str, capacity: usize) -> usize {
    let sum = key
        .bytes()
        .fold(1usize, |sum, byte| sum.wrapping_add(usize::from(byte)));
    sum % capacity
}

/// A string-keyed table of `f32` values.
pub struct HashTable {
    buckets: Vec<Link>,
}

impl Default for HashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for HashTable {
    fn drop(&mut self) {
        self.delete_all();
    }
}

impl fmt::Debug for HashTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|item| (item.key(), item.value())))
            .finish()
    }
}

impl HashTable {
    /// An empty table with [`DEFAULT_CAPACITY`] buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// An empty table with `capacity` buckets.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(table) => table,
            Err(err) => panic!("{}", err),
        }
    }

    /// An empty table with `capacity` buckets, or an error if `capacity` is
    /// zero.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        let mut buckets = Vec::with_capacity(capacity);
        buckets.resize_with(capacity, || None);
        Ok(Self { buckets })
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Number of stored items.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether every bucket is empty.
    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Option::is_none)
    }

    fn index_of(&self, key: &str) -> usize {
        hash(key, self.capacity())
    }

    /// Finds the item stored under `key`.
    pub fn search(&self, key: &str) -> Option<&Item> {
        self.chain(self.index_of(key)).find(|item| item.key == key)
    }

    fn search_mut(&mut self, key: &str) -> Option<&mut Item> {
        let index = self.index_of(key);
        let mut current = self.buckets[index].as_deref_mut();
        while let Some(item) = current {
            if item.key == key {
                return Some(item);
            }
            current = item.next.as_deref_mut();
        }
        None
    }

    /// Stores `value` under `key`. An existing item has its value
    /// overwritten; otherwise a new item is prepended to the key's chain.
    pub fn insert(&mut self, key: &str, value: f32) {
        if let Some(item) = self.search_mut(key) {
            trace!("overwrite {:?}", key);
            item.value = value;
            return;
        }

        let index = self.index_of(key);
        trace!("insert {:?} into bucket {}", key, index);
        let bucket = &mut self.buckets[index];
        let item = Box::new(Item {
            key: key.to_owned(),
            value,
            next: bucket.take(),
        });
        *bucket = Some(item);
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&f32> {
        self.search(key).map(|item| &item.value)
    }

    /// A mutable reference to the value stored under `key`.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut f32> {
        self.search_mut(key).map(|item| &mut item.value)
    }

    /// Removes the item stored under `key`, if any. The rest of the chain
    /// keeps its order.
    pub fn delete(&mut self, key: &str) {
        let index = self.index_of(key);
        let mut link = &mut self.buckets[index];
        loop {
            let matches = match link.as_deref() {
                Some(item) => item.key == key,
                None => {
                    trace!("delete {:?}: not found", key);
                    return;
                }
            };
            link = match (matches, link) {
                (false, Some(item)) => &mut item.next,
                (_, link) => {
                    if let Some(mut removed) = link.take() {
                        trace!("delete {:?} from bucket {}", key, index);
                        *link = removed.next.take();
                    }
                    return;
                }
            };
        }
    }

    /// Removes every item, leaving the table as after construction.
    pub fn delete_all(&mut self) {
        let mut released = 0usize;
        for bucket in &mut self.buckets {
            let mut chain = bucket.take();
            while let Some(mut item) = chain {
                chain = item.next.take();
                released += 1;
            }
        }
        if released > 0 {
            debug!("deleted all {} items", released);
        }
    }

    /// Iterates the chain of bucket `index`, head first. An out of range
    /// index yields nothing.
    pub fn chain(&self, index: usize) -> Chain<'_> {
        Chain {
            current: self.buckets.get(index).and_then(|bucket| bucket.as_deref()),
        }
    }

    /// Iterates every item, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Item> + '_ {
        (0..self.capacity()).flat_map(move |index| self.chain(index))
    }
}

/// The items of one bucket, head first.
pub struct Chain<'a> {
    current: Option<&'a Item>,
}

impl<'a> Iterator for Chain<'a> {
    type Item = &'a Item;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.current?;
        self.current = item.next.as_deref();
        Some(item)
    }
}
