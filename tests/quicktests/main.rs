use quickcheck::{Arbitrary, Gen};

mod hashtable;
mod trees;

/// An enum for the various kinds of "things" to do to
/// a container in a quicktest.
#[derive(Clone, Debug)]
pub enum Op<K, V> {
    /// Insert the K, V into the data structure
    Insert(K, V),
    /// Remove the K from the data structure
    Remove(K),
}

impl<K, V> Arbitrary for Op<K, V>
where
    K: Arbitrary,
    V: Arbitrary,
{
    /// Tells quickcheck how to randomly choose an operation
    fn arbitrary(g: &mut Gen) -> Self {
        match g.choose(&[0, 0, 1]).unwrap() {
            0 => Op::Insert(K::arbitrary(g), V::arbitrary(g)),
            1 => Op::Remove(K::arbitrary(g)),
            _ => unreachable!(),
        }
    }
}

/// A key from a deliberately small alphabet so removals hit often.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Key(pub char);

impl Arbitrary for Key {
    fn arbitrary(g: &mut Gen) -> Self {
        Key(*g.choose(&['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j']).unwrap())
    }
}
