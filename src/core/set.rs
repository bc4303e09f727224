//! Identity-keyed value set. Dedup by identity, not by full equality.

use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;
use std::ops::{BitAnd, BitOr, Sub};

use super::identity::Identified;

/// An unordered set of values, at most one per identity.
///
/// Inserting a second value with an already-present identity replaces the
/// stored representative; the latest insert wins. Membership never depends on
/// insertion order. All set algebra (`union`, `intersect`, `difference`) keys
/// on identity alone; only [`contains`](Self::contains) compares full values.
///
/// Sets are immutable once built. The algebra produces fresh sets, it never
/// edits one in place.
#[derive(Clone, PartialEq, Eq)]
pub struct IdentifiedValueSet<V: Identified> {
    values: HashMap<V::Id, V>,
}

impl<V: Identified> IdentifiedValueSet<V> {
    #[inline]
    pub fn new() -> Self {
        Self {
            values: HashMap::new(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Full-value membership. The stored representative must equal `value`
    /// field for field, not merely share its identity.
    #[inline]
    pub fn contains(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        self.values.get(&value.identity()) == Some(value)
    }

    /// Identity-only membership.
    #[inline]
    pub fn contains_identity(&self, id: &V::Id) -> bool {
        self.values.contains_key(id)
    }

    /// Identity-only lookup: the stored representative for `id`, whatever its
    /// other fields hold.
    #[inline]
    pub fn get(&self, id: &V::Id) -> Option<&V> {
        self.values.get(id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &V> {
        self.values.values()
    }

    pub fn identities(&self) -> impl Iterator<Item = &V::Id> {
        self.values.keys()
    }

    /// Identities present in either operand. On a shared identity the right
    /// operand's value wins.
    pub fn union(mut self, right: Self) -> Self {
        self.values.extend(right.values);
        self
    }

    /// Identities present in both operands, value taken from the right.
    pub fn intersect(self, right: Self) -> Self {
        Self {
            values: right
                .values
                .into_iter()
                .filter(|(id, _)| self.values.contains_key(id))
                .collect(),
        }
    }

    /// Identities present in the left operand but absent from the right.
    pub fn difference(self, right: &Self) -> Self {
        Self {
            values: self
                .values
                .into_iter()
                .filter(|(id, _)| !right.values.contains_key(id))
                .collect(),
        }
    }
}

impl<V: Identified> Default for IdentifiedValueSet<V> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Identified> FromIterator<V> for IdentifiedValueSet<V> {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(|v| (v.identity(), v)).collect(),
        }
    }
}

impl<V: Identified> IntoIterator for IdentifiedValueSet<V> {
    type Item = V;
    type IntoIter = hash_map::IntoValues<V::Id, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_values()
    }
}

impl<V: Identified> BitOr for IdentifiedValueSet<V> {
    type Output = Self;

    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl<V: Identified> BitAnd for IdentifiedValueSet<V> {
    type Output = Self;

    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        self.intersect(rhs)
    }
}

impl<V: Identified> Sub for IdentifiedValueSet<V> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.difference(&rhs)
    }
}

impl<V> fmt::Debug for IdentifiedValueSet<V>
where
    V: Identified + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.values.values()).finish()
    }
}
