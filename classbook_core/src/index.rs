//! One-based positions into displayed lists

use std::fmt;
use std::num::NonZeroUsize;

/// Position of an entry in a displayed list.
///
/// Users see one-based positions while lists are addressed zero-based; an
/// `Index` can always produce both and can never be zero one-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Index(NonZeroUsize);

impl Index {
    /// Returns `None` for zero
    pub fn from_one_based(one_based: usize) -> Option<Self> {
        NonZeroUsize::new(one_based).map(Self)
    }

    /// Returns `None` only when `zero_based + 1` overflows
    pub fn from_zero_based(zero_based: usize) -> Option<Self> {
        zero_based.checked_add(1).and_then(Self::from_one_based)
    }

    pub fn one_based(&self) -> usize {
        self.0.get()
    }

    pub fn zero_based(&self) -> usize {
        self.0.get() - 1
    }

    /// Fetch the entry this index points to, if the list is long enough
    pub fn get<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.zero_based())
    }
}

impl fmt::Display for Index {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.one_based())
    }
}
