//! Tree edges and their canonical keys.

/// Unordered vertex pair, stored smaller-first so `{u, v}` and `{v, u}`
/// map to the same key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey<V>(V, V);

impl<V: Ord> EdgeKey<V> {
    pub fn new(u: V, v: V) -> Self {
        if u <= v {
            Self(u, v)
        } else {
            Self(v, u)
        }
    }
}

impl<V: Copy> EdgeKey<V> {
    #[inline]
    pub fn endpoints(&self) -> (V, V) {
        (self.0, self.1)
    }
}

/// A live tree edge: the two occurrences marking where it was spliced into
/// the tour. Both are non-owning arena indices.
///
/// `first` opens the detour into the far side, `second` is the return visit
/// to the near side.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Edge {
    pub first: u32,
    pub second: u32,
}

impl Edge {
    /// Points whichever end currently references `from` at `to`.
    pub fn retarget(&mut self, from: u32, to: u32) {
        if self.first == from {
            self.first = to;
        } else {
            debug_assert_eq!(self.second, from, "occurrence #{from} is not a marker of this edge");
            self.second = to;
        }
    }
}
