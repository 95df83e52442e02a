//! Node trait definitions.
//!
//! Every "pointer" is an `Option<u32>` index into a caller-owned arena.
//! All sequence functions take the arena as `&[N]` / `&mut [N]` and work
//! with indices, so a node is only ever reachable through its single
//! structural parent.

/// Structural links (`p`, `l`, `r`).
pub trait Node {
    fn p(&self) -> Option<u32>;
    fn l(&self) -> Option<u32>;
    fn r(&self) -> Option<u32>;
    fn set_p(&mut self, v: Option<u32>);
    fn set_l(&mut self, v: Option<u32>);
    fn set_r(&mut self, v: Option<u32>);
}

/// Treap bookkeeping on top of [`Node`].
///
/// `size` counts the nodes of the subtree rooted here. [`split`] and
/// [`merge`] keep it current along the path they touch; nothing else
/// writes it.
///
/// [`split`]: crate::split
/// [`merge`]: crate::merge
pub trait TreapNode: Node {
    fn priority(&self) -> u64;
    fn size(&self) -> usize;
    fn set_size(&mut self, size: usize);
}

/// Which half of a split keeps the node the split was anchored on.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    /// The node ends the prefix.
    Left,
    /// The node starts the suffix.
    Right,
}
