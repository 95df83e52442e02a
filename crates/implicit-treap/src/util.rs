//! Traversal helpers over the `p` / `l` / `r` links.
//!
//! None of these mutate the arena. Positions are zero-based in-order
//! indices inside the sequence that contains the node.

use std::fmt::Display;

use crate::types::{Node, TreapNode};

// ── helpers ───────────────────────────────────────────────────────────────

#[inline]
pub(crate) fn get_p<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].p()
}

#[inline]
pub(crate) fn get_l<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].l()
}

#[inline]
pub(crate) fn get_r<N: Node>(arena: &[N], idx: u32) -> Option<u32> {
    arena[idx as usize].r()
}

#[inline]
pub(crate) fn set_p<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_p(v);
}

#[inline]
pub(crate) fn set_l<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_l(v);
}

#[inline]
pub(crate) fn set_r<N: Node>(arena: &mut [N], idx: u32, v: Option<u32>) {
    arena[idx as usize].set_r(v);
}

// ── size ──────────────────────────────────────────────────────────────────

/// Cached number of nodes in the sequence rooted at `root`.
#[inline]
pub fn size<N: TreapNode>(arena: &[N], root: Option<u32>) -> usize {
    root.map_or(0, |r| arena[r as usize].size())
}

/// Recomputes the cached size of `idx` from its children.
#[inline]
pub(crate) fn update_size<N: TreapNode>(arena: &mut [N], idx: u32) {
    let size = 1 + size(arena, get_l(arena, idx)) + size(arena, get_r(arena, idx));
    arena[idx as usize].set_size(size);
}

// ── traversal ─────────────────────────────────────────────────────────────

/// Leftmost (first) node under `root`.
pub fn first<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_l(arena, idx) {
            Some(l) => curr = Some(l),
            None => return Some(idx),
        }
    }
    curr
}

/// Rightmost (last) node under `root`.
pub fn last<N: Node>(arena: &[N], root: Option<u32>) -> Option<u32> {
    let mut curr = root;
    while let Some(idx) = curr {
        match get_r(arena, idx) {
            Some(r) => curr = Some(r),
            None => return Some(idx),
        }
    }
    curr
}

/// In-order successor.
pub fn next<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(r) = get_r(arena, curr) {
        return first(arena, Some(r));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_r(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// In-order predecessor.
pub fn prev<N: Node>(arena: &[N], mut curr: u32) -> Option<u32> {
    if let Some(l) = get_l(arena, curr) {
        return last(arena, Some(l));
    }
    let mut p = get_p(arena, curr);
    while let Some(pi) = p {
        if get_l(arena, pi) == Some(curr) {
            curr = pi;
            p = get_p(arena, pi);
        } else {
            return Some(pi);
        }
    }
    None
}

/// Top of the sequence containing `idx`.
pub fn root<N: Node>(arena: &[N], mut idx: u32) -> u32 {
    while let Some(p) = get_p(arena, idx) {
        idx = p;
    }
    idx
}

/// Root of the sequence containing `idx` together with the in-order
/// position of `idx` inside it.
pub fn locate<N: TreapNode>(arena: &[N], idx: u32) -> (u32, usize) {
    let mut k = size(arena, get_l(arena, idx));
    let mut curr = idx;
    while let Some(p) = get_p(arena, curr) {
        if get_r(arena, p) == Some(curr) {
            k += size(arena, get_l(arena, p)) + 1;
        }
        curr = p;
    }
    (curr, k)
}

/// In-order position of `idx` inside its sequence.
#[inline]
pub fn position<N: TreapNode>(arena: &[N], idx: u32) -> usize {
    locate(arena, idx).1
}

/// Whether `idx` is the only node of its sequence.
#[inline]
pub fn is_singleton<N: Node>(arena: &[N], idx: u32) -> bool {
    let n = &arena[idx as usize];
    n.p().is_none() && n.l().is_none() && n.r().is_none()
}

/// Node indices of the sequence rooted at `root`, in order.
pub fn collect<N: Node>(arena: &[N], root: Option<u32>) -> Vec<u32> {
    let mut out = Vec::new();
    let mut curr = first(arena, root);
    while let Some(idx) = curr {
        out.push(idx);
        curr = next(arena, idx);
    }
    out
}

/// Labels of the sequence rooted at `root`, in order, joined by `separator`.
///
/// An empty sequence yields an empty string.
pub fn stringify<N, F, S>(arena: &[N], root: Option<u32>, separator: &str, label: F) -> String
where
    N: Node,
    F: Fn(&N) -> S,
    S: Display,
{
    let mut out = String::new();
    let mut curr = first(arena, root);
    while let Some(idx) = curr {
        out.push_str(&label(&arena[idx as usize]).to_string());
        curr = next(arena, idx);
        if curr.is_some() {
            out.push_str(separator);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{chain, Cell};

    #[test]
    fn locate_reports_root_and_position() {
        //      1
        //     / \
        //    0   3
        //       /
        //      2
        let mut arena = vec![Cell::new(0, 1), Cell::new(1, 9), Cell::new(2, 1), Cell::new(3, 5)];
        chain(&mut arena, 3, Some(2), None);
        chain(&mut arena, 1, Some(0), Some(3));
        for (idx, expected) in [(0u32, 0usize), (1, 1), (2, 2), (3, 3)] {
            assert_eq!(locate(&arena, idx), (1, expected));
        }
        assert_eq!(root(&arena, 2), 1);
    }

    #[test]
    fn neighbours_walk_in_order() {
        let mut arena = vec![Cell::new(0, 1), Cell::new(1, 9), Cell::new(2, 1), Cell::new(3, 5)];
        chain(&mut arena, 3, Some(2), None);
        chain(&mut arena, 1, Some(0), Some(3));
        assert_eq!(collect(&arena, Some(1)), vec![0, 1, 2, 3]);
        assert_eq!(next(&arena, 3), None);
        assert_eq!(prev(&arena, 2), Some(1));
        assert_eq!(prev(&arena, 0), None);
        assert_eq!(first(&arena, Some(3)), Some(2));
        assert_eq!(last(&arena, Some(1)), Some(3));
        assert_eq!(first::<Cell>(&arena, None), None);
    }

    #[test]
    fn stringify_empty_and_single() {
        let arena = vec![Cell::new(7, 1)];
        assert_eq!(stringify(&arena, None, "-", |c| c.label), "");
        assert_eq!(stringify(&arena, Some(0), "-", |c| c.label), "7");
        assert!(is_singleton(&arena, 0));
    }
}
