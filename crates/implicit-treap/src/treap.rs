//! Positional split and merge.
//!
//! The key of a node is implicit: its in-order index, recovered from the
//! cached subtree sizes. Balance comes from the heap order on
//! [`TreapNode::priority`] (a parent never has a lower priority than its
//! children), so expected depth is O(log n) when priorities are drawn
//! independently at random.

use crate::types::{Side, TreapNode};
use crate::util::{get_l, get_r, locate, set_l, set_p, set_r, size, update_size};

/// Splits the sequence rooted at `root` into its first `k` nodes and the rest.
///
/// `k == 0` yields an empty prefix, `k >= size` an empty suffix. Both
/// returned roots are detached (no parent). The old root always ends up as
/// the root of one of the two halves.
///
/// ```text
///     3                      2          3
///    /      split(·, 1)            ,   /
///   2           →                     1
///    \
///     1
/// ```
pub fn split<N: TreapNode>(arena: &mut [N], root: Option<u32>, k: usize) -> (Option<u32>, Option<u32>) {
    let Some(t) = root else {
        return (None, None);
    };
    if k == 0 {
        return (None, Some(t));
    }
    let l = size(arena, get_l(arena, t));
    if l >= k {
        let (first, second) = split(arena, get_l(arena, t), k);
        set_l(arena, t, second);
        if let Some(second) = second {
            set_p(arena, second, Some(t));
        }
        if let Some(first) = first {
            set_p(arena, first, None);
        }
        update_size(arena, t);
        (first, Some(t))
    } else {
        let (first, second) = split(arena, get_r(arena, t), k - l - 1);
        set_r(arena, t, first);
        if let Some(first) = first {
            set_p(arena, first, Some(t));
        }
        if let Some(second) = second {
            set_p(arena, second, None);
        }
        update_size(arena, t);
        (Some(t), second)
    }
}

/// Concatenates sequence `a` followed by sequence `b`.
///
/// Both arguments must be sequence roots. The root with the larger
/// priority becomes the parent; on a tie `b` wins.
pub fn merge<N: TreapNode>(arena: &mut [N], a: Option<u32>, b: Option<u32>) -> Option<u32> {
    match (a, b) {
        (None, b) => b,
        (a, None) => a,
        (Some(a), Some(b)) => {
            if arena[a as usize].priority() > arena[b as usize].priority() {
                let r = merge(arena, get_r(arena, a), Some(b));
                set_r(arena, a, r);
                if let Some(r) = r {
                    set_p(arena, r, Some(a));
                }
                update_size(arena, a);
                Some(a)
            } else {
                let l = merge(arena, Some(a), get_l(arena, b));
                set_l(arena, b, l);
                if let Some(l) = l {
                    set_p(arena, l, Some(b));
                }
                update_size(arena, b);
                Some(b)
            }
        }
    }
}

/// Splits the sequence containing `node` right next to it.
///
/// With [`Side::Left`] the node closes the prefix, with [`Side::Right`] it
/// opens the suffix.
///
/// ```text
///   a-b-c   split_at(b, Left)   →  a-b , c
///   a-b-c   split_at(b, Right)  →  a , b-c
/// ```
pub fn split_at<N: TreapNode>(arena: &mut [N], node: u32, side: Side) -> (Option<u32>, Option<u32>) {
    let (root, mut k) = locate(arena, node);
    if side == Side::Left {
        k += 1;
    }
    split(arena, Some(root), k)
}
