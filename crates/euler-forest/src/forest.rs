//! The forest coordinator.
//!
//! Each tree of the forest is stored as its Euler tour: the sequence of
//! vertex visits made by a walk that crosses every tree edge twice. A tree
//! of `n` vertices has a tour of `2n - 1` occurrences. Tours are implicit
//! treaps over the occurrence arena, so re-rooting, splicing and cutting
//! are a handful of O(log n) splits and merges.
//!
//! Two maps tie vertices and edges to positions:
//!
//! - `representatives`: vertex → the occurrence used as its handle;
//! - `edges`: `{u, v}` → the two occurrences bounding the detour that
//!   [`Forest::link`] spliced in for that edge.
//!
//! Whenever a split consumes or discards an occurrence, both maps are
//! patched before the operation returns.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::Hash;

use implicit_treap::{first, is_singleton, last, merge, root, size, split, split_at, Side};
use rand::rngs::OsRng;
use rand::{RngCore, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{debug, trace};

use crate::edge::{Edge, EdgeKey};
use crate::occurrence::Arena;
use crate::options::ForestOptions;

/// Anything usable as a vertex identifier.
pub trait Vertex: Copy + Eq + Hash + Ord + Display {}

impl<T: Copy + Eq + Hash + Ord + Display> Vertex for T {}

/// Dynamic connectivity over a forest.
///
/// Not synchronised: wrap the whole forest in one lock if it is shared.
#[derive(Clone, Debug)]
pub struct Forest<V, R = Xoshiro256StarStar> {
    pub(crate) arena: Arena<V>,
    pub(crate) representatives: HashMap<V, u32>,
    pub(crate) edges: HashMap<EdgeKey<V>, Edge>,
    rng: R,
}

impl<V: Vertex> Forest<V> {
    /// Empty forest with an OS-seeded priority generator.
    pub fn new() -> Self {
        Self::with_options(ForestOptions::default())
    }

    /// Empty forest whose internal tree shapes are reproducible.
    pub fn with_seed(seed: [u8; 32]) -> Self {
        Self::with_options(ForestOptions::default().seed(seed))
    }

    pub fn with_options(options: ForestOptions) -> Self {
        let seed = options.seed.unwrap_or_else(|| {
            let mut bytes = [0u8; 32];
            OsRng.fill_bytes(&mut bytes);
            bytes
        });
        Self::with_rng_and_capacity(Xoshiro256StarStar::from_seed(seed), options.capacity)
    }
}

impl<V: Vertex> Default for Forest<V> {
    fn default() -> Self {
        Self::new()
    }
}

// ── queries ───────────────────────────────────────────────────────────────

impl<V: Vertex, R> Forest<V, R> {
    /// Whether `u` and `v` are in the same tree.
    ///
    /// A vertex never referenced before is its own singleton tree, so
    /// `is_connected(x, x)` is always true.
    pub fn is_connected(&self, u: V, v: V) -> bool {
        match (self.representatives.get(&u), self.representatives.get(&v)) {
            (Some(&a), Some(&b)) => self.top(a) == self.top(b),
            _ => u == v,
        }
    }

    /// Whether `v` has been referenced by any mutating call.
    pub fn contains(&self, v: V) -> bool {
        self.representatives.contains_key(&v)
    }

    pub fn vertex_count(&self) -> usize {
        self.representatives.len()
    }

    pub fn is_empty(&self) -> bool {
        self.representatives.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn has_edge(&self, u: V, v: V) -> bool {
        self.edges.contains_key(&EdgeKey::new(u, v))
    }

    /// Number of vertices in the tree containing `v`.
    pub fn component_size(&self, v: V) -> usize {
        match self.representatives.get(&v) {
            Some(&occ) => (size(self.arena.nodes(), Some(self.top(occ))) + 1) / 2,
            None => 1,
        }
    }

    /// Euler tour of the tree containing `v`.
    pub fn tour(&self, v: V) -> Vec<V> {
        match self.representatives.get(&v) {
            Some(&occ) => implicit_treap::collect(self.arena.nodes(), Some(self.top(occ)))
                .into_iter()
                .map(|idx| self.arena.get(idx).vertex)
                .collect(),
            None => vec![v],
        }
    }

    #[inline]
    pub(crate) fn top(&self, occ: u32) -> u32 {
        root(self.arena.nodes(), occ)
    }
}

// ── mutation ──────────────────────────────────────────────────────────────

impl<V: Vertex, R: RngCore> Forest<V, R> {
    /// Empty forest drawing treap priorities from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self::with_rng_and_capacity(rng, ForestOptions::default().capacity)
    }

    pub fn with_rng_and_capacity(rng: R, capacity: usize) -> Self {
        Self {
            arena: Arena::with_capacity(capacity),
            representatives: HashMap::with_capacity(capacity / 2),
            edges: HashMap::with_capacity(capacity / 2),
            rng,
        }
    }

    /// Registers `v` as a singleton tree. Returns `false` if it was known.
    pub fn add_vertex(&mut self, v: V) -> bool {
        if self.contains(v) {
            return false;
        }
        self.occurrence(v);
        true
    }

    /// Joins the trees of `u` and `v` with the edge `{u, v}`.
    ///
    /// Returns `false` without touching anything if they are already
    /// connected, since the edge would close a cycle.
    ///
    /// ```text
    ///   {3}  {1-2-1}        link(3, 2)
    ///   split at 3, dup     → [3] [3]
    ///   rotate to 2, dup    → [1-2] [2-1]  → drop the leading 1 → [2] [2-1]
    ///   splice              → 3 · 2-1 · 2 · 3  =  3-2-1-2-3
    /// ```
    pub fn link(&mut self, u: V, v: V) -> bool {
        let u_occ = self.occurrence(u);
        let v_occ = self.occurrence(v);
        if self.top(u_occ) == self.top(v_occ) {
            trace!(%u, %v, "link refused: already connected");
            return false;
        }

        // A = [.. u], D = [u' ..]
        let (a, d) = self.split_with_duplicate(u_occ, Side::Left);
        // C = [x0 .. v'], B = [v ..]; a lone v gives C = [v], B = [v']
        let side = if is_singleton(self.arena.nodes(), v_occ) {
            Side::Left
        } else {
            Side::Right
        };
        let (c, b) = self.split_with_duplicate(v_occ, side);

        // x0 repeats the last visit of B once the tour is rotated
        let (head, c) = split(self.arena.nodes_mut(), c, 1);
        if let Some(head) = head {
            let replacement = last(self.arena.nodes(), b);
            self.retire(head, replacement);
        }

        let nodes = self.arena.nodes();
        let (Some(enter), Some(back)) = (first(nodes, b), first(nodes, d)) else {
            unreachable!("link of {u}-{v} produced an empty half");
        };
        let key = EdgeKey::new(u, v);
        self.arena.get_mut(enter).edge = Some(key);
        self.arena.get_mut(back).edge = Some(key);
        self.edges.insert(key, Edge { first: enter, second: back });

        let nodes = self.arena.nodes_mut();
        let ab = merge(nodes, a, b);
        let cd = merge(nodes, c, d);
        merge(nodes, ab, cd);

        debug!(%u, %v, occurrences = self.arena.live(), "linked");
        true
    }

    /// Removes the edge `{u, v}`, splitting its tree in two.
    ///
    /// Returns `false` without touching anything if there is no such edge.
    ///
    /// ```text
    ///   3-2-1-2-3           cut(2, 1), markers on 1 and the second 2
    ///   split at markers    → 3-2 | 1 | 2-3
    ///   peel the 2 before 1 → 3 | 1 | 2-3
    ///   join the outside    → 3-2-3 , 1
    /// ```
    pub fn cut(&mut self, u: V, v: V) -> bool {
        let key = EdgeKey::new(u, v);
        let Some(edge) = self.edges.remove(&key) else {
            trace!(%u, %v, "cut refused: no such edge");
            return false;
        };

        let nodes = self.arena.nodes_mut();
        let (left, check) = split_at(nodes, edge.first, Side::Right);
        let (middle, right) = split_at(nodes, edge.second, Side::Right);
        let (left, right) = if check == middle || check == right {
            // [left][first ..][second ..]
            (left, right)
        } else {
            // [.. second][second .. first)[first ..]
            assert!(
                left == middle || left == right,
                "markers of {u}-{v} are not in one tour"
            );
            (middle, check)
        };

        // the visit we left from repeats the visit we return to
        let (Some(tail), Some(resume)) = (last(nodes, left), first(nodes, right)) else {
            unreachable!("cut of {u}-{v} produced an empty outer piece");
        };
        let (left, _) = split_at(nodes, tail, Side::Right);
        merge(nodes, left, right);

        self.arena.get_mut(edge.first).edge = None;
        self.arena.get_mut(edge.second).edge = None;
        self.move_marker(tail, resume);
        self.retire(tail, Some(resume));

        debug!(%u, %v, occurrences = self.arena.live(), "cut");
        true
    }

    // ── internals ─────────────────────────────────────────────────────────

    /// Representative of `v`, creating a singleton tour on first sight.
    fn occurrence(&mut self, v: V) -> u32 {
        if let Some(&occ) = self.representatives.get(&v) {
            return occ;
        }
        let occ = self.mint(v);
        self.representatives.insert(v, occ);
        occ
    }

    fn mint(&mut self, vertex: V) -> u32 {
        let priority = self.rng.next_u64();
        self.arena.alloc(vertex, priority)
    }

    /// Splits the tour around `entry` and puts a fresh copy of it on the
    /// opposite half, so both halves still touch the same vertex.
    ///
    /// ```text
    ///   a-x-b  Left   →  a-x , x'-b
    ///   a-x-b  Right  →  a-x' , x-b
    /// ```
    ///
    /// The copy becomes the representative. With [`Side::Right`] the copy
    /// takes over the position `entry` used to have relative to its
    /// predecessor, so it also takes over `entry`'s edge marker.
    fn split_with_duplicate(&mut self, entry: u32, side: Side) -> (Option<u32>, Option<u32>) {
        let (left, right) = split_at(self.arena.nodes_mut(), entry, side);
        let vertex = self.arena.get(entry).vertex;
        let dup = self.mint(vertex);
        self.representatives.insert(vertex, dup);
        match side {
            Side::Left => (left, merge(self.arena.nodes_mut(), Some(dup), right)),
            Side::Right => {
                self.move_marker(entry, dup);
                (merge(self.arena.nodes_mut(), left, Some(dup)), right)
            }
        }
    }

    /// Hands `from`'s edge marker, if any, over to `to`.
    fn move_marker(&mut self, from: u32, to: u32) {
        let Some(key) = self.arena.get_mut(from).edge.take() else {
            return;
        };
        if let Some(edge) = self.edges.get_mut(&key) {
            edge.retarget(from, to);
        }
        self.arena.get_mut(to).edge = Some(key);
    }

    /// Frees a detached occurrence. If it was its vertex's representative,
    /// `replacement` (another occurrence of the same vertex) takes over.
    fn retire(&mut self, occ: u32, replacement: Option<u32>) {
        let vertex = self.arena.get(occ).vertex;
        if self.representatives.get(&vertex) == Some(&occ) {
            if let Some(replacement) = replacement {
                debug_assert!(self.arena.get(replacement).vertex == vertex);
                self.representatives.insert(vertex, replacement);
            }
        }
        trace!(occurrence = occ, %vertex, "occurrence released");
        self.arena.release(occ);
    }
}

#[cfg(test)]
impl<V: Vertex> Forest<V> {
    /// Builds tours by plain concatenation, bypassing `link`. No edges are
    /// registered; the last occurrence of each vertex becomes its handle.
    pub(crate) fn from_tours(tours: &[&[V]]) -> Self {
        let mut forest = Self::with_seed([7; 32]);
        for tour in tours {
            let mut seq = None;
            for &vertex in tour.iter() {
                let occ = forest.mint(vertex);
                forest.representatives.insert(vertex, occ);
                seq = merge(forest.arena.nodes_mut(), seq, Some(occ));
            }
        }
        forest
    }
}
