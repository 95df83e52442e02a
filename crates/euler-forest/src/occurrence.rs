//! Tour occurrences and the arena that owns them.

use implicit_treap::{Node, TreapNode};

use crate::edge::EdgeKey;

/// One position in a component's Euler tour.
///
/// A vertex may have several live occurrences at once; they are told apart
/// by position only. `edge` is a non-owning back-reference to the edge this
/// occurrence marks, if any.
#[derive(Clone, Debug)]
pub struct Occurrence<V> {
    pub vertex: V,
    pub edge: Option<EdgeKey<V>>,
    priority: u64,
    size: usize,
    p: Option<u32>,
    l: Option<u32>,
    r: Option<u32>,
}

impl<V> Occurrence<V> {
    pub fn new(vertex: V, priority: u64) -> Self {
        Self {
            vertex,
            edge: None,
            priority,
            size: 1,
            p: None,
            l: None,
            r: None,
        }
    }
}

impl<V> Node for Occurrence<V> {
    fn p(&self) -> Option<u32> {
        self.p
    }

    fn l(&self) -> Option<u32> {
        self.l
    }

    fn r(&self) -> Option<u32> {
        self.r
    }

    fn set_p(&mut self, v: Option<u32>) {
        self.p = v;
    }

    fn set_l(&mut self, v: Option<u32>) {
        self.l = v;
    }

    fn set_r(&mut self, v: Option<u32>) {
        self.r = v;
    }
}

impl<V> TreapNode for Occurrence<V> {
    fn priority(&self) -> u64 {
        self.priority
    }

    fn size(&self) -> usize {
        self.size
    }

    fn set_size(&mut self, size: usize) {
        self.size = size;
    }
}

/// Slot storage for occurrences with a free list.
///
/// Released slots keep their stale contents until reused; nothing may
/// reference a released index.
#[derive(Clone, Debug)]
pub struct Arena<V> {
    nodes: Vec<Occurrence<V>>,
    free: Vec<u32>,
}

impl<V> Arena<V> {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            free: Vec::new(),
        }
    }

    #[inline]
    pub fn nodes(&self) -> &[Occurrence<V>] {
        &self.nodes
    }

    #[inline]
    pub fn nodes_mut(&mut self) -> &mut [Occurrence<V>] {
        &mut self.nodes
    }

    #[inline]
    pub fn get(&self, idx: u32) -> &Occurrence<V> {
        &self.nodes[idx as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, idx: u32) -> &mut Occurrence<V> {
        &mut self.nodes[idx as usize]
    }

    pub fn alloc(&mut self, vertex: V, priority: u64) -> u32 {
        let occ = Occurrence::new(vertex, priority);
        match self.free.pop() {
            Some(idx) => {
                self.nodes[idx as usize] = occ;
                idx
            }
            None => {
                self.nodes.push(occ);
                (self.nodes.len() - 1) as u32
            }
        }
    }

    /// Returns a detached occurrence to the free list.
    pub fn release(&mut self, idx: u32) {
        debug_assert!(self.nodes[idx as usize].edge.is_none(), "released an edge marker");
        self.free.push(idx);
    }

    /// Slots ever allocated, live or free.
    #[inline]
    pub fn capacity_used(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live occurrences.
    #[inline]
    pub fn live(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    pub fn free_slots(&self) -> &[u32] {
        &self.free
    }
}
