//! Minimal arena node for unit tests.

use crate::types::{Node, TreapNode};
use crate::util::{set_l, set_p, set_r, update_size};

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cell {
    pub p: Option<u32>,
    pub l: Option<u32>,
    pub r: Option<u32>,
    pub priority: u64,
    pub size: usize,
    pub label: u32,
}

impl Cell {
    pub fn new(label: u32, priority: u64) -> Self {
        Self {
            p: None,
            l: None,
            r: None,
            priority,
            size: 1,
            label,
        }
    }
}

impl Node for Cell {
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

impl TreapNode for Cell {
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

/// Hangs `l` / `r` under `parent` and refreshes its size. Build bottom-up.
pub(crate) fn chain(arena: &mut [Cell], parent: u32, l: Option<u32>, r: Option<u32>) {
    set_l(arena, parent, l);
    set_r(arena, parent, r);
    if let Some(l) = l {
        set_p(arena, l, Some(parent));
    }
    if let Some(r) = r {
        set_p(arena, r, Some(parent));
    }
    update_size(arena, parent);
}
