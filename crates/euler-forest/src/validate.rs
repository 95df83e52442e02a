//! Structural audit of a forest.

use std::collections::HashSet;

use implicit_treap::{collect, Node, TreapNode};

use crate::edge::EdgeKey;
use crate::error::ForestError;
use crate::forest::{Forest, Vertex};
use crate::occurrence::Occurrence;

impl<V: Vertex, R> Forest<V, R> {
    /// Checks every invariant the forest relies on.
    ///
    /// Walks the whole arena, so this is O(n log n) and meant for tests and
    /// debugging. Only forests built through `link` / `cut` / `add_vertex`
    /// are expected to pass.
    pub fn validate(&self) -> Result<(), ForestError> {
        let nodes = self.arena.nodes();
        let free: HashSet<u32> = self.arena.free_slots().iter().copied().collect();
        let is_live = |idx: u32| (idx as usize) < nodes.len() && !free.contains(&idx);

        let mut tops = HashSet::new();
        for (&vertex, &occ) in &self.representatives {
            if !is_live(occ) {
                return Err(ForestError::ReleasedRepresentative {
                    vertex: vertex.to_string(),
                    occurrence: occ,
                });
            }
            let found = nodes[occ as usize].vertex;
            if found != vertex {
                return Err(ForestError::RepresentativeMismatch {
                    vertex: vertex.to_string(),
                    occurrence: occ,
                    found: found.to_string(),
                });
            }
            tops.insert(self.top(occ));
        }

        let mut reachable = 0;
        for &top in &tops {
            check_subtree(nodes, top)?;
            let tour = collect(nodes, Some(top));
            reachable += tour.len();

            let mut vertices = HashSet::new();
            for &occ in &tour {
                let vertex = nodes[occ as usize].vertex;
                vertices.insert(vertex);
                match self.representatives.get(&vertex) {
                    Some(&rep) if self.top(rep) == top => {}
                    _ => {
                        return Err(ForestError::SplitVertex {
                            vertex: vertex.to_string(),
                        })
                    }
                }
            }
            if tour.len() != 2 * vertices.len() - 1 {
                return Err(ForestError::TourLength {
                    vertices: vertices.len(),
                    length: tour.len(),
                });
            }
            for step in tour.windows(2) {
                let from = nodes[step[0] as usize].vertex;
                let to = nodes[step[1] as usize].vertex;
                if !self.edges.contains_key(&EdgeKey::new(from, to)) {
                    return Err(ForestError::MissingTourEdge {
                        from: from.to_string(),
                        to: to.to_string(),
                    });
                }
            }
        }
        if reachable != self.arena.live() {
            return Err(ForestError::Leak {
                live: self.arena.live(),
                reachable,
            });
        }

        for (key, edge) in &self.edges {
            let broken = |reason| {
                let (u, v) = key.endpoints();
                ForestError::BrokenEdge {
                    u: u.to_string(),
                    v: v.to_string(),
                    reason,
                }
            };
            for marker in [edge.first, edge.second] {
                if !is_live(marker) {
                    return Err(broken("marker released"));
                }
                if nodes[marker as usize].edge != Some(*key) {
                    return Err(broken("marker does not point back"));
                }
            }
            if self.top(edge.first) != self.top(edge.second) {
                return Err(broken("markers in different tours"));
            }
            let ends = EdgeKey::new(
                nodes[edge.first as usize].vertex,
                nodes[edge.second as usize].vertex,
            );
            if ends != *key {
                return Err(broken("markers record other vertices"));
            }
        }

        for (idx, occ) in nodes.iter().enumerate() {
            let idx = idx as u32;
            let Some(key) = occ.edge else { continue };
            if !is_live(idx) {
                continue;
            }
            match self.edges.get(&key) {
                Some(edge) if edge.first == idx || edge.second == idx => {}
                _ => {
                    let (u, v) = key.endpoints();
                    return Err(ForestError::BrokenEdge {
                        u: u.to_string(),
                        v: v.to_string(),
                        reason: "stray back-reference",
                    });
                }
            }
        }

        Ok(())
    }
}

/// Recounts the subtree under `idx`, checking parent links and heap order.
fn check_subtree<V>(nodes: &[Occurrence<V>], idx: u32) -> Result<usize, ForestError> {
    let node = &nodes[idx as usize];
    let mut total = 1;
    for child in [node.l(), node.r()].into_iter().flatten() {
        let c = &nodes[child as usize];
        if c.p() != Some(idx) {
            return Err(ForestError::ParentLink { parent: idx, child });
        }
        if c.priority() > node.priority() {
            return Err(ForestError::HeapOrder { parent: idx, child });
        }
        total += check_subtree(nodes, child)?;
    }
    if node.size() != total {
        return Err(ForestError::StaleSize {
            occurrence: idx,
            cached: node.size(),
            actual: total,
        });
    }
    Ok(total)
}
