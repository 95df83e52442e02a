use thiserror::Error;

/// A broken structural invariant, reported by
/// [`Forest::validate`](crate::Forest::validate).
///
/// Vertices are rendered with their `Display` form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForestError {
    #[error("vertex {vertex} points at released occurrence #{occurrence}")]
    ReleasedRepresentative { vertex: String, occurrence: u32 },
    #[error("vertex {vertex} points at occurrence #{occurrence} of vertex {found}")]
    RepresentativeMismatch {
        vertex: String,
        occurrence: u32,
        found: String,
    },
    #[error("occurrence #{child} does not point back at its parent #{parent}")]
    ParentLink { parent: u32, child: u32 },
    #[error("occurrence #{occurrence} caches size {cached}, subtree has {actual}")]
    StaleSize {
        occurrence: u32,
        cached: usize,
        actual: usize,
    },
    #[error("occurrence #{child} outranks its parent #{parent}")]
    HeapOrder { parent: u32, child: u32 },
    #[error("component of {vertices} vertices has a tour of {length} occurrences")]
    TourLength { vertices: usize, length: usize },
    #[error("tour steps from {from} to {to} without an edge")]
    MissingTourEdge { from: String, to: String },
    #[error("vertex {vertex} occurs in the tour of another component")]
    SplitVertex { vertex: String },
    #[error("edge {u}-{v}: {reason}")]
    BrokenEdge {
        u: String,
        v: String,
        reason: &'static str,
    },
    #[error("{live} live occurrences but {reachable} reachable from representatives")]
    Leak { live: usize, reachable: usize },
}
