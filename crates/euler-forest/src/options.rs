//! Construction options.

/// Settings for [`Forest::with_options`](crate::Forest::with_options).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForestOptions {
    /// Seed for the priority generator. `None` draws one from the OS.
    ///
    /// Priorities only shape the internal trees; tours and query results
    /// are the same for every seed.
    pub seed: Option<[u8; 32]>,
    /// Occurrence slots to reserve up front. A forest over `n` vertices
    /// holds at most `2n - 1` occurrences.
    pub capacity: usize,
}

impl Default for ForestOptions {
    fn default() -> Self {
        Self {
            seed: None,
            capacity: 16,
        }
    }
}

impl ForestOptions {
    pub fn seed(mut self, seed: [u8; 32]) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reserves room for `vertices` vertices.
    pub fn vertices(mut self, vertices: usize) -> Self {
        self.capacity = vertices.saturating_mul(2);
        self
    }
}
