//! Human-readable tour dumps.

use std::collections::HashMap;
use std::fmt;

use implicit_treap::stringify;

use crate::forest::{Forest, Vertex};

impl<V: Vertex, R> Forest<V, R> {
    /// One hyphen-joined Euler tour per tree, ordered by the smallest
    /// vertex of each tree.
    ///
    /// ```
    /// use euler_forest::Forest;
    ///
    /// let mut forest = Forest::new();
    /// forest.link(1, 2);
    /// forest.link(3, 4);
    /// assert_eq!(forest.component_strings(), vec!["1-2-1", "3-4-3"]);
    /// ```
    pub fn component_strings(&self) -> Vec<String> {
        let nodes = self.arena.nodes();
        let mut components: HashMap<u32, V> = HashMap::new();
        for (&vertex, &occ) in &self.representatives {
            components
                .entry(self.top(occ))
                .and_modify(|min| {
                    if vertex < *min {
                        *min = vertex;
                    }
                })
                .or_insert(vertex);
        }

        let mut ordered: Vec<(V, u32)> = components.into_iter().map(|(top, min)| (min, top)).collect();
        ordered.sort_unstable();
        ordered
            .into_iter()
            .map(|(_, top)| stringify(nodes, Some(top), "-", |occ| occ.vertex))
            .collect()
    }

    /// [`component_strings`](Self::component_strings) joined by newlines.
    pub fn render(&self) -> String {
        self.component_strings().join("\n")
    }
}

impl<V: Vertex, R> fmt::Display for Forest<V, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

#[cfg(test)]
mod tests {
    use crate::Forest;

    #[test]
    fn empty_forest_renders_nothing() {
        let forest: Forest<u32> = Forest::with_seed([0; 32]);
        assert!(forest.component_strings().is_empty());
        assert_eq!(forest.render(), "");
        assert_eq!(forest.to_string(), "");
    }

    #[test]
    fn order_follows_smallest_vertex() {
        let mut forest: Forest<i64> = Forest::with_seed([9; 32]);
        forest.link(10, 2);
        forest.link(-4, 7);
        forest.add_vertex(5);
        assert_eq!(forest.component_strings(), vec!["-4-7--4", "10-2-10", "5"]);
        assert_eq!(forest.to_string(), "-4-7--4\n10-2-10\n5");
    }

    #[test]
    fn non_numeric_vertices() {
        let mut forest: Forest<char> = Forest::with_seed([4; 32]);
        forest.link('b', 'a');
        forest.link('b', 'c');
        assert_eq!(forest.render(), "b-a-b-c-b");
    }
}
