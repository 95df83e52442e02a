//! Dynamic connectivity over a forest using Euler tour trees.
//!
//! [`Forest`] answers "are `u` and `v` in the same tree?" while edges are
//! added ([`Forest::link`]) and removed ([`Forest::cut`]), each in expected
//! O(log n). Every tree is kept as its Euler tour inside an implicit treap
//! (see the `implicit-treap` crate); occurrences live in an arena and refer
//! to each other by `u32` index.
//!
//! ```
//! use euler_forest::Forest;
//!
//! let mut forest = Forest::new();
//! assert!(forest.link(1, 2));
//! assert!(forest.link(3, 4));
//! assert!(!forest.is_connected(1, 3));
//!
//! assert!(forest.link(2, 3));
//! assert_eq!(forest.component_strings(), vec!["1-2-3-4-3-2-1"]);
//! assert!(!forest.link(1, 4)); // would close a cycle
//!
//! assert!(forest.cut(2, 3));
//! assert_eq!(forest.render(), "1-2-1\n3-4-3");
//! ```
//!
//! Operations never fail loudly: `link` on connected vertices and `cut` of
//! a missing edge return `false` and leave the forest untouched.
//! [`Forest::validate`] audits the internal structure and reports the
//! first broken invariant as a [`ForestError`].

pub mod edge;
pub mod error;
pub mod forest;
pub mod occurrence;
pub mod options;
mod render;
mod validate;

pub use error::ForestError;
pub use forest::{Forest, Vertex};
pub use options::ForestOptions;
