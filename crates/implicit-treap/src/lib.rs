//! Arena-based treap with implicit (positional) keys.
//!
//! A sequence is the in-order traversal of one tree of nodes. Nodes live in
//! a caller-owned slice and link to each other through `Option<u32>`
//! indices, so the caller decides how nodes are allocated, recycled and
//! what payload they carry. This crate only moves links around.
//!
//! # Module layout
//!
//! | Module | Contents |
//! |--------|----------|
//! [`types`] | [`Node`] / [`TreapNode`] traits, [`Side`] |
//! [`treap`] | [`split`], [`merge`], [`split_at`] |
//! [`util`] | `first`, `last`, `next`, `prev`, `root`, `locate`, `stringify` … |
//!
//! Nothing here knows what a node stands for; position is the only order.

pub mod treap;
pub mod types;
pub mod util;

#[cfg(test)]
pub(crate) mod testing;

pub use treap::{merge, split, split_at};
pub use types::{Node, Side, TreapNode};
pub use util::{collect, first, is_singleton, last, locate, next, position, prev, root, size, stringify};
