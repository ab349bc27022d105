//! Contains logic for mapping between the two intermediate representations.
//!
//! The flat [`Kit`](crate::kit::Kit) is the system of record; the nested
//! [`Tree`](crate::tree::Tree) is derived from it by containment and
//! flattens back without loss. Callers normally go through
//! `Kit::to_tree` / `Tree::to_kit` rather than these functions directly.

pub mod flat_to_nested;
pub mod nested_to_flat;

pub use flat_to_nested::kit_to_tree;
pub use nested_to_flat::tree_to_kit;
