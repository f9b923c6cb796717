//! Tree adjacency materialisation and path search.
//!
//! [`build_tree_paths`] turns a spanning tree's parent array into a
//! zero-cost [`crate::Graph`] that can be walked in both directions, and
//! [`find_path`] searches it depth-first for the path between two vertices.

mod search;
mod tree;

pub use self::search::{TreePath, find_path};
pub use self::tree::build_tree_paths;
