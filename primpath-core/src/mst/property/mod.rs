//! Property-based tests for Prim's MST builder.
//!
//! Checks the builder's total weight against a sequential Kruskal oracle,
//! validates the parent array's tree structure, and confirms that
//! disconnected inputs are rejected, across graph topologies with varied
//! weight distributions.

mod oracle;
mod strategies;
mod structural;
mod types;
