//! Primpath core library.
//!
//! Builds a weighted undirected graph from validated edge triples, grows a
//! minimum spanning tree with Prim's algorithm, and answers path queries
//! over that tree by depth-first search.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod builder;
mod error;
mod graph;
mod input;
mod memory;
mod mst;
mod paths;
mod pipeline;

#[cfg(test)]
mod test_utils;

pub use crate::{
    builder::PrimPathBuilder,
    error::{
        EdgeViolation, InputError, InputErrorCode, PrimPathError, PrimPathErrorCode, Result,
    },
    graph::{AdjacencyList, Cost, Graph, HalfEdge, RawEdge, VertexId},
    input::ProblemInput,
    mst::{
        Candidate, CandidateSet, DEFAULT_ROOT, INFINITE_COST, SpanningTree, build_mst,
        build_mst_from,
    },
    paths::{TreePath, build_tree_paths, find_path},
    pipeline::{PathOutcome, PipelineOutput, PrimPath},
};
