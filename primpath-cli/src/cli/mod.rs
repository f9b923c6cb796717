//! Command-line interface orchestration for primpath.
//!
//! `path` answers the query at the end of the input over its minimum
//! spanning tree; `mst` prints the spanning tree itself.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, MstCommand, PathCommand, PathSummary,
    render_summary, run_cli,
};
