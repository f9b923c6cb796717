//! Command implementations and argument parsing for the primpath CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use primpath_core::{
    DEFAULT_ROOT, Graph, PathOutcome, PrimPathBuilder, PrimPathError, ProblemInput,
    SpanningTree, VertexId, build_mst_from,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

/// Path argument that selects standard input.
const STDIN_PATH: &str = "-";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "primpath",
    about = "Find paths over the minimum spanning tree of a weighted graph."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print the spanning-tree path between the query vertices.
    Path(PathCommand),
    /// Print the minimum spanning tree as a parent table.
    Mst(MstCommand),
}

/// Options accepted by the `path` command.
#[derive(Debug, Args, Clone)]
pub struct PathCommand {
    /// Problem file, or `-` for standard input.
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Vertex the spanning tree is grown from.
    #[arg(long, default_value_t = DEFAULT_ROOT)]
    pub root: VertexId,

    /// Print the input graph's adjacency lists before the path.
    #[arg(long)]
    pub show_graph: bool,

    /// Print the spanning tree's adjacency lists before the path.
    #[arg(long)]
    pub show_tree: bool,
}

/// Options accepted by the `mst` command.
#[derive(Debug, Args, Clone)]
pub struct MstCommand {
    /// Problem file, or `-` for standard input. The query line is read but
    /// not used.
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Vertex the spanning tree is grown from.
    #[arg(long, default_value_t = DEFAULT_ROOT)]
    pub root: VertexId,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading the problem text failed.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// Parsing or the pipeline failed.
    #[error(transparent)]
    Core(#[from] PrimPathError),
}

/// What the `path` command found, plus the graphs it was asked to show.
#[derive(Debug, Clone)]
pub struct PathSummary {
    /// Path query outcome.
    pub outcome: PathOutcome,
    /// Input graph, when `--show-graph` was given.
    pub graph: Option<Graph>,
    /// Spanning tree graph, when `--show-tree` was given.
    pub tree_graph: Option<Graph>,
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub enum ExecutionSummary {
    /// Result of the `path` command.
    Path(PathSummary),
    /// Result of the `mst` command.
    Mst(SpanningTree),
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading the input, parsing it, or running the
/// pipeline fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use primpath_cli::cli::{Cli, Command, ExecutionSummary, PathCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "4 4 0 1 1 1 2 2 2 3 3 0 3 10 0 3\n")?;
/// let cli = Cli {
///     command: Command::Path(PathCommand {
///         input: file.path().to_path_buf(),
///         root: 0,
///         show_graph: false,
///         show_tree: false,
///     }),
/// };
/// let ExecutionSummary::Path(summary) = run_cli(cli)? else {
///     unreachable!("path command yields a path summary");
/// };
/// assert_eq!(summary.outcome.path().map(ToString::to_string).as_deref(), Some("0 1 2 3"));
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Path(command) => {
            span.record("command", field::display("path"));
            run_path(&command).map(ExecutionSummary::Path)
        }
        Command::Mst(command) => {
            span.record("command", field::display("mst"));
            run_mst(&command).map(ExecutionSummary::Mst)
        }
    }
}

#[instrument(
    name = "cli.path",
    err,
    skip(command),
    fields(input = %command.input.display(), root = command.root),
)]
pub(super) fn run_path(command: &PathCommand) -> Result<PathSummary, CliError> {
    let input = ProblemInput::parse(&read_input(&command.input)?)?;
    let output = PrimPathBuilder::new()
        .with_root(command.root)
        .with_retain_tree(command.show_graph || command.show_tree)
        .build()
        .run(&input)?;

    let found = output.outcome().path().map(|path| path.len());
    info!(path_len = found, "path command completed");
    Ok(PathSummary {
        outcome: output.outcome().clone(),
        graph: output.graph().filter(|_| command.show_graph).cloned(),
        tree_graph: output.tree_graph().filter(|_| command.show_tree).cloned(),
    })
}

#[instrument(
    name = "cli.mst",
    err,
    skip(command),
    fields(input = %command.input.display(), root = command.root),
)]
pub(super) fn run_mst(command: &MstCommand) -> Result<SpanningTree, CliError> {
    let input = ProblemInput::parse(&read_input(&command.input)?)?;
    let graph = Graph::from_edges(input.vertex_count(), input.edges())?;
    let tree = build_mst_from(&graph, command.root)?;
    info!(
        vertices = tree.vertex_count(),
        total_weight = tree.total_weight(),
        "mst command completed"
    );
    Ok(tree)
}

#[instrument(name = "cli.read_input", err)]
pub(super) fn read_input(path: &Path) -> Result<String, CliError> {
    let into_cli = |source: io::Error| CliError::Io {
        path: path.to_path_buf(),
        source,
    };
    if path.as_os_str() == STDIN_PATH {
        let mut text = String::new();
        io::stdin().lock().read_to_string(&mut text).map_err(into_cli)?;
        return Ok(text);
    }
    fs::read_to_string(path).map_err(into_cli)
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// A found path prints as space-separated vertex ids; a query the tree does
/// not connect prints `NO PATH`. The `mst` summary prints one
/// `vertex<TAB>parent<TAB>cost` row per vertex, with `-` as the root's
/// parent, followed by the total weight.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use primpath_cli::cli::{ExecutionSummary, PathSummary, render_summary};
/// # use primpath_core::{PathOutcome, build_tree_paths, find_path};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let tree = build_tree_paths(&[None, Some(0), Some(1)])?;
/// let summary = ExecutionSummary::Path(PathSummary {
///     outcome: PathOutcome::Found(find_path(&tree, 2, 0)?),
///     graph: None,
///     tree_graph: None,
/// });
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "2 1 0\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary {
        ExecutionSummary::Path(path) => {
            if let Some(graph) = &path.graph {
                writeln!(writer, "input graph:")?;
                write!(writer, "{graph}")?;
            }
            if let Some(tree_graph) = &path.tree_graph {
                writeln!(writer, "spanning tree:")?;
                write!(writer, "{tree_graph}")?;
            }
            match &path.outcome {
                PathOutcome::Found(found) => writeln!(writer, "{found}"),
                PathOutcome::NoPath { .. } => writeln!(writer, "NO PATH"),
            }
        }
        ExecutionSummary::Mst(tree) => {
            for (vertex, parent) in tree.parents().iter().enumerate() {
                let cost = tree.entry_cost(vertex).unwrap_or_default();
                match parent {
                    Some(parent) => writeln!(writer, "{vertex}\t{parent}\t{cost}")?,
                    None => writeln!(writer, "{vertex}\t-\t{cost}")?,
                }
            }
            writeln!(writer, "total weight: {}", tree.total_weight())
        }
    }
}
