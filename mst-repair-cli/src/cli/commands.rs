//! Command implementations and argument parsing for the `mst-repair` CLI.

use std::io::{self, Write};

use clap::{Args, Parser, Subcommand};
use mst_repair_core::{Edge, Graph, MstError, MstErrorCode, MstManager, RepairOutcome};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEMO_VERTICES: usize = 6;
/// Edges of the built-in demonstration graph, in insertion order.
const DEMO_EDGES: [(usize, usize, i64); 9] = [
    (0, 1, 4),
    (0, 2, 3),
    (1, 2, 1),
    (1, 3, 2),
    (2, 3, 4),
    (2, 4, 5),
    (3, 4, 7),
    (3, 5, 6),
    (4, 5, 2),
];

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "mst-repair",
    about = "Remove an edge from a minimum spanning tree and reconnect it."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Repair the built-in six-vertex demonstration graph.
    Demo(DemoCommand),
    /// Repair a graph supplied on the command line.
    Run(RunCommand),
}

/// Options accepted by the `demo` command.
#[derive(Debug, Args, Clone)]
pub struct DemoCommand {
    /// Position of the tree edge to remove, in tree order.
    #[arg(long = "remove-index", default_value_t = 0)]
    pub remove_index: usize,
}

/// Options accepted by the `run` command.
#[derive(Debug, Args, Clone)]
pub struct RunCommand {
    /// Number of vertices; vertex ids run from zero.
    #[arg(long)]
    pub vertices: usize,

    /// An undirected weighted edge; repeat for each edge.
    #[arg(
        long = "edge",
        value_name = "SRC,DEST,WEIGHT",
        value_parser = parse_edge_spec,
    )]
    pub edges: Vec<EdgeSpec>,

    /// Position of the tree edge to remove, in tree order.
    #[arg(long = "remove-index", default_value_t = 0)]
    pub remove_index: usize,
}

/// An edge as written on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeSpec {
    /// First endpoint.
    pub src: usize,
    /// Second endpoint.
    pub dest: usize,
    /// Edge weight; may be negative.
    pub weight: i64,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// An `--edge` value did not have the `SRC,DEST,WEIGHT` shape.
    #[error("invalid edge `{raw}`: {reason}")]
    InvalidEdge {
        /// Value as supplied by the user.
        raw: String,
        /// What was wrong with it.
        reason: String,
    },
    /// Graph construction or the repair cycle failed.
    #[error(transparent)]
    Core(#[from] MstError),
}

impl CliError {
    /// Returns the stable code of the underlying core error, if any.
    #[must_use]
    pub fn code(&self) -> Option<MstErrorCode> {
        match self {
            Self::Core(core) => Some(core.code()),
            Self::InvalidEdge { .. } => None,
        }
    }
}

/// Everything needed to print the outcome of one repair cycle.
#[derive(Debug, Clone)]
pub struct RepairReport {
    /// The tree before the removal, in construction order.
    pub original: Vec<Edge>,
    /// The tree after the cycle, in maintained order.
    pub repaired: Vec<Edge>,
    /// What the cycle removed, found and added.
    pub outcome: RepairOutcome,
}

/// Parses an `SRC,DEST,WEIGHT` triple.
///
/// # Errors
/// Returns [`CliError::InvalidEdge`] when the value does not have exactly
/// three comma-separated fields or a field is not a valid integer.
///
/// # Examples
/// ```
/// use mst_repair_cli::cli::{EdgeSpec, parse_edge_spec};
///
/// let spec = parse_edge_spec("0, 3,-2")?;
/// assert_eq!(spec, EdgeSpec { src: 0, dest: 3, weight: -2 });
/// # Ok::<(), mst_repair_cli::cli::CliError>(())
/// ```
pub fn parse_edge_spec(raw: &str) -> Result<EdgeSpec, CliError> {
    let invalid = |reason: String| CliError::InvalidEdge {
        raw: raw.to_owned(),
        reason,
    };

    let fields: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [src, dest, weight] = fields.as_slice() else {
        return Err(invalid(format!(
            "expected SRC,DEST,WEIGHT but found {} field(s)",
            fields.len()
        )));
    };

    let vertex = |label: &str, value: &str| {
        value
            .parse::<usize>()
            .map_err(|error| invalid(format!("{label} `{value}`: {error}")))
    };
    Ok(EdgeSpec {
        src: vertex("source", *src)?,
        dest: vertex("destination", *dest)?,
        weight: weight
            .parse::<i64>()
            .map_err(|error| invalid(format!("weight `{weight}`: {error}")))?,
    })
}

/// Builds the built-in demonstration graph.
///
/// # Errors
/// Propagates [`MstError`] from [`Graph::add_edge`].
pub fn demo_graph() -> Result<Graph, MstError> {
    let mut graph = Graph::new(DEMO_VERTICES);
    for (src, dest, weight) in DEMO_EDGES {
        graph.add_edge(src, dest, weight)?;
    }
    Ok(graph)
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the graph cannot be built or the requested edge
/// index does not name a tree edge.
///
/// # Examples
/// ```
/// use mst_repair_cli::cli::{Cli, Command, DemoCommand, run_cli};
///
/// let cli = Cli {
///     command: Command::Demo(DemoCommand { remove_index: 0 }),
/// };
/// let report = run_cli(cli)?;
/// assert!(report.outcome.is_reconnected());
/// # Ok::<(), mst_repair_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RepairReport, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Demo(demo) => {
            span.record("command", field::display("demo"));
            execute(demo_graph()?, demo.remove_index)
        }
        Command::Run(run) => {
            span.record("command", field::display("run"));
            execute(graph_from_specs(run.vertices, &run.edges)?, run.remove_index)
        }
    }
}

pub(super) fn graph_from_specs(vertices: usize, specs: &[EdgeSpec]) -> Result<Graph, MstError> {
    let mut graph = Graph::new(vertices);
    for spec in specs {
        graph.add_edge(spec.src, spec.dest, spec.weight)?;
    }
    Ok(graph)
}

#[instrument(
    name = "cli.execute",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edges().len()),
)]
pub(super) fn execute(graph: Graph, remove_index: usize) -> Result<RepairReport, CliError> {
    let mut manager = MstManager::new(graph)?;
    let original = manager.edges().to_vec();
    let outcome = manager.repair(remove_index)?;
    info!(
        original_weight = mst_repair_core::total_weight(&original),
        repaired_weight = manager.total_weight(),
        reconnected = outcome.is_reconnected(),
        "command completed"
    );
    Ok(RepairReport {
        original,
        repaired: manager.edges().to_vec(),
        outcome,
    })
}

/// Renders `report` to `writer` in the human-readable report format.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
pub fn render_report(report: &RepairReport, mut writer: impl Write) -> io::Result<()> {
    write_tree(
        &mut writer,
        "Minimum Spanning Tree Edges:",
        &report.original,
        "Total MST Weight",
    )?;
    writeln!(writer)?;

    let outcome = &report.outcome;
    writeln!(writer, "Removed edge: {}", outcome.removed)?;
    writeln!(writer)?;

    write_heading(&mut writer, "Components after edge removal:")?;
    for (index, members) in outcome.components.iter().enumerate() {
        writeln!(writer, "Component {}: {{{}}}", index + 1, join(members))?;
    }
    writeln!(writer)?;

    match outcome.replacement {
        Some(replacement) => {
            writeln!(writer, "Added replacement edge: {replacement}")?;
            writeln!(writer)?;
            write_tree(
                &mut writer,
                "New Minimum Spanning Tree:",
                &report.repaired,
                "Total New MST Weight",
            )
        }
        None => writeln!(
            writer,
            "No replacement edge found. The graph remains disconnected."
        ),
    }
}

fn write_heading(writer: &mut impl Write, title: &str) -> io::Result<()> {
    writeln!(writer, "{title}")?;
    writeln!(writer, "{}", "=".repeat(title.len()))
}

fn write_tree(
    writer: &mut impl Write,
    title: &str,
    edges: &[Edge],
    total_label: &str,
) -> io::Result<()> {
    write_heading(writer, title)?;
    for edge in edges {
        writeln!(writer, "{edge}")?;
    }
    writeln!(
        writer,
        "{total_label}: {}",
        mst_repair_core::total_weight(edges)
    )
}

fn join(members: &[usize]) -> String {
    members
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
