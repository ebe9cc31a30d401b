//! Command-line interface for the MST repair driver.
//!
//! `demo` runs the built-in six-vertex scenario; `run` accepts an ad-hoc
//! graph as repeated `--edge SRC,DEST,WEIGHT` options. Both remove one tree
//! edge and report how the tree was repaired.

mod commands;

pub use commands::{
    Cli, CliError, Command, DemoCommand, EdgeSpec, RepairReport, RunCommand, demo_graph,
    parse_edge_spec, render_report, run_cli,
};
