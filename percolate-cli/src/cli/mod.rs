//! Command-line interface orchestration for percolate.
//!
//! `label` reads a text lattice from disk and `random` samples one; both
//! label the clusters and render the labels, a summary, or a JSON report.

mod commands;
mod grid;
mod render;

pub use commands::{
    AlgorithmArg, Cli, CliError, Command, ExecutionSummary, LabelCommand, OutputArgs,
    OutputFormat, RandomCommand, run_cli,
};
pub use grid::{GridParseError, parse_lattice};
pub use render::render_summary;
