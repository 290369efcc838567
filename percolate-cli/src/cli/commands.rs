//! Command implementations and argument parsing for the percolate CLI.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use percolate_core::{
    Algorithm, ClusterStatistics, LabelError, LabelMap, LabelerBuilder, Lattice, LatticeError,
};
use rand::{SeedableRng, rngs::SmallRng};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use super::grid::{GridParseError, parse_lattice};

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "percolate",
    about = "Label the 4-connected clusters of a square lattice."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Label a lattice read from a text file.
    Label(LabelCommand),
    /// Label a randomly occupied lattice.
    Random(RandomCommand),
}

/// Options accepted by the `label` command.
#[derive(Debug, Args, Clone)]
pub struct LabelCommand {
    /// Text lattice: one row per line, `#`/`1`/`x` occupied, `.`/`0`/`-`
    /// empty.
    pub path: PathBuf,

    /// Labelling and output options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options accepted by the `random` command.
#[derive(Debug, Args, Clone)]
pub struct RandomCommand {
    /// Side length of the lattice.
    #[arg(long, value_parser = clap::value_parser!(usize))]
    pub side: usize,

    /// Probability that each site is occupied.
    #[arg(long, short = 'p')]
    pub probability: f64,

    /// Seed for reproducible lattices; drawn from the OS when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Labelling and output options.
    #[command(flatten)]
    pub output: OutputArgs,
}

/// Options shared by every command.
#[derive(Debug, Args, Clone, Copy)]
pub struct OutputArgs {
    /// Labelling algorithm.
    #[arg(long, value_enum, default_value_t = AlgorithmArg::UnionFind)]
    pub algorithm: AlgorithmArg,

    /// Output format written to stdout.
    #[arg(long, value_enum, default_value_t = OutputFormat::Labels)]
    pub format: OutputFormat,
}

/// Labelling algorithms selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AlgorithmArg {
    /// Two-pass union-find.
    UnionFind,
    /// Breadth-first flood fill.
    Bfs,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(value: AlgorithmArg) -> Self {
        match value {
            AlgorithmArg::UnionFind => Self::UnionFind,
            AlgorithmArg::Bfs => Self::BreadthFirst,
        }
    }
}

/// Output formats written by [`super::render_summary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The label grid, one row per line.
    Labels,
    /// Cluster statistics.
    Summary,
    /// Statistics and label rows as JSON.
    Json,
}

/// Errors surfaced while executing CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    /// The lattice file could not be read.
    #[error("failed to read `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The lattice file is malformed.
    #[error("failed to parse `{path}`: {source}")]
    Parse {
        /// Path of the malformed file.
        path: PathBuf,
        /// Parse failure with its position.
        #[source]
        source: GridParseError,
    },
    /// Random lattice parameters were rejected.
    #[error(transparent)]
    Lattice(#[from] LatticeError),
    /// Labelling failed.
    #[error(transparent)]
    Label(#[from] LabelError),
}

impl CliError {
    /// Stable machine-readable code of the underlying core error, if any.
    #[must_use]
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::Parse { source, .. } => match source {
                GridParseError::Shape(shape) => Some(shape.code().as_str()),
                _ => None,
            },
            Self::Lattice(err) => Some(err.code().as_str()),
            Self::Label(err) => Some(
                err.lattice_code()
                    .map_or_else(|| err.code().as_str(), |code| code.as_str()),
            ),
        }
    }
}

/// Outcome of a command, ready to be rendered.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Where the lattice came from: a file stem or `random`.
    pub source: String,
    /// Algorithm used to label the lattice.
    pub algorithm: Algorithm,
    /// Requested output format.
    pub format: OutputFormat,
    /// Cluster labels.
    pub labels: LabelMap,
    /// Statistics derived from `labels`.
    pub statistics: ClusterStatistics,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when the lattice cannot be loaded or labelled.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use percolate_cli::cli::{AlgorithmArg, Cli, Command, LabelCommand, OutputArgs, OutputFormat, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "#.\n.#\n")?;
/// let cli = Cli {
///     command: Command::Label(LabelCommand {
///         path: file.path().to_path_buf(),
///         output: OutputArgs {
///             algorithm: AlgorithmArg::UnionFind,
///             format: OutputFormat::Labels,
///         },
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.labels.labels(), &[1, 0, 0, 2]);
/// # Ok(())
/// # }
/// ```
#[instrument(name = "cli.run", err, skip(cli), fields(command = field::Empty))]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let span = Span::current();
    match cli.command {
        Command::Label(command) => {
            span.record("command", "label");
            run_label(command)
        }
        Command::Random(command) => {
            span.record("command", "random");
            run_random(command)
        }
    }
}

#[instrument(
    name = "cli.label",
    err,
    skip(command),
    fields(path = %command.path.display(), side = field::Empty),
)]
pub(super) fn run_label(command: LabelCommand) -> Result<ExecutionSummary, CliError> {
    let LabelCommand { path, output } = command;
    let lattice = load_lattice(&path)?;
    Span::current().record("side", lattice.side());
    execute(source_name(&path), &lattice, output)
}

#[instrument(
    name = "cli.random",
    err,
    skip(command),
    fields(side = command.side, probability = command.probability, seed = field::Empty),
)]
pub(super) fn run_random(command: RandomCommand) -> Result<ExecutionSummary, CliError> {
    let RandomCommand {
        side,
        probability,
        seed,
        output,
    } = command;
    let mut rng = match seed {
        Some(seed) => {
            Span::current().record("seed", seed);
            SmallRng::seed_from_u64(seed)
        }
        None => SmallRng::from_entropy(),
    };
    let lattice = Lattice::random(side, probability, &mut rng)?;
    execute("random".to_owned(), &lattice, output)
}

fn execute(
    source: String,
    lattice: &Lattice,
    output: OutputArgs,
) -> Result<ExecutionSummary, CliError> {
    let algorithm = Algorithm::from(output.algorithm);
    let labeler = LabelerBuilder::new().with_algorithm(algorithm).build()?;
    let labels = labeler.label(lattice)?;
    let statistics = ClusterStatistics::from_labels(&labels);
    info!(
        source = source.as_str(),
        side = statistics.side(),
        clusters = statistics.cluster_count(),
        percolates = statistics.percolates(),
        "command completed"
    );
    Ok(ExecutionSummary {
        source,
        algorithm,
        format: output.format,
        labels,
        statistics,
    })
}

#[instrument(name = "cli.load_lattice", err)]
pub(super) fn load_lattice(path: &Path) -> Result<Lattice, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_lattice(&text).map_err(|source| CliError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub(super) fn source_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .map_or_else(|| "lattice".to_owned(), ToOwned::to_owned)
}
