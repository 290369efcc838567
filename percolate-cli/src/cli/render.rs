//! Rendering of command results to stdout.

use std::io::{self, Write};

use percolate_core::EMPTY_LABEL;
use serde::Serialize;

use super::commands::{ExecutionSummary, OutputFormat};

/// Writes `summary` to `writer` in the format it requests.
///
/// # Errors
/// Returns [`io::Error`] if writing or JSON encoding fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use percolate_cli::cli::{ExecutionSummary, OutputFormat, render_summary};
/// # use percolate_core::{Algorithm, ClusterStatistics, Lattice, find_clusters};
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let lattice = Lattice::from_rows(vec![vec![true, false], vec![false, true]])?;
/// let labels = find_clusters(&lattice);
/// let summary = ExecutionSummary {
///     source: "demo".into(),
///     algorithm: Algorithm::UnionFind,
///     format: OutputFormat::Labels,
///     statistics: ClusterStatistics::from_labels(&labels),
///     labels,
/// };
/// let mut buffer = Vec::new();
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(String::from_utf8(buffer)?, "1 .\n. 2\n");
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    match summary.format {
        OutputFormat::Labels => render_labels(summary, &mut writer),
        OutputFormat::Summary => render_statistics(summary, &mut writer),
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, &JsonReport::from(summary))?;
            writeln!(writer)
        }
    }
}

/// Labels right-aligned to the widest label, `.` for empty sites.
fn render_labels(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let width = summary.statistics.cluster_count().to_string().len();
    for row in summary.labels.rows() {
        let mut separator = "";
        for &label in row {
            if label == EMPTY_LABEL {
                write!(writer, "{separator}{:>width$}", ".")?;
            } else {
                write!(writer, "{separator}{label:>width$}")?;
            }
            separator = " ";
        }
        writeln!(writer)?;
    }
    Ok(())
}

fn render_statistics(summary: &ExecutionSummary, writer: &mut impl Write) -> io::Result<()> {
    let stats = &summary.statistics;
    writeln!(writer, "source: {}", summary.source)?;
    writeln!(writer, "algorithm: {}", summary.algorithm.as_str())?;
    writeln!(writer, "side: {}", stats.side())?;
    writeln!(writer, "occupied: {}", stats.occupied())?;
    writeln!(writer, "clusters: {}", stats.cluster_count())?;
    writeln!(writer, "largest: {}", stats.largest().unwrap_or(0))?;
    writeln!(writer, "mean size: {:.2}", stats.mean_size())?;
    match stats.spanning() {
        Some(cluster) => writeln!(
            writer,
            "spanning: label {} ({} sites)",
            cluster.label, cluster.size
        ),
        None => writeln!(writer, "spanning: none"),
    }
}

#[derive(Serialize)]
struct JsonReport<'a> {
    source: &'a str,
    algorithm: &'static str,
    side: usize,
    occupied: usize,
    clusters: usize,
    largest: Option<usize>,
    mean_size: f64,
    spanning: Option<JsonSpanning>,
    sizes: &'a [usize],
    labels: Vec<&'a [i32]>,
}

#[derive(Serialize)]
struct JsonSpanning {
    label: i32,
    size: usize,
}

impl<'a> From<&'a ExecutionSummary> for JsonReport<'a> {
    fn from(summary: &'a ExecutionSummary) -> Self {
        let stats = &summary.statistics;
        Self {
            source: &summary.source,
            algorithm: summary.algorithm.as_str(),
            side: stats.side(),
            occupied: stats.occupied(),
            clusters: stats.cluster_count(),
            largest: stats.largest(),
            mean_size: stats.mean_size(),
            spanning: stats.spanning().map(|cluster| JsonSpanning {
                label: cluster.label,
                size: cluster.size,
            }),
            sizes: stats.sizes(),
            labels: summary.labels.rows().collect(),
        }
    }
}
