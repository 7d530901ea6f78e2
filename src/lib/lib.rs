use std::io::{Result, Write};

use tracing::debug;

use crate::config::{Target, Targets};
use crate::generate::SolutionSet;

pub mod config;
pub mod generate;
pub mod report;
pub mod search;
pub mod train;
pub mod validity;

pub use config::{Config, GearInventory, Limits};
pub use generate::generate;
pub use search::find_nearest;
pub use train::{GearTrain, Layout, Solution};
pub use validity::is_valid;

/// Set up logging to stderr, so reports written to stdout stay clean.
/// Defaults to `info`, and honours `RUST_LOG`.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Pair each target with its closest solution
pub fn matches<'a>(
    solutions: &'a SolutionSet,
    targets: impl Iterator<Item = Target> + 'a,
) -> impl Iterator<Item = (Target, Option<&'a crate::Solution>)> + 'a {
    targets.map(move |target| {
        let best = solutions.nearest(target.goal_pitch());
        if best.is_none() {
            debug!(%target, "No solution");
        }
        (target, best)
    })
}

/// Write the plain text chart: every inch thread, then every metric thread
pub fn write_text_chart(
    file: &mut dyn Write,
    solutions: &SolutionSet,
    targets: &Targets,
) -> Result<()> {
    for (target, best) in matches(solutions, targets.inch().chain(targets.metric())) {
        report::write_text(file, target, best)?;
    }
    Ok(())
}

/// Write the chart as an HTML page with one table for inch threads and one for metric
pub fn write_html_chart(
    file: &mut dyn Write,
    solutions: &SolutionSet,
    targets: &Targets,
) -> Result<()> {
    let tables = [
        report::html_table("Inch Threads", "tpi", matches(solutions, targets.inch())),
        report::html_table("Metric Threads", "mm", matches(solutions, targets.metric())),
    ];
    report::write_html_page(file, "Change Gears", &tables)
}
