//! Change gear chart generator: finds the closest gear train for every standard inch and metric thread
use anyhow::{Context, Result};
use change_gears::{generate, init_logging, write_html_chart, write_text_chart, Config};
use std::fs::OpenOptions;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::info;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "change_gears",
    about = "Builds a thread chart of change gear setups for a lathe"
)]
struct Opt {
    /// TOML file with the gear set, banjo limits and threads to chart. Built-in defaults otherwise
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,

    /// Write an HTML table instead of plain text
    #[structopt(long)]
    html: bool,

    /// Output file for the chart, stdout if not given
    #[structopt(short, long, parse(from_os_str))]
    output: Option<PathBuf>,
}

fn load_config(opt: &Opt) -> Result<Config> {
    match &opt.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(Config::default()),
    }
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logging()?;
    let config = load_config(&opt)?;

    let solutions = generate(&config.limits, &config.gears);
    if solutions.is_empty() {
        // Still write the chart, every row will say there's no solution
        tracing::warn!("No gear train fits within the configured limits");
    }

    let mut file: Box<dyn Write> = match &opt.output {
        Some(path) => Box::new(BufWriter::new(
            OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?,
        )),
        None => Box::new(BufWriter::new(stdout().lock())),
    };

    if opt.html {
        write_html_chart(&mut file, &solutions, &config.targets)?;
    } else {
        write_text_chart(&mut file, &solutions, &config.targets)?;
    }
    file.flush()?;

    info!(
        inch = config.targets.tpi.len(),
        metric = config.targets.mm.len(),
        "Wrote thread chart"
    );
    Ok(())
}
