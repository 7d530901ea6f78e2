//! Check a single change gear setup: does it fit on the banjo, and what thread does it cut?
use anyhow::{bail, Context, Result};
use change_gears::config::Target;
use change_gears::report::write_text;
use change_gears::{init_logging, is_valid, Config, GearTrain, Layout, Solution};
use std::io::{stdout, Write};
use std::path::PathBuf;
use structopt::StructOpt;
use tracing::warn;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "gear_check",
    about = "Checks one change gear setup against a thread pitch"
)]
struct Opt {
    /// Gear layout: a-b-c, ab-cd-e, ab-c-d or a-bc-d
    #[structopt(short, long, default_value = "ab-cd-e")]
    layout: Layout,

    /// Tooth counts, in slot order
    #[structopt(short, long, use_delimiter = true, required = true)]
    gears: Vec<u32>,

    /// Desired threads per inch
    #[structopt(long, conflicts_with = "mm")]
    tpi: Option<f64>,

    /// Desired thread pitch, in mm
    #[structopt(long)]
    mm: Option<f64>,

    /// TOML file with the banjo limits. Built-in defaults otherwise
    #[structopt(short, long, parse(from_os_str))]
    config: Option<PathBuf>,
}

fn target(opt: &Opt) -> Result<Target> {
    let target = match (opt.tpi, opt.mm) {
        (Some(tpi), None) => Target::Tpi(tpi),
        (None, Some(mm)) => Target::Mm(mm),
        _ => bail!("Give exactly one of --tpi or --mm"),
    };
    if !(target.goal_pitch().is_finite() && target.goal_pitch() > 0.0) {
        bail!("Target {} is not a usable thread", target);
    }
    Ok(target)
}

fn main() -> Result<()> {
    let opt = Opt::from_args();
    init_logging()?;

    let config = match &opt.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let target = target(&opt)?;
    let train = GearTrain::new(opt.layout, &opt.gears)
        .with_context(|| format!("Bad gears for layout {}", opt.layout))?;

    let mut out = stdout().lock();
    writeln!(out, "layout {} train length = {}", train.layout(), train.length())?;
    if !is_valid(&config.limits, &train) {
        warn!(%train, "Gears won't fit on the banjo with the configured limits");
        writeln!(out, "not a valid setup")?;
    }
    write_text(&mut out, target, Some(&Solution::new(train)))?;

    Ok(())
}
