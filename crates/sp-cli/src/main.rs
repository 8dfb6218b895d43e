//! `safepath`: route advisor command line.
//!
//! ```text
//! safepath route --nodes data/nodes.csv --edges data/edges.csv \
//!     --updates data/updates.json --from Majestic --to Whitefield --k 3 --out path.json
//!
//! safepath perturb --updates data/updates.json --ticks 50 --interval-secs 3
//! ```

mod logging;

use std::path::PathBuf;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::info;

use sp_core::AdvisorConfig;
use sp_io::{
    LoadOptions, PathDocument, apply_updates, load_network_csv, load_updates_json, perturb_updates,
    render_report, resolve_place, save_updates_json, write_path_json,
};
use sp_route::RouteAdvisor;

#[derive(Parser, Debug)]
#[command(name = "safepath", version, about = "Condition-aware route advisor")]
struct Cli {
    /// Log level used when RUST_LOG is not set.
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank routes between two places and explain the alternatives.
    Route(RouteArgs),
    /// Randomly modify entries of an updates.json feed.
    Perturb(PerturbArgs),
}

#[derive(Args, Debug)]
struct RouteArgs {
    #[arg(long)]
    nodes: PathBuf,
    #[arg(long)]
    edges: PathBuf,
    /// Live-condition feed to apply before routing.
    #[arg(long)]
    updates: Option<PathBuf>,
    /// TOML file with cost weights, k and assumed speed.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Treat every edge row as a two-way road.
    #[arg(long)]
    bidirectional: bool,
    /// Start: node name, part of a name, or "lat,lon".
    #[arg(long)]
    from: String,
    /// Destination, same forms as --from.
    #[arg(long)]
    to: String,
    /// Number of routes; overrides the config file.
    #[arg(long)]
    k: Option<usize>,
    /// Write the routes as JSON for the map viewer.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Args, Debug)]
struct PerturbArgs {
    #[arg(long)]
    updates: PathBuf,
    #[arg(long, default_value_t = 3)]
    edges_per_tick: usize,
    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long, default_value_t = 1)]
    ticks: usize,
    /// Pause between ticks.
    #[arg(long, default_value_t = 0)]
    interval_secs: u64,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(&cli.log_level);

    match cli.command {
        Command::Route(args) => route(args),
        Command::Perturb(args) => perturb(args),
    }
}

fn route(args: RouteArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => AdvisorConfig::from_toml_file(path)
            .with_context(|| format!("reading config {}", path.display()))?,
        None => AdvisorConfig::default(),
    };
    let k = args.k.unwrap_or(config.k);

    let mut network = load_network_csv(
        &args.nodes,
        &args.edges,
        LoadOptions { bidirectional: args.bidirectional },
    )
    .with_context(|| format!("loading {} / {}", args.nodes.display(), args.edges.display()))?;

    if let Some(path) = &args.updates {
        let updates =
            load_updates_json(path).with_context(|| format!("reading updates {}", path.display()))?;
        let applied = apply_updates(&mut network, &updates)?;
        info!(entries = updates.len(), applied, "live conditions applied");
    }

    let source = resolve_place(&network, &args.from)?;
    let target = resolve_place(&network, &args.to)?;

    let advisory = RouteAdvisor::new(config.weights).advise(&mut network, source, target, k)?;
    print!("{}", render_report(&network, &advisory));

    if let Some(out) = &args.out {
        let doc = PathDocument::from_advisory(&network, &advisory, &config);
        write_path_json(out, &doc).with_context(|| format!("writing {}", out.display()))?;
        info!(path = %out.display(), routes = doc.routes.len(), "wrote route document");
    }
    Ok(())
}

fn perturb(args: PerturbArgs) -> Result<()> {
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };
    let mut updates = load_updates_json(&args.updates)
        .with_context(|| format!("reading updates {}", args.updates.display()))?;

    for tick in 0..args.ticks {
        if tick > 0 && args.interval_secs > 0 {
            thread::sleep(Duration::from_secs(args.interval_secs));
        }
        let touched = perturb_updates(&mut updates, args.edges_per_tick, &mut rng);
        save_updates_json(&args.updates, &updates)
            .with_context(|| format!("writing updates {}", args.updates.display()))?;
        info!(tick, edges = ?touched, "wrote updates");
    }
    Ok(())
}
