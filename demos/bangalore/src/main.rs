//! bangalore: route advice over a built-in 20-locality Bangalore network.
//!
//! ```text
//! cargo run -p bangalore -- Koramangala "MG Road" --k 3
//! cargo run -p bangalore -- Koramangala Whitefield --rain-near Marathahalli
//! ```
//!
//! Prints the ranked routes with reasons and writes `path.json` for the map
//! viewer.  `--rain-near` puts heavy rain on every road touching one
//! locality, to show the advice shifting under live conditions.

mod network;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sp_core::{AdvisorConfig, EdgeId};
use sp_io::{PathDocument, render_report, resolve_place, write_path_json};
use sp_network::LiveCondition;
use sp_route::RouteAdvisor;

use network::build_network;

const HEAVY_RAIN_MM_PER_HOUR: f64 = 10.0;

#[derive(Parser, Debug)]
struct InputArgs {
    from: String,
    to: String,
    #[arg(long, default_value_t = 3)]
    k: usize,
    #[arg(long)]
    rain_near: Option<String>,
    #[arg(long, default_value = "path.json")]
    out: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args = InputArgs::parse();
    let mut net = build_network();

    let endpoints = resolve_place(&net, &args.from)
        .and_then(|from| Ok((from, resolve_place(&net, &args.to)?)));
    let (from, to) = match endpoints {
        Ok(pair) => pair,
        Err(e) => {
            eprintln!("Available localities:");
            for (_, name) in net.nodes() {
                eprintln!("  {name}");
            }
            return Err(e.into());
        }
    };

    if let Some(place) = &args.rain_near {
        let centre = resolve_place(&net, place)?;
        let rain = LiveCondition { rainfall_mm_per_hour: HEAVY_RAIN_MM_PER_HOUR, ..LiveCondition::DEFAULT };
        let edges: Vec<_> = (0..net.edge_count() as u32)
            .map(EdgeId)
            .filter(|e| net.edge_from[e.index()] == centre || net.edge_to[e.index()] == centre)
            .collect();
        for &e in &edges {
            net.set_condition(e, rain)?;
        }
        info!(near = net.node_name(centre), roads = edges.len(), "heavy rain applied");
    }

    let config = AdvisorConfig { k: args.k, ..AdvisorConfig::default() };
    let advisory = RouteAdvisor::new(config.weights).advise(&mut net, from, to, config.k)?;

    println!();
    print!("{}", render_report(&net, &advisory));

    let doc = PathDocument::from_advisory(&net, &advisory, &config);
    write_path_json(&args.out, &doc).with_context(|| format!("writing {}", args.out.display()))?;
    println!("\nWrote {} with {} route(s).", args.out.display(), doc.routes.len());
    Ok(())
}
