use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use container_pack_core::prelude::*;
use serde::Deserialize;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "container-pack",
    about = "Pack a cargo manifest into a container",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    /// Quiet mode (overrides verbose)
    #[arg(short, long, default_value_t = false, global = true)]
    quiet: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Pack a manifest file and print a placement report
    Pack(PackArgs),
    /// List the built-in container presets
    Presets,
}

#[derive(Parser, Debug, Clone)]
struct PackArgs {
    /// Path to a JSON document with "container" and "cargoList" keys
    input: PathBuf,
    /// Write the full PackingResult as JSON to this path
    #[arg(short, long)]
    out: Option<PathBuf>,
    /// Use the dedicated pallet floor optimizer instead of the box wall-builder
    #[arg(long, default_value_t = false)]
    guillotine_pallets: bool,
    /// Use the valley/honeycomb cylinder strategy instead of the strip packer
    #[arg(long, default_value_t = false)]
    valley_cylinders: bool,
}

/// The project file format named in §6: an external document shape owned by
/// this CLI crate, not by `container-pack-core`.
#[derive(Debug, Deserialize)]
struct ProjectFile {
    container: ProjectContainer,
    #[serde(rename = "cargoList")]
    cargo_list: Vec<CargoItem>,
}

#[derive(Debug, Deserialize)]
struct ProjectContainer {
    /// A preset tag (see `container_pack_core::presets`), or "Custom".
    #[serde(rename = "type")]
    type_tag: String,
    dimensions: Option<Dimensions>,
    max_weight: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.quiet, cli.verbose);
    match &cli.command {
        Commands::Pack(args) => run_pack(args),
        Commands::Presets => run_presets(),
    }
}

fn run_pack(args: &PackArgs) -> anyhow::Result<()> {
    let text = fs::read_to_string(&args.input)
        .with_context(|| format!("reading manifest file {:?}", args.input))?;
    let project: ProjectFile =
        serde_json::from_str(&text).with_context(|| "parsing manifest JSON")?;

    let dims = match project.container.dimensions {
        Some(d) => d,
        None => preset(&project.container.type_tag).with_context(|| {
            format!(
                "container type {:?} has no preset and no explicit dimensions",
                project.container.type_tag
            )
        })?,
    };
    let mut container = Container::new(project.container.type_tag.clone(), dims);
    container.max_weight = project.container.max_weight;

    let cfg = EngineConfig::builder()
        .pallet_routing(if args.guillotine_pallets {
            PalletRouting::Guillotine
        } else {
            PalletRouting::BoxBuilder
        })
        .cylinder_strategy(if args.valley_cylinders {
            CylinderStrategy::Valley
        } else {
            CylinderStrategy::Strip
        })
        .build();

    info!(items = project.cargo_list.len(), "loaded manifest");
    let (result, summary) = pack_with_stats(&container, &project.cargo_list, &cfg)?;

    print_report(&summary, &result);

    if let Some(out) = &args.out {
        let json = serde_json::to_string_pretty(&result)?;
        fs::write(out, json).with_context(|| format!("writing output to {:?}", out))?;
        info!(?out, "wrote packing result");
    }

    Ok(())
}

fn print_report(summary: &PackStats, result: &PackingResult) {
    println!(
        "placed {}/{} items ({} unplaced), fill rate {:.1}%",
        summary.items_placed,
        summary.items_requested,
        summary.items_unplaced,
        summary.fill_rate * 100.0
    );
    for (kind, stats) in &summary.by_kind {
        println!(
            "  {:?}: placed {}, unplaced {}, volume {:.1} cm^3",
            kind, stats.placed, stats.unplaced, stats.placed_volume
        );
    }
    if !result.unplaced_summary.is_empty() {
        println!("unplaced by manifest line:");
        for (name, count) in &result.unplaced_summary {
            println!("  {name}: {count}");
        }
    }
}

fn run_presets() -> anyhow::Result<()> {
    for (tag, dims) in container_pack_core::presets::all() {
        println!(
            "{tag:8} {:>7.1} x {:>7.1} x {:>7.1} cm",
            dims.width, dims.length, dims.height
        );
    }
    Ok(())
}

fn init_tracing(quiet: bool, verbose: u8) {
    let level = if quiet {
        "error".to_string()
    } else {
        match verbose {
            0 => "info".into(),
            1 => "debug".into(),
            _ => "trace".into(),
        }
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(level)
        .with_target(false)
        .try_init();
}
