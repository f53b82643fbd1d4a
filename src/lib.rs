pub mod cli;
pub mod config;
pub mod log;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use crate::cli::{Command, ShowcaseArgs, TmxArgs};
use crate::config::Config;
use crate::model::{Plan, Role};
use crate::processor::{CatalogConfig, Category, PrefabCatalog, ShowcaseError};

pub fn run() -> Result<()> {
    let args = cli::Cli::parse();
    log::init(&args.log_level);
    execute(&args)
}

/// Everything `run` does after argument parsing and logging setup.
pub fn execute(args: &cli::Cli) -> Result<()> {
    let config = Config::load(args.config.as_deref())?;

    match &args.command {
        Command::Tmx(tmx) => run_tmx(tmx, &config),
        Command::Showcase(showcase) => run_showcase(showcase, &config),
    }
}

/// Path of the map to read: the explicit input, or `Map_NN.tmx` derived
/// from the scene name.
fn map_path(args: &TmxArgs) -> Result<PathBuf> {
    match (&args.input, &args.scene) {
        (Some(input), _) => Ok(input.clone()),
        (None, Some(scene)) => {
            let stem = parser::scene::map_name_for_scene(scene)?;
            Ok(args.maps_dir.join(format!("{stem}.tmx")))
        }
        (None, None) => anyhow::bail!("either an input map or --scene is required"),
    }
}

fn run_tmx(args: &TmxArgs, config: &Config) -> Result<()> {
    let input = map_path(args)?;
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("map")
        .to_string();

    // 1. ── Parse ──────────────────────────────────────────────────────
    let xml = std::fs::read_to_string(&input)
        .with_context(|| format!("Reading {}", input.display()))?;
    let model =
        parser::parse_tmx(&xml).with_context(|| format!("Parsing {}", input.display()))?;

    // 2. ── Process ────────────────────────────────────────────────────
    let catalog = PrefabCatalog::new(
        &args.prefabs,
        &config.catalog,
        config.planner.default_scale,
    );
    if !catalog.root().is_dir() {
        warn!("prefab folder {} does not exist", catalog.root().display());
    }
    let plan = Plan {
        name: stem,
        records: processor::plan(&model, &config.planner, &catalog),
    };

    // 3. ── Write outputs ──────────────────────────────────────────────
    create_output(&args.output)?;
    let written = writer::json::emit(&plan, &args.output)
        .with_context(|| "Writing placement plan")?;
    writer::xml::emit(&plan.name, &xml, &args.output)
        .with_context(|| "Writing XML copy of the map")?;

    info!(
        "{} placement(s) for {} written to {}",
        plan.records.len(),
        plan.name,
        written.display()
    );
    Ok(())
}

fn run_showcase(args: &ShowcaseArgs, config: &Config) -> Result<()> {
    if args.assets.as_os_str().is_empty() {
        return Err(ShowcaseError::MissingSource("asset folder").into());
    }

    let flat = CatalogConfig {
        extension: config.catalog.extension.clone(),
        categories: vec![Category::new("", Role::Ordinary)],
    };
    let catalog = PrefabCatalog::new(&args.assets, &flat, config.planner.default_scale);
    let records =
        processor::plan_showcase(&args.prefix, &config.showcase, &config.planner, &catalog)?;
    let plan = Plan {
        name: "showcase".into(),
        records,
    };

    create_output(&args.output)?;
    let written = writer::json::emit(&plan, &args.output)
        .with_context(|| "Writing showcase plan")?;

    info!(
        "{} showcase placement(s) written to {}",
        plan.records.len(),
        written.display()
    );
    Ok(())
}

fn create_output(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("Creating {}", dir.display()))
}
