//! Timber Frames CLI
//!
//! Builds a yurt or bent frame and writes the project document to stdout.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::io::Write;
use std::path::{Path, PathBuf};
use timber_frames::prelude::*;

#[derive(Parser)]
#[command(name = "timber-frames")]
#[command(about = "Timber Frames - parametric frames as structural-analysis project JSON", long_about = None)]
struct Cli {
    /// Material library JSON file (built-in presets when omitted)
    #[arg(short, long, value_name = "FILE", global = true)]
    materials: Option<PathBuf>,

    /// Generator configuration JSON file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    /// Catalog material to cut every member from
    #[arg(long, global = true)]
    material: Option<String>,

    /// Write compact JSON instead of tab-indented
    #[arg(long, global = true)]
    compact: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Round yurt: posts on a circle, tie ring, rafters to an apex or crown
    Yurt {
        /// Floor diameter (ft)
        #[arg(long)]
        diameter: Option<f64>,

        /// Largest spacing between posts (ft)
        #[arg(long)]
        max_post_spacing: Option<f64>,

        /// Wall height (ft)
        #[arg(long)]
        height: Option<f64>,

        /// Knee brace length along each member (ft)
        #[arg(long)]
        brace_rise: Option<f64>,

        /// Crown ring diameter (ft); 0 for a single apex
        #[arg(long)]
        crown_diameter: Option<f64>,

        /// Add rafters from the tie midpoints
        #[arg(long)]
        intermediate_rafters: bool,
    },

    /// Row of gable bents joined by top plates
    Bent {
        /// Post to post width (ft)
        #[arg(long)]
        width: Option<f64>,

        /// Eave height (ft)
        #[arg(long)]
        height: Option<f64>,

        /// First to last bent (ft)
        #[arg(long)]
        length: Option<f64>,

        /// Tie beam height (ft)
        #[arg(long)]
        tie_height: Option<f64>,

        /// Knee brace length along each member (ft)
        #[arg(long)]
        brace_rise: Option<f64>,

        /// Number of bents
        #[arg(short = 'n', long)]
        bents: Option<usize>,
    },
}

/// Generator defaults, overlaid by the config file when one is given
fn load_config<T: DeserializeOwned + Default>(path: Option<&Path>) -> Result<T> {
    let Some(path) = path else {
        return Ok(T::default());
    };
    log::info!("Loading config from: {}", path.display());
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
}

fn build<G: FrameGenerator>(generator: &G, materials: Option<&Path>) -> Result<FrameModel> {
    let mut model = match materials {
        Some(path) => {
            log::info!("Loading materials from: {}", path.display());
            let file = MaterialFile::open(path)
                .with_context(|| format!("reading material library {}", path.display()))?;
            FrameModel::with_material_file(file)
        }
        None => {
            let mut model = FrameModel::new();
            for material in Material::presets() {
                model.new_material(material);
            }
            model
        }
    };

    generator
        .build(&mut model)
        .with_context(|| format!("building frame from '{}'", generator.material_name()))?;
    Ok(model)
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries only the document
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config_path = cli.config.as_deref();
    let materials = cli.materials.as_deref();

    let model = match cli.command {
        Commands::Yurt {
            diameter,
            max_post_spacing,
            height,
            brace_rise,
            crown_diameter,
            intermediate_rafters,
        } => {
            let mut config: YurtConfig = load_config(config_path)?;
            if let Some(d) = diameter {
                config = config.with_diameter(d);
            }
            if let Some(s) = max_post_spacing {
                config = config.with_max_post_spacing(s);
            }
            if let Some(h) = height {
                config = config.with_height(h);
            }
            if let Some(r) = brace_rise {
                config = config.with_brace_rise(r);
            }
            if let Some(c) = crown_diameter {
                config = config.with_crown_diameter(c);
            }
            if intermediate_rafters {
                config = config.with_intermediate_rafters(true);
            }
            if let Some(name) = &cli.material {
                config = config.with_material(name);
            }
            build(&config, materials)?
        }

        Commands::Bent {
            width,
            height,
            length,
            tie_height,
            brace_rise,
            bents,
        } => {
            let mut config: BentFrameConfig = load_config(config_path)?;
            let width = width.unwrap_or(config.width);
            let height = height.unwrap_or(config.height);
            let length = length.unwrap_or(config.length);
            config = config.with_size(width, height, length);
            if let Some(t) = tie_height {
                config = config.with_tie_height(t);
            }
            if let Some(r) = brace_rise {
                config = config.with_brace_rise(r);
            }
            if let Some(n) = bents {
                config = config.with_bents(n);
            }
            if let Some(name) = &cli.material {
                config = config.with_material(name);
            }
            build(&config, materials)?
        }
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    model.write_json(&mut out, cli.compact)?;
    writeln!(out)?;
    Ok(())
}
