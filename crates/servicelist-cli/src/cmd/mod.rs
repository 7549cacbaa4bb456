pub mod config;
pub mod generate;
pub mod rules;
pub mod show;

use anyhow::Context;
use clap::Args;
use servicelist_core::config::Config;
use servicelist_core::{Instruction, InstructionBuilder};
use std::path::{Path, PathBuf};

/// Flags shared by every command that builds a checklist. Anything left unset
/// falls back to servicelist.yaml, then to the built-in defaults.
#[derive(Args, Debug, Default, Clone)]
pub struct RunArgs {
    /// Rule file to read (default: example.json)
    #[arg(long, short = 'i')]
    pub input: Option<PathBuf>,

    /// First checkpoint distance (default: 0)
    #[arg(long)]
    pub min: Option<u64>,

    /// Distance at which projection stops, exclusive (default: 300000)
    #[arg(long)]
    pub max: Option<u64>,

    /// Spacing between checkpoints (default: 1000)
    #[arg(long)]
    pub step: Option<u64>,
}

/// Load servicelist.yaml from `root` and apply any command-line overrides.
pub fn effective_config(root: &Path, args: &RunArgs) -> anyhow::Result<Config> {
    let mut config = Config::load(root).context("failed to load config")?;
    if let Some(input) = &args.input {
        config.input = input.clone();
    }
    if let Some(min) = args.min {
        config.build.min_distance = min;
    }
    if let Some(max) = args.max {
        config.build.max_distance = max;
    }
    if let Some(step) = args.step {
        config.build.step = step;
    }
    Ok(config)
}

/// Run the load and build stages, tagging failures with the stage name.
pub fn build_instruction(root: &Path, config: &Config) -> anyhow::Result<Instruction> {
    let input = config.input_path(root);
    let builder = InstructionBuilder::from_file(&input).context("failed to load rules")?;
    builder
        .build(&config.build)
        .context("failed to build checklist")
}
