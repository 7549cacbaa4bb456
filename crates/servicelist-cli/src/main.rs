mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{config::ConfigSubcommand, RunArgs};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "servicelist",
    about = "Generate a vehicle maintenance checklist from interval rules",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory relative paths resolve against (default: current directory)
    #[arg(long, global = true)]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Defaults to `generate` when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build the checklist and write it to the output file
    Generate {
        #[command(flatten)]
        args: RunArgs,

        /// Checklist file to write (default: example.txt)
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// Build the checklist and print it without writing a file
    Show {
        #[command(flatten)]
        args: RunArgs,
    },

    /// List the maintenance rules in interval order
    Rules {
        /// Rule file to read (default: example.json)
        #[arg(long, short = 'i')]
        input: Option<PathBuf>,
    },

    /// Inspect and validate servicelist.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        None => cmd::generate::run(&root, &RunArgs::default(), None, cli.json),
        Some(Commands::Generate { args, output }) => {
            cmd::generate::run(&root, &args, output.as_deref(), cli.json)
        }
        Some(Commands::Show { args }) => cmd::show::run(&root, &args, cli.json),
        Some(Commands::Rules { input }) => cmd::rules::run(&root, input.as_deref(), cli.json),
        Some(Commands::Config { subcommand }) => cmd::config::run(&root, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
