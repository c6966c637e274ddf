mod commands;
mod config;
mod discover;
mod emit;
mod meta;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

use crate::config::{Config, OutputFormat};

#[derive(Parser)]
#[command(name = "viewtree")]
#[command(version, about = "viewtree - compile a views directory into a nested route table", long_about = None)]
struct Cli {
    /// Project directory
    #[arg(short = 'C', long, global = true, default_value = ".")]
    project: PathBuf,

    /// Config file (default: <project>/viewtree.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the route table
    Build {
        #[command(flatten)]
        routes: RouteArgs,

        /// Output file, relative to the project (stdout if omitted)
        #[arg(short, long)]
        out: Option<String>,

        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,

        /// Indentation width: 2 or 4
        #[arg(short, long)]
        space: Option<usize>,
    },

    /// Print the nested route tree
    Tree {
        #[command(flatten)]
        routes: RouteArgs,
    },

    /// Write a default viewtree.toml
    Init,
}

/// Overrides for the `[routes]` section
#[derive(Args)]
struct RouteArgs {
    /// View root, e.g. ./src/views
    #[arg(short, long)]
    root: Option<String>,

    /// Entry component file name, e.g. index.vue
    #[arg(short, long)]
    entry: Option<String>,
}

impl RouteArgs {
    fn apply(self, config: &mut Config) {
        if let Some(root) = self.root {
            config.routes.root_path = root;
        }
        if let Some(entry) = self.entry {
            config.routes.entry_file = entry;
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    // Execute command
    match cli.command {
        Commands::Build {
            routes,
            out,
            format,
            space,
        } => {
            let mut config = load_config(&cli.project, cli.config.as_deref())?;
            routes.apply(&mut config);
            if out.is_some() {
                config.output.write_path = out;
            }
            if let Some(format) = format {
                config.output.format = format;
            }
            if let Some(space) = space {
                config.output.space = space;
            }
            config.validate()?;
            commands::build::execute(&cli.project, &config)?;
        }
        Commands::Tree { routes } => {
            let mut config = load_config(&cli.project, cli.config.as_deref())?;
            routes.apply(&mut config);
            config.validate()?;
            commands::tree::execute(&cli.project, &config)?;
        }
        Commands::Init => {
            commands::init::execute(&cli.project)?;
        }
    }

    Ok(())
}

fn load_config(project: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("Config file {:?} not found", path);
            }
            Config::load(path)
        }
        None => Config::load_from_project(project),
    }
}

/// Logs go to stderr so `viewtree build` can pipe the table on stdout
fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
