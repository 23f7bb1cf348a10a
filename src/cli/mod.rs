use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

mod sync;
mod validate;

#[derive(Parser)]
#[command(
    name = "plugreg",
    version,
    about = "Community plugin registry validator and manifest synchronizer"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Show project information
    #[arg(long)]
    about: bool,
}

/// Output format for validation results.
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
enum Format {
    /// Human-readable text output (default)
    #[default]
    Text,
    /// JSON object with status, kind, and message
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate every plugin record in the registry
    Validate {
        /// Path to the registry JSON file
        #[arg(default_value = "plugins.json")]
        registry: PathBuf,
        /// Cross-check declared repositories over the network
        #[arg(long)]
        remote: bool,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// Copy the registry's plugin list into the distribution manifest
    Sync {
        /// Path to the registry JSON file
        #[arg(default_value = "plugins.json")]
        registry: PathBuf,
        /// Path to the target manifest JSON file
        #[arg(default_value = "package.json")]
        manifest: PathBuf,
    },
}

pub fn run(cli: Cli) {
    if cli.about {
        print_about();
        return;
    }

    match cli.command {
        Some(Commands::Validate {
            registry,
            remote,
            format,
        }) => validate::run(&registry, remote, format),
        Some(Commands::Sync { registry, manifest }) => sync::run(&registry, &manifest),
        None => {
            eprintln!("Usage: plugreg <command> [args]");
            eprintln!("Run `plugreg --help` for details.");
            std::process::exit(1);
        }
    }
}

fn print_about() {
    println!(
        "plugreg: Community Plugin Registry Tool\n\
         ├─ version:  {}\n\
         ├─ source:   {}\n\
         └─ licence:  {} https://www.apache.org/licenses/LICENSE-2.0",
        env!("CARGO_PKG_VERSION"),
        env!("CARGO_PKG_REPOSITORY"),
        env!("CARGO_PKG_LICENSE"),
    );
}
