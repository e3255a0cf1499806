use clap::{Parser, Subcommand};
use modbundle::core::BundleError;
use modbundle::{format_error_with_help, ErrorHelp};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;

#[derive(Parser)]
#[command(name = "modbundle")]
#[command(about = "Bundle Minecraft mods for a game version and loader into one zip")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Download every mod in the list and save them as a zip
    Fetch {
        /// Minecraft version, e.g. 1.20.1 (prompted when omitted)
        #[arg(short = 'v', long)]
        game_version: Option<String>,
        /// Mod loader, e.g. fabric (prompted when omitted)
        #[arg(short, long)]
        loader: Option<String>,
        /// Directory to save the zip in
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Never prompt; fail when a choice is missing
        #[arg(long)]
        no_input: bool,
    },
    /// List the game versions known to the mod hosting service
    Versions {
        /// Hide snapshots and pre-releases
        #[arg(long)]
        releases_only: bool,
    },
    /// Show and edit the mod list
    #[command(subcommand)]
    Mods(ModsCommands),
    /// Inspect configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum ModsCommands {
    /// Show the mod list with positions
    List,
    /// Append a mod
    Add {
        /// Display name, e.g. "Mod Menu"
        name: String,
        /// Project id or slug on Modrinth, e.g. modmenu
        id: String,
    },
    /// Remove a mod by position (from `mods list`) or by id
    Remove {
        /// 1-based position or mod id
        target: String,
    },
    /// Restore the default mod list
    Reset,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the effective configuration
    Show,
    /// Print the locations of config and mod list files
    Path,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Fetch {
            game_version,
            loader,
            output,
            no_input,
        } => {
            cli::fetch::run(cli::fetch::FetchOptions {
                game_version,
                loader,
                output,
                no_input,
            })
            .await
        }
        Commands::Versions { releases_only } => cli::versions::run(releases_only).await,
        Commands::Mods(cmd) => match cmd {
            ModsCommands::List => cli::mods::list(),
            ModsCommands::Add { name, id } => cli::mods::add(&name, &id),
            ModsCommands::Remove { target } => cli::mods::remove(&target),
            ModsCommands::Reset => cli::mods::reset(),
        },
        Commands::Config(cmd) => match cmd {
            ConfigCommands::Show => cli::config::show(),
            ConfigCommands::Path => cli::config::path(),
        },
    };

    // Handle result and exit codes
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            match &e {
                BundleError::Validation(_)
                | BundleError::Archive(_)
                | BundleError::RunFailed { .. } => {
                    // The run already printed its failure notification
                    if let Some(help) = e.help() {
                        eprintln!("  help: {}", help);
                    }
                }
                _ => {
                    eprintln!("\n{}", format_error_with_help(&e));
                }
            }
            ExitCode::FAILURE
        }
    }
}
