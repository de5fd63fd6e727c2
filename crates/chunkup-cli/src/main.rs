use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

use commands::{
    build::{handle_build_command, BuildCommands},
    doctor::handle_doctor_command,
    signing::{handle_signing_command, SigningCommands},
};

#[derive(Parser)]
#[command(name = "chunkup")]
#[command(about = "Build tooling for the ChunkUp Android embedding", long_about = None)]
struct Cli {
    /// Flutter project root
    #[arg(long, env = "CHUNKUP_PROJECT", global = true, default_value = ".")]
    project: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show CLI version
    Version,

    /// Release signing management
    #[command(subcommand)]
    Signing(SigningCommands),

    /// Gradle build management
    #[command(subcommand)]
    Build(BuildCommands),

    /// Check the project setup
    Doctor,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            println!("chunkup version: {}", chunkup_core::VERSION);
            Ok(())
        }
        Commands::Signing(cmd) => handle_signing_command(&cli.project, cmd).await,
        Commands::Build(cmd) => handle_build_command(&cli.project, cmd).await,
        Commands::Doctor => handle_doctor_command(&cli.project).await,
    }
}
