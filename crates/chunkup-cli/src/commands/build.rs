//! Gradle build commands.

use std::path::Path;

use anyhow::{bail, Result};
use clap::Subcommand;

use chunkup_core::gradle::{self, GradleOutput};
use chunkup_core::signing::SigningProfile;
use chunkup_core::{flutter, signing};

#[derive(Subcommand)]
pub enum BuildCommands {
    /// Build an APK
    Apk {
        /// Build the debug variant instead of release
        #[arg(long)]
        debug: bool,
    },

    /// Build a release app bundle (AAB)
    Bundle,

    /// Remove build outputs
    Clean,
}

pub async fn handle_build_command(project: &Path, cmd: BuildCommands) -> Result<()> {
    if !flutter::has_android_embedding(project) {
        bail!(
            "No Android embedding found under {}. Is this a Flutter project root?",
            project.display()
        );
    }

    let android_dir = flutter::android_dir(project);

    let output = match cmd {
        BuildCommands::Apk { debug: true } => gradle::assemble_debug(&android_dir).await?,
        BuildCommands::Apk { debug: false } => {
            announce_release_signing(project).await;
            gradle::assemble_release(&android_dir).await?
        }
        BuildCommands::Bundle => {
            announce_release_signing(project).await;
            gradle::bundle_release(&android_dir).await?
        }
        BuildCommands::Clean => gradle::clean(&android_dir).await?,
    };

    report(output)
}

/// Resolves signing ahead of a release build and prints which key the
/// artifacts will carry.
async fn announce_release_signing(project: &Path) {
    let profile = signing::resolve_from_file(&flutter::key_properties_path(project)).await;

    match profile {
        SigningProfile::Production(key) => {
            println!("Release signing: production keystore {}", key.store_file);
        }
        SigningProfile::DevelopmentFallback => {
            println!("Release signing: debug key (no key.properties)");
        }
    }
}

fn report(output: GradleOutput) -> Result<()> {
    print!("{}", output.stdout);

    if output.success() {
        Ok(())
    } else {
        eprint!("{}", output.stderr);
        bail!("Gradle exited with code {}", output.exit_code);
    }
}
