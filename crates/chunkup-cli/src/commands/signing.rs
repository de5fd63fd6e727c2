//! Release signing management commands.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Subcommand;

use chunkup_core::flutter;
use chunkup_core::signing::{self, SigningProfile};

#[derive(Subcommand)]
pub enum SigningCommands {
    /// Show the resolved signing configuration
    Status,

    /// Write android/key.properties for production signing
    Init {
        /// Keystore path, relative to the android directory
        #[arg(long)]
        store_file: String,

        /// Keystore password
        #[arg(long)]
        store_password: String,

        /// Key alias
        #[arg(long)]
        key_alias: String,

        /// Key password
        #[arg(long)]
        key_password: String,
    },

    /// Remove android/key.properties
    Clean,
}

pub async fn handle_signing_command(project: &Path, cmd: SigningCommands) -> Result<()> {
    match cmd {
        SigningCommands::Status => show_status(project).await,
        SigningCommands::Init {
            store_file,
            store_password,
            key_alias,
            key_password,
        } => init(project, &store_file, &store_password, &key_alias, &key_password).await,
        SigningCommands::Clean => clean(project).await,
    }
}

async fn show_status(project: &Path) -> Result<()> {
    let path = flutter::key_properties_path(project);
    let profile = signing::resolve_from_file(&path).await;

    println!("Signing Status");
    println!("==============");
    println!();
    println!("Properties file: {}", path.display());

    match &profile {
        SigningProfile::Production(key) => {
            println!("Profile:         production");
            println!("Keystore:        {}", key.store_file);
            println!("Store password:  {}", masked(key.store_password.as_deref()));
            println!("Key alias:       {}", key.key_alias.as_deref().unwrap_or("-"));
            println!("Key password:    {}", masked(key.key_password.as_deref()));
        }
        SigningProfile::DevelopmentFallback => {
            println!("Profile:         development fallback");
            println!();
            println!("Release builds will be signed with the debug key.");
            println!("Run 'chunkup signing init' to configure production signing.");
        }
    }

    Ok(())
}

async fn init(
    project: &Path,
    store_file: &str,
    store_password: &str,
    key_alias: &str,
    key_password: &str,
) -> Result<()> {
    let path = signing::write_key_properties(project, store_file, store_password, key_alias, key_password)
        .await
        .context("Failed to write key.properties")?;

    println!("Wrote {}", path.display());
    println!("Keep this file out of source control.");
    Ok(())
}

async fn clean(project: &Path) -> Result<()> {
    signing::cleanup_key_properties(project)
        .await
        .context("Failed to remove key.properties")?;

    println!("Removed {}", flutter::key_properties_path(project).display());
    Ok(())
}

/// Masks a secret for display. The value itself is never printed.
fn masked(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => format!("set ({} characters)", v.chars().count()),
        _ => "not set".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_hides_value() {
        let out = masked(Some("hunter2"));
        assert!(!out.contains("hunter2"));
        assert_eq!(out, "set (7 characters)");
    }

    #[test]
    fn test_masked_absent_value() {
        assert_eq!(masked(None), "not set");
        assert_eq!(masked(Some("")), "not set");
    }
}
