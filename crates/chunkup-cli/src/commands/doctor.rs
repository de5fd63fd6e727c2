//! Project setup checks.

use std::path::Path;

use anyhow::Result;
use console::style;

use chunkup_core::config::AndroidBuildConfig;
use chunkup_core::{flutter, signing};

pub async fn handle_doctor_command(project: &Path) -> Result<()> {
    println!("ChunkUp Project Doctor");
    println!("======================");
    println!();

    check(
        "Flutter project (pubspec.yaml)",
        flutter::detect_flutter_project(project),
    );
    check(
        "Android embedding (android/)",
        flutter::has_android_embedding(project),
    );
    check("Gradle wrapper", flutter::has_gradle_wrapper(project));

    let profile = signing::resolve_from_file(&flutter::key_properties_path(project)).await;
    check("Production signing configured", profile.is_production());

    println!();
    let config = AndroidBuildConfig::load(project).await?;
    println!("Effective build configuration:");
    println!("{}", serde_json::to_string_pretty(&config)?);

    Ok(())
}

fn check(label: &str, ok: bool) {
    let mark = if ok {
        style("ok").green()
    } else {
        style("missing").yellow()
    };
    println!("  [{}] {}", mark, label);
}
