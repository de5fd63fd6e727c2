//! Flutter project detection for the Android embedding.

use std::path::{Path, PathBuf};

/// Detects if a directory contains a Flutter project.
///
/// A Flutter project is identified by the presence of `pubspec.yaml`.
pub fn detect_flutter_project(root: &Path) -> bool {
    root.join("pubspec.yaml").exists()
}

/// Returns true if the project carries an Android embedding.
pub fn has_android_embedding(root: &Path) -> bool {
    android_dir(root).is_dir()
}

/// Path of the Android embedding directory.
pub fn android_dir(root: &Path) -> PathBuf {
    root.join("android")
}

/// Path of the signing properties file.
///
/// The Gradle scripts resolve it as `rootProject.file("key.properties")`,
/// which is the Android embedding root, not the Flutter project root.
pub fn key_properties_path(root: &Path) -> PathBuf {
    android_dir(root).join("key.properties")
}

/// Returns true if the embedding has a Gradle wrapper checked in.
pub fn has_gradle_wrapper(root: &Path) -> bool {
    let dir = android_dir(root);
    dir.join("gradlew").exists() || dir.join("gradlew.bat").exists()
}
