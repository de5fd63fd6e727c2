//! Android embedding build configuration.
//!
//! Captures the settings the Gradle scripts apply to the ChunkUp app: SDK
//! pins, desugaring and multidex, and release build options. Values left
//! unset here are inherited from the Flutter toolchain at build time.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChunkupError, Result};

/// Name of the optional per-project override file.
pub const CONFIG_FILE: &str = "chunkup.json";

/// Dependency versions carried by the embedding.
pub const DESUGAR_JDK_LIBS_VERSION: &str = "2.1.4";
pub const MULTIDEX_VERSION: &str = "2.0.1";
pub const ANDROIDX_WINDOW_VERSION: &str = "1.2.0";

/// Release build type options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseOptions {
    /// Whether R8 code shrinking is enabled.
    pub minify: bool,
    /// Whether resource shrinking is enabled.
    pub shrink_resources: bool,
    /// ProGuard rule files applied to release builds.
    pub proguard_files: Vec<String>,
}

impl Default for ReleaseOptions {
    fn default() -> Self {
        Self {
            minify: false,
            shrink_resources: false,
            proguard_files: vec![
                "proguard-android.txt".to_string(),
                "proguard-rules.pro".to_string(),
            ],
        }
    }
}

/// Build configuration for the Android embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AndroidBuildConfig {
    /// Application ID used for store distribution.
    pub application_id: String,
    /// Namespace of the embedding.
    pub namespace: String,
    /// Minimum supported SDK level. 23 is required by google_mobile_ads.
    pub min_sdk: u32,
    /// Compile SDK level; `None` inherits the Flutter toolchain's value.
    pub compile_sdk: Option<u32>,
    /// Target SDK level; `None` inherits the Flutter toolchain's value.
    pub target_sdk: Option<u32>,
    /// Pinned NDK version.
    pub ndk_version: String,
    /// Java source/target compatibility level.
    pub java_version: u32,
    /// Whether core library desugaring is enabled.
    pub core_library_desugaring: bool,
    /// Whether multidex is enabled.
    pub multidex: bool,
    /// Release build type options.
    pub release: ReleaseOptions,
}

impl Default for AndroidBuildConfig {
    fn default() -> Self {
        Self {
            application_id: "com.chunkup.vocab".to_string(),
            namespace: "com.chunkup.vocab".to_string(),
            min_sdk: 23,
            compile_sdk: None,
            target_sdk: None,
            ndk_version: "27.0.12077973".to_string(),
            java_version: 11,
            core_library_desugaring: true,
            multidex: true,
            release: ReleaseOptions::default(),
        }
    }
}

impl AndroidBuildConfig {
    /// Loads the build configuration for a project.
    ///
    /// Reads the optional `chunkup.json` override file from the project
    /// root. Returns defaults when the file is absent; a present but
    /// invalid file is a hard error, unlike the signing properties file.
    pub async fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(CONFIG_FILE);

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = tokio::fs::read_to_string(&path).await.map_err(|e| {
            ChunkupError::Configuration(format!("Failed to read {}: {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            ChunkupError::Configuration(format!("Invalid JSON in {}: {}", path.display(), e))
        })
    }
}
