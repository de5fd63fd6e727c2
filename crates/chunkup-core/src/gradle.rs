//! Gradle wrapper invocation for the Android embedding.

use std::path::Path;
use std::process::Stdio;

use tokio::process::Command;

use crate::error::{ChunkupError, Result};

/// Captured result of a Gradle invocation.
#[derive(Debug)]
pub struct GradleOutput {
    /// Exit code of the process (0 = success).
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl GradleOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Returns the wrapper executable for the current platform.
fn wrapper_command() -> &'static str {
    if cfg!(windows) { "gradlew.bat" } else { "./gradlew" }
}

/// Runs a Gradle task through the checked-in wrapper.
pub async fn run_task(android_dir: &Path, task: &str) -> Result<GradleOutput> {
    if !android_dir.is_dir() {
        return Err(ChunkupError::Project(format!(
            "Android directory not found: {}",
            android_dir.display()
        )));
    }

    let output = Command::new(wrapper_command())
        .arg(task)
        .current_dir(android_dir)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| ChunkupError::Gradle(format!("Failed to run Gradle wrapper: {}", e)))?;

    let exit_code = output.status.code().unwrap_or(-1);
    tracing::debug!("Gradle task '{}' exited with code {}", task, exit_code);

    Ok(GradleOutput {
        exit_code,
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
    })
}

/// Builds the debug APK.
pub async fn assemble_debug(android_dir: &Path) -> Result<GradleOutput> {
    run_task(android_dir, "assembleDebug").await
}

/// Builds the release APK.
pub async fn assemble_release(android_dir: &Path) -> Result<GradleOutput> {
    run_task(android_dir, "assembleRelease").await
}

/// Builds the release app bundle (AAB).
pub async fn bundle_release(android_dir: &Path) -> Result<GradleOutput> {
    run_task(android_dir, "bundleRelease").await
}

/// Removes build outputs.
pub async fn clean(android_dir: &Path) -> Result<GradleOutput> {
    run_task(android_dir, "clean").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_command_per_platform() {
        let wrapper = wrapper_command();
        if cfg!(windows) {
            assert_eq!(wrapper, "gradlew.bat");
        } else {
            assert_eq!(wrapper, "./gradlew");
        }
    }

    #[test]
    fn test_output_success() {
        let output = GradleOutput {
            exit_code: 0,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(output.success());

        let output = GradleOutput {
            exit_code: 1,
            stdout: String::new(),
            stderr: String::new(),
        };
        assert!(!output.success());
    }

    #[tokio::test]
    async fn test_run_task_rejects_missing_android_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = run_task(&dir.path().join("android"), "assembleRelease").await;
        assert!(matches!(result, Err(ChunkupError::Project(_))));
    }
}
