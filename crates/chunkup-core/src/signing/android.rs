//! Android release signing resolution and key.properties generation.
//!
//! Release builds are signed with the production keystore when
//! `key.properties` names one, and fall back to the debug key otherwise.
//! A missing or broken properties file must never block a build.

use std::path::{Path, PathBuf};

use crate::error::{ChunkupError, Result};
use crate::properties::{self, LoadError, PropertiesStore};

/// Property keys consumed from `key.properties`.
const STORE_FILE: &str = "storeFile";
const STORE_PASSWORD: &str = "storePassword";
const KEY_ALIAS: &str = "keyAlias";
const KEY_PASSWORD: &str = "keyPassword";

/// Release key material referenced by `key.properties`.
///
/// Only `storeFile` is required to select production signing; the other
/// fields stay `None` when absent. Completeness is checked by the signing
/// step itself, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseKey {
    /// Keystore path as written in the file, relative to the Android
    /// embedding root.
    pub store_file: String,
    pub store_password: Option<String>,
    pub key_alias: Option<String>,
    pub key_password: Option<String>,
}

/// Signing profile selected for a release build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningProfile {
    /// Sign with the production keystore from `key.properties`.
    Production(ReleaseKey),
    /// No keystore configured; release builds use the debug key.
    DevelopmentFallback,
}

impl SigningProfile {
    pub fn is_production(&self) -> bool {
        matches!(self, SigningProfile::Production(_))
    }

    /// Name of the Gradle signing config a release build uses.
    pub fn signing_config_name(&self) -> &'static str {
        match self {
            SigningProfile::Production(_) => "release",
            SigningProfile::DevelopmentFallback => "debug",
        }
    }
}

/// Selects the signing profile from a parsed properties store.
pub fn resolve(store: &PropertiesStore) -> SigningProfile {
    match store.get(STORE_FILE) {
        Some(store_file) => SigningProfile::Production(ReleaseKey {
            store_file: store_file.to_string(),
            store_password: store.get(STORE_PASSWORD).map(str::to_string),
            key_alias: store.get(KEY_ALIAS).map(str::to_string),
            key_password: store.get(KEY_PASSWORD).map(str::to_string),
        }),
        None => SigningProfile::DevelopmentFallback,
    }
}

/// Resolves the signing profile from a `key.properties` path.
///
/// Both failure classes degrade to [`SigningProfile::DevelopmentFallback`]
/// with a notice: a missing file is the normal state on developer machines,
/// an unreadable file is reported with its cause.
pub async fn resolve_from_file(path: &Path) -> SigningProfile {
    match properties::load(path).await {
        Ok(store) => resolve(&store),
        Err(LoadError::Missing) => {
            tracing::info!(
                "{} not found, using development signing default",
                path.display()
            );
            SigningProfile::DevelopmentFallback
        }
        Err(LoadError::Unreadable(e)) => {
            tracing::warn!("{} exists but could not be loaded: {}", path.display(), e);
            SigningProfile::DevelopmentFallback
        }
    }
}

/// Generates key.properties content for the Gradle build.
pub fn generate_key_properties(
    store_file: &str,
    store_password: &str,
    key_alias: &str,
    key_password: &str,
) -> String {
    format!(
        "storePassword={}\n\
         keyPassword={}\n\
         keyAlias={}\n\
         storeFile={}\n",
        store_password, key_password, key_alias, store_file
    )
}

/// Writes the key.properties file to the Android embedding directory.
pub async fn write_key_properties(
    project_root: &Path,
    store_file: &str,
    store_password: &str,
    key_alias: &str,
    key_password: &str,
) -> Result<PathBuf> {
    let android_dir = project_root.join("android");

    if !android_dir.exists() {
        return Err(ChunkupError::Signing(
            "Android directory not found in project".to_string(),
        ));
    }

    let key_properties_path = android_dir.join("key.properties");
    let content = generate_key_properties(store_file, store_password, key_alias, key_password);

    tokio::fs::write(&key_properties_path, content)
        .await
        .map_err(|e| ChunkupError::Signing(format!("Failed to write key.properties: {}", e)))?;

    tracing::debug!("Wrote key.properties to {}", key_properties_path.display());

    Ok(key_properties_path)
}

/// Removes the key.properties file from the Android embedding directory.
pub async fn cleanup_key_properties(project_root: &Path) -> Result<()> {
    let key_properties_path = project_root.join("android/key.properties");

    if key_properties_path.exists() {
        tokio::fs::remove_file(&key_properties_path)
            .await
            .map_err(|e| ChunkupError::Signing(format!("Failed to remove key.properties: {}", e)))?;
        tracing::debug!(
            "Removed key.properties from {}",
            key_properties_path.display()
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_production() {
        let store = PropertiesStore::parse(
            "storeFile=release.jks\nstorePassword=pw1\nkeyAlias=alias1\nkeyPassword=pw2\n",
        );

        let profile = resolve(&store);
        assert_eq!(
            profile,
            SigningProfile::Production(ReleaseKey {
                store_file: "release.jks".to_string(),
                store_password: Some("pw1".to_string()),
                key_alias: Some("alias1".to_string()),
                key_password: Some("pw2".to_string()),
            })
        );
        assert_eq!(profile.signing_config_name(), "release");
    }

    #[test]
    fn test_resolve_fallback_on_empty_store() {
        let store = PropertiesStore::parse("");
        let profile = resolve(&store);
        assert_eq!(profile, SigningProfile::DevelopmentFallback);
        assert_eq!(profile.signing_config_name(), "debug");
    }

    #[test]
    fn test_resolve_partial_fields_stay_absent() {
        let store = PropertiesStore::parse("storeFile=release.jks\nkeyAlias=upload\n");

        match resolve(&store) {
            SigningProfile::Production(key) => {
                assert_eq!(key.store_file, "release.jks");
                assert_eq!(key.key_alias.as_deref(), Some("upload"));
                assert!(key.store_password.is_none());
                assert!(key.key_password.is_none());
            }
            SigningProfile::DevelopmentFallback => panic!("expected production profile"),
        }
    }

    #[test]
    fn test_resolve_without_store_file_ignores_other_keys() {
        let store = PropertiesStore::parse("storePassword=pw1\nkeyAlias=alias1\n");
        assert_eq!(resolve(&store), SigningProfile::DevelopmentFallback);
    }

    #[tokio::test]
    async fn test_resolve_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let profile = resolve_from_file(&dir.path().join("key.properties")).await;
        assert_eq!(profile, SigningProfile::DevelopmentFallback);
    }

    #[tokio::test]
    async fn test_resolve_from_file_selects_production() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.properties");
        tokio::fs::write(&path, "storeFile=release.jks\nstorePassword=pw1\n")
            .await
            .unwrap();

        let profile = resolve_from_file(&path).await;
        assert!(profile.is_production());
    }

    #[test]
    fn test_generate_key_properties() {
        let content = generate_key_properties("release.jks", "storepass", "myalias", "keypass");

        assert!(content.contains("storePassword=storepass"));
        assert!(content.contains("keyPassword=keypass"));
        assert!(content.contains("keyAlias=myalias"));
        assert!(content.contains("storeFile=release.jks"));
    }

    #[test]
    fn test_generated_content_resolves_to_production() {
        let content = generate_key_properties("release.jks", "storepass", "myalias", "keypass");
        let profile = resolve(&PropertiesStore::parse(&content));
        assert!(profile.is_production());
    }

    #[tokio::test]
    async fn test_write_and_cleanup_key_properties() {
        let dir = tempfile::tempdir().unwrap();
        tokio::fs::create_dir(dir.path().join("android"))
            .await
            .unwrap();

        let path = write_key_properties(dir.path(), "release.jks", "pw1", "alias1", "pw2")
            .await
            .unwrap();
        assert!(path.exists());

        cleanup_key_properties(dir.path()).await.unwrap();
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_write_key_properties_requires_android_dir() {
        let dir = tempfile::tempdir().unwrap();
        let result = write_key_properties(dir.path(), "release.jks", "pw1", "alias1", "pw2").await;
        assert!(result.is_err());
    }
}
