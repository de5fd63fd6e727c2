//! Flat `key=value` properties parsing.
//!
//! The Android embedding keeps its release signing secrets in a
//! `key.properties` file next to the Gradle scripts: plain UTF-8 text, one
//! pair per line, no escaping and no multi-line values.

use std::collections::HashMap;
use std::io;
use std::path::Path;

use thiserror::Error;

/// Why a properties file could not be loaded.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file does not exist.
    #[error("properties file not found")]
    Missing,

    /// The file exists but could not be read.
    #[error("properties file could not be read: {0}")]
    Unreadable(#[from] io::Error),
}

/// An immutable key-value store parsed from a properties file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertiesStore {
    entries: HashMap<String, String>,
}

impl PropertiesStore {
    /// Parses properties content into a store.
    ///
    /// Each line is split on the first `=`; everything after it is the
    /// value, even if the value itself contains `=`. Keys and values are
    /// trimmed. Lines without a separator (blank lines, comments) are
    /// skipped, and the last occurrence of a duplicate key wins.
    pub fn parse(content: &str) -> Self {
        let mut entries = HashMap::new();
        for line in content.lines() {
            if let Some((key, value)) = line.split_once('=') {
                entries.insert(key.trim().to_string(), value.trim().to_string());
            }
        }
        Self { entries }
    }

    /// Returns the value for a key, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Returns true if the store contains the key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Number of entries in the store.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the store holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over entries in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Loads a properties file from disk.
///
/// Returns [`LoadError::Missing`] when the file does not exist and
/// [`LoadError::Unreadable`] when it exists but cannot be read. Parsing
/// itself never fails; malformed lines are skipped.
pub async fn load(path: &Path) -> Result<PropertiesStore, LoadError> {
    if !path.exists() {
        return Err(LoadError::Missing);
    }

    let content = tokio::fs::read_to_string(path).await?;
    let store = PropertiesStore::parse(&content);
    tracing::debug!("Loaded {} properties from {}", store.len(), path.display());

    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed() {
        let store = PropertiesStore::parse(
            "storeFile=release.jks\nstorePassword=pw1\nkeyAlias=alias1\nkeyPassword=pw2\n",
        );
        assert_eq!(store.len(), 4);
        assert_eq!(store.get("storeFile"), Some("release.jks"));
        assert_eq!(store.get("storePassword"), Some("pw1"));
        assert_eq!(store.get("keyAlias"), Some("alias1"));
        assert_eq!(store.get("keyPassword"), Some("pw2"));
        assert!(store.contains_key("storeFile"));
        assert!(!store.contains_key("missing"));
        assert_eq!(store.iter().count(), 4);
    }

    #[test]
    fn test_parse_last_duplicate_wins() {
        let store = PropertiesStore::parse("a=1\nb=2\na=3\n");
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("a"), Some("3"));
    }

    #[test]
    fn test_parse_ignores_lines_without_separator() {
        let store = PropertiesStore::parse("# comment\n\nstoreFile=x\n");
        assert_eq!(store.len(), 1);
        assert_eq!(store.get("storeFile"), Some("x"));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let store = PropertiesStore::parse("  a  =  b  ");
        assert_eq!(store.get("a"), Some("b"));
    }

    #[test]
    fn test_parse_value_keeps_later_separators() {
        let store = PropertiesStore::parse("storePassword=a=b=c\n");
        assert_eq!(store.get("storePassword"), Some("a=b=c"));
    }

    #[test]
    fn test_parse_empty_input() {
        let store = PropertiesStore::parse("");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load(&dir.path().join("key.properties")).await;
        assert!(matches!(result, Err(LoadError::Missing)));
    }

    #[tokio::test]
    async fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("key.properties");
        tokio::fs::write(&path, "storeFile=release.jks\nkeyAlias=upload\n")
            .await
            .unwrap();

        let store = load(&path).await.unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("storeFile"), Some("release.jks"));
        assert_eq!(store.get("keyAlias"), Some("upload"));
    }
}
