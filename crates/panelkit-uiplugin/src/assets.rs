//! Asset tree abstraction — the read-only file trees plugins serve from.
//!
//! The registry treats a plugin's static content as an opaque hierarchical
//! tree: given a relative path, yield the file bytes or not-found. Two
//! concrete trees are provided: [`EmbeddedAssets`] over a compile-time
//! `include_dir` embed (what generated plugins use) and [`DirAssets`] over
//! a runtime directory. Both enforce traversal containment themselves, so
//! the serving layer never has to reason about `..` or absolute paths.

use std::path::{Component, Path, PathBuf};

use async_trait::async_trait;
use include_dir::Dir;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AssetError {
    #[error("asset not found: {0}")]
    NotFound(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read-only hierarchical file tree holding a plugin's static content.
///
/// Implementations must reject path traversal (`..` components, absolute
/// paths) with [`AssetError::NotFound`].
#[async_trait]
pub trait AssetTree: Send + Sync {
    /// Resolve `path` (relative, `/`-separated) to the file's bytes.
    async fn read(&self, path: &str) -> Result<Vec<u8>, AssetError>;
}

/// Returns `true` when `path` stays inside the tree root.
///
/// Rejects absolute paths and any `..` component. Plain relative segments
/// (including `.`) are allowed.
fn is_contained(path: &str) -> bool {
    Path::new(path)
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}

// ─── Compile-time embedded tree ─────────────────────────────────────────

/// Asset tree over an `include_dir` embed.
///
/// This is the tree generated plugin modules construct: the plugin's
/// `dist/` directory is embedded into the binary at compile time.
pub struct EmbeddedAssets {
    dir: &'static Dir<'static>,
}

impl EmbeddedAssets {
    pub fn new(dir: &'static Dir<'static>) -> Self {
        Self { dir }
    }
}

#[async_trait]
impl AssetTree for EmbeddedAssets {
    async fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        if !is_contained(path) {
            return Err(AssetError::NotFound(path.to_string()));
        }

        self.dir
            .get_file(path)
            .map(|f| f.contents().to_vec())
            .ok_or_else(|| AssetError::NotFound(path.to_string()))
    }
}

// ─── Runtime directory tree ─────────────────────────────────────────────

/// Asset tree over a directory on disk, read at request time.
///
/// Useful during plugin development: the `dist/` directory can be rebuilt
/// without recompiling the host. Containment is enforced by canonicalizing
/// the resolved path and checking it stays under the canonical root.
pub struct DirAssets {
    root: PathBuf,
}

impl DirAssets {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl AssetTree for DirAssets {
    async fn read(&self, path: &str) -> Result<Vec<u8>, AssetError> {
        if !is_contained(path) {
            return Err(AssetError::NotFound(path.to_string()));
        }

        let file_path = self.root.join(path);

        // Canonicalize resolves symlinks, so a link escaping the root is
        // caught here as well.
        let canonical = file_path
            .canonicalize()
            .map_err(|_| AssetError::NotFound(path.to_string()))?;
        let root_canonical = self.root.canonicalize()?;
        if !canonical.starts_with(&root_canonical) {
            return Err(AssetError::NotFound(path.to_string()));
        }

        if !canonical.is_file() {
            return Err(AssetError::NotFound(path.to_string()));
        }

        match tokio::fs::read(&canonical).await {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AssetError::NotFound(path.to_string()))
            }
            Err(e) => Err(AssetError::Io(e)),
        }
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Containment checks ────────────────────────────────────────────

    #[test]
    fn test_is_contained_plain_paths() {
        assert!(is_contained("index.html"));
        assert!(is_contained("css/app.css"));
        assert!(is_contained("./index.html"));
    }

    #[test]
    fn test_is_contained_rejects_traversal() {
        assert!(!is_contained("../secret"));
        assert!(!is_contained("a/../../secret"));
        assert!(!is_contained("/etc/passwd"));
    }

    // ── DirAssets ─────────────────────────────────────────────────────

    async fn dir_tree() -> (tempfile::TempDir, DirAssets) {
        let tmp = tempfile::tempdir().unwrap();
        tokio::fs::write(tmp.path().join("index.html"), b"<h1>hi</h1>")
            .await
            .unwrap();
        tokio::fs::create_dir(tmp.path().join("css")).await.unwrap();
        tokio::fs::write(tmp.path().join("css/app.css"), b"body{}")
            .await
            .unwrap();
        let tree = DirAssets::new(tmp.path());
        (tmp, tree)
    }

    #[tokio::test]
    async fn test_dir_assets_read_hit() {
        let (_tmp, tree) = dir_tree().await;
        let bytes = tree.read("index.html").await.unwrap();
        assert_eq!(bytes, b"<h1>hi</h1>");
    }

    #[tokio::test]
    async fn test_dir_assets_read_nested() {
        let (_tmp, tree) = dir_tree().await;
        let bytes = tree.read("css/app.css").await.unwrap();
        assert_eq!(bytes, b"body{}");
    }

    #[tokio::test]
    async fn test_dir_assets_read_miss() {
        let (_tmp, tree) = dir_tree().await;
        let err = tree.read("no-such-file").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_dir_assets_rejects_traversal() {
        let tmp = tempfile::tempdir().unwrap();
        let inner = tmp.path().join("inner");
        tokio::fs::create_dir(&inner).await.unwrap();
        tokio::fs::write(tmp.path().join("outside.txt"), b"secret")
            .await
            .unwrap();

        let tree = DirAssets::new(&inner);
        let err = tree.read("../outside.txt").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_dir_assets_directory_is_not_a_file() {
        let (_tmp, tree) = dir_tree().await;
        let err = tree.read("css").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    // ── EmbeddedAssets ────────────────────────────────────────────────

    #[tokio::test]
    async fn test_embedded_assets_rejects_traversal() {
        static EMPTY: Dir<'_> = Dir::new("", &[]);
        let tree = EmbeddedAssets::new(&EMPTY);
        let err = tree.read("../x").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    #[tokio::test]
    async fn test_embedded_assets_miss() {
        static EMPTY: Dir<'_> = Dir::new("", &[]);
        let tree = EmbeddedAssets::new(&EMPTY);
        let err = tree.read("index.html").await.unwrap_err();
        assert!(matches!(err, AssetError::NotFound(_)));
    }

    // ── Error display ─────────────────────────────────────────────────

    #[test]
    fn test_asset_error_display() {
        let err = AssetError::NotFound("logo.png".into());
        assert_eq!(err.to_string(), "asset not found: logo.png");
    }
}
