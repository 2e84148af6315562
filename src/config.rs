//! Player configuration

use crate::catalog::{parse_catalog, Catalog};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Configuration for a player session
#[derive(Debug, Clone, Default)]
pub struct PlayerConfig {
    /// Catalog file to load (None = bundled catalog)
    pub catalog_path: Option<PathBuf>,

    /// Seed for random video selection (None = OS entropy)
    pub seed: Option<u64>,
}

impl PlayerConfig {
    /// Create a configuration using the bundled catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Load videos from a catalog file instead
    pub fn with_catalog(mut self, path: PathBuf) -> Self {
        self.catalog_path = Some(path);
        self
    }

    /// Make random selection reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the catalog this configuration points at
    pub fn load_catalog(&self) -> Result<Catalog> {
        match self.catalog_path {
            Some(ref path) => {
                // Expand ~ in paths
                let expanded = shellexpand::tilde(path.to_string_lossy().as_ref()).into_owned();
                let videos = parse_catalog(Path::new(&expanded))?;
                Ok(Catalog::from_videos(videos))
            }
            None => {
                log::debug!("No catalog file given, using bundled catalog");
                Ok(Catalog::builtin())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::VideoCatalog;

    #[test]
    fn test_default_uses_builtin_catalog() {
        let config = PlayerConfig::new();
        assert!(config.catalog_path.is_none());
        assert!(config.seed.is_none());
        assert_eq!(config.load_catalog().unwrap().len(), 5);
    }

    #[test]
    fn test_builder() {
        let config = PlayerConfig::new()
            .with_catalog(PathBuf::from("/tmp/videos.txt"))
            .with_seed(42);
        assert_eq!(config.catalog_path, Some(PathBuf::from("/tmp/videos.txt")));
        assert_eq!(config.seed, Some(42));
    }

    #[test]
    fn test_missing_catalog_file_is_error() {
        let config = PlayerConfig::new().with_catalog(PathBuf::from("/nonexistent/videos.txt"));
        let err = config.load_catalog().unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to open video catalog"));
    }
}
