//! Video catalog
//!
//! The catalog is the read-only source of videos for both the playback
//! controller and the playlist store. `VideoCatalog` is the seam they depend
//! on; `Catalog` is the in-memory implementation, loaded either from a
//! catalog text file or from the bundled default list.

mod library;
mod parser;

pub use library::Catalog;
pub use parser::{parse_catalog, parse_catalog_str};

use crate::model::Video;

/// Read-only video lookup
pub trait VideoCatalog {
    /// Get a video by ID
    fn get(&self, id: &str) -> Option<&Video>;

    /// All videos, sorted by title then id
    fn list_all(&self) -> Vec<&Video>;

    /// Total number of videos
    fn len(&self) -> usize {
        self.list_all().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
