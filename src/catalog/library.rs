use super::parser::parse_catalog_str;
use super::VideoCatalog;
use crate::model::Video;
use std::collections::HashMap;

/// Catalog shipped with the binary, used when no catalog file is given
const BUILTIN_CATALOG: &str = include_str!("../../data/videos.txt");

/// In-memory video catalog
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// All videos indexed by their ID
    videos: HashMap<String, Video>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from a list of videos
    pub fn from_videos(videos: impl IntoIterator<Item = Video>) -> Self {
        let mut catalog = Self::new();
        for video in videos {
            catalog.add_video(video);
        }
        catalog
    }

    /// The bundled default catalog
    pub fn builtin() -> Self {
        match parse_catalog_str(BUILTIN_CATALOG) {
            Ok(videos) => Self::from_videos(videos),
            Err(e) => {
                log::error!("Bundled catalog is malformed: {:#}", e);
                Self::new()
            }
        }
    }

    /// Add a video, replacing any existing video with the same ID
    pub fn add_video(&mut self, video: Video) {
        if let Some(old) = self.videos.insert(video.id.clone(), video) {
            log::warn!("Duplicate video id {} replaced in catalog", old.id);
        }
    }
}

impl VideoCatalog for Catalog {
    fn get(&self, id: &str) -> Option<&Video> {
        self.videos.get(id)
    }

    fn list_all(&self) -> Vec<&Video> {
        let mut videos: Vec<&Video> = self.videos.values().collect();
        videos.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        videos
    }

    fn len(&self) -> usize {
        self.videos.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_creation() {
        let catalog = Catalog::new();
        assert_eq!(catalog.len(), 0);
        assert!(catalog.is_empty());
        assert!(catalog.list_all().is_empty());
    }

    #[test]
    fn test_add_video() {
        let mut catalog = Catalog::new();
        catalog.add_video(Video::new("v1", "Cat video", vec!["#cat".to_string()]));

        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("v1").unwrap().title, "Cat video");
        assert!(catalog.get("v2").is_none());
    }

    #[test]
    fn test_list_all_sorted_by_title_then_id() {
        let catalog = Catalog::from_videos(vec![
            Video::new("z", "Dog video", vec![]),
            Video::new("b", "Cat video", vec![]),
            Video::new("a", "Cat video", vec![]),
        ]);

        let ids: Vec<&str> = catalog.list_all().into_iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "z"]);
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 5);

        let nothing = catalog.get("nothing_video_id").unwrap();
        assert_eq!(nothing.title, "Video about nothing");
        assert!(nothing.tags.is_empty());

        let first = catalog.list_all()[0];
        assert_eq!(first.title, "Amazing Cats");
        assert_eq!(first.tags, vec!["#cat", "#animal"]);
    }
}
