use crate::catalog::VideoCatalog;
use crate::error::PlaylistError;
use crate::model::{Playlist, Video};
use std::collections::HashMap;
use std::sync::Arc;

type Result<T> = std::result::Result<T, PlaylistError>;

/// Owns every playlist, keyed by its case-sensitive name
///
/// Each playlist keeps its own entries; a video appears at most once per
/// playlist.
pub struct PlaylistStore<C: VideoCatalog> {
    catalog: Arc<C>,
    playlists: HashMap<String, Playlist>,
}

impl<C: VideoCatalog> PlaylistStore<C> {
    /// Create an empty store
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            playlists: HashMap::new(),
        }
    }

    /// Create an empty playlist
    pub fn create(&mut self, name: &str) -> Result<()> {
        if self.playlists.contains_key(name) {
            return Err(PlaylistError::AlreadyExists(name.to_string()));
        }

        self.playlists
            .insert(name.to_string(), Playlist::new(name.to_string()));
        log::debug!("Created playlist {:?}", name);
        Ok(())
    }

    /// Append a catalog video to a playlist
    pub fn add_video(&mut self, name: &str, video_id: &str) -> Result<Video> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        let video = self
            .catalog
            .get(video_id)
            .ok_or_else(|| PlaylistError::VideoNotFound(video_id.to_string()))?;

        if playlist.contains(video_id) {
            return Err(PlaylistError::DuplicateVideo {
                playlist: name.to_string(),
                video_id: video_id.to_string(),
            });
        }

        playlist.add_video(video.id.clone());
        log::debug!("Added {} to playlist {:?} ({} videos)", video.id, name, playlist.len());
        Ok(video.clone())
    }

    /// Remove a video from a playlist
    pub fn remove_video(&mut self, name: &str, video_id: &str) -> Result<Video> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        if !playlist.remove_video(video_id) {
            return Err(PlaylistError::VideoNotInPlaylist {
                playlist: name.to_string(),
                video_id: video_id.to_string(),
            });
        }

        log::debug!("Removed {} from playlist {:?}", video_id, name);

        // Entries only ever reference catalog videos
        self.catalog
            .get(video_id)
            .cloned()
            .ok_or_else(|| PlaylistError::VideoNotFound(video_id.to_string()))
    }

    /// Remove every video from a playlist, keeping the playlist
    pub fn clear(&mut self, name: &str) -> Result<()> {
        let playlist = self
            .playlists
            .get_mut(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        playlist.clear();
        log::debug!("Cleared playlist {:?}", name);
        Ok(())
    }

    /// Delete a playlist entirely
    pub fn delete(&mut self, name: &str) -> Result<Playlist> {
        let playlist = self
            .playlists
            .remove(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        log::debug!("Deleted playlist {:?}", name);
        Ok(playlist)
    }

    /// Playlist names, alphabetical ignoring case
    pub fn list_all(&self) -> impl Iterator<Item = &str> + '_ {
        let mut names: Vec<&str> = self.playlists.keys().map(String::as_str).collect();
        names.sort_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        });
        names.into_iter()
    }

    /// Videos in a playlist, in insertion order
    pub fn show(&self, name: &str) -> Result<Vec<&Video>> {
        let playlist = self
            .playlists
            .get(name)
            .ok_or_else(|| PlaylistError::PlaylistNotFound(name.to_string()))?;

        Ok(playlist
            .video_ids()
            .filter_map(|id| self.catalog.get(id))
            .collect())
    }

    /// Number of playlists
    pub fn len(&self) -> usize {
        self.playlists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.playlists.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn store() -> PlaylistStore<Catalog> {
        let catalog = Catalog::from_videos(vec![
            Video::new("v1", "Cat video", vec![]),
            Video::new("v2", "Dog video", vec![]),
        ]);
        PlaylistStore::new(Arc::new(catalog))
    }

    fn ids(videos: Vec<&Video>) -> Vec<&str> {
        videos.into_iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_create_is_case_sensitive() {
        let mut store = store();
        store.create("A").unwrap();

        assert_eq!(
            store.create("A").unwrap_err(),
            PlaylistError::AlreadyExists("A".to_string())
        );
        store.create("a").unwrap();
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_add_video_errors() {
        let mut store = store();
        assert_eq!(
            store.add_video("nope", "v1").unwrap_err(),
            PlaylistError::PlaylistNotFound("nope".to_string())
        );

        store.create("pets").unwrap();
        assert_eq!(
            store.add_video("pets", "v9").unwrap_err(),
            PlaylistError::VideoNotFound("v9".to_string())
        );
        assert!(store.show("pets").unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_video_rejected() {
        let mut store = store();
        store.create("pets").unwrap();
        store.add_video("pets", "v1").unwrap();

        let err = store.add_video("pets", "v1").unwrap_err();
        assert!(matches!(err, PlaylistError::DuplicateVideo { .. }));
        assert_eq!(store.show("pets").unwrap().len(), 1);
    }

    #[test]
    fn test_playlists_are_isolated() {
        let mut store = store();
        store.create("cats").unwrap();
        store.create("dogs").unwrap();
        store.add_video("cats", "v1").unwrap();
        store.add_video("dogs", "v2").unwrap();
        store.add_video("dogs", "v1").unwrap();

        assert_eq!(ids(store.show("cats").unwrap()), vec!["v1"]);
        assert_eq!(ids(store.show("dogs").unwrap()), vec!["v2", "v1"]);
    }

    #[test]
    fn test_add_then_remove_leaves_empty() {
        let mut store = store();
        store.create("pets").unwrap();
        store.add_video("pets", "v2").unwrap();

        assert_eq!(store.remove_video("pets", "v2").unwrap().id, "v2");
        assert!(store.show("pets").unwrap().is_empty());
        assert!(matches!(
            store.remove_video("pets", "v2").unwrap_err(),
            PlaylistError::VideoNotInPlaylist { .. }
        ));
    }

    #[test]
    fn test_remove_from_unknown_playlist() {
        let mut store = store();
        assert_eq!(
            store.remove_video("nope", "v1").unwrap_err(),
            PlaylistError::PlaylistNotFound("nope".to_string())
        );
    }

    #[test]
    fn test_clear_keeps_playlist() {
        let mut store = store();
        store.create("pets").unwrap();
        store.add_video("pets", "v1").unwrap();
        store.add_video("pets", "v2").unwrap();

        store.clear("pets").unwrap();
        assert!(store.show("pets").unwrap().is_empty());
        assert_eq!(
            store.clear("other").unwrap_err(),
            PlaylistError::PlaylistNotFound("other".to_string())
        );
    }

    #[test]
    fn test_delete() {
        let mut store = store();
        store.create("pets").unwrap();
        store.add_video("pets", "v1").unwrap();

        let removed = store.delete("pets").unwrap();
        assert_eq!(removed.len(), 1);
        assert_eq!(
            store.show("pets").unwrap_err(),
            PlaylistError::PlaylistNotFound("pets".to_string())
        );
        assert!(store.delete("pets").is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_list_all_case_insensitive_order() {
        let mut store = store();
        assert_eq!(store.list_all().count(), 0);

        for name in ["beta", "Alpha", "alpha", "Gamma"] {
            store.create(name).unwrap();
        }

        let names: Vec<&str> = store.list_all().collect();
        assert_eq!(names, vec!["Alpha", "alpha", "beta", "Gamma"]);
        // Restartable
        assert_eq!(store.list_all().count(), 4);
    }
}
