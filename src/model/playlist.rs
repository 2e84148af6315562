use serde::{Deserialize, Serialize};

/// A named, ordered collection of catalog videos
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name (case-sensitive, fixed at creation)
    pub name: String,

    /// Playlist entries (ordered)
    pub entries: Vec<PlaylistEntry>,
}

/// Entry in a playlist, referencing a video by ID
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistEntry {
    /// Video ID (references Video::id)
    pub video_id: String,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(name: String) -> Self {
        Self {
            name,
            entries: Vec::new(),
        }
    }

    /// Append a video to this playlist
    pub fn add_video(&mut self, video_id: String) {
        self.entries.push(PlaylistEntry { video_id });
    }

    /// Remove the entry for `video_id`, returning whether one was present
    pub fn remove_video(&mut self, video_id: &str) -> bool {
        match self.position(video_id) {
            Some(index) => {
                self.entries.remove(index);
                true
            }
            None => false,
        }
    }

    /// Whether the playlist already references `video_id`
    pub fn contains(&self, video_id: &str) -> bool {
        self.position(video_id).is_some()
    }

    /// Drop every entry, keeping the playlist itself
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Video IDs in insertion order
    pub fn video_ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.video_id.as_str())
    }

    /// Number of videos in this playlist
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if playlist is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, video_id: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.video_id == video_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entries_keep_insertion_order() {
        let mut playlist = Playlist::new("mix".to_string());
        playlist.add_video("b".to_string());
        playlist.add_video("a".to_string());
        playlist.add_video("c".to_string());

        let ids: Vec<&str> = playlist.video_ids().collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
    }

    #[test]
    fn test_remove_video() {
        let mut playlist = Playlist::new("mix".to_string());
        playlist.add_video("a".to_string());
        playlist.add_video("b".to_string());

        assert!(playlist.remove_video("a"));
        assert!(!playlist.remove_video("a"));
        assert!(!playlist.contains("a"));
        assert_eq!(playlist.len(), 1);
    }

    #[test]
    fn test_clear_keeps_name() {
        let mut playlist = Playlist::new("mix".to_string());
        playlist.add_video("a".to_string());
        playlist.clear();

        assert!(playlist.is_empty());
        assert_eq!(playlist.name, "mix");
    }
}
