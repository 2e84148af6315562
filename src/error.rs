//! Error types for playback and playlist operations
//!
//! Every variant is a recoverable outcome: a failed operation leaves the
//! controller or store exactly as it was.

use thiserror::Error;

/// Errors returned by the playback controller
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaybackError {
    /// Video id is not in the catalog
    #[error("Video not found: {0}")]
    NotFound(String),

    /// Operation is not legal in the current playback state
    #[error("Invalid playback state: {0}")]
    InvalidState(InvalidState),

    /// Random selection over a catalog with no videos
    #[error("Catalog is empty")]
    EmptyCatalog,
}

/// Why a playback operation was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidState {
    #[error("no video is currently playing")]
    NothingPlaying,

    #[error("video is not paused")]
    NotPaused,
}

/// Errors returned by the playlist store
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// A playlist with this exact name already exists
    #[error("Playlist already exists: {0}")]
    AlreadyExists(String),

    #[error("Playlist not found: {0}")]
    PlaylistNotFound(String),

    /// Video id is not in the catalog
    #[error("Video not found: {0}")]
    VideoNotFound(String),

    /// Video is already in the playlist
    #[error("Video {video_id} already in playlist {playlist}")]
    DuplicateVideo { playlist: String, video_id: String },

    #[error("Video {video_id} is not in playlist {playlist}")]
    VideoNotInPlaylist { playlist: String, video_id: String },
}
