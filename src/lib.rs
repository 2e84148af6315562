//! Video Player - in-memory video playback and playlist manager
//!
//! A playback controller and a playlist store share one read-only video
//! catalog. Both return structured outcomes; the `shell` module renders them
//! as text for the command-line front end.

pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod player;
pub mod playlist;
pub mod shell;

pub use catalog::{Catalog, VideoCatalog};
pub use config::PlayerConfig;
pub use error::{InvalidState, PlaybackError, PlaylistError};
pub use player::{PlaybackController, PlaybackState};
pub use playlist::PlaylistStore;
pub use shell::Shell;
