//! Data model shared by the catalog, the playback controller and the
//! playlist store.

mod playlist;
mod video;

pub use playlist::{Playlist, PlaylistEntry};
pub use video::Video;
