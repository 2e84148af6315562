//! Named playlists over the video catalog

mod store;

pub use store::PlaylistStore;
