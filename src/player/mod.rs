//! Playback controller
//!
//! Tracks the single active video as a three-state machine
//! (stopped / playing / paused) over a shared video catalog.

mod controller;
mod state;

pub use controller::{NowPlaying, PauseOutcome, PlayOutcome, PlaybackController};
pub use state::PlaybackState;
