use super::state::PlaybackState;
use crate::catalog::VideoCatalog;
use crate::error::{InvalidState, PlaybackError};
use crate::model::Video;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;

type Result<T> = std::result::Result<T, PlaybackError>;

/// Result of a successful `play`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayOutcome {
    /// The video now playing
    pub started: Video,

    /// The video that was active before, stopped implicitly.
    /// Set on a restart of the same video as well.
    pub stopped: Option<Video>,
}

/// Result of a successful `pause`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PauseOutcome {
    Paused(Video),
    AlreadyPaused(Video),
}

/// Snapshot of the active video
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NowPlaying<'a> {
    pub video: &'a Video,
    pub paused: bool,
}

/// Owns the playback state machine
pub struct PlaybackController<C: VideoCatalog> {
    catalog: Arc<C>,
    state: PlaybackState,
    rng: StdRng,
}

impl<C: VideoCatalog> PlaybackController<C> {
    /// Create a stopped controller with an entropy-seeded RNG
    pub fn new(catalog: Arc<C>) -> Self {
        Self {
            catalog,
            state: PlaybackState::Stopped,
            rng: StdRng::from_entropy(),
        }
    }

    /// Use a fixed seed so `play_random` is reproducible
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Play a video, stopping whatever was active first
    ///
    /// Playing the active video again restarts it.
    pub fn play(&mut self, video_id: &str) -> Result<PlayOutcome> {
        let started = self
            .catalog
            .get(video_id)
            .cloned()
            .ok_or_else(|| PlaybackError::NotFound(video_id.to_string()))?;

        let stopped = self.active_video().cloned();
        if let Some(ref previous) = stopped {
            log::debug!("Stopping {} before playing {}", previous.id, started.id);
        }

        self.state = PlaybackState::Playing(started.id.clone());
        log::debug!("Playback state: {:?}", self.state);

        Ok(PlayOutcome { started, stopped })
    }

    /// Play a uniformly random catalog video
    pub fn play_random(&mut self) -> Result<PlayOutcome> {
        let video_id = {
            let videos = self.catalog.list_all();
            if videos.is_empty() {
                return Err(PlaybackError::EmptyCatalog);
            }
            let index = self.rng.gen_range(0..videos.len());
            videos[index].id.clone()
        };

        log::debug!("Random pick: {}", video_id);
        self.play(&video_id)
    }

    /// Stop the active video
    pub fn stop(&mut self) -> Result<Video> {
        let video = self.require_active()?.clone();
        self.state = PlaybackState::Stopped;
        log::debug!("Playback state: {:?}", self.state);
        Ok(video)
    }

    /// Pause the active video; pausing twice reports `AlreadyPaused`
    pub fn pause(&mut self) -> Result<PauseOutcome> {
        let video = self.require_active()?.clone();

        if self.state.is_paused() {
            return Ok(PauseOutcome::AlreadyPaused(video));
        }

        self.state = PlaybackState::Paused(video.id.clone());
        log::debug!("Playback state: {:?}", self.state);
        Ok(PauseOutcome::Paused(video))
    }

    /// Resume a paused video
    pub fn resume(&mut self) -> Result<Video> {
        let video = self.require_active()?.clone();

        if !self.state.is_paused() {
            return Err(PlaybackError::InvalidState(InvalidState::NotPaused));
        }

        self.state = PlaybackState::Playing(video.id.clone());
        log::debug!("Playback state: {:?}", self.state);
        Ok(video)
    }

    /// The active video and whether it is paused, or `None` when stopped
    pub fn current(&self) -> Option<NowPlaying<'_>> {
        self.active_video().map(|video| NowPlaying {
            video,
            paused: self.state.is_paused(),
        })
    }

    fn active_video(&self) -> Option<&Video> {
        self.state.video_id().and_then(|id| self.catalog.get(id))
    }

    fn require_active(&self) -> Result<&Video> {
        self.active_video()
            .ok_or(PlaybackError::InvalidState(InvalidState::NothingPlaying))
    }
}
