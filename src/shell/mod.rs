//! Text shell over the playback controller and playlist store
//!
//! `Command` parses one input line, `Shell` runs it against the core, and
//! `render` turns the structured outcome into the lines shown to the user.

mod command;
pub mod render;

pub use command::{Command, CommandError};

use crate::catalog::VideoCatalog;
use crate::player::PlaybackController;
use crate::playlist::PlaylistStore;
use std::sync::Arc;

/// One player session: a controller and a playlist store over one catalog
pub struct Shell<C: VideoCatalog> {
    catalog: Arc<C>,
    player: PlaybackController<C>,
    playlists: PlaylistStore<C>,
}

impl<C: VideoCatalog> Shell<C> {
    pub fn new(catalog: C) -> Self {
        let catalog = Arc::new(catalog);
        Self {
            player: PlaybackController::new(Arc::clone(&catalog)),
            playlists: PlaylistStore::new(Arc::clone(&catalog)),
            catalog,
        }
    }

    /// Seed random selection
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.player = self.player.with_seed(seed);
        self
    }

    pub fn player(&self) -> &PlaybackController<C> {
        &self.player
    }

    pub fn playlists(&self) -> &PlaylistStore<C> {
        &self.playlists
    }

    /// Parse and run one input line
    ///
    /// Returns `None` for `EXIT`, otherwise the output lines (possibly none
    /// for a blank line).
    pub fn run_line(&mut self, line: &str) -> Option<Vec<String>> {
        if line.trim().is_empty() {
            return Some(Vec::new());
        }

        match line.parse::<Command>() {
            Ok(Command::Exit) => None,
            Ok(command) => Some(self.execute(command)),
            Err(e) => {
                log::debug!("Rejected input {:?}: {}", line, e);
                Some(render::command_error(&e))
            }
        }
    }

    /// Run a parsed command and render its outcome
    pub fn execute(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::NumberOfVideos => render::number_of_videos(self.catalog.len()),
            Command::ShowAllVideos => render::all_videos(&self.catalog.list_all()),
            Command::Play(id) => render::play(&self.player.play(&id)),
            Command::PlayRandom => render::play(&self.player.play_random()),
            Command::Stop => render::stop(&self.player.stop()),
            Command::Pause => render::pause(&self.player.pause()),
            Command::Continue => render::resume(&self.player.resume()),
            Command::ShowPlaying => render::now_playing(self.player.current()),
            Command::CreatePlaylist(name) => {
                render::create_playlist(&name, &self.playlists.create(&name))
            }
            Command::AddToPlaylist(name, id) => {
                render::add_to_playlist(&name, &self.playlists.add_video(&name, &id))
            }
            Command::RemoveFromPlaylist(name, id) => {
                render::remove_from_playlist(&name, &self.playlists.remove_video(&name, &id))
            }
            Command::ClearPlaylist(name) => {
                render::clear_playlist(&name, &self.playlists.clear(&name))
            }
            Command::DeletePlaylist(name) => {
                render::delete_playlist(&name, &self.playlists.delete(&name))
            }
            Command::ShowAllPlaylists => {
                render::all_playlists(&self.playlists.list_all().collect::<Vec<_>>())
            }
            Command::ShowPlaylist(name) => render::playlist(&name, &self.playlists.show(&name)),
            Command::Help => render::help(),
            Command::Exit => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn shell() -> Shell<Catalog> {
        Shell::new(Catalog::builtin()).with_seed(1)
    }

    #[test]
    fn test_exit_ends_session() {
        let mut shell = shell();
        assert!(shell.run_line("exit").is_none());
        assert_eq!(shell.run_line("   "), Some(Vec::new()));
    }

    #[test]
    fn test_unknown_command() {
        let mut shell = shell();
        let out = shell.run_line("DANCE").unwrap();
        assert_eq!(out, vec!["Unknown command: DANCE. Type HELP for a list of commands"]);
    }

    #[test]
    fn test_play_and_show_playing() {
        let mut shell = shell();
        assert_eq!(
            shell.run_line("PLAY amazing_cats_video_id").unwrap(),
            vec!["Playing video: Amazing Cats"]
        );
        assert_eq!(
            shell.run_line("PLAY funny_dogs_video_id").unwrap(),
            vec!["Stopping video: Amazing Cats", "Playing video: Funny Dogs"]
        );
        shell.run_line("PAUSE");
        assert_eq!(
            shell.run_line("SHOW_PLAYING").unwrap(),
            vec!["Currently playing: Funny Dogs (funny_dogs_video_id) [#dog #animal] - PAUSED"]
        );
    }

    #[test]
    fn test_number_of_videos() {
        let mut shell = shell();
        assert_eq!(
            shell.run_line("NUMBER_OF_VIDEOS").unwrap(),
            vec!["5 videos in the library"]
        );
    }

    #[test]
    fn test_playlist_session() {
        let mut shell = shell();
        shell.run_line("CREATE_PLAYLIST mix");
        shell.run_line("ADD_TO_PLAYLIST mix nothing_video_id");

        assert_eq!(
            shell.run_line("SHOW_PLAYLIST mix").unwrap(),
            vec!["Showing playlist: mix", "  Video about nothing (nothing_video_id) []"]
        );
        assert_eq!(shell.playlists().len(), 1);
        assert!(shell.player().current().is_none());
    }
}
