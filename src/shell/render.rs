//! User-facing text for every shell outcome

use super::CommandError;
use crate::error::{InvalidState, PlaybackError, PlaylistError};
use crate::model::{Playlist, Video};
use crate::player::{NowPlaying, PauseOutcome, PlayOutcome};

const HELP: &[&str] = &[
    "Available commands:",
    "  NUMBER_OF_VIDEOS - Shows how many videos are in the library.",
    "  SHOW_ALL_VIDEOS - Lists all videos from the library.",
    "  PLAY <video_id> - Plays specified video.",
    "  PLAY_RANDOM - Plays a random video from the library.",
    "  STOP - Stop the current video.",
    "  PAUSE - Pause the current video.",
    "  CONTINUE - Resume the current paused video.",
    "  SHOW_PLAYING - Displays the title, video_id, video tags and paused status of the video that is currently playing (or paused).",
    "  CREATE_PLAYLIST <playlist_name> - Creates a new (empty) playlist with the provided name.",
    "  ADD_TO_PLAYLIST <playlist_name> <video_id> - Adds the requested video to the playlist.",
    "  REMOVE_FROM_PLAYLIST <playlist_name> <video_id> - Removes the specified video from the specified playlist",
    "  CLEAR_PLAYLIST <playlist_name> - Removes all the videos from the playlist.",
    "  DELETE_PLAYLIST <playlist_name> - Deletes the playlist.",
    "  SHOW_PLAYLIST <playlist_name> - List all the videos in this playlist.",
    "  SHOW_ALL_PLAYLISTS - Display all the available playlists.",
    "  HELP - Displays help.",
    "  EXIT - Terminates the program execution.",
];

/// `Title (id) [#tag1 #tag2]`
pub fn video_line(video: &Video) -> String {
    format!("{} ({}) [{}]", video.title, video.id, video.tags.join(" "))
}

pub fn help() -> Vec<String> {
    HELP.iter().map(|line| line.to_string()).collect()
}

pub fn command_error(err: &CommandError) -> Vec<String> {
    let line = match err {
        CommandError::Unknown(_) => format!("{}. Type HELP for a list of commands", err),
        CommandError::Unsupported(command) => {
            format!("{} is not supported by this player", command)
        }
        CommandError::WrongArgs { .. } | CommandError::Empty => err.to_string(),
    };
    vec![line]
}

pub fn number_of_videos(count: usize) -> Vec<String> {
    vec![format!("{} videos in the library", count)]
}

pub fn all_videos(videos: &[&Video]) -> Vec<String> {
    let mut lines = vec!["Here's a list of all available videos:".to_string()];
    lines.extend(videos.iter().map(|v| format!("  {}", video_line(v))));
    lines
}

pub fn play(result: &Result<PlayOutcome, PlaybackError>) -> Vec<String> {
    match result {
        Ok(outcome) => {
            let mut lines = Vec::new();
            if let Some(ref stopped) = outcome.stopped {
                lines.push(format!("Stopping video: {}", stopped.title));
            }
            lines.push(format!("Playing video: {}", outcome.started.title));
            lines
        }
        Err(PlaybackError::EmptyCatalog) => vec!["No videos available".to_string()],
        Err(_) => vec!["Cannot play video: Video does not exist".to_string()],
    }
}

pub fn stop(result: &Result<Video, PlaybackError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Stopping video: {}", video.title)],
        Err(e) => vec![format!("Cannot stop video: {}", playback_reason(e))],
    }
}

pub fn pause(result: &Result<PauseOutcome, PlaybackError>) -> Vec<String> {
    match result {
        Ok(PauseOutcome::Paused(video)) => vec![format!("Pausing video: {}", video.title)],
        Ok(PauseOutcome::AlreadyPaused(video)) => {
            vec![format!("Video already paused: {}", video.title)]
        }
        Err(e) => vec![format!("Cannot pause video: {}", playback_reason(e))],
    }
}

pub fn resume(result: &Result<Video, PlaybackError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Continuing video: {}", video.title)],
        Err(e) => vec![format!("Cannot continue video: {}", playback_reason(e))],
    }
}

pub fn now_playing(current: Option<NowPlaying<'_>>) -> Vec<String> {
    match current {
        Some(now) => {
            let suffix = if now.paused { " - PAUSED" } else { "" };
            vec![format!("Currently playing: {}{}", video_line(now.video), suffix)]
        }
        None => vec!["No video is currently playing".to_string()],
    }
}

pub fn create_playlist(name: &str, result: &Result<(), PlaylistError>) -> Vec<String> {
    match result {
        Ok(()) => vec![format!("Successfully created new playlist: {}", name)],
        Err(e) => vec![format!("Cannot create playlist: {}", playlist_reason(e))],
    }
}

pub fn add_to_playlist(name: &str, result: &Result<Video, PlaylistError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Added video to {}: {}", name, video.title)],
        Err(e) => vec![format!("Cannot add video to {}: {}", name, playlist_reason(e))],
    }
}

pub fn remove_from_playlist(name: &str, result: &Result<Video, PlaylistError>) -> Vec<String> {
    match result {
        Ok(video) => vec![format!("Removed video from {}: {}", name, video.title)],
        Err(e) => vec![format!("Cannot remove video from {}: {}", name, playlist_reason(e))],
    }
}

pub fn clear_playlist(name: &str, result: &Result<(), PlaylistError>) -> Vec<String> {
    match result {
        Ok(()) => vec![format!("Successfully removed all videos from {}", name)],
        Err(e) => vec![format!("Cannot clear playlist {}: {}", name, playlist_reason(e))],
    }
}

pub fn delete_playlist(name: &str, result: &Result<Playlist, PlaylistError>) -> Vec<String> {
    match result {
        Ok(_) => vec![format!("Deleted playlist: {}", name)],
        Err(e) => vec![format!("Cannot delete playlist {}: {}", name, playlist_reason(e))],
    }
}

pub fn all_playlists(names: &[&str]) -> Vec<String> {
    if names.is_empty() {
        return vec!["No playlists exist yet".to_string()];
    }

    let mut lines = vec!["Showing all playlists:".to_string()];
    lines.extend(names.iter().map(|name| format!("  {}", name)));
    lines
}

pub fn playlist(name: &str, result: &Result<Vec<&Video>, PlaylistError>) -> Vec<String> {
    match result {
        Ok(videos) => {
            let mut lines = vec![format!("Showing playlist: {}", name)];
            if videos.is_empty() {
                lines.push("  No videos here yet".to_string());
            } else {
                lines.extend(videos.iter().map(|v| format!("  {}", video_line(v))));
            }
            lines
        }
        Err(e) => vec![format!("Cannot show playlist {}: {}", name, playlist_reason(e))],
    }
}

fn playback_reason(err: &PlaybackError) -> &'static str {
    match err {
        PlaybackError::NotFound(_) => "Video does not exist",
        PlaybackError::InvalidState(InvalidState::NothingPlaying) => {
            "No video is currently playing"
        }
        PlaybackError::InvalidState(InvalidState::NotPaused) => "Video is not paused",
        PlaybackError::EmptyCatalog => "No videos available",
    }
}

fn playlist_reason(err: &PlaylistError) -> &'static str {
    match err {
        PlaylistError::AlreadyExists(_) => "A playlist with the same name already exists",
        PlaylistError::PlaylistNotFound(_) => "Playlist does not exist",
        PlaylistError::VideoNotFound(_) => "Video does not exist",
        PlaylistError::DuplicateVideo { .. } => "Video already added",
        PlaylistError::VideoNotInPlaylist { .. } => "Video is not in playlist",
    }
}
