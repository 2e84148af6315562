use std::str::FromStr;
use thiserror::Error;

/// A parsed shell command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    NumberOfVideos,
    ShowAllVideos,
    Play(String),
    PlayRandom,
    Stop,
    Pause,
    Continue,
    ShowPlaying,
    CreatePlaylist(String),
    AddToPlaylist(String, String),
    RemoveFromPlaylist(String, String),
    ClearPlaylist(String),
    DeletePlaylist(String),
    ShowAllPlaylists,
    ShowPlaylist(String),
    Help,
    Exit,
}

/// Why an input line could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    /// Recognised but not supported by this player
    #[error("Unsupported command: {0}")]
    Unsupported(String),

    #[error("{command} expects {expected} argument(s), got {got}")]
    WrongArgs {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("Empty command")]
    Empty,
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let keyword = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<String> = words.map(String::from).collect();

        let command = match keyword.to_uppercase().as_str() {
            "NUMBER_OF_VIDEOS" => expect_none("NUMBER_OF_VIDEOS", &args, Command::NumberOfVideos)?,
            "SHOW_ALL_VIDEOS" => expect_none("SHOW_ALL_VIDEOS", &args, Command::ShowAllVideos)?,
            "PLAY" => {
                let [id] = expect_args::<1>("PLAY", args)?;
                Command::Play(id)
            }
            "PLAY_RANDOM" => expect_none("PLAY_RANDOM", &args, Command::PlayRandom)?,
            "STOP" => expect_none("STOP", &args, Command::Stop)?,
            "PAUSE" => expect_none("PAUSE", &args, Command::Pause)?,
            "CONTINUE" => expect_none("CONTINUE", &args, Command::Continue)?,
            "SHOW_PLAYING" => expect_none("SHOW_PLAYING", &args, Command::ShowPlaying)?,
            "CREATE_PLAYLIST" => {
                let [name] = expect_args::<1>("CREATE_PLAYLIST", args)?;
                Command::CreatePlaylist(name)
            }
            "ADD_TO_PLAYLIST" => {
                let [name, id] = expect_args::<2>("ADD_TO_PLAYLIST", args)?;
                Command::AddToPlaylist(name, id)
            }
            "REMOVE_FROM_PLAYLIST" => {
                let [name, id] = expect_args::<2>("REMOVE_FROM_PLAYLIST", args)?;
                Command::RemoveFromPlaylist(name, id)
            }
            "CLEAR_PLAYLIST" => {
                let [name] = expect_args::<1>("CLEAR_PLAYLIST", args)?;
                Command::ClearPlaylist(name)
            }
            "DELETE_PLAYLIST" => {
                let [name] = expect_args::<1>("DELETE_PLAYLIST", args)?;
                Command::DeletePlaylist(name)
            }
            "SHOW_ALL_PLAYLISTS" => {
                expect_none("SHOW_ALL_PLAYLISTS", &args, Command::ShowAllPlaylists)?
            }
            "SHOW_PLAYLIST" => {
                let [name] = expect_args::<1>("SHOW_PLAYLIST", args)?;
                Command::ShowPlaylist(name)
            }
            "HELP" => Command::Help,
            "EXIT" => Command::Exit,
            "SEARCH_VIDEOS" | "SEARCH_VIDEOS_WITH_TAG" | "FLAG_VIDEO" | "ALLOW_VIDEO" => {
                return Err(CommandError::Unsupported(keyword.to_uppercase()));
            }
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        Ok(command)
    }
}

fn expect_none(command: &'static str, args: &[String], parsed: Command) -> Result<Command, CommandError> {
    if args.is_empty() {
        Ok(parsed)
    } else {
        Err(CommandError::WrongArgs {
            command,
            expected: 0,
            got: args.len(),
        })
    }
}

fn expect_args<const N: usize>(
    command: &'static str,
    args: Vec<String>,
) -> Result<[String; N], CommandError> {
    let got = args.len();
    args.try_into().map_err(|_| CommandError::WrongArgs {
        command,
        expected: N,
        got,
    })
}
