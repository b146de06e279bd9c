//! Console command parsing
//!
//! One command per input line. Player commands map straight onto
//! [`PlayerCommand`]; the rest drive the simulated clock or the session.

use lilt_playback::{PlayerCommand, RepeatMode};
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  play | pause | toggle     control playback
  next | prev               skip forward or back
  select <n>                play track n (1-based)
  seek <fraction>           jump to a fraction of the track, 0.0 to 1.0
  mode [repeat|repeat_one|shuffle]
                            set the mode, or cycle it when no name is given
  tick [secs]               let the clock run (default 1, at most 86400)
  list                      show the playlist
  help                      show this text
  quit                      exit";

/// Longest clock run a single `tick` accepts (one day)
pub const MAX_TICK_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConsoleCommand {
    Player(PlayerCommand),
    /// Advance the simulated clock by whole seconds
    Tick(u64),
    List,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list)")]
    Unknown(String),

    #[error("'{0}' needs an argument")]
    MissingArgument(&'static str),

    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },
}

/// Parse one input line
///
/// Blank lines yield `Ok(None)`.
pub fn parse(line: &str) -> Result<Option<ConsoleCommand>, CommandError> {
    let mut words = line.split_whitespace();
    let Some(word) = words.next() else {
        return Ok(None);
    };
    let arg = words.next();

    let command = match word.to_lowercase().as_str() {
        "play" => ConsoleCommand::Player(PlayerCommand::Play),
        "pause" => ConsoleCommand::Player(PlayerCommand::Pause),
        "toggle" => ConsoleCommand::Player(PlayerCommand::TogglePlayback),
        "next" | "n" => ConsoleCommand::Player(PlayerCommand::Next),
        "prev" | "previous" | "p" => ConsoleCommand::Player(PlayerCommand::Previous),
        "select" => {
            let index = required("select", arg)?
                .parse::<usize>()
                .map_err(|e| invalid("select", e))?;
            ConsoleCommand::Player(PlayerCommand::Select { index })
        }
        "seek" => {
            let fraction = required("seek", arg)?
                .parse::<f64>()
                .map_err(|e| invalid("seek", e))?;
            ConsoleCommand::Player(PlayerCommand::SeekTo { fraction })
        }
        "mode" => match arg {
            None => ConsoleCommand::Player(PlayerCommand::CycleMode),
            Some(name) => {
                let mode = name.parse::<RepeatMode>().map_err(|e| invalid("mode", e))?;
                ConsoleCommand::Player(PlayerCommand::SetMode { mode })
            }
        },
        "tick" => match arg {
            None => ConsoleCommand::Tick(1),
            Some(secs) => {
                let secs: u64 = secs.parse().map_err(|e| invalid("tick", e))?;
                if secs > MAX_TICK_SECS {
                    return Err(invalid(
                        "tick",
                        format!("at most {} seconds per tick", MAX_TICK_SECS),
                    ));
                }
                ConsoleCommand::Tick(secs)
            }
        },
        "list" | "ls" => ConsoleCommand::List,
        "help" | "?" => ConsoleCommand::Help,
        "quit" | "exit" | "q" => ConsoleCommand::Quit,
        _ => return Err(CommandError::Unknown(word.to_string())),
    };

    Ok(Some(command))
}

fn required<'a>(command: &'static str, arg: Option<&'a str>) -> Result<&'a str, CommandError> {
    arg.ok_or(CommandError::MissingArgument(command))
}

fn invalid(command: &'static str, reason: impl ToString) -> CommandError {
    CommandError::InvalidArgument {
        command,
        reason: reason.to_string(),
    }
}
