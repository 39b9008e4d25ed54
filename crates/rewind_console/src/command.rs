//! Parsing of console input lines into game intents.

use derive_more::Display;
use std::str::FromStr;

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Place the next mark on a cell index.
    Place(usize),
    /// Jump to a recorded step.
    Jump(usize),
    /// Flip the move-list order.
    Toggle,
    /// Start over with a fresh game.
    New,
    /// Redraw the current view.
    Show,
    /// Print the command summary.
    Help,
    /// Leave the console.
    Quit,
}

/// Why an input line was not understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum CommandError {
    /// Nothing was typed.
    #[display("empty command")]
    Empty,
    /// The first word is not a command.
    #[display("unknown command '{}'", _0)]
    Unknown(String),
    /// The command needs a number after it.
    #[display("'{}' needs a number", _0)]
    MissingArgument(&'static str),
    /// The argument is not a non-negative integer.
    #[display("'{}' is not a number", _0)]
    BadArgument(String),
    /// More words than the command takes.
    #[display("too many arguments for '{}'", _0)]
    TooManyArguments(&'static str),
}

impl std::error::Error for CommandError {}

/// Summary printed by `help`.
pub const HELP: &str = "\
commands:
  place <0-8>   (p)  mark a cell, numbered left to right, top to bottom
  jump <step>   (j)  go back or forward to a step from the move list
  toggle        (t)  flip the move list between ascending and descending
  new           (n)  start a fresh game
  show          (s)  redraw the board
  help          (h)  this text
  quit          (q)  leave";

fn number(name: &'static str, arg: Option<&str>) -> Result<usize, CommandError> {
    let arg = arg.ok_or(CommandError::MissingArgument(name))?;
    arg.parse()
        .map_err(|_| CommandError::BadArgument(arg.to_string()))
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let head = words.next().ok_or(CommandError::Empty)?.to_lowercase();

        let (name, command) = match head.as_str() {
            "place" | "p" => ("place", Command::Place(number("place", words.next())?)),
            "jump" | "j" => ("jump", Command::Jump(number("jump", words.next())?)),
            "toggle" | "t" => ("toggle", Command::Toggle),
            "new" | "n" => ("new", Command::New),
            "show" | "s" => ("show", Command::Show),
            "help" | "h" | "?" => ("help", Command::Help),
            "quit" | "q" | "exit" => ("quit", Command::Quit),
            _ => return Err(CommandError::Unknown(head)),
        };

        match words.next() {
            Some(_) => Err(CommandError::TooManyArguments(name)),
            None => Ok(command),
        }
    }
}
