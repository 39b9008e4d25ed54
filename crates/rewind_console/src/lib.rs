//! Terminal front end for rewind tic-tac-toe.
//!
//! Reads one command per line, forwards it to the history engine, and
//! prints the resulting view. All game decisions stay in
//! [`rewind_tictactoe`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod app;
pub mod cli;
pub mod command;
pub mod config;
pub mod render;

pub use app::{Console, Flow};
pub use cli::Cli;
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, ConsoleConfig};
pub use render::render;
