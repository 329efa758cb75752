//! Command-line front end: argument parsing, dispatch and terminal I/O

pub mod cli;
pub mod commands;
pub mod context;
pub mod prompt;

pub use cli::{Args, Command};
pub use commands::{Console, Dispatcher, Outcome, USAGE};
pub use context::AppContext;
