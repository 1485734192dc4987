//! Line-oriented text driver for rookery games.

pub mod command;
pub mod error;
pub mod session;

pub use command::{Command, SessionOption, parse_command};
pub use error::CliError;
pub use session::{Session, SessionConfig};
