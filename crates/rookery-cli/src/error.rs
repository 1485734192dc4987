//! Driver errors.

/// Errors that can occur while reading and parsing driver input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// A command was given without a required argument.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command name.
        command: &'static str,
    },

    /// A square could not be parsed.
    #[error("invalid square: {text}")]
    InvalidSquare {
        /// The offending text.
        text: String,
    },

    /// A move was not of the form `e2e4` or `e7e8q`.
    #[error("invalid move: {text}")]
    InvalidMove {
        /// The offending text.
        text: String,
    },

    /// A color was neither `white` nor `black`.
    #[error("invalid color: {text}")]
    InvalidColor {
        /// The offending text.
        text: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name.
        name: String,
    },

    /// `set` was given a value the option cannot take.
    #[error("invalid value for {option}: {value}")]
    InvalidValue {
        /// The option name.
        option: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
