//! Driver command parsing.

use rookery_core::{Color, PromotionPiece, Square};

use crate::error::CliError;

/// A `set` option with its new value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOption {
    /// Print the board after every accepted move.
    ShowBoard(bool),
    /// Render boards with Unicode figurines instead of letters.
    Unicode(bool),
}

/// A parsed driver command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `new` -- start a new game.
    New,
    /// `move e2e4` or `move e7e8n` -- make a move.
    Move {
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
    },
    /// `moves e2` -- list legal destinations of a piece.
    Moves(Square),
    /// `board` -- print the board.
    Board,
    /// `status` -- print side to move and game status.
    Status,
    /// `history` -- print the moves played so far.
    History,
    /// `flag white` -- the named side loses on time.
    Flag(Color),
    /// `set show_board true` -- change a session option.
    Set(SessionOption),
    /// `quit` -- leave the driver.
    Quit,
    /// Unrecognized command (reported and ignored).
    Unknown(String),
}

/// Parse a single line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Ok(Command::Unknown(String::new()));
    }

    match tokens[0] {
        "new" => Ok(Command::New),
        "board" => Ok(Command::Board),
        "status" => Ok(Command::Status),
        "history" => Ok(Command::History),
        "quit" | "exit" => Ok(Command::Quit),
        "move" => parse_move(argument(&tokens, "move")?),
        "moves" => Ok(Command::Moves(parse_square(argument(&tokens, "moves")?)?)),
        "flag" => parse_flag(argument(&tokens, "flag")?),
        "set" => parse_set(&tokens[1..]),
        _ => Ok(Command::Unknown(tokens[0].to_string())),
    }
}

fn argument<'a>(tokens: &[&'a str], command: &'static str) -> Result<&'a str, CliError> {
    tokens
        .get(1)
        .copied()
        .ok_or(CliError::MissingArgument { command })
}

fn parse_square(text: &str) -> Result<Square, CliError> {
    Square::from_algebraic(text).ok_or_else(|| CliError::InvalidSquare {
        text: text.to_string(),
    })
}

/// Parse coordinate notation: `e2e4`, with an optional promotion letter.
fn parse_move(text: &str) -> Result<Command, CliError> {
    let invalid = || CliError::InvalidMove {
        text: text.to_string(),
    };
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        return Err(invalid());
    }

    let from = Square::from_algebraic(&text[0..2]).ok_or_else(invalid)?;
    let to = Square::from_algebraic(&text[2..4]).ok_or_else(invalid)?;
    let promotion = match text[4..].chars().next() {
        Some(c) => Some(PromotionPiece::from_letter(c).ok_or_else(invalid)?),
        None => None,
    };

    Ok(Command::Move {
        from,
        to,
        promotion,
    })
}

fn parse_flag(text: &str) -> Result<Command, CliError> {
    text.parse::<Color>()
        .map(Command::Flag)
        .map_err(|_| CliError::InvalidColor {
            text: text.to_string(),
        })
}

/// Parse `set <option> <value>`.
fn parse_set(tokens: &[&str]) -> Result<Command, CliError> {
    let (Some(&name), Some(&value)) = (tokens.first(), tokens.get(1)) else {
        return Err(CliError::MissingArgument { command: "set" });
    };

    let option = match name {
        "show_board" => SessionOption::ShowBoard(parse_bool("show_board", value)?),
        "unicode" => SessionOption::Unicode(parse_bool("unicode", value)?),
        _ => {
            return Err(CliError::UnknownOption {
                name: name.to_string(),
            });
        }
    };
    Ok(Command::Set(option))
}

fn parse_bool(option: &'static str, value: &str) -> Result<bool, CliError> {
    match value {
        "true" | "on" => Ok(true),
        "false" | "off" => Ok(false),
        _ => Err(CliError::InvalidValue {
            option,
            value: value.to_string(),
        }),
    }
}
