//! The read-eval loop driving one game at a time.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use rookery_core::{Color, Game, PromotionPiece, Square};

use crate::command::{Command, SessionOption, parse_command};
use crate::error::CliError;

/// Display settings adjustable via `set`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionConfig {
    /// Print the board after every accepted move.
    pub show_board: bool,
    /// Use Unicode figurines when printing the board.
    pub unicode: bool,
}

/// A driver session: the current game plus display settings.
pub struct Session {
    game: Game,
    config: SessionConfig,
}

impl Session {
    /// Create a session with a fresh game.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            game: Game::new(),
            config,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn config(&self) -> SessionConfig {
        self.config
    }

    /// Read commands from `input` until `quit` or end of input, writing
    /// responses to `output`.
    ///
    /// Bad commands are reported and skipped. Only I/O failures end the loop
    /// early.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<(), CliError> {
        for line in input.lines() {
            let line = line?;
            let trimmed = line.trim();
            if trimmed.is_empty() {
                continue;
            }
            debug!(cmd = %trimmed, "received command");

            match parse_command(trimmed) {
                Ok(Command::Quit) => break,
                Ok(cmd) => self.dispatch(cmd, &mut output)?,
                Err(e) => {
                    warn!(error = %e, "command parse error");
                    writeln!(output, "error: {e}")?;
                }
            }
            output.flush()?;
        }

        info!("session closed");
        Ok(())
    }

    fn dispatch<W: Write>(&mut self, cmd: Command, out: &mut W) -> Result<(), CliError> {
        match cmd {
            Command::New => self.handle_new(out),
            Command::Move {
                from,
                to,
                promotion,
            } => self.handle_move(from, to, promotion, out),
            Command::Moves(square) => self.handle_moves(square, out),
            Command::Board => self.print_board(out),
            Command::Status => self.handle_status(out),
            Command::History => self.handle_history(out),
            Command::Flag(color) => self.handle_flag(color, out),
            Command::Set(option) => self.handle_set(option, out),
            Command::Quit => Ok(()),
            Command::Unknown(name) => {
                writeln!(out, "unknown command: {name}")?;
                Ok(())
            }
        }
    }

    fn handle_new<W: Write>(&mut self, out: &mut W) -> Result<(), CliError> {
        self.game.start_new_game();
        writeln!(out, "new game, white to move")?;
        if self.config.show_board {
            self.print_board(out)?;
        }
        Ok(())
    }

    fn handle_move<W: Write>(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PromotionPiece>,
        out: &mut W,
    ) -> Result<(), CliError> {
        let promotion = promotion.unwrap_or_default();
        let report = match self.game.make_move_with_promotion(from, to, promotion) {
            Ok(report) => report,
            Err(e) => {
                writeln!(out, "error: {e}")?;
                return Ok(());
            }
        };

        if let Some(record) = self.game.history().last() {
            writeln!(out, "{}. {record} ({})", record.sequence(), report.kind)?;
        }
        if self.config.show_board {
            self.print_board(out)?;
        }
        if report.status.is_over() {
            writeln!(out, "game over: {}", report.status)?;
        } else if report.is_check {
            writeln!(out, "check")?;
        }
        Ok(())
    }

    fn handle_moves<W: Write>(&self, square: Square, out: &mut W) -> Result<(), CliError> {
        let dests = self.game.valid_moves(square);
        if dests.is_empty() {
            writeln!(out, "{square}: no legal moves")?;
        } else {
            let list: Vec<String> = dests.iter().map(Square::to_string).collect();
            writeln!(out, "{square}: {}", list.join(" "))?;
        }
        Ok(())
    }

    fn print_board<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let board = self.game.board();
        if self.config.unicode {
            writeln!(out, "{}", board.pretty_unicode())?;
        } else {
            writeln!(out, "{}", board.pretty())?;
        }
        Ok(())
    }

    fn handle_status<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let state = self.game.state();
        if state.is_game_over {
            writeln!(out, "game over: {}", state.status)?;
        } else if state.is_check {
            writeln!(out, "{} to move, in check", state.side_to_move)?;
        } else {
            writeln!(out, "{} to move", state.side_to_move)?;
        }
        Ok(())
    }

    fn handle_history<W: Write>(&self, out: &mut W) -> Result<(), CliError> {
        let history = self.game.history();
        if history.is_empty() {
            writeln!(out, "no moves yet")?;
            return Ok(());
        }
        for pair in history.chunks(2) {
            let number = pair[0].sequence().div_ceil(2);
            match pair {
                [white, black] => writeln!(out, "{number}. {white} {black}")?,
                [white] => writeln!(out, "{number}. {white}")?,
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_flag<W: Write>(&mut self, color: Color, out: &mut W) -> Result<(), CliError> {
        if self.game.status().is_over() {
            writeln!(out, "game already over: {}", self.game.status())?;
            return Ok(());
        }
        self.game.end_game_by_time(color);
        writeln!(out, "game over: {}", self.game.status())?;
        Ok(())
    }

    fn handle_set<W: Write>(&mut self, option: SessionOption, out: &mut W) -> Result<(), CliError> {
        match option {
            SessionOption::ShowBoard(on) => {
                self.config.show_board = on;
                writeln!(out, "show_board = {on}")?;
            }
            SessionOption::Unicode(on) => {
                self.config.unicode = on;
                writeln!(out, "unicode = {on}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(script: &str, config: SessionConfig) -> (Session, String) {
        let mut session = Session::new(config);
        let mut out = Vec::new();
        session.run(script.as_bytes(), &mut out).unwrap();
        (session, String::from_utf8(out).unwrap())
    }

    #[test]
    fn plays_moves_and_reports_them() {
        let (session, out) = run("move e2e4\nmove e7e5\nstatus\n", SessionConfig::default());
        assert_eq!(session.game().history().len(), 2);
        assert!(out.contains("1. e2e4 (normal)"));
        assert!(out.contains("2. e7e5 (normal)"));
        assert!(out.ends_with("white to move\n"));
    }

    #[test]
    fn errors_do_not_end_the_session() {
        let (session, out) = run(
            "move e2e5\nfrobnicate\nmove e2\nmove e2e4\n",
            SessionConfig::default(),
        );
        assert!(out.contains("error: e2 to e5 is not a legal move"));
        assert!(out.contains("unknown command: frobnicate"));
        assert!(out.contains("error: invalid move: e2"));
        assert_eq!(session.game().history().len(), 1);
    }

    #[test]
    fn quit_stops_reading() {
        let (session, _) = run("move e2e4\nquit\nmove e7e5\n", SessionConfig::default());
        assert_eq!(session.game().history().len(), 1);
    }

    #[test]
    fn lists_destinations() {
        let (_, out) = run("moves g1\nmoves e4\n", SessionConfig::default());
        assert!(out.contains("g1: f3 h3"));
        assert!(out.contains("e4: no legal moves"));
    }

    #[test]
    fn fools_mate_ends_the_game() {
        let (session, out) = run(
            "move f2f3\nmove e7e5\nmove g2g4\nmove d8h4\nmove e2e4\nhistory\n",
            SessionConfig::default(),
        );
        assert!(out.contains("4. d8h4# (normal)"));
        assert!(out.contains("game over: checkmate, black wins"));
        assert!(out.contains("error: the game is already over"));
        assert!(out.contains("1. f2f3 e7e5\n2. g2g4 d8h4#\n"));
        assert!(session.game().status().is_over());
    }

    #[test]
    fn flag_and_new_game() {
        let (session, out) = run("flag white\nflag black\nnew\n", SessionConfig::default());
        assert!(out.contains("game over: time expired, black wins"));
        assert!(out.contains("game already over"));
        assert!(!session.game().status().is_over());
    }

    #[test]
    fn set_changes_config_and_board_rendering() {
        let (session, out) = run(
            "set show_board true\nset unicode on\nmove e2e4\n",
            SessionConfig::default(),
        );
        assert_eq!(
            session.config(),
            SessionConfig {
                show_board: true,
                unicode: true,
            }
        );
        assert!(out.contains("show_board = true"));
        assert!(out.contains('♔'));
    }

    #[test]
    fn board_prints_letters_by_default() {
        let (_, out) = run("board\n", SessionConfig::default());
        assert!(out.starts_with("8  r n b q k b n r\n"));
        assert!(out.contains("   a b c d e f g h"));
    }
}
