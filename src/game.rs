use crate::board::Board;
use crate::display_format::DisplayFormat;
use crate::location::{Location, Move};
use crate::piece::{Piece, PieceKind, Team};
use std::fmt::{Display, Formatter};

pub struct Game {
    board: Board,
    turn: Team,
    checks: [bool; 2],
    outcome: Option<Outcome>,
    last: Option<Move>,
    played: u32,
}

/// Terminal result, carrying the winning team. Stalemate is a loss for the
/// side that cannot move, not a draw.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    Checkmate(Team),
    Stalemate(Team),
}

impl Outcome {
    pub fn winner(&self) -> Team {
        match *self {
            Self::Checkmate(team) | Self::Stalemate(team) => team,
        }
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display {
        let general = |team| Piece::from_kind(PieceKind::General, team);
        let format = format.with_concise(false);
        match self {
            Self::Checkmate(winner) => format!(
                "{} won by checkmating {}",
                general(*winner).display(format),
                general(winner.opponent()).display(format),
            ),
            Self::Stalemate(winner) => format!(
                "{} won by stalemating {}",
                general(*winner).display(format),
                general(winner.opponent()).display(format),
            ),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::terse()))
    }
}

impl Game {
    pub fn new(mut board: Board, turn: Team) -> Self {
        let checks = [board.in_check(Team::Red), board.in_check(Team::Black)];
        let outcome = Self::classify(&mut board, turn, checks);
        Self {
            board,
            turn,
            checks,
            outcome,
            last: None,
            played: 0,
        }
    }

    pub fn opening() -> Self {
        Self::new(Board::opening(), Team::Red)
    }

    pub fn from_fen(fen: &str, turn: Team) -> Option<Self> {
        Some(Self::new(Board::from_fen(fen)?, turn))
    }

    pub fn fen(&self) -> (String, Team) {
        (self.board.fen(), self.turn)
    }

    /// Submits one move for the side to move. Returns false and leaves the
    /// game untouched if the game is over or the move is illegal; otherwise
    /// commits, flips the turn, recomputes both check flags, and classifies
    /// the opponent's predicament. The outcome, once set, never changes.
    pub fn play(&mut self, mv: Move) -> bool {
        if self.outcome.is_some() || !self.board.is_legal(self.turn, mv) {
            return false;
        }

        self.board.play(mv);
        self.turn = self.turn.opponent();
        self.last = Some(mv);
        self.played += 1;

        self.checks = [self.board.in_check(Team::Red), self.board.in_check(Team::Black)];
        self.outcome = Self::classify(&mut self.board, self.turn, self.checks);
        true
    }

    /// No legal move anywhere: checkmate if the stuck side is in check,
    /// stalemate otherwise. Either way the other side wins.
    fn classify(board: &mut Board, turn: Team, checks: [bool; 2]) -> Option<Outcome> {
        if board.has_any_legal_move(turn) {
            return None;
        }

        if checks[turn.index()] {
            Some(Outcome::Checkmate(turn.opponent()))
        } else {
            Some(Outcome::Stalemate(turn.opponent()))
        }
    }

    pub fn turn(&self) -> Team {
        self.turn
    }

    pub fn in_check(&self, team: Team) -> bool {
        self.checks[team.index()]
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn legal_moves(&mut self) -> Vec<Move> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        self.board.legal_moves(self.turn)
    }

    /// Where the piece on `from` may legally go this turn; empty unless the
    /// cell holds a piece of the side to move in an ongoing game.
    pub fn legal_destinations(&mut self, from: Location) -> Vec<Location> {
        if self.outcome.is_some() {
            return Vec::new();
        }
        let occupant = self.board[from];
        match occupant {
            Some(id) if self.board.piece(id).team() == self.turn => self.board.legal_destinations(id),
            _ => Vec::new(),
        }
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display {
        struct Impl<'a>(&'a Game, DisplayFormat);
        return Impl(self, format);

        impl Impl<'_> {
            fn format_row(&self, f: &mut Formatter<'_>, y: i8) -> std::fmt::Result {
                let &Self(game, format) = self;
                write!(f, "{y}")?;

                for x in 0..Board::WIDTH {
                    let location = Location::from_xy(x, y).unwrap();
                    if let Some(id) = game.board[location] {
                        let piece = game.board.piece(id).display(format.with_concise(true));
                        if format.effects && game.last.is_some_and(|mv| mv.to == location) {
                            write!(f, " \x1B[3m{piece}\x1B[0m")?;
                        } else {
                            write!(f, " {piece}")?;
                        }
                    } else if game.last.is_some_and(|mv| mv.from == location) {
                        write!(f, " ╶╴")?;
                    } else {
                        write!(f, "   ")?;
                    }
                }

                Ok(())
            }

            fn format_captured(&self, f: &mut Formatter<'_>, row: usize) -> std::fmt::Result {
                let &Self(game, format) = self;
                let captured: Vec<Piece> = game.board.captured().collect();
                if captured.is_empty() {
                    return Ok(());
                }

                const HEIGHT: usize = Board::HEIGHT as usize + 1;
                write!(f, " │   ")?;

                let red: Vec<Piece> = captured.iter().copied().filter(|piece| piece.team() == Team::Red).collect();
                let black = captured.iter().copied().filter(|piece| piece.team() == Team::Black);
                let pad = red.len().div_ceil(HEIGHT) * HEIGHT - red.len();
                let column = red
                    .into_iter()
                    .map(Some)
                    .chain(std::iter::repeat_n(None, pad))
                    .chain(black.map(Some))
                    .enumerate()
                    .filter_map(|(i, piece)| if i % HEIGHT == row { Some(piece) } else { None });

                for piece in column {
                    if let Some(piece) = piece {
                        write!(f, "{} ", piece.display(format.with_concise(true)))?;
                    } else {
                        write!(f, "   ")?;
                    }
                }

                Ok(())
            }
        }

        impl Display for Impl<'_> {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                let &Self(game, format) = self;
                write!(f, "{}", game.board.fen())?;

                if format.concise {
                    return write!(f, " {}", game.turn);
                }

                writeln!(f)?;

                for y in (0..Board::HEIGHT).rev() {
                    self.format_row(f, y)?;
                    self.format_captured(f, (Board::HEIGHT - y - 1) as usize)?;
                    writeln!(f)?;
                }

                for char in 'A'..='I' {
                    write!(f, "  {char}")?;
                }
                write!(f, " ")?;
                self.format_captured(f, Board::HEIGHT as usize)?;
                writeln!(f)?;

                if let Some(mv) = game.last
                    && let Some(id) = game.board[mv.to]
                {
                    let piece = game.board.piece(id).display(format.with_concise(true));
                    write!(f, "({}) {} {piece} - ", game.played, mv)?;
                }

                if let Some(outcome) = game.outcome {
                    write!(f, "{}", outcome.display(format))?;
                } else {
                    let general = Piece::from_kind(PieceKind::General, game.turn).display(format);
                    let status = if game.in_check(game.turn) { "in check" } else { "to play" };
                    write!(f, "{general} {status}")?;
                }

                writeln!(f)
            }
        }
    }
}

impl Display for Game {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::terse()))
    }
}
