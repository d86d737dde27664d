use crate::location::{Location, Move};
use crate::piece::{Piece, PieceKind, Team};
use std::fmt::Formatter;
use std::ops::Index;

/// Stable handle into the board's piece arena. A captured piece keeps its
/// identity and record; only its location is cleared.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct PieceId(u8);

#[derive(Clone)]
struct Record {
    piece: Piece,
    location: Option<Location>,
}

/// Cells and rosters store `PieceId`s into one arena, never piece values, so
/// a cell, its occupant's record, and the roster can never disagree about
/// ownership: `undo` restores locations and roster membership and nothing else.
#[derive(Clone)]
pub struct Board {
    cells: Vec<Option<PieceId>>,
    arena: Vec<Record>,
    rosters: [Vec<PieceId>; 2],
}

impl Board {
    pub const WIDTH: i8 = 9;
    pub const HEIGHT: i8 = 10;

    pub fn new() -> Self {
        Self {
            cells: vec![None; (Self::WIDTH * Self::HEIGHT) as usize],
            arena: Vec::new(),
            rosters: [Vec::new(), Vec::new()],
        }
    }

    pub fn from_fen(fen: &str) -> Option<Self> {
        let mut board = Self::new();
        let mut y = Self::HEIGHT - 1;
        let mut x = 0;

        for current in fen.chars() {
            match current {
                ' ' => break,
                '/' => {
                    if x != Self::WIDTH {
                        return None;
                    }
                    x = 0;
                    y -= 1;
                    if y < 0 {
                        return None;
                    }
                }
                '0'..='9' => x += current.to_digit(10).unwrap() as i8,
                _ => {
                    let piece = Piece::from_fen_char(current)?;
                    board.place(piece, Location::from_xy(x, y)?)?;
                    x += 1;
                }
            }
        }

        (y == 0 && x == Self::WIDTH).then_some(board)
    }

    pub fn opening() -> Self {
        Self::from_fen("rheakaehr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RHEAKAEHR").unwrap()
    }

    pub fn fen(&self) -> String {
        let mut result = String::new();
        for y in (0..Self::HEIGHT).rev() {
            let mut empty = 0;
            for x in 0..Self::WIDTH {
                match self[Location::from_xy(x, y).unwrap()] {
                    Some(id) => {
                        if empty > 0 {
                            result.push(char::from_digit(empty, 10).unwrap());
                            empty = 0;
                        }
                        result.push(self.piece(id).fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                result.push(char::from_digit(empty, 10).unwrap());
            }
            if y > 0 {
                result.push('/');
            }
        }
        result
    }

    /// Introduces a new piece on an empty cell, registering it in the arena
    /// and its team's roster. Returns `None` if the cell is occupied or the
    /// arena is full.
    pub fn place(&mut self, piece: Piece, location: Location) -> Option<PieceId> {
        if self[location].is_some() || self.arena.len() > u8::MAX as usize {
            return None;
        }

        let id = PieceId(self.arena.len() as u8);
        self.arena.push(Record { piece, location: Some(location) });
        self.rosters[piece.team().index()].push(id);
        self.cells[location.index()] = Some(id);
        Some(id)
    }

    pub fn get(&self, location: Location) -> Option<PieceId> {
        self.cells[location.index()]
    }

    pub fn piece(&self, id: PieceId) -> Piece {
        self.arena[id.0 as usize].piece
    }

    /// The cell a piece currently occupies, or `None` once it is captured.
    pub fn location(&self, id: PieceId) -> Option<Location> {
        self.arena[id.0 as usize].location
    }

    pub fn roster(&self, team: Team) -> &[PieceId] {
        &self.rosters[team.index()]
    }

    /// Pieces that have been captured, in arena order.
    pub fn captured(&self) -> impl Iterator<Item = Piece> + '_ {
        self.arena
            .iter()
            .filter(|record| record.location.is_none())
            .map(|record| record.piece)
    }

    pub fn find_general(&self, team: Team) -> Option<Location> {
        self.roster(team)
            .iter()
            .find(|&&id| self.piece(id).kind() == PieceKind::General)
            .and_then(|&id| self.location(id))
    }

    /// Moves the occupant of `mv.from` onto `mv.to`, returning it together
    /// with any capture. Must be paired with `undo` by exploratory callers;
    /// the board itself does not know whether a play is speculative.
    pub fn play(&mut self, mv: Move) -> (PieceId, Option<PieceId>) {
        let moved = self.cells[mv.from.index()].take();
        let moved = moved.expect("play on an empty cell");

        let captured = self.cells[mv.to.index()];
        if let Some(captured) = captured {
            let team = self.arena[captured.0 as usize].piece.team();
            self.arena[captured.0 as usize].location = None;
            let roster = &mut self.rosters[team.index()];
            let index = roster.iter().position(|&id| id == captured).unwrap();
            roster.remove(index);
        }

        self.cells[mv.to.index()] = Some(moved);
        self.arena[moved.0 as usize].location = Some(mv.to);
        (moved, captured)
    }

    /// Exact inverse of `play`: restores both cells, both locations, and the
    /// captured piece's roster membership.
    pub fn undo(&mut self, mv: Move, captured: Option<PieceId>) {
        let moved = self.cells[mv.to.index()].take();
        let moved = moved.expect("undo without a matching play");

        self.cells[mv.from.index()] = Some(moved);
        self.arena[moved.0 as usize].location = Some(mv.from);

        if let Some(captured) = captured {
            self.cells[mv.to.index()] = Some(captured);
            self.arena[captured.0 as usize].location = Some(mv.to);
            let team = self.arena[captured.0 as usize].piece.team();
            self.rosters[team.index()].push(captured);
        }
    }
}

impl Index<Location> for Board {
    type Output = Option<PieceId>;
    fn index(&self, index: Location) -> &Self::Output {
        &self.cells[index.index()]
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for y in (0..Self::HEIGHT).rev() {
            write!(f, "{y} ")?;
            for x in 0..Self::WIDTH {
                if let Some(id) = self[Location::from_xy(x, y).unwrap()] {
                    write!(f, "{} ", self.piece(id))?;
                } else {
                    write!(f, "   ")?;
                }
            }
            writeln!(f)?;
        }
        for char in 'A'..='I' {
            write!(f, "  {char}")?;
        }
        writeln!(f)
    }
}
