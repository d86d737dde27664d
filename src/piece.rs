use crate::display_format::DisplayFormat;
use std::fmt::{Display, Formatter};
use std::num::NonZeroI8;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Team {
    Red,
    Black,
}

impl Team {
    pub fn opponent(&self) -> Team {
        match self {
            Team::Red => Team::Black,
            Team::Black => Team::Red,
        }
    }

    /// The row direction this team's soldiers advance in.
    pub fn forward(&self) -> i8 {
        match self {
            Team::Red => 1,
            Team::Black => -1,
        }
    }

    pub fn index(&self) -> usize {
        match self {
            Team::Red => 0,
            Team::Black => 1,
        }
    }
}

impl Display for Team {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => write!(f, "red"),
            Team::Black => write!(f, "black"),
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
#[repr(i8)]
pub enum PieceKind {
    General,
    Advisor,
    Elephant,
    Horse,
    Rook,
    Cannon,
    Soldier,
}

/// A team and a kind packed into one byte: the magnitude encodes the kind,
/// the sign encodes the team (positive red, negative black).
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Piece {
    data: NonZeroI8,
}

impl Piece {
    pub fn from_fen_char(value: char) -> Option<Self> {
        let kind = match value.to_ascii_lowercase() {
            'k' => PieceKind::General,
            'a' => PieceKind::Advisor,
            'e' => PieceKind::Elephant,
            'h' => PieceKind::Horse,
            'r' => PieceKind::Rook,
            'c' => PieceKind::Cannon,
            'p' => PieceKind::Soldier,
            _ => return None,
        };

        let team = if value.is_ascii_uppercase() { Team::Red } else { Team::Black };
        Some(Self::from_kind(kind, team))
    }

    pub fn from_kind(kind: PieceKind, team: Team) -> Self {
        let data = NonZeroI8::new(kind as i8 + 1).unwrap();
        let data = match team {
            Team::Red => data,
            Team::Black => -data,
        };
        Self { data }
    }

    pub fn team(&self) -> Team {
        if self.data.is_positive() { Team::Red } else { Team::Black }
    }

    pub fn kind(&self) -> PieceKind {
        let data = self.data.abs().get() - 1;
        unsafe { std::mem::transmute(data) }
    }

    pub fn fen_char(&self) -> char {
        let result = match self.kind() {
            PieceKind::General => 'k',
            PieceKind::Advisor => 'a',
            PieceKind::Elephant => 'e',
            PieceKind::Horse => 'h',
            PieceKind::Rook => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Soldier => 'p',
        };
        match self.team() {
            Team::Red => result.to_ascii_uppercase(),
            Team::Black => result,
        }
    }

    pub fn chinese_char(&self) -> char {
        match (self.team(), self.kind()) {
            (Team::Red, PieceKind::General) => '帥',
            (Team::Red, PieceKind::Advisor) => '仕',
            (Team::Red, PieceKind::Elephant) => '相',
            (Team::Red, PieceKind::Horse) => '傌',
            (Team::Red, PieceKind::Rook) => '俥',
            (Team::Red, PieceKind::Cannon) => '炮',
            (Team::Red, PieceKind::Soldier) => '兵',
            (Team::Black, PieceKind::General) => '將',
            (Team::Black, PieceKind::Advisor) => '士',
            (Team::Black, PieceKind::Elephant) => '象',
            (Team::Black, PieceKind::Horse) => '馬',
            (Team::Black, PieceKind::Rook) => '車',
            (Team::Black, PieceKind::Cannon) => '砲',
            (Team::Black, PieceKind::Soldier) => '卒',
        }
    }

    pub fn display(&self, format: DisplayFormat) -> impl Display + use<> {
        let s = if format.chinese {
            self.chinese_char().to_string()
        } else {
            let c = self.fen_char();
            format!("{c}{c}")
        };
        if format.effects && self.team() == Team::Red {
            format!("\x1B[31m{}\x1b[0m", s)
        } else {
            s
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display(DisplayFormat::terse()))
    }
}
