use crate::board::Board;
use crate::piece::Team;
use std::fmt::Formatter;
use std::str::Chars;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct Location {
    x: i8,
    y: i8,
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub from: Location,
    pub to: Location,
}

impl Location {
    pub fn new() -> Self {
        Self { x: 0, y: 0 }
    }

    pub fn from_xy(x: i8, y: i8) -> Option<Self> {
        Self::new().shift_xy(x, y)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        if index > i8::MAX as usize {
            return None;
        }
        let x = index as i8 % Board::WIDTH;
        let y = index as i8 / Board::WIDTH;
        Self::from_xy(x, y)
    }

    pub fn from_chars(chars: &mut Chars<'_>) -> Option<Self> {
        let x = chars.next()?.to_ascii_uppercase() as u8;
        let y = chars.next()? as u8;
        Self::from_xy(x.wrapping_sub(b'A') as i8, y.wrapping_sub(b'0') as i8)
    }

    pub fn shift_x(&self, dx: i8) -> Option<Self> {
        let x = self.x + dx;
        if 0 > x || x >= Board::WIDTH {
            return None;
        }
        Some(Self { x, y: self.y })
    }

    pub fn shift_y(&self, dy: i8) -> Option<Self> {
        let y = self.y + dy;
        if 0 > y || y >= Board::HEIGHT {
            return None;
        }
        Some(Self { x: self.x, y })
    }

    pub fn shift_xy(&self, dx: i8, dy: i8) -> Option<Self> {
        self.shift_x(dx)?.shift_y(dy)
    }

    pub fn index(&self) -> usize {
        (self.x + self.y * Board::WIDTH) as usize
    }

    pub fn x(&self) -> i8 {
        self.x
    }

    pub fn y(&self) -> i8 {
        self.y
    }

    /// Whether this cell lies inside the 3x3 palace of the given team.
    pub fn in_palace(&self, team: Team) -> bool {
        let rows = match team {
            Team::Red => 0..=2,
            Team::Black => 7..=9,
        };
        (3..=5).contains(&self.x) && rows.contains(&self.y)
    }

    /// Whether this cell lies on the far side of the river for the given team.
    pub fn across_river(&self, team: Team) -> bool {
        match team {
            Team::Red => self.y >= 5,
            Team::Black => self.y <= 4,
        }
    }
}

impl std::str::FromStr for Location {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match Self::from_chars(&mut chars) {
            Some(location) if chars.next().is_none() => Ok(location),
            _ => Err(format!("'{s}' is not a location between a0 and i9")),
        }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.x as u8) as char, self.y)
    }
}

impl std::str::FromStr for Move {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let Some(from) = Location::from_chars(&mut chars)
            && let Some(to) = Location::from_chars(&mut chars)
            && chars.next().is_none()
        {
            Ok(Self { from, to })
        } else {
            Err(format!("'{s}' is not a move such as b2e2"))
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}
