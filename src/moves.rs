use crate::board::{Board, PieceId};
use crate::location::Location;
use crate::piece::{PieceKind, Team};

const ORTHOGONAL: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
const DIAGONAL: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

impl Board {
    /// Every destination consistent with the piece's movement grammar and
    /// path blocking, on the current board. Destinations occupied by either
    /// team are included; the legality gate filters self-captures and
    /// self-check, so the same sets serve move generation and attack
    /// detection. A captured piece has no candidates.
    pub fn candidates(&self, id: PieceId) -> Vec<Location> {
        let Some(from) = self.location(id) else {
            return Vec::new();
        };
        let team = self.piece(id).team();

        match self.piece(id).kind() {
            PieceKind::General => self.general_candidates(from, team),
            PieceKind::Advisor => self.advisor_candidates(from, team),
            PieceKind::Elephant => self.elephant_candidates(from, team),
            PieceKind::Horse => self.horse_candidates(from),
            PieceKind::Rook => self.rook_candidates(from),
            PieceKind::Cannon => self.cannon_candidates(from),
            PieceKind::Soldier => self.soldier_candidates(from, team),
        }
    }

    fn general_candidates(&self, from: Location, team: Team) -> Vec<Location> {
        ORTHOGONAL
            .iter()
            .filter_map(|&(dx, dy)| from.shift_xy(dx, dy))
            .filter(|to| to.in_palace(team))
            .collect()
    }

    fn advisor_candidates(&self, from: Location, team: Team) -> Vec<Location> {
        DIAGONAL
            .iter()
            .filter_map(|&(dx, dy)| from.shift_xy(dx, dy))
            .filter(|to| to.in_palace(team))
            .collect()
    }

    /// Two diagonal steps, never across the river, and only when the
    /// intervening cell (the elephant's eye) is empty.
    fn elephant_candidates(&self, from: Location, team: Team) -> Vec<Location> {
        DIAGONAL
            .iter()
            .filter_map(|&(dx, dy)| {
                let eye = from.shift_xy(dx, dy)?;
                if self[eye].is_some() {
                    return None;
                }
                let to = from.shift_xy(dx * 2, dy * 2)?;
                (!to.across_river(team)).then_some(to)
            })
            .collect()
    }

    /// One orthogonal step then one diagonal step outward; only the
    /// orthogonal leg can be blocked.
    fn horse_candidates(&self, from: Location) -> Vec<Location> {
        let mut result = Vec::new();
        for (dx, dy) in ORTHOGONAL {
            let Some(leg) = from.shift_xy(dx, dy) else {
                continue;
            };
            if self[leg].is_some() {
                continue;
            }

            let sides = if dx == 0 { [(1, dy * 2), (-1, dy * 2)] } else { [(dx * 2, 1), (dx * 2, -1)] };
            result.extend(sides.iter().filter_map(|&(dx, dy)| from.shift_xy(dx, dy)));
        }
        result
    }

    fn rook_candidates(&self, from: Location) -> Vec<Location> {
        let mut result = Vec::new();
        for (dx, dy) in ORTHOGONAL {
            let mut current = from;
            while let Some(to) = current.shift_xy(dx, dy) {
                result.push(to);
                if self[to].is_some() {
                    break;
                }
                current = to;
            }
        }
        result
    }

    /// Slides like a rook on empty cells but cannot capture the first piece
    /// it meets; past exactly one screen, the next piece met is the only
    /// further destination.
    fn cannon_candidates(&self, from: Location) -> Vec<Location> {
        let mut result = Vec::new();
        for (dx, dy) in ORTHOGONAL {
            let mut screen = false;
            let mut current = from;
            while let Some(to) = current.shift_xy(dx, dy) {
                match (self[to].is_some(), screen) {
                    (false, false) => result.push(to),
                    (false, true) => {}
                    (true, false) => screen = true,
                    (true, true) => {
                        result.push(to);
                        break;
                    }
                }
                current = to;
            }
        }
        result
    }

    /// Forward only until the river is crossed, then forward or sideways.
    /// Never backward.
    fn soldier_candidates(&self, from: Location, team: Team) -> Vec<Location> {
        let mut result = Vec::new();
        result.extend(from.shift_y(team.forward()));
        if from.across_river(team) {
            result.extend(from.shift_x(1));
            result.extend(from.shift_x(-1));
        }
        result
    }
}
