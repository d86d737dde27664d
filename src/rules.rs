use crate::board::{Board, PieceId};
use crate::location::{Location, Move};
use crate::piece::Team;

impl Board {
    /// Whether the team's general is currently attacked. Pure query: either
    /// the flying-general sightline is open, or some opposing piece's
    /// candidate set covers the general's cell. Scans the opposing roster
    /// and stops at the first attacker; only existence matters.
    pub fn in_check(&self, team: Team) -> bool {
        let Some(general) = self.find_general(team) else {
            return false;
        };

        if self.flying_general() {
            return true;
        }

        self.roster(team.opponent())
            .iter()
            .any(|&id| self.candidates(id).contains(&general))
    }

    /// Both generals on the same file with every cell between them empty.
    /// Neither general's own movement grammar can ever produce this threat
    /// (each is confined to its palace), so it is a standalone geometry
    /// predicate rather than part of candidate generation.
    fn flying_general(&self) -> bool {
        let Some(red) = self.find_general(Team::Red) else {
            return false;
        };
        let Some(black) = self.find_general(Team::Black) else {
            return false;
        };

        red.x() == black.x()
            && (red.y() + 1..black.y())
                .all(|y| self[Location::from_xy(red.x(), y).unwrap()].is_none())
    }

    /// The full legality gate: the mover must own the piece, the destination
    /// must not hold a friendly piece, must be a candidate, and playing the
    /// move must not leave the mover's own general in check. The self-check
    /// test simulates with a strictly paired `play`/`undo`, so the board is
    /// unchanged when this returns.
    pub fn is_legal(&mut self, team: Team, mv: Move) -> bool {
        let Some(id) = self[mv.from] else {
            return false;
        };
        if self.piece(id).team() != team {
            return false;
        }
        if let Some(target) = self[mv.to]
            && self.piece(target).team() == team
        {
            return false;
        }
        if !self.candidates(id).contains(&mv.to) {
            return false;
        }

        let (_, captured) = self.play(mv);
        let check = self.in_check(team);
        self.undo(mv, captured);
        !check
    }

    /// The subset of a piece's candidates that survive the legality gate.
    pub fn legal_destinations(&mut self, id: PieceId) -> Vec<Location> {
        let Some(from) = self.location(id) else {
            return Vec::new();
        };
        let team = self.piece(id).team();

        self.candidates(id)
            .into_iter()
            .filter(|&to| self.is_legal(team, Move { from, to }))
            .collect()
    }

    /// The exhaustive end-of-game search: every roster piece, every
    /// candidate, each tried with an apply-then-revert simulation. Returns
    /// at the first legal move found; checkmate/stalemate classification
    /// only needs existence, never the full set.
    pub fn has_any_legal_move(&mut self, team: Team) -> bool {
        let ids = self.roster(team).to_vec();
        ids.into_iter().any(|id| {
            let Some(from) = self.location(id) else {
                return false;
            };
            self.candidates(id)
                .into_iter()
                .any(|to| self.is_legal(team, Move { from, to }))
        })
    }

    /// All legal moves for one team. Not used by outcome classification
    /// (which only needs `has_any_legal_move`); this serves callers that
    /// genuinely want the list, such as interactive hints and self-play.
    pub fn legal_moves(&mut self, team: Team) -> Vec<Move> {
        let ids = self.roster(team).to_vec();
        ids.into_iter()
            .flat_map(|id| {
                let Some(from) = self.location(id) else {
                    return Vec::new();
                };
                let destinations = self.legal_destinations(id);
                destinations.into_iter().map(|to| Move { from, to }).collect()
            })
            .collect()
    }
}
