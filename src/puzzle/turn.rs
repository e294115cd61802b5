use enum_map::EnumMap;
use log::{debug, warn};
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::puzzle::common::rotate_point;
use crate::puzzle::cube::{Face, Facelet};
use crate::puzzle::state::{CubeState, FaceletState, PieceState};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    /// `R`
    Plain,
    /// `R'`
    Prime,
    /// `R2`
    Double,
}

impl Modifier {
    pub fn quarter_turns(&self) -> u8 {
        match self {
            Modifier::Plain => 1,
            Modifier::Double => 2,
            Modifier::Prime => 3,
        }
    }

    pub fn from_quarter_turns(turns: u8) -> Option<Modifier> {
        match turns % 4 {
            1 => Some(Modifier::Plain),
            2 => Some(Modifier::Double),
            3 => Some(Modifier::Prime),
            _ => None,
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Modifier::Plain => "",
            Modifier::Prime => "'",
            Modifier::Double => "2",
        }
    }

    pub fn from_suffix(suffix: &str) -> Option<Modifier> {
        match suffix {
            "" => Some(Modifier::Plain),
            "'" => Some(Modifier::Prime),
            "2" => Some(Modifier::Double),
            _ => None,
        }
    }

    pub fn inverse(&self) -> Modifier {
        match self {
            Modifier::Plain => Modifier::Prime,
            Modifier::Prime => Modifier::Plain,
            Modifier::Double => Modifier::Double,
        }
    }
}

/// A face turn in standard notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub modifier: Modifier,
}

impl Move {
    pub fn new(face: Face, modifier: Modifier) -> Self {
        Self { face, modifier }
    }

    pub fn quarter_turns(&self) -> u8 {
        self.modifier.quarter_turns()
    }

    pub fn inverse(&self) -> Move {
        Move::new(self.face, self.modifier.inverse())
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.face, self.modifier.suffix())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("empty move token")]
    Empty,
    #[error("unknown face in move token {0:?}")]
    UnknownFace(String),
    #[error("unknown modifier {modifier:?} in move token {token:?}")]
    UnknownModifier { token: String, modifier: String },
}

impl FromStr for Move {
    type Err = MoveError;

    /// Accepts exactly `[URFDLB]('|2)?`.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let mut chars = token.chars();
        let letter = chars.next().ok_or(MoveError::Empty)?;
        let face =
            Face::from_letter(letter).ok_or_else(|| MoveError::UnknownFace(token.to_string()))?;
        let suffix = chars.as_str();
        let modifier =
            Modifier::from_suffix(suffix).ok_or_else(|| MoveError::UnknownModifier {
                token: token.to_string(),
                modifier: suffix.to_string(),
            })?;
        Ok(Move::new(face, modifier))
    }
}

/// Where every sticker moved by one clockwise quarter turn of a face goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnTable {
    moves: Vec<(Facelet, Facelet)>,
}

impl TurnTable {
    /// Turns the layer of `face` in space and reads off each sticker's new
    /// position through the fixed face frames.
    fn derive(face: Face) -> Self {
        let sense = face.clockwise_sense();
        let moves = Facelet::all()
            .filter(|facelet| face.dot(&facelet.to_point()) == 1)
            .filter_map(|from| {
                let point = rotate_point(&from.to_point(), face.0, sense);
                let to = Facelet::from_point(&point, from.face.turn(face))
                    .expect("a turned sticker lands on the face its normal turned to");
                (to != from).then_some((from, to))
            })
            .collect();
        TurnTable { moves }
    }

    /// `(from, to)` pairs for the stickers that move.
    pub fn moves(&self) -> &[(Facelet, Facelet)] {
        &self.moves
    }

    /// The table split into its disjoint cycles, each listed in the order
    /// stickers travel.
    pub fn cycles(&self) -> Vec<Vec<Facelet>> {
        let mut cycles: Vec<Vec<Facelet>> = vec![];
        for &(start, _) in &self.moves {
            if cycles.iter().any(|cycle| cycle.contains(&start)) {
                continue;
            }
            let mut cycle = vec![start];
            let mut current = start;
            while let Some(&(_, next)) = self.moves.iter().find(|(from, _)| *from == current) {
                if next == start {
                    break;
                }
                cycle.push(next);
                current = next;
            }
            cycles.push(cycle);
        }
        cycles
    }
}

static TURN_TABLES: LazyLock<EnumMap<Face, TurnTable>> = LazyLock::new(|| {
    let tables = EnumMap::from_fn(TurnTable::derive);
    debug!("derived turn tables for all six faces");
    tables
});

pub fn turn_table(face: Face) -> &'static TurnTable {
    &TURN_TABLES[face]
}

impl<T: Clone> FaceletState<T> {
    /// One clockwise quarter turn of `face`, seen from outside the cube.
    pub fn turn(&self, face: Face) -> Self {
        let mut next = self.clone();
        for &(from, to) in turn_table(face).moves() {
            next[to] = self[from].clone();
        }
        next
    }

    pub fn twist(&self, mv: Move) -> Self {
        (0..mv.quarter_turns()).fold(self.clone(), |state, _| state.turn(mv.face))
    }

    /// Applies a raw move token. A token that is not a move leaves the state
    /// unchanged and logs a warning.
    pub fn apply_token(&self, token: &str) -> Self {
        match token.parse::<Move>() {
            Ok(mv) => self.twist(mv),
            Err(err) => {
                warn!("skipping move token {token:?}: {err}");
                self.clone()
            }
        }
    }
}

pub fn apply_move(state: &CubeState, token: &str) -> CubeState {
    state.apply_token(token)
}

pub fn apply_piece_move(state: &PieceState, token: &str) -> PieceState {
    state.apply_token(token)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::cube::name::*;
    use crate::puzzle::state::{solved_cube_state, solved_piece_id, solved_piece_state, Color};

    #[test]
    fn parse_moves() {
        assert_eq!("R".parse::<Move>(), Ok(Move::new(R, Modifier::Plain)));
        assert_eq!("U'".parse::<Move>(), Ok(Move::new(U, Modifier::Prime)));
        assert_eq!("B2".parse::<Move>(), Ok(Move::new(B, Modifier::Double)));
        assert_eq!("".parse::<Move>(), Err(MoveError::Empty));
        assert_eq!("X".parse::<Move>(), Err(MoveError::UnknownFace("X".to_string())));
        assert_eq!(
            "R3".parse::<Move>(),
            Err(MoveError::UnknownModifier {
                token: "R3".to_string(),
                modifier: "3".to_string()
            })
        );
        assert!("r".parse::<Move>().is_err());
        assert!("R2'".parse::<Move>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for token in ["U", "R'", "F2", "D", "L'", "B2"] {
            assert_eq!(token.parse::<Move>().map(|mv| mv.to_string()), Ok(token.to_string()));
        }
    }

    #[test]
    fn every_turn_moves_twenty_stickers() {
        for face in Face::ALL {
            let table = turn_table(face);
            assert_eq!(table.moves().len(), 20, "{face} moves the wrong stickers");
            let cycles = table.cycles();
            assert_eq!(cycles.len(), 5);
            assert!(cycles.iter().all(|cycle| cycle.len() == 4));
        }
    }

    #[test]
    fn r_carries_front_to_up() {
        let state = solved_cube_state().turn(R);
        for row in 0..3 {
            assert_eq!(state[Facelet::new(U, row, 2)], Color::Green);
            assert_eq!(state[Facelet::new(F, row, 2)], Color::Yellow);
            assert_eq!(state[Facelet::new(D, row, 2)], Color::Blue);
            assert_eq!(state[Facelet::new(B, row, 0)], Color::White);
            assert_eq!(state[Facelet::new(U, row, 0)], Color::White);
        }
    }

    #[test]
    fn u_carries_right_to_front() {
        let state = solved_cube_state().turn(U);
        for col in 0..3 {
            assert_eq!(state[Facelet::new(F, 0, col)], Color::Red);
            assert_eq!(state[Facelet::new(L, 0, col)], Color::Green);
            assert_eq!(state[Facelet::new(B, 0, col)], Color::Orange);
            assert_eq!(state[Facelet::new(R, 0, col)], Color::Blue);
        }
    }

    #[test]
    fn pieces_follow_the_turn() {
        let state = solved_piece_state().turn(R);
        assert_eq!(state[Facelet::new(U, 0, 2)], solved_piece_id(Facelet::new(F, 0, 2)));
        // clockwise: bottom-left corner comes up to top-left
        assert_eq!(state[Facelet::new(R, 0, 0)], solved_piece_id(Facelet::new(R, 2, 0)));
        assert_eq!(state[Facelet::new(R, 1, 1)], solved_piece_id(Facelet::new(R, 1, 1)));
    }

    #[test]
    fn modifiers() {
        let solved = solved_piece_state();
        for face in Face::ALL {
            let once = solved.turn(face);
            assert_eq!(solved.twist(Move::new(face, Modifier::Double)), once.turn(face));
            assert_eq!(once.twist(Move::new(face, Modifier::Prime)), solved);
            assert_eq!(once.turn(face).turn(face).turn(face), solved);
        }
    }

    #[test]
    fn malformed_tokens_are_skipped() {
        let state = solved_cube_state().turn(F);
        assert_eq!(apply_move(&state, "Q"), state);
        assert_eq!(apply_move(&state, "R3"), state);
        assert_eq!(apply_move(&state, "R"), state.turn(R));
        assert_eq!(apply_piece_move(&solved_piece_state(), "U'"), solved_piece_state().twist(Move::new(U, Modifier::Prime)));
    }

    #[test]
    fn turning_leaves_the_input_alone() {
        let solved = solved_cube_state();
        let turned = solved.turn(R);
        let turned_again = solved.turn(R);
        assert!(solved.is_solved());
        assert_eq!(turned, turned_again);
    }
}
