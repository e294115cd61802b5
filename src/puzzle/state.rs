use enum_map::{Enum, EnumMap};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};

use crate::puzzle::cube::{Basis, Face, Facelet, Sign};
use crate::puzzle::grid::Grid;

/// Sticker color. Only identity matters to the engine.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    White,
    Yellow,
    Green,
    Blue,
    Red,
    Orange,
}

impl Color {
    /// Color of `face` on the solved cube.
    pub fn solved_on(face: Face) -> Color {
        match face {
            Face(Basis::Y, Sign::Pos) => Color::White,
            Face(Basis::Y, Sign::Neg) => Color::Yellow,
            Face(Basis::Z, Sign::Pos) => Color::Green,
            Face(Basis::Z, Sign::Neg) => Color::Blue,
            Face(Basis::X, Sign::Pos) => Color::Red,
            Face(Basis::X, Sign::Neg) => Color::Orange,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let c = match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Red => 'R',
            Color::Orange => 'O',
        };
        write!(f, "{}", c)
    }
}

/// Identity of the sticker that started at a solved position, 1..=54.
pub type PieceId = u8;

/// Six face grids holding one value per sticker position.
///
/// Transforms never mutate a state: every turn builds a fresh value with its
/// own storage, so earlier states stay valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaceletState<T> {
    pub faces: EnumMap<Face, Grid<T>>,
}

/// The visible sticker colors.
pub type CubeState = FaceletState<Color>;

/// Piece ids in place of colors; every id is distinct, so a bad permutation
/// cannot hide behind two equal colors.
pub type PieceState = FaceletState<PieceId>;

impl<T> FaceletState<T> {
    pub fn from_fn(mut f: impl FnMut(Facelet) -> T) -> Self {
        Self {
            faces: EnumMap::from_fn(|face| Grid::from_fn(|row, col| f(Facelet::new(face, row, col)))),
        }
    }

    pub fn face(&self, face: Face) -> &Grid<T> {
        &self.faces[face]
    }

    /// Values in [`Facelet::all`] order.
    pub fn facelets(&self) -> impl Iterator<Item = (Facelet, &T)> {
        Facelet::all().map(move |facelet| (facelet, &self[facelet]))
    }
}

impl<T> Index<Facelet> for FaceletState<T> {
    type Output = T;

    fn index(&self, facelet: Facelet) -> &T {
        &self.faces[facelet.face][(facelet.row, facelet.col)]
    }
}

impl<T> IndexMut<Facelet> for FaceletState<T> {
    fn index_mut(&mut self, facelet: Facelet) -> &mut T {
        &mut self.faces[facelet.face][(facelet.row, facelet.col)]
    }
}

impl CubeState {
    pub fn solved() -> Self {
        Self::from_fn(|facelet| Color::solved_on(facelet.face))
    }

    /// Every face shows one color. Centers never move, so this is the
    /// solved state.
    pub fn is_solved(&self) -> bool {
        self.faces.values().all(|grid| {
            let center = grid[(1, 1)];
            grid.cells().all(|&c| c == center)
        })
    }
}

impl PieceState {
    /// Piece `n` at position `n`, counting positions in URFDLB order.
    pub fn solved() -> Self {
        Self::from_fn(solved_piece_id)
    }

    pub fn is_solved(&self) -> bool {
        self.facelets()
            .all(|(facelet, &id)| id == solved_piece_id(facelet))
    }

    /// The colors these pieces would show.
    pub fn colors(&self) -> CubeState {
        let home: Vec<Facelet> = Facelet::all().collect();
        FaceletState::from_fn(|facelet| Color::solved_on(home[usize::from(self[facelet]) - 1].face))
    }
}

pub fn solved_piece_id(facelet: Facelet) -> PieceId {
    (facelet.canonical_index() + 1) as PieceId
}

pub fn solved_cube_state() -> CubeState {
    CubeState::solved()
}

pub fn solved_piece_state() -> PieceState {
    PieceState::solved()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::cube::name::*;
    use itertools::Itertools;

    #[test]
    fn solved_piece_ids() {
        let state = solved_piece_state();
        assert_eq!(state[Facelet::new(U, 0, 0)], 1);
        assert_eq!(state[Facelet::new(R, 0, 0)], 10);
        assert_eq!(state[Facelet::new(B, 2, 2)], 54);
        assert_eq!(state.facelets().map(|(_, &id)| id).sorted().collect_vec(), (1..=54).collect_vec());
        assert!(state.is_solved());
    }

    #[test]
    fn solved_colors() {
        let state = solved_cube_state();
        assert!(state.is_solved());
        assert_eq!(state[Facelet::new(F, 2, 1)], Color::Green);
        assert_eq!(solved_piece_state().colors(), state);
    }

    #[test]
    fn states_do_not_share_storage() {
        let first = solved_cube_state();
        let mut second = first.clone();
        second[Facelet::new(U, 0, 0)] = Color::Red;
        assert_eq!(first[Facelet::new(U, 0, 0)], Color::White);
        assert!(!second.is_solved());
    }
}
