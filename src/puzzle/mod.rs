pub mod algorithm;
pub mod common;
pub mod cube;
pub mod grid;
pub mod invariants;
pub mod state;
pub mod turn;

pub use algorithm::{apply_algorithm, apply_scramble, parse_scramble, random_scramble, Algorithm};
pub use cube::{name, position_label, Face, Facelet};
pub use grid::Grid;
pub use state::{
    solved_cube_state, solved_piece_state, Color, CubeState, FaceletState, PieceId, PieceState,
};
pub use turn::{apply_move, apply_piece_move, Modifier, Move, MoveError};
