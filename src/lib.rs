//! State and move engine for a 3×3×3 Rubik's Cube.
//!
//! Every sticker is given a position in space through a fixed frame per
//! face, and each face turn is derived once by rotating those positions.
//! States are plain values: turning one returns a new state.

pub mod preferences;
pub mod puzzle;
pub mod render;
pub mod session;
pub mod util;

pub use puzzle::{
    apply_algorithm, apply_move, apply_piece_move, apply_scramble, parse_scramble,
    position_label, solved_cube_state, solved_piece_state, Algorithm, Color, CubeState, Face,
    Facelet, Modifier, Move, MoveError, PieceId, PieceState,
};
