//! Group-theoretic checks on the move engine. Used by the unit and property
//! tests and by `facelet verify`.

use enum_map::EnumMap;
use itertools::Itertools;
use log::debug;

use crate::puzzle::algorithm::Algorithm;
use crate::puzzle::cube::Face;
use crate::puzzle::state::{Color, CubeState, PieceState};
use crate::puzzle::turn::{turn_table, Modifier, Move};

/// Largest order of any element of the cube group.
pub const MAX_ORDER: usize = 1260;

pub fn color_counts(state: &CubeState) -> EnumMap<Color, usize> {
    let mut counts = EnumMap::default();
    for (_, &color) in state.facelets() {
        counts[color] += 1;
    }
    counts
}

/// Each color shows on exactly nine stickers.
pub fn conserves_colors(state: &CubeState) -> bool {
    color_counts(state).values().all(|&n| n == 9)
}

/// The ids are exactly 1..=54, each once.
pub fn is_bijection(state: &PieceState) -> bool {
    let ids = state.facelets().map(|(_, &id)| id).sorted().collect_vec();
    ids.into_iter().eq(1..=54)
}

/// Number of times `algorithm` must be applied to the solved cube to solve
/// it again, or `None` past [`MAX_ORDER`].
pub fn order_of(algorithm: &Algorithm) -> Option<usize> {
    let mut state = PieceState::solved();
    for n in 1..=MAX_ORDER {
        state = state.apply_algorithm(algorithm);
        if state.is_solved() {
            return Some(n);
        }
    }
    None
}

/// A failed check, with a description of what went wrong.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation(pub String);

fn check(violations: &mut Vec<Violation>, ok: bool, message: impl FnOnce() -> String) {
    if !ok {
        violations.push(Violation(message()));
    }
}

fn single(face: Face) -> Algorithm {
    Algorithm(vec![Move::new(face, Modifier::Plain)])
}

/// Checks the turn tables and the known orders of the cube group. Returns
/// every violation found; an empty list means the engine is consistent.
pub fn validate_turn_tables() -> Vec<Violation> {
    let mut violations = vec![];

    for face in Face::ALL {
        let table = turn_table(face);
        check(&mut violations, table.moves().len() == 20, || {
            format!("{face} moves {} stickers, not 20", table.moves().len())
        });
        let cycles = table.cycles();
        check(
            &mut violations,
            cycles.len() == 5 && cycles.iter().all(|cycle| cycle.len() == 4),
            || format!("{face} does not split into five 4-cycles: {cycles:?}"),
        );
        check(&mut violations, order_of(&single(face)) == Some(4), || {
            format!("{face} does not have order 4")
        });
        let state = PieceState::solved().turn(face);
        check(&mut violations, is_bijection(&state), || {
            format!("{face} does not permute the piece ids")
        });
        check(&mut violations, conserves_colors(&state.colors()), || {
            format!("{face} does not conserve colors")
        });
    }

    for (f, g) in Face::ALL.into_iter().tuple_combinations() {
        let (f_alg, g_alg) = (single(f), single(g));
        if f.is_adjacent(&g) {
            let commutator = Algorithm::commutator(&f_alg, &g_alg);
            check(&mut violations, order_of(&commutator) == Some(6), || {
                format!("[{f}, {g}] does not have order 6")
            });
            let product = f_alg.then(&g_alg);
            check(&mut violations, order_of(&product) == Some(105), || {
                format!("{f} {g} does not have order 105")
            });
        } else {
            let fg = PieceState::solved().turn(f).turn(g);
            let gf = PieceState::solved().turn(g).turn(f);
            check(&mut violations, fg == gf, || format!("{f} and {g} do not commute"));
        }
    }

    debug!("turn table validation found {} violations", violations.len());
    violations
}
