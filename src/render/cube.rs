//! Geometry the renderer needs from the engine: which way each turn spins,
//! and which stickers each cubie carries. Both read the same face frames as
//! the move tables, so a visual turn always matches the permutation.

use cgmath::{Matrix3, Rad, Vector3};
use std::f32::consts::PI;

use crate::puzzle::common::{point, Point};
use crate::puzzle::cube::{Basis, Face, Facelet};
use crate::puzzle::state::FaceletState;
use crate::puzzle::turn::{Modifier, Move};

pub fn point_to_vec(p: &Point) -> Vector3<f32> {
    Vector3::new(
        p[Basis::X] as f32,
        p[Basis::Y] as f32,
        p[Basis::Z] as f32,
    )
}

/// Unit vector along the positive axis a face turns about.
pub fn turn_axis(face: Face) -> Vector3<f32> {
    let mut p = point(0, 0, 0);
    p[face.0] = 1;
    point_to_vec(&p)
}

/// Signed angle of the turn about [`turn_axis`]. Prime turns go the short
/// way round instead of three quarters forward.
pub fn turn_angle(mv: Move) -> f32 {
    let quarters = match mv.modifier {
        Modifier::Plain => 1.0,
        Modifier::Double => 2.0,
        Modifier::Prime => -1.0,
    };
    mv.face.clockwise_sense().to_i8() as f32 * quarters * PI / 2.0
}

pub fn turn_to_transform(mv: Move) -> Matrix3<f32> {
    Matrix3::from_axis_angle(turn_axis(mv.face), Rad(turn_angle(mv)))
}

/// Rotation of a turn partway through its animation, `t` in 0..=1.
pub fn partial_transform(mv: Move, t: f32) -> Matrix3<f32> {
    Matrix3::from_axis_angle(turn_axis(mv.face), Rad(turn_angle(mv) * t.clamp(0.0, 1.0)))
}

/// Centre of a sticker, half a unit out from its cubie.
pub fn sticker_center(facelet: Facelet) -> Vector3<f32> {
    point_to_vec(&facelet.to_point()) + point_to_vec(&facelet.face.normal()) * 0.5
}

/// Whether the cubie at `p` spins along with a turn of `face`.
pub fn in_layer(face: Face, p: &Point) -> bool {
    face.dot(p) == 1
}

/// The 26 visible cubie positions.
pub fn cubie_positions() -> Vec<Point> {
    let coords = -1..=1;
    itertools::iproduct!(coords.clone(), coords.clone(), coords)
        .map(|(x, y, z)| point(x, y, z))
        .filter(|p| p.values().any(|&c| c != 0))
        .collect()
}

/// The stickers on the cubie at `p`: one for a center, two for an edge,
/// three for a corner.
pub fn cubie_stickers(p: &Point) -> Vec<Facelet> {
    Face::ALL
        .into_iter()
        .filter_map(|face| Facelet::from_point(p, face))
        .collect()
}

/// What the cubie at `p` shows on each of its outward faces.
pub fn cubie_values<T: Clone>(state: &FaceletState<T>, p: &Point) -> Vec<(Face, T)> {
    cubie_stickers(p)
        .into_iter()
        .map(|facelet| (facelet.face, state[facelet].clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::cube::name::*;
    use crate::puzzle::state::{solved_cube_state, solved_piece_id, Color, PieceState};
    use cgmath::{InnerSpace, MetricSpace};
    use std::collections::HashMap;

    const EPSILON: f32 = 1e-4;

    #[test]
    fn axes_are_unit() {
        for face in Face::ALL {
            assert!((turn_axis(face).magnitude() - 1.0).abs() < EPSILON);
        }
    }

    /// Spinning a layer by the animation matrix must put every sticker
    /// exactly where the move tables send it.
    #[test]
    fn turn_matrix_matches_permutation() {
        for face in Face::ALL {
            for modifier in [Modifier::Plain, Modifier::Prime, Modifier::Double] {
                let mv = Move::new(face, modifier);
                let turned = PieceState::solved().twist(mv);
                let landed: HashMap<_, _> = turned.facelets().map(|(f, &id)| (id, f)).collect();
                let mat = turn_to_transform(mv);
                for facelet in Facelet::all() {
                    let expected = if in_layer(face, &facelet.to_point()) {
                        mat * sticker_center(facelet)
                    } else {
                        sticker_center(facelet)
                    };
                    let actual = sticker_center(landed[&solved_piece_id(facelet)]);
                    assert!(
                        expected.distance(actual) < EPSILON,
                        "{mv} sends {facelet} to {actual:?}, the animation to {expected:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn partial_transform_ends() {
        let mv = Move::new(R, Modifier::Plain);
        let start = partial_transform(mv, 0.0) * Vector3::new(0.0, 1.0, 0.0);
        let end = partial_transform(mv, 1.0) * Vector3::new(0.0, 1.0, 0.0);
        assert!(start.distance(Vector3::new(0.0, 1.0, 0.0)) < EPSILON);
        // R carries up to back
        assert!(end.distance(Vector3::new(0.0, 0.0, -1.0)) < EPSILON);
    }

    #[test]
    fn cubie_counts() {
        let cubies = cubie_positions();
        assert_eq!(cubies.len(), 26);
        let sticker_counts = cubies.iter().map(|p| cubie_stickers(p).len());
        let mut histogram = [0; 4];
        for n in sticker_counts {
            histogram[n] += 1;
        }
        assert_eq!(histogram, [0, 6, 12, 8]);
    }

    #[test]
    fn corner_colors() {
        let state = solved_cube_state();
        let mut colors = cubie_values(&state, &point(1, 1, 1));
        colors.sort_by_key(|(face, _)| face.canonical_index());
        assert_eq!(
            colors,
            vec![(U, Color::White), (R, Color::Red), (F, Color::Green)]
        );
        let back = cubie_values(&state, &point(1, 0, -1));
        assert_eq!(back, vec![(R, Color::Red), (B, Color::Blue)]);
    }
}
