use crate::preferences::ColorPreferences;
use crate::puzzle::cube::{name, Face, Facelet};
use crate::puzzle::state::{CubeState, FaceletState, PieceState};

/// Draws the state as the usual cross-shaped net: Up above, L F R B across
/// the middle, Down below. Every face is drawn in its own frame, so the
/// middle band reads left to right around the cube.
pub fn draw_net_with<T>(state: &FaceletState<T>, cell: impl Fn(&T) -> String) -> String {
    let width = Facelet::all()
        .map(|facelet| cell(&state[facelet]).chars().count())
        .max()
        .unwrap_or(1);
    let face_row = |face: Face, row: usize| -> String {
        (0..3)
            .map(|col| format!("{:>width$}", cell(&state[Facelet::new(face, row, col)])))
            .collect::<Vec<_>>()
            .join(if width > 1 { " " } else { "" })
    };
    let face_width = face_row(name::U, 0).chars().count();
    let indent = " ".repeat(face_width + 1);

    let mut lines = vec![];
    for row in 0..3 {
        lines.push(format!("{indent}{}", face_row(name::U, row)));
    }
    for row in 0..3 {
        let band = [name::L, name::F, name::R, name::B]
            .into_iter()
            .map(|face| face_row(face, row))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(band);
    }
    for row in 0..3 {
        lines.push(format!("{indent}{}", face_row(name::D, row)));
    }
    lines.join("\n")
}

pub fn draw_net(state: &CubeState, colors: &ColorPreferences) -> String {
    draw_net_with(state, |color| colors.glyphs[*color].to_string())
}

pub fn draw_piece_net(state: &PieceState) -> String {
    draw_net_with(state, |id| id.to_string())
}

/// The fixed position labels, for checking a state against positions.
pub fn draw_label_net() -> String {
    draw_net_with(&FaceletState::from_fn(|facelet| facelet), |facelet| {
        facelet.position_label()
    })
}
