pub mod cube;
pub mod net;

pub use cube::{cubie_positions, cubie_stickers, cubie_values, turn_angle, turn_axis, turn_to_transform};
pub use net::{draw_label_net, draw_net, draw_piece_net};
