use enum_map::Enum;
use std::fmt;

pub use crate::puzzle::common::{Basis, BasisDiff, Point, Sign};
use crate::puzzle::common::{point, rotate_point};

/// A face of the cube, named by its outward ray.
///
/// +X: R, +Y: U, +Z: F
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Face(pub Basis, pub Sign);

pub mod name {
    use super::*;

    pub const R: Face = Face(Basis::X, Sign::Pos);
    pub const U: Face = Face(Basis::Y, Sign::Pos);
    pub const F: Face = Face(Basis::Z, Sign::Pos);
    pub const L: Face = Face(Basis::X, Sign::Neg);
    pub const D: Face = Face(Basis::Y, Sign::Neg);
    pub const B: Face = Face(Basis::Z, Sign::Neg);
}

impl Face {
    /// All faces in the conventional URFDLB order. Piece ids and position
    /// labels count in this order.
    pub const ALL: [Face; 6] = [name::U, name::R, name::F, name::D, name::L, name::B];

    pub fn letter(&self) -> char {
        match self {
            Face(Basis::X, Sign::Pos) => 'R',
            Face(Basis::Y, Sign::Pos) => 'U',
            Face(Basis::Z, Sign::Pos) => 'F',
            Face(Basis::X, Sign::Neg) => 'L',
            Face(Basis::Y, Sign::Neg) => 'D',
            Face(Basis::Z, Sign::Neg) => 'B',
        }
    }

    pub fn from_letter(letter: char) -> Option<Face> {
        Face::ALL.into_iter().find(|face| face.letter() == letter)
    }

    pub fn canonical_index(&self) -> usize {
        Face::ALL
            .iter()
            .position(|face| face == self)
            .expect("every face is listed in Face::ALL")
    }

    pub fn opposite(&self) -> Face {
        Face(self.0, -self.1)
    }

    /// Faces on different axes share an edge.
    pub fn is_adjacent(&self, other: &Face) -> bool {
        self.0 != other.0
    }

    /// Unit vector pointing out of the face.
    pub fn normal(&self) -> Point {
        let mut p = point(0, 0, 0);
        p[self.0] = self.1.to_i8();
        p
    }

    pub fn from_normal(p: &Point) -> Option<Face> {
        let mut nonzero = p.iter().filter(|(_, &c)| c != 0);
        match (nonzero.next(), nonzero.next()) {
            (Some((basis, &c)), None) => Sign::from_i8(c).map(|sign| Face(basis, sign)),
            _ => None,
        }
    }

    /// Signed projection of `p` onto this face's ray.
    pub fn dot(&self, p: &Point) -> i8 {
        p[self.0] * self.1.to_i8()
    }

    /// The fixed viewing convention of the face's 3×3 grid, as the pair of
    /// rays `(right, down)`: column index grows along `right`, row index
    /// along `down`. Every frame is the view from outside the cube, so
    /// `right × down` points into the cube.
    ///
    /// Back is read from behind: its column 0 touches Right and its column 2
    /// touches Left. Every Back mapping in the engine follows from this line.
    pub fn frame(&self) -> (Face, Face) {
        use name::*;
        match self {
            Face(Basis::Y, Sign::Pos) => (R, F),
            Face(Basis::Y, Sign::Neg) => (R, B),
            Face(Basis::Z, Sign::Pos) => (R, D),
            Face(Basis::Z, Sign::Neg) => (L, D),
            Face(Basis::X, Sign::Pos) => (B, D),
            Face(Basis::X, Sign::Neg) => (F, D),
        }
    }

    /// Sense of the rotation about the positive axis that turns this face
    /// clockwise as seen from outside. Faces on a negative ray (L, D, B) turn
    /// the positive way.
    pub fn clockwise_sense(&self) -> Sign {
        -self.1
    }

    /// Turns the ray system a clockwise quarter turn of `axis` and returns
    /// the ray that `self` is carried to.
    pub fn turn(&self, axis: Face) -> Face {
        let rotated = rotate_point(&self.normal(), axis.0, axis.clockwise_sense());
        Face::from_normal(&rotated).expect("rotating a unit vector gives a unit vector")
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// One sticker position: a face and a cell in that face's own grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub row: usize,
    pub col: usize,
}

impl Facelet {
    pub fn new(face: Face, row: usize, col: usize) -> Self {
        debug_assert!(row < 3 && col < 3, "cell ({row}, {col}) is off the grid");
        Self { face, row, col }
    }

    /// All 54 positions, in URFDLB order, row-major within a face.
    pub fn all() -> impl Iterator<Item = Facelet> {
        Face::ALL.into_iter().flat_map(|face| {
            (0..3).flat_map(move |row| (0..3).map(move |col| Facelet::new(face, row, col)))
        })
    }

    /// 0-based index in the order of [`Facelet::all`].
    pub fn canonical_index(&self) -> usize {
        self.face.canonical_index() * 9 + self.row * 3 + self.col
    }

    pub fn is_center(&self) -> bool {
        self.row == 1 && self.col == 1
    }

    /// Position of the cubie carrying this sticker.
    pub fn to_point(&self) -> Point {
        let (right, down) = self.face.frame();
        let (right, down) = (right.normal(), down.normal());
        let mut p = self.face.normal();
        for (basis, c) in p.iter_mut() {
            *c += (self.col as i8 - 1) * right[basis] + (self.row as i8 - 1) * down[basis];
        }
        p
    }

    /// The sticker on `face` of the cubie at `p`, if that cubie has one.
    pub fn from_point(p: &Point, face: Face) -> Option<Facelet> {
        if face.dot(p) != 1 {
            return None;
        }
        let (right, down) = face.frame();
        let row = usize::try_from(1 + down.dot(p)).ok()?;
        let col = usize::try_from(1 + right.dot(p)).ok()?;
        (row < 3 && col < 3).then(|| Facelet::new(face, row, col))
    }

    pub fn position_label(&self) -> String {
        position_label(self.face, self.row, self.col)
    }
}

impl fmt::Display for Facelet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.position_label())
    }
}

/// Fixed name of a sticker position, independent of the state: the face
/// letter followed by `A`..`I` reading the grid row by row (`"UA"` is the
/// top-left of Up, `"UE"` its center).
pub fn position_label(face: Face, row: usize, col: usize) -> String {
    let cell = char::from(b'A' + (row * 3 + col) as u8);
    format!("{}{}", face.letter(), cell)
}
