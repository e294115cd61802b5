use enum_map::{Enum, EnumMap};
use std::ops::{Add, Mul, Neg, Sub};

/// One of the three coordinate axes. Axes are cyclic: X → Y → Z → X.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Basis {
    X,
    Y,
    Z,
}

/// Cyclic distance between two axes.
#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasisDiff {
    D0,
    D1,
    D2,
}

impl BasisDiff {
    fn from_steps(steps: usize) -> Self {
        match steps % 3 {
            0 => BasisDiff::D0,
            1 => BasisDiff::D1,
            _ => BasisDiff::D2,
        }
    }

    fn steps(self) -> usize {
        match self {
            BasisDiff::D0 => 0,
            BasisDiff::D1 => 1,
            BasisDiff::D2 => 2,
        }
    }
}

impl Sub for Basis {
    type Output = BasisDiff;

    fn sub(self, rhs: Self) -> BasisDiff {
        BasisDiff::from_steps(self.into_usize() + 3 - rhs.into_usize())
    }
}

impl Add<BasisDiff> for Basis {
    type Output = Basis;

    fn add(self, rhs: BasisDiff) -> Basis {
        Basis::from_usize((self.into_usize() + rhs.steps()) % 3)
    }
}

#[derive(Debug, Enum, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Sign {
    Pos,
    Neg,
}

impl Sign {
    pub fn to_i8(self) -> i8 {
        match self {
            Sign::Pos => 1,
            Sign::Neg => -1,
        }
    }

    pub fn from_i8(value: i8) -> Option<Self> {
        match value {
            1 => Some(Sign::Pos),
            -1 => Some(Sign::Neg),
            _ => None,
        }
    }
}

impl Neg for Sign {
    type Output = Sign;

    fn neg(self) -> Sign {
        match self {
            Sign::Pos => Sign::Neg,
            Sign::Neg => Sign::Pos,
        }
    }
}

impl Mul for Sign {
    type Output = Sign;

    fn mul(self, rhs: Sign) -> Sign {
        if self == rhs {
            Sign::Pos
        } else {
            Sign::Neg
        }
    }
}

/// A lattice point of the cube, each coordinate in {-1, 0, 1}.
pub type Point = EnumMap<Basis, i8>;

pub fn point(x: i8, y: i8, z: i8) -> Point {
    enum_map::enum_map! {
        Basis::X => x,
        Basis::Y => y,
        Basis::Z => z,
    }
}

/// Rotates `p` a quarter turn about the positive `axis`. `Sign::Pos` is the
/// right-hand-rule positive sense (counter-clockwise seen from the tip of
/// the axis), `Sign::Neg` the opposite.
pub fn rotate_point(p: &Point, axis: Basis, sense: Sign) -> Point {
    let b = axis + BasisDiff::D1;
    let c = axis + BasisDiff::D2;
    let mut rotated = *p;
    match sense {
        // b → c, c → -b
        Sign::Pos => {
            rotated[b] = -p[c];
            rotated[c] = p[b];
        }
        Sign::Neg => {
            rotated[b] = p[c];
            rotated[c] = -p[b];
        }
    }
    rotated
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::enum_iter;

    #[test]
    fn basis_arithmetic_is_cyclic() {
        for a in enum_iter::<Basis>() {
            for b in enum_iter::<Basis>() {
                assert_eq!(a + (b - a), b, "{a:?} + ({b:?} - {a:?}) != {b:?}");
            }
            assert_eq!(a + BasisDiff::D1 + BasisDiff::D2, a);
        }
        assert_eq!(Basis::X + BasisDiff::D1, Basis::Y);
        assert_eq!(Basis::Z + BasisDiff::D1, Basis::X);
    }

    #[test]
    fn sign_algebra() {
        assert_eq!(-Sign::Pos, Sign::Neg);
        assert_eq!(Sign::Neg * Sign::Neg, Sign::Pos);
        assert_eq!(Sign::Pos * Sign::Neg, Sign::Neg);
        assert_eq!(Sign::from_i8(Sign::Neg.to_i8()), Some(Sign::Neg));
        assert_eq!(Sign::from_i8(0), None);
    }

    #[test]
    fn right_hand_rule() {
        // +90° about z carries +x to +y
        assert_eq!(rotate_point(&point(1, 0, 0), Basis::Z, Sign::Pos), point(0, 1, 0));
        // +90° about x carries +y to +z
        assert_eq!(rotate_point(&point(0, 1, 0), Basis::X, Sign::Pos), point(0, 0, 1));
        // +90° about y carries +z to +x
        assert_eq!(rotate_point(&point(0, 0, 1), Basis::Y, Sign::Pos), point(1, 0, 0));
    }

    #[test]
    fn quarter_turns_have_order_four() {
        let p = point(1, -1, 0);
        for axis in enum_iter::<Basis>() {
            for sense in enum_iter::<Sign>() {
                let mut q = p;
                for _ in 0..4 {
                    q = rotate_point(&q, axis, sense);
                }
                assert_eq!(q, p);
                assert_eq!(rotate_point(&rotate_point(&p, axis, sense), axis, -sense), p);
            }
        }
    }
}
