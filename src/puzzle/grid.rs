use std::ops::{Index, IndexMut};

/// A 3×3 face grid. Row 0 is the top and column 0 the left of the face's own
/// viewing frame (see [`Face::frame`](crate::puzzle::cube::Face::frame)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid<T>(pub [[T; 3]; 3]);

impl<T> Grid<T> {
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self {
        Grid(std::array::from_fn(|row| std::array::from_fn(|col| f(row, col))))
    }

    pub fn cells(&self) -> impl Iterator<Item = &T> {
        self.0.iter().flatten()
    }
}

impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.0[row][col]
    }
}

impl<T> IndexMut<(usize, usize)> for Grid<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.0[row][col]
    }
}
