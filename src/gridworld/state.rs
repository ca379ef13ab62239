use std::fmt;

use burn::tensor::{Tensor, backend::Backend};

use crate::burnrl::base::{ElemType, State};

/// A `(row, col)` cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Coord {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl State for Coord {
    type Data = [ElemType; 2];

    fn data(&self) -> Self::Data {
        [self.row as ElemType, self.col as ElemType]
    }

    fn to_tensor<B: Backend>(&self) -> Tensor<B, 1> {
        Tensor::<B, 1>::from_floats(self.data(), &B::Device::default())
    }

    fn size() -> usize {
        2
    }
}
