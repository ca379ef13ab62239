use crate::burnrl::base::Action;
use crate::error::EnvError;

/// The four cardinal moves. South decreases the row, north increases it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    South,
    North,
    East,
    West,
}

impl Move {
    /// Row and column offsets of a single step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Move::South => (-1, 0),
            Move::North => (1, 0),
            Move::East => (0, 1),
            Move::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Move::South => Move::North,
            Move::North => Move::South,
            Move::East => Move::West,
            Move::West => Move::East,
        }
    }
}

impl TryFrom<u32> for Move {
    type Error = EnvError;

    fn try_from(code: u32) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Move::South),
            1 => Ok(Move::North),
            2 => Ok(Move::East),
            3 => Ok(Move::West),
            other => Err(EnvError::InvalidAction(other)),
        }
    }
}

impl From<Move> for u32 {
    fn from(action: Move) -> Self {
        match action {
            Move::South => 0,
            Move::North => 1,
            Move::East => 2,
            Move::West => 3,
        }
    }
}

impl Action for Move {
    fn enumerate() -> Vec<Self> {
        vec![Move::South, Move::North, Move::East, Move::West]
    }
}
