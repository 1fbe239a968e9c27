use serde::{Deserialize, Serialize};

/// Display slots of the probability bars, left to right.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Up,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 3] = [Direction::Left, Direction::Up, Direction::Right];

    /// Canonical slot index.
    pub fn index(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Up => 1,
            Direction::Right => 2,
        }
    }
}

/// Direction probabilities in canonical (display) order.
///
/// Values are bar-height fractions and are never clamped or renormalized.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DirectionProbs(pub [f32; 3]);

impl DirectionProbs {
    /// Reorder a model output vector into canonical order: slots 1 and 2 are swapped.
    pub fn from_model_order(probs: [f32; 3]) -> Self {
        Self([probs[0], probs[2], probs[1]])
    }

    pub fn get(self, dir: Direction) -> f32 {
        self.0[dir.index()]
    }
}
