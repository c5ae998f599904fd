//! Drone intents and their grid offsets.

use crate::error::InvalidIntent;
use std::fmt;

/// A drone's intent for the current tick.
///
/// Discriminants are the wire encoding used by policies and match the
/// action indices of the training stack: `LEFT=0, DOWN=1, RIGHT=2, UP=3,
/// STAY=4`. Coordinates are `(y, x)` with `y` increasing downward, so
/// [`Action::Down`] moves to a larger row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Action {
    /// Move one cell west (column − 1).
    Left = 0,
    /// Move one cell south (row + 1).
    Down = 1,
    /// Move one cell east (column + 1).
    Right = 2,
    /// Move one cell north (row − 1).
    Up = 3,
    /// Hold position.
    Stay = 4,
}

impl Action {
    /// All actions in discriminant order.
    pub const ALL: [Action; 5] = [
        Action::Left,
        Action::Down,
        Action::Right,
        Action::Up,
        Action::Stay,
    ];

    /// Number of discrete actions.
    pub const COUNT: usize = 5;

    /// Returns the `(row_offset, col_offset)` this action applies.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Action::Left => (0, -1),
            Action::Down => (1, 0),
            Action::Right => (0, 1),
            Action::Up => (-1, 0),
            Action::Stay => (0, 0),
        }
    }

    /// Decode an action from its wire index.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidIntent`] for values outside `0..=4`.
    pub fn from_index(value: u8) -> Result<Self, InvalidIntent> {
        match value {
            0 => Ok(Action::Left),
            1 => Ok(Action::Down),
            2 => Ok(Action::Right),
            3 => Ok(Action::Up),
            4 => Ok(Action::Stay),
            _ => Err(InvalidIntent { value }),
        }
    }
}

impl TryFrom<u8> for Action {
    type Error = InvalidIntent;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Action::from_index(value)
    }
}

/// Upper-case action name, the log format of the environment
/// (`LEFT`, `DOWN`, `RIGHT`, `UP`, `STAY`).
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Action::Left => "LEFT",
            Action::Down => "DOWN",
            Action::Right => "RIGHT",
            Action::Up => "UP",
            Action::Stay => "STAY",
        };
        write!(f, "{name}")
    }
}
