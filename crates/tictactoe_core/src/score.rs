//! Running score across games.

use crate::Player;

/// Snapshot of the score tally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scores {
    /// Games won by X.
    pub x: u32,
    /// Games won by O.
    pub o: u32,
}

impl Scores {
    /// Returns the number of wins for `player`.
    pub fn get(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x,
            Player::O => self.o,
        }
    }

    pub(crate) fn increment(&mut self, player: Player) {
        match player {
            Player::X => self.x += 1,
            Player::O => self.o += 1,
        }
    }
}

impl std::fmt::Display for Scores {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player X: {}  Player O: {}", self.x, self.o)
    }
}
