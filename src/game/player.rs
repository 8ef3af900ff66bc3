use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identity of one of the two seats at the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Get the other player
    pub fn other(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }

    /// 1 or 2
    pub fn number(self) -> u8 {
        match self {
            PlayerId::One => 1,
            PlayerId::Two => 2,
        }
    }

    pub(crate) fn index(self) -> usize {
        usize::from(self.number() - 1)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.number())
    }
}

/// Piece colors a player may pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceColor {
    Red,
    Yellow,
    Blue,
    Green,
    Magenta,
    Cyan,
    White,
}

/// Display attributes for a seat. Identity comes from the seat itself
/// ([`PlayerId`]), never from these fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub name: String,
    pub color: PieceColor,
}

impl Player {
    pub fn new(name: impl Into<String>, color: PieceColor) -> Self {
        Player {
            name: name.into(),
            color,
        }
    }

    /// Default descriptor for a seat: "Player 1" in red, "Player 2" in yellow.
    pub fn default_for(id: PlayerId) -> Self {
        match id {
            PlayerId::One => Player::new("Player 1", PieceColor::Red),
            PlayerId::Two => Player::new("Player 2", PieceColor::Yellow),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(PlayerId::One.other(), PlayerId::Two);
        assert_eq!(PlayerId::Two.other(), PlayerId::One);
    }

    #[test]
    fn test_player_number_and_display() {
        assert_eq!(PlayerId::One.number(), 1);
        assert_eq!(PlayerId::Two.number(), 2);
        assert_eq!(PlayerId::Two.to_string(), "player 2");
    }

    #[test]
    fn test_default_players_differ() {
        let one = Player::default_for(PlayerId::One);
        let two = Player::default_for(PlayerId::Two);
        assert_eq!(one.name, "Player 1");
        assert_eq!(two.color, PieceColor::Yellow);
        assert_ne!(one, two);
    }
}
