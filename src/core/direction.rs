//! Move directions.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::GridError;

/// The edge that tiles slide toward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Lowercase name, as accepted by `FromStr`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses plain names (`up`, `left`, ...) and browser key names
/// (`ArrowUp`, `ArrowLeft`, ...), ignoring ASCII case.
impl FromStr for Direction {
    type Err = GridError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        let name = lower.strip_prefix("arrow").unwrap_or(&lower);

        match name {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(GridError::UnknownDirection(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_names() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("DOWN".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!(" left ".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("Right".parse::<Direction>(), Ok(Direction::Right));
    }

    #[test]
    fn test_parse_key_names() {
        assert_eq!("ArrowUp".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("ArrowDown".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("ArrowLeft".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("ArrowRight".parse::<Direction>(), Ok(Direction::Right));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "Arrow".parse::<Direction>(),
            Err(GridError::UnknownDirection("Arrow".to_string()))
        );
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for dir in Direction::ALL {
            assert_eq!(dir.to_string().parse::<Direction>(), Ok(dir));
        }
    }
}
