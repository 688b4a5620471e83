use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

/// Fallback probing order; also the order missing directions are appended
/// in when a request asks for auto-completion.
pub const CANONICAL_ORDER: [Direction; 4] = [
    Direction::Top,
    Direction::Right,
    Direction::Bottom,
    Direction::Left,
];

impl Direction {
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "top" => Some(Self::Top),
            "right" => Some(Self::Right),
            "bottom" => Some(Self::Bottom),
            "left" => Some(Self::Left),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlaceParseError {
    #[error("unknown direction token: {0:?}")]
    UnknownToken(String),
    #[error("placement request is empty")]
    Empty,
}

/// Parses a comma-joined priority list such as `"top, left"`. Tokens are
/// trimmed; empty segments are skipped.
pub fn parse_place(input: &str) -> Result<Vec<Direction>, PlaceParseError> {
    let mut directions = Vec::new();
    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }
        let direction = Direction::from_token(token)
            .ok_or_else(|| PlaceParseError::UnknownToken(token.to_string()))?;
        directions.push(direction);
    }
    if directions.is_empty() {
        return Err(PlaceParseError::Empty);
    }
    Ok(directions)
}

/// Appends every canonical direction not already present, in canonical
/// order. Caller priority is preserved; nothing is reordered or dropped.
pub fn complete(directions: &[Direction]) -> Vec<Direction> {
    let mut completed = directions.to_vec();
    for direction in CANONICAL_ORDER {
        if !completed.contains(&direction) {
            completed.push(direction);
        }
    }
    completed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_token_round_trips() {
        for direction in CANONICAL_ORDER {
            assert_eq!(Direction::from_token(direction.as_str()), Some(direction));
        }
        assert_eq!(Direction::from_token("center"), None);
    }

    #[test]
    fn parse_place_trims_whitespace() {
        let parsed = parse_place(" top ,  left ").unwrap();
        assert_eq!(parsed, vec![Direction::Top, Direction::Left]);
    }

    #[test]
    fn parse_place_rejects_unknown_tokens() {
        assert_eq!(
            parse_place("top, middle"),
            Err(PlaceParseError::UnknownToken("middle".to_string()))
        );
    }

    #[test]
    fn parse_place_rejects_empty_input() {
        assert_eq!(parse_place(" , "), Err(PlaceParseError::Empty));
    }

    #[test]
    fn complete_keeps_input_as_prefix() {
        let completed = complete(&[Direction::Bottom, Direction::Left]);
        assert_eq!(
            completed,
            vec![
                Direction::Bottom,
                Direction::Left,
                Direction::Top,
                Direction::Right,
            ]
        );
    }

    #[test]
    fn complete_contains_each_direction_exactly_once() {
        for start in CANONICAL_ORDER {
            let completed = complete(&[start]);
            assert_eq!(completed.len(), 4);
            for direction in CANONICAL_ORDER {
                assert_eq!(
                    completed.iter().filter(|d| **d == direction).count(),
                    1,
                    "direction {direction} duplicated or missing"
                );
            }
        }
    }

    #[test]
    fn complete_of_full_list_is_unchanged() {
        let full = CANONICAL_ORDER.to_vec();
        assert_eq!(complete(&full), full);
    }
}
