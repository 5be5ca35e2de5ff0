use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};

use crate::point::Move;

/// The move a single snake chose for this turn.
///
/// `None` means the move was missing or could not be understood. The ruleset treats that as
/// "keep going straight" instead of failing the turn
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnakeMove {
    pub id: String,
    #[serde(default, deserialize_with = "lenient_move")]
    pub r#move: Option<Move>,
}

impl SnakeMove {
    pub fn new(id: &str, m: Move) -> Self {
        Self {
            id: id.to_owned(),
            r#move: Some(m),
        }
    }

    /// Builds a move from the raw string a player sent
    pub fn from_wire(id: &str, raw: &str) -> Self {
        Self {
            id: id.to_owned(),
            r#move: raw.parse().ok(),
        }
    }
}

/// Whatever a player put in the `move` field
#[derive(Deserialize)]
#[serde(untagged)]
enum WireMove {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_move<'de, D>(deserializer: D) -> Result<Option<Move>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<WireMove> = Option::deserialize(deserializer)?;

    Ok(match raw {
        Some(WireMove::Text(s)) => s.parse().ok(),
        Some(WireMove::Other(_)) | None => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_wire() {
        assert_eq!(SnakeMove::from_wire("a", "down").r#move, Some(Move::Down));
        assert_eq!(SnakeMove::from_wire("a", "diagonal").r#move, None);
    }

    #[test]
    fn test_lenient_json() {
        let moves: Vec<SnakeMove> = serde_json::from_str(
            r#"[{"id":"a","move":"left"},{"id":"b","move":"nope"},{"id":"c","move":null},{"id":"d"}]"#,
        )
        .unwrap();

        assert_eq!(moves[0].r#move, Some(Move::Left));
        assert!(moves[1..].iter().all(|m| m.r#move.is_none()));
    }

    #[test]
    fn test_non_string_moves_do_not_fail_the_request() {
        let moves: Vec<SnakeMove> = serde_json::from_str(
            r#"[{"id":"a","move":3},{"id":"b","move":{}},{"id":"c","move":["up"]},{"id":"d","move":true},{"id":"e","move":"Up"}]"#,
        )
        .unwrap();

        assert_eq!(moves.len(), 5);
        assert!(moves[..4].iter().all(|m| m.r#move.is_none()));
        assert_eq!(moves[3].id, "d");
        assert_eq!(moves[4].r#move, Some(Move::Up));
    }
}
