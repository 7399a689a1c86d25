//! Core data models for Cyberdeck.
//! Level definitions, board nodes, connections and the persisted progress record.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Difficulty {
    Tutorial,
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Tutorial => "Tutorial",
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("life budget must be -1 (unlimited) or a non-negative count, got {0}")]
pub struct InvalidLives(pub i32);

/// Life budget of a level, or lives remaining in a session.
/// Stored as `-1` for unlimited in level data.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "i32", into = "i32")]
pub enum Lives {
    Unlimited,
    Limited(u32),
}

impl Lives {
    pub fn is_unlimited(self) -> bool {
        matches!(self, Lives::Unlimited)
    }

    /// Spend one life. Unlimited budgets are unaffected; limited ones stop at zero.
    pub fn lose_one(self) -> Lives {
        match self {
            Lives::Unlimited => Lives::Unlimited,
            Lives::Limited(n) => Lives::Limited(n.saturating_sub(1)),
        }
    }

    pub fn is_exhausted(self) -> bool {
        self == Lives::Limited(0)
    }
}

impl TryFrom<i32> for Lives {
    type Error = InvalidLives;

    fn try_from(raw: i32) -> Result<Self, Self::Error> {
        match raw {
            -1 => Ok(Lives::Unlimited),
            n if n >= 0 => Ok(Lives::Limited(n as u32)),
            n => Err(InvalidLives(n)),
        }
    }
}

impl From<Lives> for i32 {
    fn from(lives: Lives) -> i32 {
        match lives {
            Lives::Unlimited => -1,
            Lives::Limited(n) => i32::try_from(n).unwrap_or(i32::MAX),
        }
    }
}

/// One left/right association of a level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairDef {
    pub left: String,
    pub left_icon: String,
    pub right: String,
    pub right_icon: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub id: usize,
    pub name: String,
    pub difficulty: Difficulty,
    pub lives: Lives,
    pub pairs: Vec<PairDef>,
    /// Plain text, or `image://<url>` for a visual fragment.
    pub clue: String,
    #[serde(default, rename = "timeLimit", skip_serializing_if = "Option::is_none")]
    pub time_limit_secs: Option<u32>,
}

impl LevelConfig {
    pub fn theme(&self) -> Theme {
        Theme::for_difficulty(self.difficulty)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// Session-scoped node identifier. Re-minted every time a level starts.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(String);

impl NodeId {
    pub fn new(raw: impl Into<String>) -> Self {
        NodeId(raw.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// DOM id of the connector dot the line overlay anchors to.
    pub fn dot_dom_id(&self) -> String {
        format!("dot-{}", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeItem {
    pub id: NodeId,
    pub icon: String,
    pub label: String,
    /// Id of the unique correct counterpart on the other side.
    pub pair_id: NodeId,
    pub side: Side,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Connection {
    pub from: NodeId,
    pub to: NodeId,
    pub color: &'static str,
}

impl Connection {
    pub fn involves(&self, id: &NodeId) -> bool {
        &self.from == id || &self.to == id
    }
}

/// Persisted under a single storage key as `{"currentLevel", "unlockedClues"}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    pub current_level: usize,
    pub unlocked_clues: Vec<String>,
}

/// Audio moments the core calls out at. Rendering of the cue is up to the sink.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cue {
    Select,
    Connect,
    Error,
    Victory,
    Tick,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    pub name: &'static str,
    pub line_color: &'static str,
}

impl Theme {
    pub const STANDARD: Theme = Theme {
        name: "standard",
        line_color: "#22d3ee",
    };
    pub const ALERT: Theme = Theme {
        name: "alert",
        line_color: "#f43f5e",
    };

    pub fn for_difficulty(difficulty: Difficulty) -> Theme {
        match difficulty {
            Difficulty::Hard => Theme::ALERT,
            _ => Theme::STANDARD,
        }
    }
}
