//! Static level catalog, compiled in from `assets/levels.json`.

use crate::model::{LevelConfig, Lives};
use thiserror::Error;

const BUILTIN_LEVELS: &str = include_str!("../assets/levels.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("level data is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("level at position {position} has id {found}; ids must run 0..N-1")]
    NonDenseId { position: usize, found: usize },
    #[error("level {0} has no pairs")]
    EmptyLevel(usize),
    #[error("level {0} has a life budget of zero")]
    ZeroLives(usize),
    #[error("level {0} has a zero-second time limit")]
    ZeroTimeLimit(usize),
}

/// Ordered, validated level definitions. Level `i` always has id `i`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    levels: Vec<LevelConfig>,
}

impl Catalog {
    pub fn new(levels: Vec<LevelConfig>) -> Result<Self, CatalogError> {
        for (position, level) in levels.iter().enumerate() {
            if level.id != position {
                return Err(CatalogError::NonDenseId {
                    position,
                    found: level.id,
                });
            }
            if level.pairs.is_empty() {
                return Err(CatalogError::EmptyLevel(level.id));
            }
            if level.lives == Lives::Limited(0) {
                return Err(CatalogError::ZeroLives(level.id));
            }
            if level.time_limit_secs == Some(0) {
                return Err(CatalogError::ZeroTimeLimit(level.id));
            }
        }
        Ok(Self { levels })
    }

    pub fn from_json(raw: &str) -> Result<Self, CatalogError> {
        let levels: Vec<LevelConfig> = serde_json::from_str(raw)?;
        Self::new(levels)
    }

    /// The catalog shipped with the game. An invalid embedded file yields an
    /// empty catalog, which turns every level start into a no-op.
    pub fn builtin() -> Self {
        Self::from_json(BUILTIN_LEVELS).unwrap_or_else(|err| {
            log::error!("builtin level catalog rejected: {err}");
            Self::default()
        })
    }

    pub fn get(&self, id: usize) -> Option<&LevelConfig> {
        self.levels.get(id)
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn is_last(&self, id: usize) -> bool {
        id + 1 == self.levels.len()
    }
}
