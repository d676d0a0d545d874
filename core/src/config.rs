use crate::error::{SpawnError, SpawnResult};
use serde::{Deserialize, Serialize};

/// Tunables governing the constrained spawn search.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Horizontal half-width: candidates lie within
    /// `[-search_radius, +search_radius]` on both x and z.
    pub search_radius: i32,
    /// Vertical band `[0, max_height]` for candidates and ground search.
    pub max_height: i32,
    /// Total candidate budget shared by ocean rejections and failed
    /// ground scans. When spent, the search fails instead of looping.
    pub max_candidates: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            search_radius: 1_000_000,
            max_height: 1_024,
            max_candidates: 4_096,
        }
    }
}

impl SearchConfig {
    /// Load from a JSON file.
    /// In tests, use SearchConfig::default_test().
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: SearchConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Small bounds so unit tests can cover the whole search square.
    pub fn default_test() -> Self {
        Self {
            search_radius: 64,
            max_height: 128,
            max_candidates: 256,
        }
    }

    pub fn validate(&self) -> SpawnResult<()> {
        if self.search_radius <= 0 {
            return Err(SpawnError::InvalidConfig {
                reason: format!("search_radius must be positive, got {}", self.search_radius),
            });
        }
        if self.max_height <= 0 {
            return Err(SpawnError::InvalidConfig {
                reason: format!("max_height must be positive, got {}", self.max_height),
            });
        }
        if self.max_candidates == 0 {
            return Err(SpawnError::InvalidConfig {
                reason: "max_candidates must be positive".into(),
            });
        }
        Ok(())
    }
}
