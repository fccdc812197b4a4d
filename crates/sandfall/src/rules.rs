//! Tunable constants for the material rules.
//!
//! Defaults reproduce the stock behaviour. A host can override any subset
//! from RON text:
//!
//! ```ron
//! (fire_max_duration: 20, blast_radius: 8)
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Upper bound for `blast_radius` and `blast_jitter`.
pub const MAX_BLAST_REACH: i32 = 1024;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse rules: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("invalid rule `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// Ticks of Water overhead before Dirt turns to Grass.
    pub dirt_max_growth: u16,
    /// Ticks a Fire particle lives.
    pub fire_max_duration: u16,
    /// Ticks before Steam may condense.
    pub steam_max_duration: u16,
    /// Chance per tick that expired Steam condenses.
    pub steam_condense_chance: f64,
    /// Chance per tick that Fire ignites a neighbouring Wood.
    pub wood_ignite_chance: f64,
    /// Chance that a liquid's sideways attempt goes right rather than left.
    pub liquid_right_chance: f64,
    /// Chance that a blocked liquid tries to move straight up.
    pub liquid_rise_chance: f64,
    /// Chance per upward direction that Steam tries to rise.
    pub steam_rise_chance: f64,
    /// Chance per side that Steam tries to drift.
    pub steam_drift_chance: f64,
    /// Explosive blast radius in cells.
    pub blast_radius: i32,
    /// Per-cell radius jitter: each cell sees the radius shifted by a value
    /// in `[-blast_jitter, blast_jitter]`.
    pub blast_jitter: i32,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            dirt_max_growth: 50,
            fire_max_duration: 10,
            steam_max_duration: 1000,
            steam_condense_chance: 0.8,
            wood_ignite_chance: 0.09,
            liquid_right_chance: 0.5,
            liquid_rise_chance: 0.1,
            steam_rise_chance: 1.0 / 3.0,
            steam_drift_chance: 0.5,
            blast_radius: 15,
            blast_jitter: 2,
        }
    }
}

impl Rules {
    /// Parse and validate rules from RON. Missing fields keep their defaults.
    pub fn from_ron(text: &str) -> Result<Self, ConfigError> {
        let rules: Self = ron::from_str(text)?;
        rules.validate()?;
        Ok(rules)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::to_string(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let probabilities = [
            ("steam_condense_chance", self.steam_condense_chance),
            ("wood_ignite_chance", self.wood_ignite_chance),
            ("liquid_right_chance", self.liquid_right_chance),
            ("liquid_rise_chance", self.liquid_rise_chance),
            ("steam_rise_chance", self.steam_rise_chance),
            ("steam_drift_chance", self.steam_drift_chance),
        ];
        for (field, p) in probabilities {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "probability must be within [0, 1]",
                });
            }
        }

        let thresholds = [
            ("dirt_max_growth", self.dirt_max_growth),
            ("fire_max_duration", self.fire_max_duration),
            ("steam_max_duration", self.steam_max_duration),
        ];
        for (field, t) in thresholds {
            if t == 0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: "threshold must be at least 1",
                });
            }
        }

        if self.blast_radius < 0 {
            return Err(ConfigError::Invalid {
                field: "blast_radius",
                reason: "radius must not be negative",
            });
        }
        if self.blast_jitter < 0 {
            return Err(ConfigError::Invalid {
                field: "blast_jitter",
                reason: "jitter must not be negative",
            });
        }
        if self.blast_radius > MAX_BLAST_REACH {
            return Err(ConfigError::Invalid {
                field: "blast_radius",
                reason: "radius must be at most 1024",
            });
        }
        if self.blast_jitter > MAX_BLAST_REACH {
            return Err(ConfigError::Invalid {
                field: "blast_jitter",
                reason: "jitter must be at most 1024",
            });
        }
        Ok(())
    }
}
