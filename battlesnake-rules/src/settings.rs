use serde::{Deserialize, Serialize};

use crate::{
    error::RulesetError,
    rng::PcgRandom,
    royale::RoyaleRuleset,
    ruleset::BoxedRuleset,
    standard::{StandardRuleset, DEFAULT_MAX_HEALTH},
};

/// Ruleset settings as the game engine sends them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RulesetSettings {
    pub food_spawn_chance: u32,
    pub minimum_food: u32,
    pub hazard_damage_per_turn: i32,
    pub royale: RoyaleSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoyaleSettings {
    pub shrink_every_n_turns: i32,
}

impl Default for RulesetSettings {
    fn default() -> Self {
        Self {
            food_spawn_chance: 15,
            minimum_food: 1,
            hazard_damage_per_turn: 14,
            royale: RoyaleSettings::default(),
        }
    }
}

impl Default for RoyaleSettings {
    fn default() -> Self {
        Self {
            shrink_every_n_turns: 25,
        }
    }
}

/// Everything needed to build a ruleset for a game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesetConfig {
    pub name: String,
    #[serde(default)]
    pub settings: RulesetSettings,
    #[serde(default)]
    pub seed: u64,
}

impl RulesetConfig {
    pub fn new(name: &str, seed: u64) -> Self {
        Self {
            name: name.to_owned(),
            settings: RulesetSettings::default(),
            seed,
        }
    }

    fn standard(&self) -> StandardRuleset {
        StandardRuleset {
            food_spawn_chance: self.settings.food_spawn_chance,
            minimum_food: self.settings.minimum_food,
            hazard_damage_per_turn: self.settings.hazard_damage_per_turn,
            max_health: DEFAULT_MAX_HEALTH,
            seed: self.seed,
        }
    }

    /// Builds the ruleset that resolves the move into `turn`
    pub fn build(&self, turn: i32) -> Result<BoxedRuleset, RulesetError> {
        match self.name.as_str() {
            "standard" => Ok(Box::new(self.standard())),
            "royale" => Ok(Box::new(RoyaleRuleset {
                standard: self.standard(),
                seed: self.seed,
                turn,
                shrink_every_n_turns: self.settings.royale.shrink_every_n_turns,
                random: PcgRandom,
            })),
            other => Err(RulesetError::UnknownRuleset(other.to_owned())),
        }
    }
}
