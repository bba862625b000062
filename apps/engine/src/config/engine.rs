//! Engine configuration.
//!
//! `EngineConfig` is a plain serde value; `from_env` overlays the
//! `PINOCHLE_*` environment variables on the defaults.

use std::env;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ai::heuristic::DEFAULT_BID_THRESHOLD;
use crate::ai::{by_name, RoleNames};
use crate::domain::meld::MeldTable;
use crate::domain::scoring::BidRewardPolicy;

pub const DEFAULT_LOOKAHEAD_PLAYOUTS: usize = 32;
pub const DEFAULT_SHAPING_WEIGHT: f64 = 0.1;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid value for {var}: '{value}' ({reason})")]
    InvalidValue {
        var: &'static str,
        value: String,
        reason: String,
    },
    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Episode seed; `None` draws one from OS entropy.
    pub seed: Option<u64>,
    pub lookahead_playouts: usize,
    pub shaping_weight: f64,
    pub heuristic_bid_threshold: u32,
    pub bid_reward: BidRewardPolicy,
    pub strategies: RoleNames,
    pub meld_table: MeldTable,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: None,
            lookahead_playouts: DEFAULT_LOOKAHEAD_PLAYOUTS,
            shaping_weight: DEFAULT_SHAPING_WEIGHT,
            heuristic_bid_threshold: DEFAULT_BID_THRESHOLD,
            bid_reward: BidRewardPolicy::default(),
            strategies: RoleNames::default(),
            meld_table: MeldTable::standard(),
        }
    }
}

impl EngineConfig {
    /// Defaults overlaid with whatever `PINOCHLE_*` variables are set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Same as `from_env` with an injectable variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(v) = lookup("PINOCHLE_SEED") {
            config.seed = Some(parse_var("PINOCHLE_SEED", &v)?);
        }
        if let Some(v) = lookup("PINOCHLE_LOOKAHEAD_PLAYOUTS") {
            config.lookahead_playouts = parse_var("PINOCHLE_LOOKAHEAD_PLAYOUTS", &v)?;
        }
        if let Some(v) = lookup("PINOCHLE_SHAPING_WEIGHT") {
            config.shaping_weight = parse_var("PINOCHLE_SHAPING_WEIGHT", &v)?;
        }
        if let Some(v) = lookup("PINOCHLE_HEURISTIC_THRESHOLD") {
            config.heuristic_bid_threshold = parse_var("PINOCHLE_HEURISTIC_THRESHOLD", &v)?;
        }
        if let Some(v) = lookup("PINOCHLE_BID_REWARD") {
            config.bid_reward = parse_var("PINOCHLE_BID_REWARD", &v)?;
        }
        if let Some(v) = lookup("PINOCHLE_STRATEGY_HOLDER") {
            config.strategies.holder = v.trim().to_string();
        }
        if let Some(v) = lookup("PINOCHLE_STRATEGY_PARTNER") {
            config.strategies.partner = v.trim().to_string();
        }
        if let Some(v) = lookup("PINOCHLE_STRATEGY_OPPONENT") {
            config.strategies.opponent = v.trim().to_string();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.shaping_weight.is_finite() {
            return Err(ConfigError::InvalidValue {
                var: "shaping_weight",
                value: self.shaping_weight.to_string(),
                reason: "must be finite".into(),
            });
        }
        for name in [
            &self.strategies.holder,
            &self.strategies.partner,
            &self.strategies.opponent,
        ] {
            if by_name(name).is_none() {
                return Err(ConfigError::UnknownStrategy(name.clone()));
            }
        }
        self.meld_table
            .validate()
            .map_err(|e| ConfigError::InvalidValue {
                var: "meld_table",
                value: String::new(),
                reason: e.to_string(),
            })
    }
}

fn parse_var<T>(var: &'static str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidValue {
            var,
            value: value.to_string(),
            reason: e.to_string(),
        })
}
