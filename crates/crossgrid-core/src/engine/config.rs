use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value '{value}' for {parameter}")]
    InvalidValue {
        parameter: &'static str,
        value: String,
    },
}

/// Decides whether a legal placement with zero intersections may be accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlacementPolicy {
    /// A placement is accepted only when it crosses at least one existing
    /// letter. On an empty grid nothing is ever placed.
    #[default]
    Strict,
    /// Like `Strict`, except that while the grid is still blank the first
    /// legal placement in scan order is accepted as an anchor.
    SeedFirstWord,
}

impl PlacementPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlacementPolicy::Strict => "strict",
            PlacementPolicy::SeedFirstWord => "seed-first-word",
        }
    }
}

impl fmt::Display for PlacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PlacementPolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "strict" => Ok(PlacementPolicy::Strict),
            "seed-first-word" => Ok(PlacementPolicy::SeedFirstWord),
            other => Err(ConfigError::InvalidValue {
                parameter: "placement policy",
                value: other.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GenerationConfig {
    pub grid_size: usize,
    pub policy: PlacementPolicy,
}

#[derive(Default)]
pub struct GenerationConfigBuilder {
    grid_size: Option<usize>,
    policy: Option<PlacementPolicy>,
}

impl GenerationConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn grid_size(mut self, size: usize) -> Self {
        self.grid_size = Some(size);
        self
    }
    pub fn policy(mut self, policy: PlacementPolicy) -> Self {
        self.policy = Some(policy);
        self
    }

    pub fn build(self) -> Result<GenerationConfig, ConfigError> {
        Ok(GenerationConfig {
            grid_size: self
                .grid_size
                .ok_or(ConfigError::MissingParameter("grid_size"))?,
            policy: self.policy.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_requires_grid_size() {
        let result = GenerationConfigBuilder::new().build();
        assert_eq!(result, Err(ConfigError::MissingParameter("grid_size")));
    }

    #[test]
    fn builder_defaults_to_strict_policy() {
        let config = GenerationConfigBuilder::new().grid_size(7).build().unwrap();
        assert_eq!(config.grid_size, 7);
        assert_eq!(config.policy, PlacementPolicy::Strict);
    }

    #[test]
    fn policy_parses_from_its_display_form() {
        for policy in [PlacementPolicy::Strict, PlacementPolicy::SeedFirstWord] {
            assert_eq!(policy.to_string().parse::<PlacementPolicy>(), Ok(policy));
        }
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(matches!(
            "greedy".parse::<PlacementPolicy>(),
            Err(ConfigError::InvalidValue { value, .. }) if value == "greedy"
        ));
    }
}
