use crate::{FactoryError, Variant};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Which factories the showcase exercises, and in what order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ShowcaseConfig {
    #[serde(default = "default_variants")]
    pub variants: Vec<Variant>,

    /// Blank line between consecutive client runs.
    #[serde(default = "default_separator")]
    pub separator: bool,
}

fn default_variants() -> Vec<Variant> {
    Variant::ALL.to_vec()
}

fn default_separator() -> bool {
    true
}

impl ShowcaseConfig {
    pub fn new(variants: Vec<Variant>) -> Self {
        Self {
            variants,
            separator: default_separator(),
        }
    }

    pub fn without_separator(mut self) -> Self {
        self.separator = false;
        self
    }

    pub fn validate(&self) -> Result<(), FactoryError> {
        if self.variants.is_empty() {
            return Err(FactoryError::config("at least one variant must be listed"));
        }
        Ok(())
    }
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        Self::new(default_variants())
    }
}

impl FromStr for ShowcaseConfig {
    type Err = FactoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: ShowcaseConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
