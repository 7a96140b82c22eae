use thiserror::Error;

#[derive(Error, Debug)]
pub enum FactoryError {
    #[error("Invalid variant: {0}")]
    InvalidVariant(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Logging setup failed: {0}")]
    Logging(String),
}

impl FactoryError {
    pub fn invalid_variant<S: Into<String>>(msg: S) -> Self {
        Self::InvalidVariant(msg.into())
    }

    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_build_matching_variants() {
        assert!(matches!(
            FactoryError::invalid_variant("three"),
            FactoryError::InvalidVariant(msg) if msg == "three"
        ));
        assert!(matches!(
            FactoryError::config("empty"),
            FactoryError::InvalidConfig(msg) if msg == "empty"
        ));
    }
}
