use crate::FactoryError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One self-consistent choice across all product families.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    #[serde(rename = "one", alias = "1", alias = "first")]
    One,
    #[serde(rename = "two", alias = "2", alias = "second")]
    Two,
}

impl Variant {
    pub const ALL: [Variant; 2] = [Variant::One, Variant::Two];

    /// 1-based index used in product names (`A1`, `B2`, ...).
    pub fn index(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }

    pub fn ordinal(&self) -> &'static str {
        match self {
            Self::One => "first",
            Self::Two => "second",
        }
    }
}

impl Default for Variant {
    fn default() -> Self {
        Self::One
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => write!(f, "one"),
            Self::Two => write!(f, "two"),
        }
    }
}

impl TryFrom<u8> for Variant {
    type Error = FactoryError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(FactoryError::invalid_variant(format!(
                "no variant with index {}. Use 1 or 2",
                value
            ))),
        }
    }
}

impl TryFrom<&str> for Variant {
    type Error = FactoryError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_lowercase().as_str() {
            "1" | "one" | "first" => Ok(Self::One),
            "2" | "two" | "second" => Ok(Self::Two),
            _ => Err(FactoryError::invalid_variant(format!(
                "'{}'. Use 'one', 'two', '1' or '2'",
                value
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_aliases() {
        assert_eq!(Variant::try_from("1").unwrap(), Variant::One);
        assert_eq!(Variant::try_from(" First ").unwrap(), Variant::One);
        assert_eq!(Variant::try_from("TWO").unwrap(), Variant::Two);
        assert_eq!(Variant::try_from(2u8).unwrap(), Variant::Two);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(matches!(
            Variant::try_from("three"),
            Err(FactoryError::InvalidVariant(_))
        ));
        assert!(Variant::try_from(0u8).is_err());
    }

    #[test]
    fn test_display_round_trips() {
        for variant in Variant::ALL {
            assert_eq!(Variant::try_from(variant.to_string().as_str()).unwrap(), variant);
        }
    }
}
