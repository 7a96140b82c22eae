use crate::{AbstractProductA, AbstractProductB};

/// Product B of the first variant.
///
/// Only works correctly alongside `ProductA1`, but accepts any product A
/// as a collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductB1;

/// Product B of the second variant.
///
/// Only works correctly alongside `ProductA2`, but accepts any product A
/// as a collaborator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductB2;

impl AbstractProductB for ProductB1 {
    fn describe(&self) -> String {
        "The result of the product B1.".to_string()
    }

    fn collaborate(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of the B1 collaborating with ( {} )",
            collaborator.describe()
        )
    }
}

impl AbstractProductB for ProductB2 {
    fn describe(&self) -> String {
        "The result of the product B2.".to_string()
    }

    fn collaborate(&self, collaborator: &dyn AbstractProductA) -> String {
        format!(
            "The result of the B2 collaborating with ( {} )",
            collaborator.describe()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ProductA1, ProductA2};

    #[test]
    fn test_describe_is_fixed_per_variant() {
        assert_eq!(ProductB1.describe(), "The result of the product B1.");
        assert_eq!(ProductB2.describe(), "The result of the product B2.");
    }

    #[test]
    fn test_collaborate_embeds_collaborator() {
        assert_eq!(
            ProductB2.collaborate(&ProductA2),
            "The result of the B2 collaborating with ( The result of the product A2. )"
        );
    }

    #[test]
    fn test_collaborate_accepts_other_variant() {
        assert_eq!(
            ProductB2.collaborate(&ProductA1),
            "The result of the B2 collaborating with ( The result of the product A1. )"
        );
    }
}
