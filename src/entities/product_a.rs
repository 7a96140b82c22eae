use crate::AbstractProductA;

/// Product A of the first variant. Created by `ConcreteFactory1`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductA1;

/// Product A of the second variant. Created by `ConcreteFactory2`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProductA2;

impl AbstractProductA for ProductA1 {
    fn describe(&self) -> String {
        "The result of the product A1.".to_string()
    }
}

impl AbstractProductA for ProductA2 {
    fn describe(&self) -> String {
        "The result of the product A2.".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_is_fixed_per_variant() {
        assert_eq!(ProductA1.describe(), "The result of the product A1.");
        assert_eq!(ProductA2.describe(), "The result of the product A2.");
    }
}
