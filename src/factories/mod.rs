// src/factories/mod.rs

mod concrete_factory;
mod family_factory;

pub use concrete_factory::{ConcreteFactory1, ConcreteFactory2};
pub use family_factory::{FamilyFactory, FamilyOne, FamilyTwo, ProductFamily};

use crate::{AbstractFactory, Variant};

/// Returns a new factory producing products of `variant`.
pub fn factory_for(variant: Variant) -> Box<dyn AbstractFactory> {
    match variant {
        Variant::One => Box::new(ConcreteFactory1),
        Variant::Two => Box::new(ConcreteFactory2),
    }
}

/// Collection of the concrete factories, one per variant.
pub struct Factories {
    first: ConcreteFactory1,
    second: ConcreteFactory2,
}

impl Factories {
    /// Creates a new collection of factories.
    pub fn new() -> Self {
        Self {
            first: ConcreteFactory1,
            second: ConcreteFactory2,
        }
    }

    /// Returns the factory of the first variant.
    pub fn first(&self) -> &ConcreteFactory1 {
        &self.first
    }

    /// Returns the factory of the second variant.
    pub fn second(&self) -> &ConcreteFactory2 {
        &self.second
    }

    /// Looks up the factory of `variant`.
    pub fn get(&self, variant: Variant) -> &dyn AbstractFactory {
        match variant {
            Variant::One => &self.first,
            Variant::Two => &self.second,
        }
    }
}

impl Default for Factories {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_for_returns_requested_variant() {
        for variant in Variant::ALL {
            assert_eq!(factory_for(variant).variant(), variant);
        }
    }

    #[test]
    fn test_registry_lookup() {
        let factories = Factories::new();
        assert_eq!(factories.get(Variant::One).variant(), factories.first().variant());
        assert_eq!(factories.get(Variant::Two).variant(), factories.second().variant());
    }
}
