// src/factories/concrete_factory.rs

use crate::{
    AbstractFactory, AbstractProductA, AbstractProductB, ProductA1, ProductA2, ProductB1,
    ProductB2, Variant,
};

/// Factory for the first variant: produces `ProductA1` and `ProductB1`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory1;

/// Factory for the second variant: produces `ProductA2` and `ProductB2`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteFactory2;

impl AbstractFactory for ConcreteFactory1 {
    fn create_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ProductA1)
    }

    fn create_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ProductB1)
    }

    fn variant(&self) -> Variant {
        Variant::One
    }
}

impl AbstractFactory for ConcreteFactory2 {
    fn create_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(ProductA2)
    }

    fn create_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(ProductB2)
    }

    fn variant(&self) -> Variant {
        Variant::Two
    }
}
