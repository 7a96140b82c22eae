// src/factories/family_factory.rs

use crate::{
    AbstractFactory, AbstractProductA, AbstractProductB, ProductA1, ProductA2, ProductB1,
    ProductB2, Variant,
};
use std::fmt;
use std::marker::PhantomData;

/// Ties a product A type to the product B type of the same variant.
///
/// Going through a family makes a mismatched pair unrepresentable: the
/// typed API of `FamilyFactory` only ever combines `Self::A` with
/// `Self::B`.
pub trait ProductFamily: Send + Sync + 'static {
    type A: AbstractProductA + Default + 'static;
    type B: AbstractProductB + Default + 'static;

    const VARIANT: Variant;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyOne;

#[derive(Debug, Clone, Copy, Default)]
pub struct FamilyTwo;

impl ProductFamily for FamilyOne {
    type A = ProductA1;
    type B = ProductB1;

    const VARIANT: Variant = Variant::One;
}

impl ProductFamily for FamilyTwo {
    type A = ProductA2;
    type B = ProductB2;

    const VARIANT: Variant = Variant::Two;
}

/// Factory generic over a product family.
///
/// Usable anywhere an `AbstractFactory` is expected, and additionally
/// hands out concrete, statically matched products.
pub struct FamilyFactory<F: ProductFamily> {
    _family: PhantomData<F>,
}

impl<F: ProductFamily> FamilyFactory<F> {
    pub fn new() -> Self {
        Self {
            _family: PhantomData,
        }
    }

    /// Creates one product of each family, typed by the family.
    pub fn create_pair(&self) -> (F::A, F::B) {
        (<F::A>::default(), <F::B>::default())
    }

    /// Lets a fresh product B collaborate with a fresh product A of the
    /// same family.
    pub fn collaborate_pair(&self) -> String {
        let (product_a, product_b) = self.create_pair();
        product_b.collaborate(&product_a)
    }
}

impl<F: ProductFamily> Default for FamilyFactory<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ProductFamily> Clone for FamilyFactory<F> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<F: ProductFamily> fmt::Debug for FamilyFactory<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FamilyFactory<{}>", F::VARIANT)
    }
}

impl<F: ProductFamily> AbstractFactory for FamilyFactory<F> {
    fn create_a(&self) -> Box<dyn AbstractProductA> {
        Box::new(<F::A>::default())
    }

    fn create_b(&self) -> Box<dyn AbstractProductB> {
        Box::new(<F::B>::default())
    }

    fn variant(&self) -> Variant {
        F::VARIANT
    }
}
