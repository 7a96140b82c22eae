use crate::{AbstractProductA, AbstractProductB, Variant};

/// Creates one product of each family, all belonging to a single variant.
///
/// Signatures return abstract products; implementations pick the concrete
/// type.
pub trait AbstractFactory: Send + Sync {
    fn create_a(&self) -> Box<dyn AbstractProductA>;

    fn create_b(&self) -> Box<dyn AbstractProductB>;

    /// Variant of the products this factory creates.
    fn variant(&self) -> Variant;
}
