// src/ports/mod.rs

pub use abstract_factory::AbstractFactory;
pub use product_a::AbstractProductA;
pub use product_b::AbstractProductB;

pub mod abstract_factory;
pub mod product_a;
pub mod product_b;
