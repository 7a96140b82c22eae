mod product_a;
mod product_b;

pub use product_a::*;
pub use product_b::*;

#[cfg(test)]
mod tests {
    use crate::product_a::AbstractProductA;
    use crate::product_b::AbstractProductB;

    #[test]
    fn test_crate_root_module_paths_resolve_to_ports() {
        let product_a: &dyn AbstractProductA = &crate::ProductA1;
        let product_b: &dyn AbstractProductB = &crate::ProductB1;
        assert_eq!(
            product_b.collaborate(product_a),
            "The result of the B1 collaborating with ( The result of the product A1. )"
        );
    }
}
