use crate::AbstractFactory;
use std::io::Write;

/// Exercises a factory purely through the abstract interfaces.
///
/// Creates one product of each family, writes product B's own result and
/// its collaboration with product A as two lines. Both products are
/// dropped before returning.
pub fn client_code<W>(factory: &dyn AbstractFactory, out: &mut W) -> std::io::Result<()>
where
    W: Write + ?Sized,
{
    let product_a = factory.create_a();
    let product_b = factory.create_b();
    tracing::debug!(variant = %factory.variant(), "created product pair");

    writeln!(out, "{}", product_b.describe())?;
    writeln!(out, "{}", product_b.collaborate(product_a.as_ref()))?;

    Ok(())
}
