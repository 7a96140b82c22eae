/// Base interface of the first product family.
///
/// Every variant of product A implements this trait; clients only ever
/// hold products through it.
pub trait AbstractProductA: Send + Sync {
    fn describe(&self) -> String;
}
