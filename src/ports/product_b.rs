use crate::AbstractProductA;

/// Base interface of the second product family.
///
/// Product B does its own thing, but it can also collaborate with any
/// product A. Only products of the same variant are meant to be combined,
/// yet nothing here rejects a mismatched collaborator.
pub trait AbstractProductB: Send + Sync {
    fn describe(&self) -> String;

    fn collaborate(&self, collaborator: &dyn AbstractProductA) -> String;
}
