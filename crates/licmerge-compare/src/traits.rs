use crate::error::Result;

/// Decides whether two license texts represent the same license.
///
/// Implementations must be pure: the same pair always yields the same answer
/// and no state is mutated. A failure is reported as an error and must never
/// be folded into `true` or `false` by the caller.
pub trait EquivalencePredicate {
    fn is_equivalent(&self, a: &str, b: &str) -> Result<bool>;
}

impl<P: EquivalencePredicate + ?Sized> EquivalencePredicate for &P {
    fn is_equivalent(&self, a: &str, b: &str) -> Result<bool> {
        (**self).is_equivalent(a, b)
    }
}

impl<P: EquivalencePredicate + ?Sized> EquivalencePredicate for Box<P> {
    fn is_equivalent(&self, a: &str, b: &str) -> Result<bool> {
        (**self).is_equivalent(a, b)
    }
}
