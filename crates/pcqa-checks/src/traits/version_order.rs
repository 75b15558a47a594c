use std::cmp::Ordering;

/// Ordering over package version strings.
pub trait VersionOrder {
    /// Whether both strings are well-formed under the order's grammar.
    /// Callers fall back to exact string equality when they are not.
    fn comparable(&self, a: &str, b: &str) -> bool;

    fn compare(&self, a: &str, b: &str) -> Ordering;
}
