use std::cmp::Ordering;

use pcqa_version::{Version, is_pms_form};

use crate::traits::VersionOrder;

/// Version ordering under the package manager's version grammar.
#[derive(Debug, Clone, Copy, Default)]
pub struct PmsVersionOrder;

impl PmsVersionOrder {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl VersionOrder for PmsVersionOrder {
    fn comparable(&self, a: &str, b: &str) -> bool {
        is_pms_form(a) && is_pms_form(b)
    }

    fn compare(&self, a: &str, b: &str) -> Ordering {
        match (a.parse::<Version>(), b.parse::<Version>()) {
            (Ok(left), Ok(right)) => left.cmp(&right),
            _ => a.cmp(b),
        }
    }
}
