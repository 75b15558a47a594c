use pcqa_core::Report;

use crate::checks::QaCheck;
use crate::context::AuditContext;

/// Runs a set of checks over one audit context in registration order.
#[derive(Default)]
pub struct AuditEngine<'a> {
    checks: Vec<&'a dyn QaCheck>,
}

impl<'a> AuditEngine<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    pub fn add_check(&mut self, check: &'a dyn QaCheck) {
        self.checks.push(check);
    }

    pub fn run(&self, context: &AuditContext<'_>, report: &mut Report) {
        for check in &self.checks {
            check.check(context, report);
        }
    }
}
