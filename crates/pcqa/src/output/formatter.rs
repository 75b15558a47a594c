use pcqa_core::Report;

use crate::error::Result;

pub(crate) trait OutputFormatter {
    fn format_report(&self, report: &Report) -> Result<String>;
}
