use pcqa_core::Report;

use super::OutputFormatter;
use crate::error::{CliError, Result};

pub(crate) struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut rendered =
            serde_json::to_string_pretty(report).map_err(CliError::RenderReport)?;
        rendered.push('\n');
        Ok(rendered)
    }
}
