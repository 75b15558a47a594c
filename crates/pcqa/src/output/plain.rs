use pcqa_core::{Finding, Report};

use super::OutputFormatter;
use crate::error::Result;

/// Renders findings as the classic QA notice blocks build logs carry.
pub(crate) struct PlainTextFormatter;

impl OutputFormatter for PlainTextFormatter {
    fn format_report(&self, report: &Report) -> Result<String> {
        let mut output = String::new();
        for (index, finding) in report.findings.iter().enumerate() {
            if index > 0 {
                output.push('\n');
            }
            format_finding(&mut output, finding);
        }
        Ok(output)
    }
}

fn format_finding(output: &mut String, finding: &Finding) {
    output.push_str(&format!("QA Notice: {} [{}]\n", finding.message, finding.tag));
    for file in &finding.files {
        output.push_str(&format!("  {}\n", file.display()));
    }
    for (key, value) in &finding.details {
        if value.contains('\n') {
            output.push_str(&format!("  {key}:\n"));
            for line in value.lines() {
                output.push_str(&format!("    {line}\n"));
            }
        } else {
            output.push_str(&format!("  {key}: {value}\n"));
        }
    }
}
