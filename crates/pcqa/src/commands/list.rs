use std::path::Path;

use pcqa_pcfile::{PcFile, locate_pc_files};

use super::{ListArgs, OutputFormat};
use crate::error::{CliError, Result};

pub(crate) fn run(args: &ListArgs, root: &Path) -> Result<()> {
    let files = locate_pc_files(root);
    match args.format {
        OutputFormat::Text => {
            for file in &files {
                println!("{}", file.relative().display());
            }
        }
        OutputFormat::Json => {
            let paths: Vec<&Path> = files.iter().map(PcFile::relative).collect();
            let rendered =
                serde_json::to_string_pretty(&paths).map_err(CliError::RenderReport)?;
            println!("{rendered}");
        }
    }
    Ok(())
}
