pub mod error;
mod file;
mod locate;
pub mod scan;

pub use error::{PcFileError, Result};
pub use file::{InstallDir, PcFile};
pub use locate::locate_pc_files;
