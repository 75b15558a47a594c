pub mod finding;
mod path;

pub use finding::{CheckTag, Finding, Report};
pub use path::relative_to_root;
