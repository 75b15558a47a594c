mod pkg_config;
mod version_order;

pub use pkg_config::{PkgConfigClient, Validation};
pub use version_order::VersionOrder;
