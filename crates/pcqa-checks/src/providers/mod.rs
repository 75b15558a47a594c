mod host;
mod order;

pub use host::HostPkgConfig;
pub use order::PmsVersionOrder;
