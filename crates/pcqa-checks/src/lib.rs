mod audit;
mod config;
mod context;
mod engine;
mod error;

pub mod checks;
pub mod providers;
pub mod traits;

#[cfg(test)]
pub mod mocks;

pub use audit::AuditOperation;
pub use config::AuditConfig;
pub use context::AuditContext;
pub use engine::AuditEngine;
pub use error::{QueryError, Result};
