//! Result-set defaults propagated from a statement configuration.

mod config;

pub use config::{ResultSetConfig, ResultSetOverrides, ServerColumn};
