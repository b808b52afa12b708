//! Statement-scoped configuration: buffer sizing, prefetch, boolean encoding
//! and auto-commit, plus the embedded result-set defaults.

mod builder;
mod config;
mod load;
mod overrides;
mod prefetch;

pub use builder::StatementConfigBuilder;
pub use config::{BufferKind, StatementConfig};
pub use overrides::StatementOverrides;
pub use prefetch::PrefetchLimit;
