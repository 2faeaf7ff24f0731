pub mod config;
pub mod tracing;
pub mod wiring;

pub use config::{apply_env_overrides, load_config, resolve_config};
pub use wiring::{wire_dependencies, AppDeps, WiringError};
