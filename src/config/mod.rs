//! Configuration module for objview
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (OBJVIEW_*)
//! 3. Project config (./objview.toml)
//! 4. User config (<config_dir>/objview/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{user_config_path, ConfigWarning, PROJECT_CONFIG_FILE};
pub use types::{ColorMode, Config, InspectConfig, OutputConfig};
