#![deny(unsafe_code)]

pub mod error;
pub mod loader;
pub mod merge;
pub mod paths;
pub mod settings;

pub use crate::error::{ConfigError, Result};
pub use crate::loader::{BASE_CONFIG_FILE, LOCAL_CONFIG_FILE, load_config, load_config_table};
pub use crate::merge::deep_merge;
pub use crate::paths::{CONFIG_DIR_ENV_VAR, find_config_dir, find_config_dir_from};
pub use crate::settings::{Config, InventoryConfig, PathsConfig};
