//! Configuration for the scanner
//!
//! Settings live in `nuvscan.toml`, looked up at an explicit path or in the
//! platform config directory (`~/.config/nuvscan/nuvscan.toml` on Linux).
//! Every field is optional; a missing file means defaults.

pub mod parser;
pub mod paths;
pub mod schema;
pub mod store;

pub use parser::{parse_nuvscan_toml, parse_nuvscan_toml_str, to_toml};
pub use paths::{CONFIG_FILE_NAME, default_config_path, output_dir_in};
pub use schema::ScanConfig;
pub use store::ConfigStore;
