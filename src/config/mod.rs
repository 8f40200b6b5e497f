//! Config module.
//! Provides configuration types, default paths, and XML loading.
//! Precedence is defaults < XML file < CLI flags (see `cli::Args::apply_overrides`).

pub mod paths;
pub mod types;
pub mod xml;

pub use paths::{default_config_path, path_has_symlink_ancestor};
pub use types::{Config, ErrorPolicy, LogLevel};
pub use xml::{create_template_config, load_config, load_config_from_xml_path};

/// Environment variable naming an explicit config file (or a directory holding `config.xml`).
pub const CONFIG_ENV: &str = "FSMOVE_CONFIG";
