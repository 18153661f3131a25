#[cfg(feature = "cli")]
pub mod cli;
pub mod sheet_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use sheet_config::{SheetConfig, TomlConfig};
