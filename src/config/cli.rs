use super::sheet_config::SheetConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Parser)]
#[command(name = "giveaway-snapshot")]
#[command(about = "Fetch the giveaway winners sheet and write it as a JSON snapshot")]
pub struct CliConfig {
    /// Optional TOML file with [source] and [load] settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Google Sheets document id
    #[arg(long)]
    pub sheet_id: Option<String>,

    /// Base URL of the sheets host
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where the JSON snapshot is written
    #[arg(long)]
    pub output_file: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub log_json: bool,

    #[arg(long, help = "Print the snapshot instead of writing it")]
    pub dry_run: bool,
}

impl CliConfig {
    /// Defaults, then the config file, then explicit flags.
    pub fn resolve(&self) -> Result<SheetConfig> {
        let mut config = match &self.config {
            Some(path) => SheetConfig::from_file(path)?,
            None => SheetConfig::default(),
        };

        if let Some(sheet_id) = &self.sheet_id {
            config.sheet_id = sheet_id.clone();
        }
        if let Some(base_url) = &self.base_url {
            config.base_url = base_url.clone();
        }
        if let Some(output_file) = &self.output_file {
            config.output_file = output_file.clone();
        }

        Ok(config)
    }
}
