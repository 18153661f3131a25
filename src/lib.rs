pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::storage::LocalStorage;
pub use app::pipelines::SheetPipeline;
pub use config::SheetConfig;
pub use core::etl::EtlEngine;
pub use domain::model::{GiveawayRecord, Snapshot, PLACEHOLDER};
pub use utils::error::{EtlError, Result};
