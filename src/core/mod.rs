pub mod columns;
pub mod etl;
pub mod extract;

pub use crate::domain::model::{GiveawayRecord, SheetExport, Snapshot, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
