pub mod config;
pub mod error;
pub mod models;
pub mod analysis;
pub mod storage;
pub mod report;
pub mod runner;

pub use config::{Config, ScreeningConfig};
pub use error::{Error, Result};
pub use analysis::ScreeningPipeline;
pub use report::ReportFormat;
pub use storage::ScreeningLog;
