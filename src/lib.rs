pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::adapters::http::BasecampClient;
pub use crate::app::pipelines::milestone_pipeline::MilestonePipeline;
pub use crate::config::{cli::InputSource, toml_config::TomlConfig};
pub use crate::core::etl::SyncEngine;
pub use crate::utils::error::{Result, SyncError};
