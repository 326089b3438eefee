pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "basecamp-milestones")]
#[command(about = "Write OmniPlan milestones to Basecamp")]
pub struct CliConfig {
    /// CSV file exported by OmniPlan (reads standard input when omitted)
    pub csv_file: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Directory holding config.defaults.toml and config.local.toml")]
    pub config_dir: PathBuf,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
