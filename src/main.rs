use basecamp_milestones::utils::{logger, validation::Validate};
use basecamp_milestones::{
    BasecampClient, CliConfig, InputSource, MilestonePipeline, SyncEngine, SyncError, TomlConfig,
};
use clap::Parser;

fn fail(e: SyncError) -> ! {
    tracing::error!(
        "❌ Milestone sync failed: {} (Severity: {:?})",
        e,
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.severity().exit_code());
}

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI config: {:?}", cli);

    let config = match TomlConfig::load_layered(&cli.config_dir) {
        Ok(config) => config,
        Err(e) => fail(e),
    };
    if let Err(e) = config.validate() {
        fail(e);
    }

    let client = match BasecampClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => fail(e),
    };

    let source = InputSource::from_arg(cli.csv_file);
    let pipeline = MilestonePipeline::new(source, client, config);
    let engine = SyncEngine::new(pipeline);

    match engine.run().await {
        Ok(report) => {
            println!(
                "✅ Created {} of {} milestones in Basecamp",
                report.submitted, report.parsed
            );
        }
        Err(e) => fail(e),
    }
}
