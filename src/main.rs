use clap::Parser;
use giveaway_snapshot::core::ConfigProvider;
use giveaway_snapshot::utils::{error::EtlError, logger, validation::Validate};
use giveaway_snapshot::{CliConfig, EtlEngine, LocalStorage, SheetPipeline, Snapshot};

fn fail(e: &EtlError) -> ! {
    tracing::error!("❌ {} (Category: {:?})", e, e.category());
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
    eprintln!("Error: {}", e.user_friendly_message());
    std::process::exit(1);
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.resolve() {
        Ok(config) => config,
        Err(e) => fail(&e),
    };
    if let Err(e) = config.validate() {
        fail(&e);
    }

    tracing::debug!("Export URL: {}", config.export_url());

    let storage = LocalStorage::new(".".to_string());
    let engine = EtlEngine::new(SheetPipeline::new(storage, config));

    if cli.dry_run {
        match engine.preview().await {
            Ok(result) => match Snapshot::new(result.records).to_json_pretty() {
                Ok(json) => println!("{}", json),
                Err(e) => fail(&e),
            },
            Err(e) => fail(&e),
        }
        return;
    }

    match engine.run().await {
        Ok(output_path) => {
            tracing::info!("✅ Snapshot written to: {}", output_path);
        }
        Err(e) => fail(&e),
    }
}
