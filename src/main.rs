use clap::Parser;
use fittrack_client::app::commands;
use fittrack_client::utils::logger;
use fittrack_client::{CliConfig, ClientConfig, HttpClient};

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting fittrack CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match ClientConfig::load(cli.config.as_deref(), cli.base_url.clone()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    // One client for the whole process, passed explicitly to the command.
    let client = HttpClient::new(config);
    tracing::debug!("Using backend at {}", client.config().base_url);

    match commands::run(&client, cli.command, cli.json).await {
        Ok(output) => println!("{}", output),
        Err(failure) => {
            eprintln!("❌ {}", failure.headline);
            let e = fittrack_client::FitTrackError::from(failure.error);
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
