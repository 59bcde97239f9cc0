use clap::Parser;
use config_lsp::{
    cli::{Cli, Commands},
    commands,
    config::ServerConfig,
    telemetry,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let telemetry_guard = telemetry::init_telemetry()?;

    match cli.command {
        Commands::Check { files, format } => {
            let has_errors = commands::execute_check(&files, format)?;
            if has_errors {
                drop(telemetry_guard);
                std::process::exit(1);
            }
        }
        Commands::Lsp { debounce_ms } => {
            let config = ServerConfig::from_env().with_debounce_ms(debounce_ms);
            commands::execute_lsp(config).await;
        }
        Commands::Serve {
            host,
            port,
            debounce_ms,
        } => {
            let config = ServerConfig::from_env().with_debounce_ms(debounce_ms);
            commands::execute_serve(&host, port, config).await?;
        }
    }

    Ok(())
}
