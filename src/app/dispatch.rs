use crate::cli::commands::{Cli, Commands};
use anyhow::{Context, Result};
use strainer::{Config, Strainer, gateway};

/// Run the gateway until Ctrl-C.
async fn run_serve(config: &Config, host: Option<String>, port: Option<u16>) -> Result<()> {
    let host = host.unwrap_or_else(|| config.gateway.host.clone());
    let port = port.unwrap_or(config.gateway.port);

    let strainer = Strainer::from_config(&config.fetcher)?;
    gateway::run_gateway(&host, port, strainer).await
}

/// Strain one message and print the response JSON.
async fn run_strain(config: &Config, message: &str, pretty: bool) -> Result<()> {
    let strainer = Strainer::from_config(&config.fetcher)?;
    let response = strainer.strain(message).await;

    let rendered = if pretty {
        serde_json::to_string_pretty(&response)
    } else {
        serde_json::to_string(&response)
    }
    .context("serialize strain response")?;
    println!("{rendered}");
    Ok(())
}

pub async fn dispatch(cli: Cli, config: Config) -> Result<()> {
    match cli.command {
        Commands::Serve { port, host } => run_serve(&config, host, port).await,
        Commands::Strain { message, pretty } => run_strain(&config, &message, pretty).await,
    }
}
