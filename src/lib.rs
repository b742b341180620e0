pub mod config;
pub mod conversation;
pub mod gateway;
pub mod logging;
pub mod model;
pub mod params;
pub mod providers;
pub mod repl;

use anyhow::{Context, Result};
use reqwest::Client;
use std::env;
use tracing::info;

use config::Config;
use conversation::Conversation;
use gateway::AzureGateway;
use providers::azure::AzureClient;

pub async fn run() -> Result<()> {
    dotenvy::dotenv().ok();

    let cfg = Config::from_env()?;
    let params = params::load()?;
    info!(
        endpoint = %cfg.endpoint,
        deployment = %cfg.deployment,
        api_version = %cfg.api_version,
        "loaded runtime configuration"
    );

    let http = Client::builder()
        .build()
        .context("Failed to initialize HTTP client")?;
    let client = AzureClient::new(http, &cfg);
    let gateway = AzureGateway::new(&client, &params);

    ctrlc::set_handler(|| {
        println!("\nSaliendo...");
        std::process::exit(0);
    })
    .context("Failed to install interrupt handler")?;

    let args: Vec<String> = env::args().skip(1).collect();
    if args.is_empty() {
        repl::run_repl(&gateway).await
    } else {
        let prompt = args.join(" ");
        let mut conversation = Conversation::new();
        let reply = conversation.run_turn(&gateway, &prompt).await?;
        println!("{reply}");
        Ok(())
    }
}
