use anyhow::Result;
use clap::Parser;
use imagegen_proxy::app::App;
use imagegen_proxy::models::Config;
use imagegen_proxy::server::{self, AppState};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "imagegen-proxy")]
#[command(about = "Prompt-enriching proxy in front of an AI image gateway")]
struct CliArgs {
    /// Address to listen on, overriding BIND_ADDR.
    #[arg(long, value_name = "ADDR")]
    bind: Option<String>,

    /// AI gateway base URL, overriding AI_GATEWAY_URL.
    #[arg(long, value_name = "URL")]
    gateway_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagegen_proxy=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting imagegen-proxy");

    let args = CliArgs::parse();

    let mut config = Config::from_env()?;
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(gateway_url) = args.gateway_url {
        config.gateway_url = gateway_url;
    }

    let state = AppState::new(App::from_config(&config));

    if let Err(e) = server::serve(state, &config.bind_addr).await {
        error!("Server failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
