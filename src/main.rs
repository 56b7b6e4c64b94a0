use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use clap_serde_derive::ClapSerde;
use tokio::net::TcpListener;
use tracing::{error, info};

use asr_runner::api::{create_router, AppState};
use asr_runner::config::Config;
use asr_runner::engine::pool::{EnginePool, EngineType};
use asr_runner::engine::remote::RemoteAsrEngine;
use asr_runner::telemetry::init_telemetry;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the configuration file
    #[arg(short, long, env, default_value = "AsrRunner.toml")]
    config_file: String,

    /// Configuration options
    #[command(flatten)]
    pub opt_config: <Config as ClapSerde>::Opt,
}

#[tokio::main]
async fn main() -> Result<()> {
    init_telemetry();

    let args = Args::parse();
    let config = match Config::from_toml(&args.config_file) {
        Ok(conf) => conf.merge(args.opt_config),
        Err(err) => {
            if args.config_file == "AsrRunner.toml" {
                Config::default().merge(args.opt_config)
            } else {
                error!(
                    "Failed to read configuration file {} with error: {}",
                    args.config_file, err
                );
                std::process::exit(1);
            }
        }
    };

    let mut pool = EnginePool::new();
    if config.asr_endpoint.is_empty() {
        info!("No ASR endpoint configured, starting with an empty engine pool");
    } else {
        let api_key = (!config.asr_api_key.is_empty()).then(|| config.asr_api_key.clone());
        let engine = RemoteAsrEngine::new(
            &config.asr_default,
            &config.asr_endpoint,
            api_key,
            config.asr_timeout_secs,
        )?;
        pool.register(EngineType::Asr, Arc::new(engine));
        info!(
            "Registered ASR engine {} for {}",
            config.asr_default, config.asr_endpoint
        );
    }

    let state = AppState {
        pool: Arc::new(pool),
        asr_default: config.asr_default.clone(),
    };
    let router = create_router(state);

    let listener = TcpListener::bind(format!("{}:{}", config.address, config.port)).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutting down..."),
        Err(e) => error!("Failed to listen for shutdown signal: {}", e),
    }
}
