//! application entry point

use crate::client::cli::Cli;
use crate::client::model::config::ClientConfig;
use clap::Parser;
use derive_more::Display;
use log::{info, warn};
use std::env;
use std::path::{Path, PathBuf};
use std::str::FromStr;

mod client;

const DEFAULT_API_BASE: &str = "http://localhost:8080";
const DEFAULT_STATE_FILE: &str = ".orderly/state.json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // bootstrap
    // a. env
    let env = env::var("APP_ENV")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(Env::Dev); // default dev env if absent

    let dotenv = match env {
        Env::Prod | Env::Stg => Ok(()), // provided by the shell
        Env::Dev => dotenvy::from_path(Path::new(".env.dev")),
    };

    // b. logging
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    if let Err(e) = dotenv {
        warn!("no .env.dev loaded, using process env only, {}", e);
    }

    // c. run
    let config = ClientConfig::new(
        env::var("ORDERLY_API_BASE").unwrap_or(DEFAULT_API_BASE.to_string()),
        env::var("ORDERLY_STATE_FILE")
            .map(PathBuf::from)
            .unwrap_or(PathBuf::from(DEFAULT_STATE_FILE)),
    );

    info!("client is starting in env={}, api={}", env, config.api_base);

    client::run(config, cli).await
}

#[derive(Debug, Display)]
#[non_exhaustive]
enum Env {
    Dev,
    Stg,
    Prod,
}

impl FromStr for Env {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dev" => Ok(Self::Dev),
            "stg" => Ok(Self::Stg),
            "prod" => Ok(Self::Prod),
            s => Err(format!("Invalid Env: {s}")),
        }
    }
}
