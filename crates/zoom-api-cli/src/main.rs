/*
[INPUT]:  CLI arguments, YAML configuration file, ZOOM_* environment variables
[OUTPUT]: Pretty-printed JSON results on stdout
[POS]:    Binary entry point
[UPDATE]: When changing CLI flags or startup flow
*/

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use zoom_api_cli::{CliConfig, Command, run};

#[derive(Parser, Debug)]
#[command(name = "zoom-api-cli", version, about = "Command line access to the Zoom REST API")]
struct Cli {
    #[arg(long = "config", value_name = "PATH", global = true)]
    config_path: Option<PathBuf>,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info", global = true)]
    log_level: String,
    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_tracing(&args.log_level)?;

    let config = match &args.config_path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    }
    .with_env_overrides(|name| std::env::var(name).ok());
    info!(
        config_path = ?args.config_path,
        base_url = ?config.base_url,
        "configuration loaded"
    );

    let output = run(args.command, &config).await?;
    println!(
        "{}",
        serde_json::to_string_pretty(&output).context("render output")?
    );
    Ok(())
}

fn init_tracing(log_level: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level).context("invalid log level")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;
    Ok(())
}

fn load_config(path: &PathBuf) -> Result<CliConfig> {
    let path_str = path
        .to_str()
        .context("config path must be valid utf-8")?;
    CliConfig::from_file(path_str).context("load config")
}
