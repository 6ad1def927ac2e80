use clap::Parser;
use promessa_core::init_telemetry;
use promessa_error::{ConfigError, PromessaResult};
use promessa_server::{serve, InMemoryIdentity, ServerConfig};
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(author, version, about = "Promessa wedding planner API server", long_about = None)]
struct Args {
    /// Address to bind, overriding PROMESSA_BIND_ADDR
    #[arg(short, long)]
    bind: Option<String>,

    /// Directory for the device-local fallback store, overriding
    /// PROMESSA_LOCAL_STORE_DIR
    #[arg(short, long)]
    local_store_dir: Option<String>,
}

#[tokio::main]
async fn main() -> PromessaResult<()> {
    dotenvy::dotenv().ok();
    init_telemetry().map_err(|e| ConfigError::new(format!("telemetry init failed: {e}")))?;

    let args = Args::parse();
    let mut config = ServerConfig::from_env()?;
    if args.bind.is_some() || args.local_store_dir.is_some() {
        config = ServerConfig::new(
            config.database_url().clone(),
            args.bind.unwrap_or_else(|| config.bind_addr().clone()),
            args.local_store_dir
                .unwrap_or_else(|| config.local_store_dir().clone()),
        );
    }

    serve(config, Arc::new(InMemoryIdentity::new())).await
}
