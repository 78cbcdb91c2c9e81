use recordstore::{config::Config, web};
use std::path::PathBuf;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Optional JSON config file as the first argument
    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = match Config::load(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    info!("recordstore starting...");

    if let Err(e) = web::run_web_server(&config.addr, web::new_state()).await {
        error!("Web server error: {:#}", e);
        std::process::exit(1);
    }
}
