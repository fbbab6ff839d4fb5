use std::env;

use tracing::{Level, error, info};
use tracing_subscriber::FmtSubscriber;

use acs_server::Server;
use acs_server::config::ServerConfig;

#[tokio::main]
async fn main() {
    let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let config = match env::args().nth(1) {
        Some(path) => match ServerConfig::load(&path) {
            Ok(config) => {
                info!(path, "config loaded");
                config
            }
            Err(e) => {
                error!(cause = %e, path, "can't load config");
                return;
            }
        },
        None => ServerConfig::default(),
    };

    Server::builder().config(config).build().start().await;
}
