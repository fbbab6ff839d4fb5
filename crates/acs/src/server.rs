use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{error, info, warn};

use acs_scgi::connection::ScgiConnection;

use crate::config::ServerConfig;
use crate::responder::CwmpResponder;

/// Consecutive accept failures treated as a persistent listener error.
const ACCEPT_FAILURE_LIMIT: u32 = 8;

#[derive(Debug, Default)]
pub struct ServerBuilder {
    config: ServerConfig,
}

impl ServerBuilder {
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> Server {
        Server { config: self.config }
    }
}

/// The process-wide server context: the listener and the accept loop.
///
/// Each accepted socket is handed to its own task owning an
/// [`ScgiConnection`]; a failing connection is dropped and logged without
/// affecting the others. Only a persistent listener failure shuts the
/// server down.
#[derive(Debug)]
pub struct Server {
    config: ServerConfig,
}

impl Server {
    pub fn builder() -> ServerBuilder {
        ServerBuilder::default()
    }

    pub async fn start(self) {
        info!(listen = %self.config.listen, "start listening");
        let tcp_listener = match TcpListener::bind(self.config.listen).await {
            Ok(tcp_listener) => tcp_listener,
            Err(e) => {
                error!(cause = %e, "bind server error");
                return;
            }
        };

        let limits = self.config.limits();
        let handler = Arc::new(CwmpResponder);
        let mut accept_failures = 0u32;

        loop {
            let (tcp_stream, _remote_addr) = match tcp_listener.accept().await {
                Ok(stream_and_addr) => {
                    accept_failures = 0;
                    stream_and_addr
                }
                Err(e) => {
                    accept_failures += 1;
                    if accept_failures >= ACCEPT_FAILURE_LIMIT {
                        error!(cause = %e, "persistent listener error, shutting down");
                        return;
                    }
                    warn!(cause = %e, "failed to accept");
                    continue;
                }
            };

            let handler = handler.clone();

            tokio::spawn(async move {
                let (reader, writer) = tcp_stream.into_split();
                let connection = ScgiConnection::new(reader, writer, limits);
                match connection.process(handler).await {
                    Ok(()) => info!("finished process, connection shutdown"),
                    Err(e) => error!("connection has error, cause {}, connection shutdown", e),
                }
            });
        }
    }
}
