//! Accept loop: TCP accept, WebSocket upgrade on the configured path,
//! identity check, then one task per session.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tandem_common::HandshakeError;
use tandem_config::TandemConfig;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::accept_hdr_async;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http::StatusCode;

use crate::connection::handle_connection;
use crate::engine::RoomEngine;
use crate::handshake::HandshakeParams;
use crate::registry::ConnectionRegistry;

/// Everything a connection task needs, cheap to clone per accept.
#[derive(Clone)]
pub struct Relay {
    engine: RoomEngine,
    path: Arc<str>,
    queue_capacity: usize,
}

impl Relay {
    pub fn new(engine: RoomEngine, path: impl Into<Arc<str>>, queue_capacity: usize) -> Self {
        Self {
            engine,
            path: path.into(),
            queue_capacity,
        }
    }

    /// Build a relay with a fresh registry from loaded configuration.
    pub fn from_config(config: &TandemConfig) -> Self {
        let engine = RoomEngine::new(ConnectionRegistry::new(), config.game);
        Self::new(
            engine,
            config.server.path.as_str(),
            config.server.outbound_queue_capacity,
        )
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        self.engine.registry()
    }

    /// Accept connections until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F)
    where
        F: Future<Output = ()>,
    {
        tokio::pin!(shutdown);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Shutting down, no longer accepting connections");
                    break;
                }
                accepted = listener.accept() => match accepted {
                    Ok((stream, addr)) => {
                        let relay = self.clone();
                        tokio::spawn(async move { relay.accept(stream, addr).await });
                    }
                    Err(e) => {
                        tracing::warn!(error = %e, "TCP accept error");
                    }
                },
            }
        }
    }

    /// Upgrade one TCP stream and run its session.
    async fn accept(self, stream: TcpStream, addr: SocketAddr) {
        let mut identity: Option<Result<HandshakeParams, HandshakeError>> = None;
        let path = Arc::clone(&self.path);

        let callback = |request: &Request, response: Response| -> Result<Response, ErrorResponse> {
            if request.uri().path() != &*path {
                let mut refusal = ErrorResponse::new(None);
                *refusal.status_mut() = StatusCode::NOT_FOUND;
                return Err(refusal);
            }
            identity = Some(HandshakeParams::from_query(request.uri().query()));
            Ok(response)
        };

        let upgraded = accept_hdr_async(stream, callback).await;
        let ws = match upgraded {
            Ok(ws) => ws,
            Err(e) => {
                tracing::warn!(peer = %addr, error = %e, "WS handshake failed");
                return;
            }
        };

        match identity {
            Some(Ok(params)) => {
                handle_connection(ws, addr, params, self.engine, self.queue_capacity).await;
            }
            // Dropping the stream closes the socket without a reply.
            Some(Err(e)) => {
                tracing::debug!(peer = %addr, error = %e, "Rejected connection");
            }
            None => {
                tracing::debug!(peer = %addr, "Upgrade completed without a request");
            }
        }
    }
}
