//! Per-connection lifecycle: register, read/write loop, guaranteed cleanup.

use std::net::SocketAddr;

use futures_util::{SinkExt, StreamExt};
use tandem_common::{ConnectionId, TandemError};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::sync::mpsc;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::WebSocketStream;
use tokio_util::sync::CancellationToken;

use crate::engine::{RoomEngine, SessionContext};
use crate::handshake::HandshakeParams;
use crate::protocol::Message;
use crate::registry::Session;

/// Why a session's loop ended.
#[derive(Debug)]
pub enum Exit {
    /// Peer sent Close or the stream ended.
    Closed,
    /// Dropped from the registry by a broadcast.
    Evicted,
    /// Transport or decode failure.
    Failed(TandemError),
}

/// Run one registered session until it ends.
///
/// Registers the session, then loops: decoded inbound frames go to the
/// engine, queued outbound payloads go to the socket. Whatever ends the
/// loop, the session is deregistered before the socket is closed.
pub async fn handle_connection<S>(
    ws: WebSocketStream<S>,
    addr: SocketAddr,
    params: HandshakeParams,
    engine: RoomEngine,
    queue_capacity: usize,
) -> Exit
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (mut sink, mut stream) = ws.split();
    let (tx, mut rx) = mpsc::channel::<String>(queue_capacity);
    let evicted = CancellationToken::new();

    let ctx = SessionContext {
        conn: ConnectionId::next(),
        room_id: params.room_id,
        user_id: params.user_id,
    };

    engine
        .registry()
        .register(
            ctx.conn,
            Session::new(ctx.room_id.clone(), ctx.user_id, tx, evicted.clone()),
        )
        .await;

    tracing::info!(
        peer = %addr,
        conn = %ctx.conn,
        room = %ctx.room_id,
        user = ctx.user_id,
        "Client connected to room"
    );

    let exit = loop {
        tokio::select! {
            _ = evicted.cancelled() => break Exit::Evicted,

            // Payloads queued by broadcasts → this client's socket.
            outbound = rx.recv() => match outbound {
                Some(text) => {
                    if let Err(e) = sink.send(WsMessage::Text(text.into())).await {
                        break Exit::Failed(TandemError::Transport(e.to_string()));
                    }
                }
                None => break Exit::Evicted,
            },

            // Frames from this client → engine.
            frame = stream.next() => {
                let message = match frame {
                    Some(Ok(WsMessage::Text(text))) => Message::decode(text.as_str()),
                    Some(Ok(WsMessage::Binary(data))) => Message::decode_slice(&data),
                    Some(Ok(WsMessage::Ping(data))) => {
                        let _ = sink.send(WsMessage::Pong(data)).await;
                        continue;
                    }
                    Some(Ok(WsMessage::Close(_))) | None => break Exit::Closed,
                    Some(Ok(_)) => continue,
                    Some(Err(e)) => break Exit::Failed(TandemError::Transport(e.to_string())),
                };

                let message = match message {
                    Ok(message) => message,
                    Err(e) => break Exit::Failed(TandemError::Decode(e.to_string())),
                };

                match engine.handle(&ctx, message).await {
                    Ok(report) if !report.evicted.is_empty() => {
                        tracing::debug!(
                            conn = %ctx.conn,
                            room = %ctx.room_id,
                            evicted = report.evicted.len(),
                            "Broadcast evicted recipients"
                        );
                    }
                    Ok(_) => {}
                    Err(e) => break Exit::Failed(e),
                }
            }
        }
    };

    // Deregister first so no broadcast can target a closing socket.
    engine.registry().deregister(ctx.conn).await;
    let _ = sink.close().await;

    match &exit {
        Exit::Failed(e) => tracing::info!(
            peer = %addr,
            conn = %ctx.conn,
            room = %ctx.room_id,
            user = ctx.user_id,
            error = %e,
            "Client disconnected"
        ),
        _ => tracing::info!(
            peer = %addr,
            conn = %ctx.conn,
            room = %ctx.room_id,
            user = ctx.user_id,
            reason = ?exit,
            "Client disconnected"
        ),
    }

    exit
}
