//! Connection registry: maps live connections to their session metadata.
//!
//! The registry is the only shared mutable state in the relay. Every access
//! goes through one flat lock, held for the map operation or iteration and
//! never across an await on the network.

use std::collections::HashMap;
use std::sync::Arc;

use tandem_common::ConnectionId;
use tokio::sync::{mpsc, Mutex};
use tokio_util::sync::CancellationToken;

/// Bounded sender feeding one connection's outbound writer.
pub type OutboundSender = mpsc::Sender<String>;

/// Server-side state for one live connection.
pub struct Session {
    pub room_id: String,
    pub user_id: i64,
    outbound: OutboundSender,
    /// Cancelled when the session is evicted by a broadcast.
    evicted: CancellationToken,
    /// Set once this session has triggered an implicit countdown.
    countdown_sent: bool,
}

impl Session {
    pub fn new(
        room_id: impl Into<String>,
        user_id: i64,
        outbound: OutboundSender,
        evicted: CancellationToken,
    ) -> Self {
        Self {
            room_id: room_id.into(),
            user_id,
            outbound,
            evicted,
            countdown_sent: false,
        }
    }

    pub fn outbound(&self) -> &OutboundSender {
        &self.outbound
    }

    pub fn countdown_sent(&self) -> bool {
        self.countdown_sent
    }

    /// Signal the owning connection that it was dropped from the registry.
    pub(crate) fn evict(&self) {
        self.evicted.cancel();
    }
}

/// What to do with a session after visiting it in [`ConnectionRegistry::for_each_in_room`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit {
    Keep,
    Remove,
}

/// Thread-safe registry of live sessions, keyed by connection.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    sessions: Arc<Mutex<HashMap<ConnectionId, Session>>>,
}

impl ConnectionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a session. Last write wins if `conn` is already present.
    pub async fn register(&self, conn: ConnectionId, session: Session) {
        let mut map = self.sessions.lock().await;
        if map.insert(conn, session).is_some() {
            tracing::warn!(conn = %conn, "Replaced existing session for connection");
        }
    }

    /// Remove a session. Returns false if it was already gone.
    pub async fn deregister(&self, conn: ConnectionId) -> bool {
        self.sessions.lock().await.remove(&conn).is_some()
    }

    /// Visit every session in `room_id` under a single critical section.
    ///
    /// Sessions for which `visit` returns [`Visit::Remove`] are dropped
    /// from the registry before the lock is released.
    pub async fn for_each_in_room<F>(&self, room_id: &str, mut visit: F)
    where
        F: FnMut(ConnectionId, &mut Session) -> Visit,
    {
        let mut map = self.sessions.lock().await;
        map.retain(|conn, session| {
            session.room_id != room_id || visit(*conn, session) == Visit::Keep
        });
    }

    /// Mark the one-shot countdown flag of `conn`.
    ///
    /// Returns true only for the call that flips the flag; false if it was
    /// already set or the session is gone.
    pub async fn claim_countdown(&self, conn: ConnectionId) -> bool {
        let mut map = self.sessions.lock().await;
        match map.get_mut(&conn) {
            Some(session) if !session.countdown_sent => {
                session.countdown_sent = true;
                true
            }
            _ => false,
        }
    }

    pub async fn contains(&self, conn: ConnectionId) -> bool {
        self.sessions.lock().await.contains_key(&conn)
    }

    /// Number of live sessions across all rooms.
    pub async fn len(&self) -> usize {
        self.sessions.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.lock().await.is_empty()
    }
}
