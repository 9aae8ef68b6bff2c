//! Room fan-out with drop-and-evict backpressure.

use tandem_common::{ConnectionId, TandemError};
use tokio::sync::mpsc::error::TrySendError;

use crate::protocol::Message;
use crate::registry::{ConnectionRegistry, Visit};

/// Outcome of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BroadcastReport {
    /// Recipients whose queue accepted the message.
    pub delivered: usize,
    /// Recipients removed from the registry because their queue was full
    /// or their connection was already gone.
    pub evicted: Vec<ConnectionId>,
}

impl BroadcastReport {
    pub fn recipients(&self) -> usize {
        self.delivered + self.evicted.len()
    }

    /// Fold another broadcast's outcome into this one.
    pub fn merge(&mut self, other: BroadcastReport) {
        self.delivered += other.delivered;
        self.evicted.extend(other.evicted);
    }
}

impl ConnectionRegistry {
    /// Deliver `message` to every session in `room_id`, sender included.
    ///
    /// Enqueueing never waits. A recipient that cannot take the message is
    /// evicted and the fan-out continues with the rest of the room. The only
    /// error is failing to encode the message, which happens before any
    /// recipient is touched.
    pub async fn broadcast(
        &self,
        room_id: &str,
        message: &Message,
    ) -> Result<BroadcastReport, TandemError> {
        let payload = message
            .encode()
            .map_err(|e| TandemError::Other(format!("failed to encode message: {e}")))?;

        let mut report = BroadcastReport::default();
        self.for_each_in_room(room_id, |conn, session| {
            match session.outbound().try_send(payload.clone()) {
                Ok(()) => {
                    report.delivered += 1;
                    Visit::Keep
                }
                Err(TrySendError::Full(_)) => {
                    tracing::warn!(
                        conn = %conn,
                        room = room_id,
                        user = session.user_id,
                        "Outbound queue full, evicting slow client"
                    );
                    session.evict();
                    report.evicted.push(conn);
                    Visit::Remove
                }
                Err(TrySendError::Closed(_)) => {
                    tracing::debug!(
                        conn = %conn,
                        room = room_id,
                        user = session.user_id,
                        "Outbound queue closed, removing session"
                    );
                    session.evict();
                    report.evicted.push(conn);
                    Visit::Remove
                }
            }
        })
        .await;

        Ok(report)
    }
}
