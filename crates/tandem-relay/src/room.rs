//! Room index: a read-time projection over the connection registry.
//!
//! Rooms are never stored. Membership is recomputed from the registry on
//! every query so departed sessions can never be seen.

use tandem_common::ConnectionId;

use crate::registry::{ConnectionRegistry, Visit};

/// Snapshot of one session's identity within a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoomMember {
    pub conn: ConnectionId,
    pub user_id: i64,
}

impl ConnectionRegistry {
    /// Members of `room_id` in registry iteration order. The order is
    /// unspecified and may differ between calls.
    pub async fn members_of(&self, room_id: &str) -> Vec<RoomMember> {
        let mut members = Vec::new();
        self.for_each_in_room(room_id, |conn, session| {
            members.push(RoomMember {
                conn,
                user_id: session.user_id,
            });
            Visit::Keep
        })
        .await;
        members
    }

    /// Number of sessions currently in `room_id`.
    pub async fn count(&self, room_id: &str) -> usize {
        let mut count = 0;
        self.for_each_in_room(room_id, |_, _| {
            count += 1;
            Visit::Keep
        })
        .await;
        count
    }
}
