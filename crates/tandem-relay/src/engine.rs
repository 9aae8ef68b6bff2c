//! Per-message dispatch: routes each inbound message by action type and
//! hands the result to the room broadcast.

use tandem_common::{ConnectionId, TandemError};
use tandem_config::GameConfig;

use crate::broadcast::BroadcastReport;
use crate::pairing::{assign_roles, countdown_start, swap_roles, QUORUM};
use crate::protocol::{Action, Message};
use crate::registry::ConnectionRegistry;

/// Identity of the session a message arrived on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub conn: ConnectionId,
    pub room_id: String,
    pub user_id: i64,
}

/// Room engine shared by every connection task.
#[derive(Clone)]
pub struct RoomEngine {
    registry: ConnectionRegistry,
    game: GameConfig,
}

impl RoomEngine {
    pub fn new(registry: ConnectionRegistry, game: GameConfig) -> Self {
        Self { registry, game }
    }

    pub fn registry(&self) -> &ConnectionRegistry {
        &self.registry
    }

    /// Handle one inbound message from `ctx`.
    ///
    /// Returns the combined outcome of every broadcast it triggered (empty
    /// when nothing was sent).
    pub async fn handle(
        &self,
        ctx: &SessionContext,
        message: Message,
    ) -> Result<BroadcastReport, TandemError> {
        match message.action() {
            Action::StartGame => self.start_game(&ctx.room_id).await,
            Action::Countdown => {
                tracing::info!(room = %ctx.room_id, user = ctx.user_id, "countdown");
                self.registry.broadcast(&ctx.room_id, &message).await
            }
            Action::ChangeRole => {
                let response = swap_roles(message, &self.game);
                tracing::info!(
                    room = %ctx.room_id,
                    first = %response.first_user_id.role,
                    second = %response.second_user_id.role,
                    "Roles swapped"
                );
                self.registry.broadcast(&ctx.room_id, &response).await
            }
            Action::Probe => self.probe(ctx, message).await,
        }
    }

    /// Pair the room and announce the roles.
    pub async fn start_game(&self, room_id: &str) -> Result<BroadcastReport, TandemError> {
        let members = self.registry.members_of(room_id).await;
        if members.len() > QUORUM {
            tracing::warn!(
                room = room_id,
                members = members.len(),
                "More than two participants; extra members get no role"
            );
        }

        let pairing = assign_roles(&members, &mut rand::thread_rng());
        if !pairing.is_complete() {
            tracing::debug!(room = room_id, members = members.len(), "Incomplete pairing");
        }

        let response = pairing.to_start_message(&self.game);
        tracing::info!(
            room = room_id,
            first = response.first_user_id.id,
            first_role = %response.first_user_id.role,
            second = response.second_user_id.id,
            second_role = %response.second_user_id.role,
            "Game start"
        );
        self.registry.broadcast(room_id, &response).await
    }

    /// Relay any plain content, then start the countdown if the room is
    /// ready and this session has not triggered one yet.
    async fn probe(
        &self,
        ctx: &SessionContext,
        message: Message,
    ) -> Result<BroadcastReport, TandemError> {
        let mut report = BroadcastReport::default();
        if !message.content.is_empty() {
            report.merge(self.registry.broadcast(&ctx.room_id, &message).await?);
        }

        let count = self.registry.count(&ctx.room_id).await;
        tracing::debug!(room = %ctx.room_id, count, "Probe");
        if count < QUORUM || !self.registry.claim_countdown(ctx.conn).await {
            return Ok(report);
        }

        tracing::info!(room = %ctx.room_id, user = ctx.user_id, "Game started");
        report.merge(
            self.registry
                .broadcast(&ctx.room_id, &countdown_start(&self.game))
                .await?,
        );
        Ok(report)
    }
}
