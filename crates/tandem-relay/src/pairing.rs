//! Role pairing for a room: coin-flip start, complementary roles, swaps.
//!
//! Everything here is pure; the engine supplies the room snapshot and
//! broadcasts the resulting messages.

use rand::Rng;
use tandem_config::GameConfig;

use crate::protocol::{Message, Participant, Role, ACTION_COUNTDOWN, ACTION_START_GAME};
use crate::room::RoomMember;

/// Rooms need at least this many sessions before a countdown can start.
pub const QUORUM: usize = 2;

/// One participant's assigned role.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Assignment {
    pub user_id: i64,
    pub role: Role,
}

/// Result of pairing a room. Slots stay empty when the room has fewer than
/// two distinct participants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pairing {
    pub first: Option<Assignment>,
    pub second: Option<Assignment>,
}

impl Pairing {
    pub fn is_complete(&self) -> bool {
        self.first.is_some() && self.second.is_some()
    }

    /// The `startGame` response carrying this pairing and the configured
    /// timings. Empty slots are sent as `{id: 0, role: ""}`.
    pub fn to_start_message(&self, game: &GameConfig) -> Message {
        Message {
            action_type: ACTION_START_GAME.to_string(),
            first_user_id: slot(self.first),
            second_user_id: slot(self.second),
            time_to_speak: game.time_to_speak_secs,
            start_game_count_down: game.start_countdown_secs,
            ..Message::default()
        }
    }
}

fn slot(assignment: Option<Assignment>) -> Participant {
    assignment
        .map(|a| Participant::assigned(a.user_id, a.role))
        .unwrap_or_default()
}

/// Assign complementary roles to the first two distinct participants.
///
/// The first member in `members` gets a uniformly random role; the next
/// member with a different participant id gets the other one. Anyone after
/// that is left out.
pub fn assign_roles<R: Rng>(members: &[RoomMember], rng: &mut R) -> Pairing {
    let mut pairing = Pairing::default();

    for member in members {
        match pairing.first {
            None => {
                let role = if rng.gen_bool(0.5) {
                    Role::Speaker
                } else {
                    Role::Listener
                };
                pairing.first = Some(Assignment {
                    user_id: member.user_id,
                    role,
                });
            }
            Some(first) if member.user_id != first.user_id => {
                pairing.second = Some(Assignment {
                    user_id: member.user_id,
                    role: first.role.complement(),
                });
                break;
            }
            Some(_) => {}
        }
    }

    pairing
}

/// Swap the two roles carried by `message` and reset the speaking time.
pub fn swap_roles(mut message: Message, game: &GameConfig) -> Message {
    std::mem::swap(
        &mut message.first_user_id.role,
        &mut message.second_user_id.role,
    );
    message.time_to_speak = game.swap_time_to_speak_secs;
    message.change_role = true;
    message
}

/// Countdown announcement sent when a probe finds the room ready.
pub fn countdown_start(game: &GameConfig) -> Message {
    Message {
        action_type: ACTION_COUNTDOWN.to_string(),
        time_to_speak: game.time_to_speak_secs,
        start_game_count_down: game.start_countdown_secs,
        ..Message::default()
    }
}
