//! Wire protocol: one JSON object per WebSocket frame.
//!
//! Every field is optional on input (absent fields decode to zero values)
//! and always present on output, so clients see a fixed shape.

use std::fmt;

use serde::{Deserialize, Serialize};

pub const ACTION_START_GAME: &str = "startGame";
pub const ACTION_COUNTDOWN: &str = "countdown";
pub const ACTION_CHANGE_ROLE: &str = "changeRole";

/// A single relayed message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Message {
    /// Free-text payload for plain relay.
    pub content: String,
    pub action_type: String,
    pub first_user_id: Participant,
    pub second_user_id: Participant,
    /// Seconds of speaking time.
    pub time_to_speak: i64,
    /// Set on role-swap responses.
    pub change_role: bool,
    /// Seconds of pre-game countdown.
    pub start_game_count_down: i64,
    /// Reserved.
    pub introduce_role: String,
}

impl Message {
    pub fn action(&self) -> Action {
        Action::from_wire(&self.action_type)
    }

    pub fn decode(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn decode_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn encode(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// A participant slot in a message. An unassigned slot is `{id: 0, role: ""}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub id: i64,
    /// Role string as sent on the wire. Kept verbatim so a role swap never
    /// rejects a message whose roles the relay does not recognize.
    pub role: String,
}

impl Participant {
    pub fn assigned(id: i64, role: Role) -> Self {
        Self {
            id,
            role: role.as_str().to_string(),
        }
    }

    /// The parsed role, if the slot holds a known one.
    pub fn role(&self) -> Option<Role> {
        Role::from_wire(&self.role)
    }
}

/// Speaking-exercise role. Always assigned as a complementary pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Speaker,
    Listener,
}

impl Role {
    pub fn complement(self) -> Self {
        match self {
            Role::Speaker => Role::Listener,
            Role::Listener => Role::Speaker,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Speaker => "Speaker",
            Role::Listener => "Listener",
        }
    }

    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "Speaker" => Some(Role::Speaker),
            "Listener" => Some(Role::Listener),
            _ => None,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the engine treats an inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    StartGame,
    Countdown,
    ChangeRole,
    /// Any other action type, including an empty one.
    Probe,
}

impl Action {
    pub fn from_wire(action_type: &str) -> Self {
        match action_type {
            ACTION_START_GAME => Action::StartGame,
            ACTION_COUNTDOWN => Action::Countdown,
            ACTION_CHANGE_ROLE => Action::ChangeRole,
            _ => Action::Probe,
        }
    }
}
