//! Timing constants carried in game messages.

use serde::{Deserialize, Serialize};

/// Durations (seconds) stamped onto start and role-swap messages. The relay
/// never runs timers itself; clients count down and send ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Pre-game countdown sent with `startGame` and implicit countdowns.
    pub start_countdown_secs: i64,
    /// Speaking time for the first turn.
    pub time_to_speak_secs: i64,
    /// Speaking time after a role swap.
    pub swap_time_to_speak_secs: i64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            start_countdown_secs: 30,
            time_to_speak_secs: 600,
            swap_time_to_speak_secs: 10,
        }
    }
}
