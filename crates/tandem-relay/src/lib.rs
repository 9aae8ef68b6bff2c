//! tandem-relay: room-scoped WebSocket relay for paired speaking practice.
//!
//! Clients connect with a room and participant id, and every message they
//! send is fanned out to the whole room. Two participants in a room can
//! start a game; the relay assigns them complementary Speaker/Listener
//! roles, swaps the roles on request, and passes countdown ticks through.
//! The relay runs no timers of its own.

pub mod broadcast;
pub mod connection;
pub mod engine;
pub mod handshake;
pub mod pairing;
pub mod protocol;
pub mod registry;
pub mod room;
pub mod server;


pub use broadcast::BroadcastReport;
pub use engine::{RoomEngine, SessionContext};
pub use handshake::HandshakeParams;
pub use protocol::{Action, Message, Participant, Role};
pub use registry::{ConnectionRegistry, Session};
pub use room::RoomMember;
pub use server::Relay;
