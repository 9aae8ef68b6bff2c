pub mod errors;
pub mod id;

pub use errors::{ConfigError, HandshakeError, TandemError};
pub use id::ConnectionId;

pub type Result<T> = std::result::Result<T, TandemError>;
