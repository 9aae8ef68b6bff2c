use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Problems with the `roomId` / `userId` query parameters of an upgrade request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HandshakeError {
    #[error("missing roomId parameter")]
    MissingRoom,

    #[error("missing userId parameter")]
    MissingUser,

    #[error("userId is not an integer: {0:?}")]
    InvalidUser(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TandemError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("decode error: {0}")]
    Decode(String),

    #[error("{0}")]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_display() {
        let err = ConfigError::FileNotFound(PathBuf::from("/tmp/missing.toml"));
        assert_eq!(err.to_string(), "config file not found: /tmp/missing.toml");

        let err = ConfigError::ParseError("unexpected token".into());
        assert_eq!(err.to_string(), "config parse error: unexpected token");

        let err = ConfigError::ValidationError("server.port = 0".into());
        assert_eq!(err.to_string(), "config validation error: server.port = 0");
    }

    #[test]
    fn handshake_error_display() {
        assert_eq!(
            HandshakeError::MissingRoom.to_string(),
            "missing roomId parameter"
        );
        assert_eq!(
            HandshakeError::MissingUser.to_string(),
            "missing userId parameter"
        );
        assert_eq!(
            HandshakeError::InvalidUser("abc".into()).to_string(),
            "userId is not an integer: \"abc\""
        );
    }

    #[test]
    fn tandem_error_from_config() {
        let config_err = ConfigError::ParseError("bad toml".into());
        let err: TandemError = config_err.into();
        assert!(matches!(err, TandemError::Config(_)));
        assert!(err.to_string().contains("bad toml"));
    }

    #[test]
    fn tandem_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::AddrInUse, "port taken");
        let err: TandemError = io_err.into();
        assert!(matches!(err, TandemError::Io(_)));
        assert!(err.to_string().contains("port taken"));
    }

    #[test]
    fn tandem_error_other_variants() {
        let err = TandemError::Transport("connection reset".into());
        assert_eq!(err.to_string(), "transport error: connection reset");

        let err = TandemError::Decode("expected value at line 1".into());
        assert_eq!(err.to_string(), "decode error: expected value at line 1");

        let err = TandemError::Other("something went wrong".into());
        assert_eq!(err.to_string(), "something went wrong");
    }
}
