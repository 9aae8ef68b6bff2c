//! Room and participant identity read from the upgrade request's query.

use tandem_common::HandshakeError;

/// Identity a client claims when it connects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandshakeParams {
    pub room_id: String,
    pub user_id: i64,
}

impl HandshakeParams {
    /// Parse `roomId` and `userId` from a raw query string.
    ///
    /// The first occurrence of each key wins. Both are required and
    /// `userId` must be a base-10 integer.
    pub fn from_query(query: Option<&str>) -> Result<Self, HandshakeError> {
        let query = query.unwrap_or_default();
        let room_id = query_param(query, "roomId")
            .filter(|room| !room.is_empty())
            .ok_or(HandshakeError::MissingRoom)?;
        let raw_user = query_param(query, "userId").ok_or(HandshakeError::MissingUser)?;
        let user_id = raw_user
            .parse::<i64>()
            .map_err(|_| HandshakeError::InvalidUser(raw_user.clone()))?;

        Ok(Self { room_id, user_id })
    }
}

/// First value for `key`, percent-decoded with `+` treated as a space.
fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| decode(k).as_deref() == Some(key))
        .and_then(|(_, v)| decode(v))
}

fn decode(raw: &str) -> Option<String> {
    let spaced = raw.replace('+', " ");
    urlencoding::decode(&spaced).ok().map(|s| s.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_room_and_user() {
        let params = HandshakeParams::from_query(Some("roomId=A&userId=1")).unwrap();
        assert_eq!(
            params,
            HandshakeParams {
                room_id: "A".into(),
                user_id: 1
            }
        );
    }

    #[test]
    fn order_does_not_matter() {
        let params = HandshakeParams::from_query(Some("userId=42&roomId=lobby")).unwrap();
        assert_eq!(params.room_id, "lobby");
        assert_eq!(params.user_id, 42);
    }

    #[test]
    fn values_are_percent_decoded() {
        let params =
            HandshakeParams::from_query(Some("roomId=study%20hall+2&userId=%2B7")).unwrap();
        assert_eq!(params.room_id, "study hall 2");
        assert_eq!(params.user_id, 7);
    }

    #[test]
    fn negative_user_id_is_accepted() {
        let params = HandshakeParams::from_query(Some("roomId=A&userId=-3")).unwrap();
        assert_eq!(params.user_id, -3);
    }

    #[test]
    fn first_value_wins() {
        let params = HandshakeParams::from_query(Some("roomId=A&roomId=B&userId=1&userId=2"))
            .unwrap();
        assert_eq!(params.room_id, "A");
        assert_eq!(params.user_id, 1);
    }

    #[test]
    fn non_integer_user_is_rejected() {
        assert_eq!(
            HandshakeParams::from_query(Some("roomId=A&userId=abc")),
            Err(HandshakeError::InvalidUser("abc".into()))
        );
        assert_eq!(
            HandshakeParams::from_query(Some("roomId=A&userId=1.5")),
            Err(HandshakeError::InvalidUser("1.5".into()))
        );
        assert_eq!(
            HandshakeParams::from_query(Some("roomId=A&userId=")),
            Err(HandshakeError::InvalidUser(String::new()))
        );
    }

    #[test]
    fn missing_user_is_rejected() {
        assert_eq!(
            HandshakeParams::from_query(Some("roomId=A")),
            Err(HandshakeError::MissingUser)
        );
    }

    #[test]
    fn missing_or_empty_room_is_rejected() {
        assert_eq!(
            HandshakeParams::from_query(Some("userId=1")),
            Err(HandshakeError::MissingRoom)
        );
        assert_eq!(
            HandshakeParams::from_query(Some("roomId=&userId=1")),
            Err(HandshakeError::MissingRoom)
        );
        assert_eq!(
            HandshakeParams::from_query(None),
            Err(HandshakeError::MissingRoom)
        );
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(
            HandshakeParams::from_query(Some("roomid=A&userid=1")),
            Err(HandshakeError::MissingRoom)
        );
    }
}
