use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Monotonically increasing source for connection ids.
static NEXT_CONNECTION: AtomicU64 = AtomicU64::new(1);

/// Identity of one live connection. Distinct connections never share an id
/// within a process, even when they carry the same participant id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConnectionId(u64);

impl ConnectionId {
    pub fn next() -> Self {
        Self(NEXT_CONNECTION.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "conn-{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_is_unique() {
        let a = ConnectionId::next();
        let b = ConnectionId::next();
        assert_ne!(a, b);
    }

    #[test]
    fn next_is_increasing() {
        let a = ConnectionId::next();
        let b = ConnectionId::next();
        assert!(b > a);
    }

    #[test]
    fn display_has_prefix() {
        let id = ConnectionId::next();
        assert_eq!(id.to_string(), format!("conn-{}", id.as_u64()));
    }

    #[test]
    fn hash_dedupes_copies() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        let id = ConnectionId::next();
        set.insert(id);
        set.insert(id);
        assert_eq!(set.len(), 1);
    }
}
