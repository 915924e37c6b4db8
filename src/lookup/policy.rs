use std::time::Duration;
use tokio::time::Instant;

/// Default time-to-live for the id maps
pub const DEFAULT_TTL: Duration = Duration::from_secs(120);

/// When the id maps must be reloaded from the inventory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshPolicy {
    /// Reload once the last refresh is older than this
    Ttl(Duration),
    /// Reload before every lookup
    Always,
}

impl Default for RefreshPolicy {
    fn default() -> Self {
        Self::Ttl(DEFAULT_TTL)
    }
}

impl RefreshPolicy {
    /// Build a policy from raw seconds; zero or negative means reload every time
    pub fn from_secs(secs: i64) -> Self {
        if secs <= 0 {
            Self::Always
        } else {
            Self::Ttl(Duration::from_secs(secs as u64))
        }
    }

    /// TTL in seconds, `None` for [`RefreshPolicy::Always`]
    pub fn as_secs(&self) -> Option<u64> {
        match self {
            Self::Ttl(ttl) => Some(ttl.as_secs()),
            Self::Always => None,
        }
    }

    /// Whether maps last refreshed at `last_refresh` must be reloaded at `now`
    pub fn is_stale(&self, last_refresh: Option<Instant>, now: Instant) -> bool {
        let Some(last) = last_refresh else {
            return true;
        };

        match self {
            Self::Always => true,
            Self::Ttl(ttl) if ttl.is_zero() => true,
            Self::Ttl(ttl) => now.saturating_duration_since(last) > *ttl,
        }
    }
}
