//! Share-code entry type.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A minted share code and the token it stands in for.
///
/// Entries are immutable once stored — they are only ever removed, or
/// replaced wholesale when a later mint produces the same code value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShareCode {
    /// The 6-digit code.
    pub code: String,
    /// The opaque access token the code resolves to.
    pub token: String,
    /// When the code was minted.
    pub created_at: DateTime<Utc>,
    /// When the code stops being valid.
    pub expires_at: DateTime<Utc>,
}

impl ShareCode {
    /// Whether the entry is past its expiry at `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now > self.expires_at
    }

    /// Seconds of validity left at `now`, floored at zero.
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> i64 {
        (self.expires_at - now).num_seconds().max(0)
    }
}
