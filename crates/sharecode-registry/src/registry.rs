//! The share-code registry.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{TimeDelta, Utc};
use tokio::sync::mpsc;

use sharecode_core::AppResult;

use crate::code;
use crate::entry::ShareCode;

/// TTL applied when the registry is constructed without an explicit value.
pub const DEFAULT_TTL_SECONDS: u64 = 30;

/// Map and current TTL, guarded together by a single lock.
#[derive(Debug)]
struct RegistryInner {
    codes: HashMap<String, ShareCode>,
    ttl_seconds: u64,
}

/// Concurrent mapping from share code to [`ShareCode`] entry.
///
/// All operations are short and in-memory; the lock is never held across an
/// await point. A lookup that finds an expired entry reports it as absent
/// and queues the code for removal on the channel returned by [`new`],
/// without making the caller wait on the removal. The receiving end is
/// normally consumed by a [`crate::sweeper::RegistrySweeper`]; if nobody
/// drains it, expired entries are still never returned, only retained.
///
/// [`new`]: ShareCodeRegistry::new
#[derive(Debug)]
pub struct ShareCodeRegistry {
    inner: RwLock<RegistryInner>,
    removal_tx: mpsc::UnboundedSender<String>,
}

impl ShareCodeRegistry {
    /// Creates a registry with the given TTL for future mints, along with
    /// the receiving end of the expired-entry removal queue.
    pub fn new(ttl_seconds: u64) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (removal_tx, removal_rx) = mpsc::unbounded_channel();
        let registry = Self {
            inner: RwLock::new(RegistryInner {
                codes: HashMap::new(),
                ttl_seconds: ttl_seconds.max(1),
            }),
            removal_tx,
        };
        (registry, removal_rx)
    }

    /// Mints a share code for `token` and stores the association.
    ///
    /// The code is not checked for uniqueness: the code space is small and
    /// entries are short-lived, so a later mint that produces the same code
    /// value replaces the earlier entry. The only failure is an
    /// entropy-source error, which is propagated to the caller.
    pub fn mint(&self, token: impl Into<String>) -> AppResult<ShareCode> {
        let code = code::generate()?;
        Ok(self.insert(code, token.into()))
    }

    /// Resolves a share code to its token.
    ///
    /// Returns `None` when the code is absent or expired; an expired entry
    /// is queued for removal without blocking the caller.
    pub fn resolve(&self, code: &str) -> Option<String> {
        let inner = self.read();
        let entry = inner.codes.get(code)?;

        if entry.is_expired_at(Utc::now()) {
            let _ = self.removal_tx.send(entry.code.clone());
            return None;
        }

        Some(entry.token.clone())
    }

    /// Returns the full entry for a share code, for TTL display.
    ///
    /// Same expiry semantics as [`resolve`](Self::resolve).
    pub fn info(&self, code: &str) -> Option<ShareCode> {
        let inner = self.read();
        let entry = inner.codes.get(code)?;

        if entry.is_expired_at(Utc::now()) {
            let _ = self.removal_tx.send(entry.code.clone());
            return None;
        }

        Some(entry.clone())
    }

    /// Removes a share code. Removing an absent code is a no-op.
    pub fn remove(&self, code: &str) {
        self.write().codes.remove(code);
    }

    /// Sets the TTL applied to future mints, in seconds.
    ///
    /// Entries already minted keep their original expiry. Values below one
    /// second are clamped to one.
    pub fn set_ttl(&self, seconds: u64) {
        self.write().ttl_seconds = seconds.max(1);
    }

    /// The TTL currently applied to new mints, in seconds.
    pub fn ttl_seconds(&self) -> u64 {
        self.read().ttl_seconds
    }

    /// Removes every entry whose expiry has passed.
    ///
    /// Returns the number of entries removed.
    pub fn purge_expired(&self) -> usize {
        let now = Utc::now();
        let mut inner = self.write();
        let before = inner.codes.len();
        inner.codes.retain(|_, entry| !entry.is_expired_at(now));
        before - inner.codes.len()
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.read().codes.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.read().codes.is_empty()
    }

    /// Stores an entry for `code`, replacing any existing entry with the
    /// same code value.
    fn insert(&self, code: String, token: String) -> ShareCode {
        let now = Utc::now();
        let mut inner = self.write();
        let entry = ShareCode {
            code: code.clone(),
            token,
            created_at: now,
            expires_at: now + TimeDelta::seconds(inner.ttl_seconds as i64),
        };
        inner.codes.insert(code, entry.clone());
        entry
    }

    fn read(&self) -> RwLockReadGuard<'_, RegistryInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, RegistryInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}
