//! Search Sequencing
//!
//! Orders analysis submissions per session. Each submission obtains a ticket
//! carrying a monotonically increasing sequence number; the eventual result
//! is committed only while that ticket is still the latest one issued for
//! its session. A completion that arrives after a newer submission is
//! discarded, so the committed state always reflects the most recently
//! submitted search. In-flight calls are never cancelled, only outvoted.

use std::collections::HashMap;
use std::sync::RwLock;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique search session identifier
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(String);

impl SessionId {
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn from_string(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Ticket for one submitted search
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchTicket {
    session: SessionId,
    seq: u64,
}

impl SearchTicket {
    pub fn session(&self) -> &SessionId {
        &self.session
    }

    pub fn seq(&self) -> u64 {
        self.seq
    }
}

/// A committed result together with its submission order
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CommittedSearch<R> {
    /// Sequence number of the submission that produced this result
    pub seq: u64,

    /// When the result was committed
    pub completed_at: DateTime<Utc>,

    /// The result itself
    pub result: R,
}

struct SessionSlot<R> {
    latest_seq: u64,
    committed: Option<CommittedSearch<R>>,
}

impl<R> SessionSlot<R> {
    fn empty() -> Self {
        Self {
            latest_seq: 0,
            committed: None,
        }
    }
}

/// In-memory registry of per-session search state
///
/// Locks are held only for the short synchronous begin/commit/read sections,
/// never across the gateway call in between.
pub struct SearchRegistry<R> {
    slots: RwLock<HashMap<SessionId, SessionSlot<R>>>,
}

impl<R: Clone> SearchRegistry<R> {
    pub fn new() -> Self {
        Self {
            slots: RwLock::new(HashMap::new()),
        }
    }

    /// Issue a ticket for a new submission, superseding any in-flight one
    pub fn begin(&self, session: &SessionId) -> SearchTicket {
        let mut slots = self.slots.write().unwrap();
        let slot = slots
            .entry(session.clone())
            .or_insert_with(SessionSlot::empty);
        slot.latest_seq += 1;

        SearchTicket {
            session: session.clone(),
            seq: slot.latest_seq,
        }
    }

    /// Commit a completed result
    ///
    /// Returns `false` (and drops the result) when the ticket has been
    /// superseded by a newer submission or its session no longer exists.
    pub fn commit(&self, ticket: &SearchTicket, result: R) -> bool {
        let mut slots = self.slots.write().unwrap();
        let Some(slot) = slots.get_mut(&ticket.session) else {
            return false;
        };

        if slot.latest_seq != ticket.seq {
            tracing::debug!(
                "Discarding stale result for session {} (seq {}, latest {})",
                ticket.session,
                ticket.seq,
                slot.latest_seq
            );
            return false;
        }

        slot.committed = Some(CommittedSearch {
            seq: ticket.seq,
            completed_at: Utc::now(),
            result,
        });
        true
    }

    /// Latest committed result for a session
    pub fn latest(&self, session: &SessionId) -> Option<CommittedSearch<R>> {
        let slots = self.slots.read().unwrap();
        slots.get(session).and_then(|slot| slot.committed.clone())
    }

    /// Drop a session's state entirely
    pub fn clear(&self, session: &SessionId) {
        let mut slots = self.slots.write().unwrap();
        slots.remove(session);
    }
}

impl<R: Clone> Default for SearchRegistry<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tickets_are_monotonic() {
        let registry: SearchRegistry<&str> = SearchRegistry::new();
        let session = SessionId::new();

        let first = registry.begin(&session);
        let second = registry.begin(&session);
        assert_eq!(first.seq(), 1);
        assert_eq!(second.seq(), 2);
    }

    #[test]
    fn test_current_commit_applies() {
        let registry = SearchRegistry::new();
        let session = SessionId::new();

        let ticket = registry.begin(&session);
        assert!(registry.commit(&ticket, "report"));

        let latest = registry.latest(&session).unwrap();
        assert_eq!(latest.result, "report");
        assert_eq!(latest.seq, 1);
    }

    #[test]
    fn test_stale_commit_is_discarded() {
        let registry = SearchRegistry::new();
        let session = SessionId::new();

        let old = registry.begin(&session);
        let new = registry.begin(&session);

        // Newer submission completes first
        assert!(registry.commit(&new, "new"));
        // The older one arrives late and must not overwrite
        assert!(!registry.commit(&old, "old"));

        assert_eq!(registry.latest(&session).unwrap().result, "new");
    }

    #[test]
    fn test_commit_after_clear_is_discarded() {
        let registry = SearchRegistry::new();
        let session = SessionId::new();

        let ticket = registry.begin(&session);
        registry.clear(&session);

        assert!(!registry.commit(&ticket, "report"));
        assert!(registry.latest(&session).is_none());
    }

    #[test]
    fn test_sessions_are_independent() {
        let registry = SearchRegistry::new();
        let a = SessionId::new();
        let b = SessionId::new();

        let ticket_a = registry.begin(&a);
        let _ = registry.begin(&b);
        let _ = registry.begin(&b);

        // A later submission on another session does not supersede this one
        assert!(registry.commit(&ticket_a, "a"));
    }
}
