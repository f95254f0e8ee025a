//! Append-only XP event ledger abstraction.
//!
//! The ledger is owned by an external datastore; this core sees only the
//! three operations of [`LedgerAccessor`]. A user's total XP at any point in
//! time is the sum of their event amounts, never a stored mutable counter.

mod memory;
mod types;

pub use memory::InMemoryLedger;
pub use types::{EventId, XpAward, XpEvent};

use thiserror::Error;

/// Failure of the ledger collaborator (network, constraint violation, ...).
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backend could not serve the request.
    #[error("ledger backend error: {0}")]
    Backend(String),

    /// A uniqueness constraint rejected the append.
    ///
    /// Backends may enforce a unique key on `(user_id, event_type,
    /// description)`. The award coordinator treats this variant as the
    /// "already awarded" signal during milestone awarding, which closes the
    /// check-then-act race without client-side locking. Backends without
    /// such a constraint never return it.
    #[error("duplicate event: {0}")]
    Duplicate(String),
}

/// Collaborator interface over the externally-owned event ledger.
pub trait LedgerAccessor {
    /// Append one immutable award record. The backend assigns the event id
    /// and timestamp.
    fn append(&self, award: XpAward) -> Result<EventId, StoreError>;

    /// Sum of all amounts recorded for the user. Zero for an unknown user.
    fn sum_xp(&self, user_id: &str) -> Result<i64, StoreError>;

    /// Look up an event by its exact `(user_id, event_type, description)`
    /// triple. Used for idempotency checks before milestone awards.
    fn find_event(
        &self,
        user_id: &str,
        event_type: &str,
        description: &str,
    ) -> Result<Option<XpEvent>, StoreError>;
}
