use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier assigned to a ledger event by the backend.
pub type EventId = Uuid;

/// Input record for a ledger append.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpAward {
    pub user_id: String,
    pub amount: i64,
    pub event_type: String,
    pub description: String,
}

impl XpAward {
    pub fn new(user_id: String, amount: i64, event_type: String, description: String) -> Self {
        Self { user_id, amount, event_type, description }
    }
}

/// A stored XP event: an immutable fact, never mutated or deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct XpEvent {
    pub id: EventId,
    pub user_id: String,
    pub amount: i64,
    pub event_type: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}
