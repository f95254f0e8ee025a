use std::sync::Mutex;

use chrono::Utc;
use uuid::Uuid;

use super::{EventId, LedgerAccessor, StoreError, XpAward, XpEvent};

/// Reference ledger backend holding events in process memory.
///
/// Used by tests and by embedders without a datastore wired up. Appends are
/// plain inserts with no uniqueness constraint, matching the weakest backend
/// the award coordinator must tolerate.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    events: Mutex<Vec<XpEvent>>,
}

impl InMemoryLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events for a user, oldest first. History-feed helper; not part of
    /// the [`LedgerAccessor`] contract.
    pub fn events_for(&self, user_id: &str) -> Vec<XpEvent> {
        self.events
            .lock()
            .map(|events| events.iter().filter(|e| e.user_id == user_id).cloned().collect())
            .unwrap_or_default()
    }

    /// Total number of events across all users.
    pub fn len(&self) -> usize {
        self.events.lock().map(|events| events.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl LedgerAccessor for InMemoryLedger {
    fn append(&self, award: XpAward) -> Result<EventId, StoreError> {
        let event = XpEvent {
            id: Uuid::new_v4(),
            user_id: award.user_id,
            amount: award.amount,
            event_type: award.event_type,
            description: award.description,
            created_at: Utc::now(),
        };
        let id = event.id;
        self.events
            .lock()
            .map_err(|_| StoreError::Backend("ledger mutex poisoned".to_string()))?
            .push(event);
        Ok(id)
    }

    fn sum_xp(&self, user_id: &str) -> Result<i64, StoreError> {
        let events = self
            .events
            .lock()
            .map_err(|_| StoreError::Backend("ledger mutex poisoned".to_string()))?;
        Ok(events.iter().filter(|e| e.user_id == user_id).map(|e| e.amount).sum())
    }

    fn find_event(
        &self,
        user_id: &str,
        event_type: &str,
        description: &str,
    ) -> Result<Option<XpEvent>, StoreError> {
        let events = self
            .events
            .lock()
            .map_err(|_| StoreError::Backend("ledger mutex poisoned".to_string()))?;
        Ok(events
            .iter()
            .find(|e| {
                e.user_id == user_id
                    && e.event_type == event_type
                    && e.description == description
            })
            .cloned())
    }
}
