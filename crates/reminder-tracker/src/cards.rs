//! Reminder Card Registry
//!
//! Ordered list of injected reminder fragments. Each card key is the handle of
//! its dismiss control and maps to the reminder id the fragment was inserted for.

use crate::models::ReminderId;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ReminderCard {
    pub key: CardKey,
    pub reminder_id: ReminderId,
    pub html: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReminderCards {
    cards: Vec<ReminderCard>,
    next_key: u64,
}

impl ReminderCards {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment at the end of the container
    pub fn push(&mut self, reminder_id: ReminderId, html: impl Into<String>) -> CardKey {
        let key = CardKey(self.next_key);
        self.next_key += 1;
        self.cards.push(ReminderCard {
            key,
            reminder_id,
            html: html.into(),
        });
        key
    }

    /// Remove every card bound to `reminder_id`, returning how many went
    pub fn remove_reminder(&mut self, reminder_id: ReminderId) -> usize {
        let before = self.cards.len();
        self.cards.retain(|card| card.reminder_id != reminder_id);
        before - self.cards.len()
    }

    /// Resolve a dismiss control to its reminder
    pub fn reminder_for(&self, key: CardKey) -> Option<ReminderId> {
        self.cards
            .iter()
            .find(|card| card.key == key)
            .map(|card| card.reminder_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ReminderCard> {
        self.cards.iter()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
