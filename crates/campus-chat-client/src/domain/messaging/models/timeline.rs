// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use crate::domain::messaging::models::{
    DeliveryState, Message, MessageId, MessagingError, SendMessageRequest,
};
use crate::domain::shared::models::UserId;

/// The loaded messages of a single room, kept in ascending timestamp order.
///
/// Messages are keyed by their id. Merging a message that is already known never creates a
/// second entry. Locally sent messages stay in the timeline together with the request that
/// produced them until the backend confirmed them, so that a failed delivery can be retried
/// with the same payload.
#[derive(Debug, Default)]
pub struct Timeline {
    messages: Vec<Message>,
    outbox: HashMap<MessageId, SendMessageRequest>,
    next_page: Option<u32>,
    has_more: bool,
    pub(super) is_loading: bool,
    pub(super) session: u64,
    pub(super) open_count: usize,
}

impl Timeline {
    pub(super) fn with_session(session: u64) -> Self {
        Self {
            session,
            ..Default::default()
        }
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn get(&self, id: &MessageId) -> Option<&Message> {
        self.position(id).map(|idx| &self.messages[idx])
    }

    pub fn contains(&self, id: &MessageId) -> bool {
        self.position(id).is_some()
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    /// The page that follows the highest page loaded so far.
    pub fn next_page(&self) -> Option<u32> {
        self.next_page
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn record_page(&mut self, page: u32, has_more: bool) {
        let next_page = page.saturating_add(1);
        match self.next_page {
            Some(current) if current > next_page => (),
            _ => {
                self.next_page = Some(next_page);
                self.has_more = has_more;
            }
        }
    }

    /// Merges `messages` into the timeline and returns the ids of the messages that were
    /// not contained before.
    pub fn merge(&mut self, messages: impl IntoIterator<Item = Message>) -> Vec<MessageId> {
        let mut inserted = vec![];

        for message in messages {
            match self.position(&message.id) {
                Some(idx) => self.update_known(idx, message),
                None => {
                    inserted.push(message.id.clone());
                    self.insert_sorted(message);
                }
            }
        }

        inserted
    }

    pub fn insert_pending(&mut self, message: Message, request: SendMessageRequest) {
        self.outbox.insert(message.id.clone(), request);
        self.insert_sorted(message);
    }

    /// Replaces the placeholder with the record confirmed by the backend. Returns false if the
    /// placeholder was not part of the timeline anymore.
    pub fn confirm(&mut self, placeholder_id: &MessageId, mut confirmed: Message) -> bool {
        self.outbox.remove(placeholder_id);

        let had_placeholder = match self.position(placeholder_id) {
            Some(idx) => {
                self.messages.remove(idx);
                true
            }
            None => false,
        };

        confirmed.delivery = DeliveryState::Confirmed;

        // The live channel might have delivered the message before the backend answered.
        match self.position(&confirmed.id) {
            Some(idx) => self.update_known(idx, confirmed),
            None => self.insert_sorted(confirmed),
        }

        had_placeholder
    }

    pub fn fail(&mut self, placeholder_id: &MessageId, reason: impl Into<String>) -> bool {
        let Some(idx) = self.position(placeholder_id) else {
            return false;
        };
        let message = &mut self.messages[idx];
        if !message.is_pending() {
            return false;
        }
        message.delivery = DeliveryState::Failed {
            reason: reason.into(),
        };
        true
    }

    /// Moves a failed message back to pending and hands out its original payload.
    pub fn begin_retry(&mut self, id: &MessageId) -> Result<SendMessageRequest, MessagingError> {
        let idx = self.position(id).ok_or(MessagingError::UnknownMessage)?;
        if !self.messages[idx].is_failed() {
            return Err(MessagingError::NotFailed);
        }
        let request = self
            .outbox
            .get(id)
            .cloned()
            .ok_or(MessagingError::UnknownMessage)?;
        self.messages[idx].delivery = DeliveryState::Pending;
        Ok(request)
    }

    pub fn discard_failed(&mut self, id: &MessageId) -> Result<(), MessagingError> {
        let idx = self.position(id).ok_or(MessagingError::UnknownMessage)?;
        if !self.messages[idx].is_failed() {
            return Err(MessagingError::NotFailed);
        }
        self.messages.remove(idx);
        self.outbox.remove(id);
        Ok(())
    }

    pub fn remove(&mut self, id: &MessageId) -> Option<Message> {
        self.outbox.remove(id);
        self.position(id).map(|idx| self.messages.remove(idx))
    }

    /// Marks all messages of other users as read and returns their ids.
    pub fn mark_all_read(&mut self, viewer: &UserId) -> Vec<MessageId> {
        self.messages
            .iter_mut()
            .filter(|message| message.is_unread_for(viewer))
            .map(|message| {
                message.is_read = true;
                message.id.clone()
            })
            .collect()
    }

    pub fn unread_count(&self, viewer: &UserId) -> usize {
        self.messages
            .iter()
            .filter(|message| message.is_unread_for(viewer))
            .count()
    }
}

impl Timeline {
    fn position(&self, id: &MessageId) -> Option<usize> {
        self.messages.iter().position(|message| &message.id == id)
    }

    /// Inserts after all messages with the same or an earlier timestamp so that messages
    /// with equal timestamps keep their arrival order.
    fn insert_sorted(&mut self, message: Message) {
        let idx = self
            .messages
            .partition_point(|existing| existing.timestamp <= message.timestamp);
        self.messages.insert(idx, message);
    }

    fn update_known(&mut self, idx: usize, mut message: Message) {
        let existing = &self.messages[idx];

        // Local delivery state wins over copies of the same id.
        if existing.delivery != DeliveryState::Confirmed {
            return;
        }

        message.is_read |= existing.is_read;
        message.delivery = DeliveryState::Confirmed;

        if existing.timestamp == message.timestamp {
            self.messages[idx] = message;
        } else {
            self.messages.remove(idx);
            self.insert_sorted(message);
        }
    }
}
