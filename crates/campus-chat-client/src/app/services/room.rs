// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;

use crate::app::deps::{AppDependencies, DynAppContext, DynRoomList, DynTimeProvider};
use crate::app::services::{
    Composer, ConnectionManager, LoadOutcome, MessageStore, MessageSubmitter,
};
use crate::domain::connection::models::{ConnectionError, OutboundEvent};
use crate::domain::messaging::models::{Message, MessageId, SendMessageRequest};
use crate::domain::shared::models::{ConnectionState, RoomId};

/// A screen's session in one room.
///
/// The session owns the room's channel and composer. Dropping it releases the channel and
/// closes the room's timeline, so the results of operations still in flight are discarded.
pub struct Room {
    inner: Arc<RoomInner>,
    composer: Composer,
}

struct RoomInner {
    room_id: RoomId,
    ctx: DynAppContext,
    connection: ConnectionManager,
    room_list: DynRoomList,
    store: MessageStore,
    time_provider: DynTimeProvider,
}

impl Room {
    pub fn new(room_id: RoomId, deps: &AppDependencies) -> Self {
        let inner = Arc::new(RoomInner {
            room_id,
            ctx: deps.ctx.clone(),
            connection: ConnectionManager::from(deps),
            room_list: deps.room_list.clone(),
            store: MessageStore::from(deps),
            time_provider: deps.time_provider.clone(),
        });
        inner.store.open_room(&inner.room_id);

        let composer = Composer::new(
            inner.clone(),
            deps.time_provider.clone(),
            deps.ctx.config.typing_idle_timeout,
        );

        Self { inner, composer }
    }

    pub fn id(&self) -> &RoomId {
        &self.inner.room_id
    }

    pub fn composer(&self) -> &Composer {
        &self.composer
    }

    pub async fn connect(&self) -> Result<(), ConnectionError> {
        self.inner.connection.connect(&self.inner.room_id).await
    }

    pub fn disconnect(&self) {
        self.inner.connection.disconnect()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.inner.connection.state()
    }

    pub fn messages(&self) -> Vec<Message> {
        self.inner.store.messages(&self.inner.room_id)
    }

    pub fn has_more(&self) -> bool {
        self.inner.store.has_more(&self.inner.room_id)
    }

    pub fn unread_count(&self) -> usize {
        self.inner.store.unread_count(&self.inner.room_id)
    }

    /// The usernames of the other users that are typing right now.
    pub fn composing_users(&self) -> Vec<String> {
        self.inner
            .room_list
            .composing_users(&self.inner.room_id, self.inner.time_provider.now())
    }

    /// Loads the newest page of the room's history.
    pub async fn load_latest_messages(&self) -> Result<LoadOutcome> {
        self.inner
            .store
            .load(&self.inner.room_id, self.inner.ctx.config.first_page)
            .await
    }

    pub async fn load_page(&self, page: u32) -> Result<LoadOutcome> {
        self.inner.store.load(&self.inner.room_id, page).await
    }

    pub async fn load_more(&self) -> Result<LoadOutcome> {
        self.inner.store.load_more(&self.inner.room_id).await
    }

    /// Searches this room's conversation.
    pub async fn search_messages(&self, query: &str) -> Result<Vec<Message>> {
        self.inner
            .store
            .search(query, Some(&self.inner.room_id))
            .await
    }

    pub async fn send_message(&self, request: SendMessageRequest) -> Result<Message> {
        self.inner.send_message(request).await
    }

    pub async fn retry_message(&self, message_id: &MessageId) -> Result<Message> {
        let message = self
            .inner
            .store
            .retry(&self.inner.room_id, message_id)
            .await?;
        self.inner.relay_message(&message);
        Ok(message)
    }

    pub fn discard_failed_message(&self, message_id: &MessageId) -> Result<()> {
        self.inner
            .store
            .discard_failed(&self.inner.room_id, message_id)
    }

    pub async fn delete_message(&self, message_id: &MessageId) -> Result<()> {
        self.inner
            .store
            .delete(&self.inner.room_id, message_id)
            .await
    }

    /// Marks the room as read locally and on the backend.
    pub async fn mark_as_read(&self) -> Result<()> {
        let result = self.inner.store.mark_read(&self.inner.room_id).await;
        self.inner.connection.send(OutboundEvent::MarkRead);
        result
    }

    /// Tells the other participant that a single message was seen.
    pub fn send_read_receipt(&self, message_id: &MessageId) -> bool {
        self.inner
            .connection
            .send(OutboundEvent::MessageRead(message_id.clone()))
    }
}

impl RoomInner {
    async fn send_message(&self, request: SendMessageRequest) -> Result<Message> {
        let message = self.store.send(&self.room_id, request).await?;
        self.relay_message(&message);
        Ok(message)
    }

    /// Tells the other participant about a confirmed message. Dropped if not connected.
    fn relay_message(&self, message: &Message) {
        self.connection
            .send(OutboundEvent::NewMessage(message.clone()));
    }
}

#[async_trait]
impl MessageSubmitter for RoomInner {
    async fn submit(&self, request: SendMessageRequest) -> Result<()> {
        self.send_message(request).await.map(|_| ())
    }

    async fn set_user_is_composing(&self, is_composing: bool) {
        let event = if is_composing {
            OutboundEvent::TypingStarted
        } else {
            OutboundEvent::TypingStopped
        };
        self.connection.send(event);
    }
}

impl Drop for Room {
    fn drop(&mut self) {
        self.inner.connection.disconnect();
        self.inner.store.close_room(&self.inner.room_id);
    }
}
