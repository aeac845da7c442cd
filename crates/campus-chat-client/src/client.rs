// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Debug, Formatter};
use std::ops::Deref;
use std::sync::Arc;

use anyhow::Result;
use secrecy::SecretString;

use crate::app::deps::AppDependencies;
use crate::client_builder::ClientBuilder;
use crate::domain::messaging::models::Message;
use crate::domain::shared::models::{RoomId, UserBasicInfo};
use crate::infra::events::ClientEventDispatcher;
use crate::services::{AccountService, ContactListService, MessageStore, Room, RoomsService};
use crate::ClientEvent;

#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
}

pub trait ClientDelegate: Send + Sync {
    fn handle_event(&self, client: Client, event: ClientEvent);
}

/// Returned by `Client::subscribe`. Pass it to `Client::unsubscribe` to stop receiving events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub(crate) fn new(id: u64) -> Self {
        Self(id)
    }
}

impl Client {
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

pub struct ClientInner {
    pub account: AccountService,
    pub contact_list: ContactListService,
    pub rooms: RoomsService,
    pub(crate) deps: AppDependencies,
    pub(crate) event_dispatcher: Arc<ClientEventDispatcher>,
    pub(crate) messages: MessageStore,
}

impl From<Arc<ClientInner>> for Client {
    fn from(inner: Arc<ClientInner>) -> Self {
        Client { inner }
    }
}

impl Deref for Client {
    type Target = ClientInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl Debug for Client {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("current_user", &self.current_user())
            .finish()
    }
}

impl Client {
    pub async fn sign_in(&self, access_token: SecretString) -> Result<UserBasicInfo> {
        self.account.sign_in(access_token).await
    }

    pub fn sign_out(&self) {
        self.account.sign_out()
    }

    pub fn current_user(&self) -> Option<UserBasicInfo> {
        self.account.current_user()
    }

    /// Starts a session in `room_id`. The room's channel is opened by `Room::connect`.
    pub fn enter_room(&self, room_id: RoomId) -> Room {
        Room::new(room_id, &self.deps)
    }

    pub async fn search_messages(
        &self,
        query: &str,
        room_id: Option<&RoomId>,
    ) -> Result<Vec<Message>> {
        self.messages.search(query, room_id).await
    }

    pub fn subscribe(&self, delegate: Arc<dyn ClientDelegate>) -> SubscriptionId {
        self.event_dispatcher.subscribe(delegate)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.event_dispatcher.unsubscribe(id)
    }
}
