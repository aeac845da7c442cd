// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, Weak};

use parking_lot::RwLock;
use tracing::error;

use crate::app::event_handlers::ClientEventDispatcherTrait;
use crate::client::ClientInner;
use crate::domain::shared::models::RoomId;
use crate::{Client, ClientDelegate, ClientEvent, ClientRoomEventType, SubscriptionId};

/// Hands events to all subscribed delegates, in the order they subscribed.
pub struct ClientEventDispatcher {
    client_inner: OnceLock<Weak<ClientInner>>,
    delegates: RwLock<Vec<(SubscriptionId, Arc<dyn ClientDelegate>)>>,
    last_subscription_id: AtomicU64,
}

impl ClientEventDispatcher {
    pub fn new(delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        let dispatcher = Self {
            client_inner: Default::default(),
            delegates: Default::default(),
            last_subscription_id: Default::default(),
        };
        if let Some(delegate) = delegate {
            dispatcher.subscribe(Arc::from(delegate));
        }
        dispatcher
    }

    pub(crate) fn set_client_inner(&self, client_inner: Weak<ClientInner>) {
        if self.client_inner.set(client_inner).is_err() {
            error!("Tried to set client_inner on ClientEventDispatcher more than once.");
        }
    }

    pub fn subscribe(&self, delegate: Arc<dyn ClientDelegate>) -> SubscriptionId {
        let id = SubscriptionId::new(self.last_subscription_id.fetch_add(1, Ordering::Relaxed) + 1);
        self.delegates.write().push((id, delegate));
        id
    }

    /// Returns false if no delegate was subscribed with `id`.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut delegates = self.delegates.write();
        let count = delegates.len();
        delegates.retain(|(subscription_id, _)| *subscription_id != id);
        delegates.len() != count
    }
}

impl ClientEventDispatcherTrait for ClientEventDispatcher {
    fn dispatch_event(&self, event: ClientEvent) {
        self.perform_dispatch_event(event);
    }

    fn dispatch_room_event(&self, room_id: RoomId, event: ClientRoomEventType) {
        self.perform_dispatch_event(ClientEvent::RoomChanged {
            room_id,
            r#type: event,
        });
    }
}

impl ClientEventDispatcher {
    fn perform_dispatch_event(&self, event: ClientEvent) {
        // Delegates may subscribe or unsubscribe while handling the event.
        let delegates = self
            .delegates
            .read()
            .iter()
            .map(|(_, delegate)| delegate.clone())
            .collect::<Vec<_>>();

        if delegates.is_empty() {
            return;
        }

        let Some(client_inner) = self.client_inner.get().and_then(Weak::upgrade) else {
            return;
        };
        let client = Client::from(client_inner);

        for delegate in delegates {
            delegate.handle_event(client.clone(), event.clone());
        }
    }
}
