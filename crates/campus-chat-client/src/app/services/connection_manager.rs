// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use futures::future::BoxFuture;
use parking_lot::Mutex;
use tracing::{debug, info, warn};

use campus_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynClientEventDispatcher, DynCredentialsRepository, DynRealtimeConnector,
    DynServerEventHandlerQueue,
};
use crate::app::event_handlers::ServerEvent;
use crate::domain::connection::models::{ConnectionError, ConnectionEvent, OutboundEvent};
use crate::domain::connection::services::{ConnectionEventHandler, RealtimeConnection};
use crate::domain::shared::models::{ConnectionState, RoomId};
use crate::ClientRoomEventType;

/// Owns the real-time channel of at most one room.
///
/// Every call to `connect` or `disconnect` starts a new generation. Results and events that
/// belong to an older generation are dropped, so a channel that finishes opening after it was
/// released (or replaced by a channel for another room) never becomes the active one.
#[derive(InjectDependencies)]
pub struct ConnectionManager {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    credentials_repo: DynCredentialsRepository,
    #[inject]
    realtime_connector: DynRealtimeConnector,
    #[inject]
    server_event_handlers: DynServerEventHandlerQueue,
    slot: Arc<Mutex<ChannelSlot>>,
}

#[derive(Default)]
struct ChannelSlot {
    room_id: Option<RoomId>,
    state: ConnectionState,
    connection: Option<Box<dyn RealtimeConnection>>,
    generation: u64,
}

impl ConnectionManager {
    pub fn state(&self) -> ConnectionState {
        self.slot.lock().state
    }

    pub fn room_id(&self) -> Option<RoomId> {
        self.slot.lock().room_id.clone()
    }

    /// Opens the channel of `room_id`. Does nothing if the channel of that room is open or
    /// being opened. A channel of another room is released first.
    pub async fn connect(&self, room_id: &RoomId) -> Result<(), ConnectionError> {
        let (generation, previous) = {
            let mut slot = self.slot.lock();

            if slot.room_id.as_ref() == Some(room_id) && slot.state.is_active() {
                debug!("Channel of room {} is already {}.", room_id, slot.state);
                return Ok(());
            }

            let previous = slot.room_id.take().filter(|_| slot.state.is_active());
            if let Some(connection) = slot.connection.take() {
                connection.disconnect();
            }

            slot.generation += 1;
            slot.room_id = Some(room_id.clone());
            slot.state = ConnectionState::Connecting;
            (slot.generation, previous)
        };

        if let Some(previous) = previous {
            self.dispatch_state(previous, ConnectionState::Disconnected);
        }
        self.dispatch_state(room_id.clone(), ConnectionState::Connecting);

        let Some(access_token) = self.credentials_repo.get() else {
            warn!("Cannot open channel of room {} without credentials.", room_id);
            self.fail_connect(room_id, generation);
            return Err(ConnectionError::MissingCredentials);
        };

        info!("Opening channel of room {}…", room_id);

        let result = self
            .realtime_connector
            .connect(
                room_id,
                access_token,
                self.connection_event_handler(room_id.clone(), generation),
            )
            .await;

        let connection = match result {
            Ok(connection) => connection,
            Err(err) => {
                warn!("Failed to open channel of room {}: {}", room_id, err);
                self.fail_connect(room_id, generation);
                return Err(err);
            }
        };

        {
            let mut slot = self.slot.lock();
            if slot.generation != generation || slot.state != ConnectionState::Connecting {
                debug!("Discarding stale channel of room {}.", room_id);
                connection.disconnect();
                return Ok(());
            }
            slot.connection = Some(connection);
            slot.state = ConnectionState::Connected;
        }

        info!("Channel of room {} is open.", room_id);
        self.dispatch_state(room_id.clone(), ConnectionState::Connected);
        Ok(())
    }

    /// Releases the channel, whatever state it is in.
    pub fn disconnect(&self) {
        let (room_id, previous_state, connection) = {
            let mut slot = self.slot.lock();
            slot.generation += 1;
            let previous_state = std::mem::take(&mut slot.state);
            (slot.room_id.take(), previous_state, slot.connection.take())
        };

        if let Some(connection) = connection {
            connection.disconnect();
        }

        let Some(room_id) = room_id else {
            return;
        };

        info!("Released channel of room {}.", room_id);

        if previous_state != ConnectionState::Disconnected {
            self.dispatch_state(room_id, ConnectionState::Disconnected);
        }
    }

    /// Sends `event` if the channel is connected and drops it otherwise. Returns true if the
    /// event was handed to the channel.
    pub fn send(&self, event: OutboundEvent) -> bool {
        let slot = self.slot.lock();

        let (ConnectionState::Connected, Some(connection)) = (slot.state, &slot.connection) else {
            debug!("Dropping {:?} since the channel is not connected.", event);
            return false;
        };

        match connection.send_event(event) {
            Ok(()) => true,
            Err(err) => {
                warn!("Failed to send event: {}", err);
                false
            }
        }
    }
}

impl ConnectionManager {
    fn fail_connect(&self, room_id: &RoomId, generation: u64) {
        {
            let mut slot = self.slot.lock();
            if slot.generation != generation {
                return;
            }
            slot.state = ConnectionState::Error;
        }
        self.dispatch_state(room_id.clone(), ConnectionState::Error);
    }

    fn dispatch_state(&self, room_id: RoomId, state: ConnectionState) {
        self.client_event_dispatcher
            .dispatch_room_event(room_id, ClientRoomEventType::ConnectionStateChanged { state });
    }

    fn connection_event_handler(&self, room_id: RoomId, generation: u64) -> ConnectionEventHandler {
        let slot = self.slot.clone();
        let client_event_dispatcher = self.client_event_dispatcher.clone();
        let server_event_handlers = self.server_event_handlers.clone();

        Box::new(move |event| -> BoxFuture<'static, ()> {
            let slot = slot.clone();
            let client_event_dispatcher = client_event_dispatcher.clone();
            let server_event_handlers = server_event_handlers.clone();
            let room_id = room_id.clone();

            Box::pin(async move {
                match event {
                    ConnectionEvent::Received(event) => {
                        if slot.lock().generation != generation {
                            return;
                        }
                        server_event_handlers
                            .handle_event(ServerEvent::new(room_id, event))
                            .await;
                    }
                    ConnectionEvent::Disconnected { error } => {
                        {
                            let mut slot = slot.lock();
                            if slot.generation != generation {
                                return;
                            }
                            // The connection stays in the slot until the next connect or
                            // disconnect since we might be running on one of its tasks.
                            slot.state = ConnectionState::Disconnected;
                        }

                        match error {
                            Some(error) => warn!("Channel of room {} dropped: {}", room_id, error),
                            None => info!("Channel of room {} was closed.", room_id),
                        }

                        client_event_dispatcher.dispatch_room_event(
                            room_id,
                            ClientRoomEventType::ConnectionStateChanged {
                                state: ConnectionState::Disconnected,
                            },
                        );
                    }
                }
            })
        })
    }
}

impl Drop for ConnectionManager {
    fn drop(&mut self) {
        let connection = {
            let mut slot = self.slot.lock();
            slot.generation += 1;
            slot.state = ConnectionState::Disconnected;
            slot.connection.take()
        };

        if let Some(connection) = connection {
            connection.disconnect();
        }
    }
}
