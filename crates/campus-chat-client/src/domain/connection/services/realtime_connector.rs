// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use futures::future::BoxFuture;
use secrecy::SecretString;

use crate::domain::connection::models::{ConnectionError, ConnectionEvent, OutboundEvent};
use crate::domain::shared::models::RoomId;

pub type ConnectionEventHandler =
    Box<dyn Fn(ConnectionEvent) -> BoxFuture<'static, ()> + Send + Sync>;

/// Opens the duplex channel of a room.
#[async_trait]
pub trait RealtimeConnector: Send + Sync {
    async fn connect(
        &self,
        room_id: &RoomId,
        access_token: SecretString,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn RealtimeConnection>, ConnectionError>;
}

pub trait RealtimeConnection: Send + Sync {
    fn send_event(&self, event: OutboundEvent) -> Result<()>;
    /// Closes the channel. No `Disconnected` event is delivered for a channel closed this way.
    fn disconnect(&self);
}
