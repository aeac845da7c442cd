// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

pub use event_handler_queue::ServerEventHandlerQueue;
pub use messages_event_handler::MessagesEventHandler;
pub use notices_event_handler::NoticesEventHandler;
pub use server_event::*;
pub use typing_event_handler::TypingEventHandler;

use crate::domain::shared::models::RoomId;
use crate::{ClientEvent, ClientRoomEventType};

mod event_handler_queue;
mod messages_event_handler;
mod notices_event_handler;
mod server_event;
mod typing_event_handler;

/// `ServerEventHandler` is a trait representing a handler for events received over a room's
/// channel.
///
/// If the handler returns `None`, the event has been consumed and no further processing should
/// be done. If it returns `Some(event)`, the event is passed on to the next handler.
#[async_trait]
pub trait ServerEventHandler: Send + Sync {
    fn name(&self) -> &'static str;
    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>>;
}

#[cfg_attr(feature = "test", mockall::automock)]
pub trait ClientEventDispatcherTrait: Send + Sync {
    fn dispatch_event(&self, event: ClientEvent);
    fn dispatch_room_event(&self, room_id: RoomId, event: ClientRoomEventType);
}
