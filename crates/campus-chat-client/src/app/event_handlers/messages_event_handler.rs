// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::{debug, info};

use campus_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynRoomList, DynTimelines};
use crate::app::event_handlers::{MessageEvent, ServerEvent, ServerEventHandler};
use crate::{ClientEvent, ClientRoomEventType};

/// Merges messages received over a room's channel into the timeline and the room list.
#[derive(InjectDependencies)]
pub struct MessagesEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    room_list: DynRoomList,
    #[inject]
    timelines: DynTimelines,
}

#[async_trait]
impl ServerEventHandler for MessagesEventHandler {
    fn name(&self) -> &'static str {
        "messages"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Message(event) => self.handle_message_event(event)?,
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl MessagesEventHandler {
    fn handle_message_event(&self, event: MessageEvent) -> Result<()> {
        let viewer = self.ctx.current_user_id()?;
        let MessageEvent {
            room_id,
            mut message,
        } = event;
        message.room_id = room_id.clone();

        match self
            .timelines
            .update(&room_id, |timeline| timeline.merge([message.clone()]))
        {
            Some(message_ids) if message_ids.is_empty() => {
                // Echo of a message we sent or loaded already.
                debug!("Ignoring known message {} in room {}.", message.id, room_id);
                return Ok(());
            }
            Some(message_ids) => {
                info!("Received message {} in room {}.", message.id, room_id);
                self.client_event_dispatcher.dispatch_room_event(
                    room_id.clone(),
                    ClientRoomEventType::MessagesAppended { message_ids },
                );
            }
            None => debug!("Received message for closed room {}.", room_id),
        }

        if self.room_list.apply_message(&message, &viewer) {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::RoomListChanged);
        }

        Ok(())
    }
}
