// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use campus_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynRoomList, DynTimeProvider};
use crate::app::event_handlers::{ServerEvent, ServerEventHandler, TypingEvent};
use crate::ClientRoomEventType;

#[derive(InjectDependencies)]
pub struct TypingEventHandler {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    room_list: DynRoomList,
    #[inject]
    time_provider: DynTimeProvider,
}

#[async_trait]
impl ServerEventHandler for TypingEventHandler {
    fn name(&self) -> &'static str {
        "typing"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Typing(event) => self.handle_typing_event(event),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl TypingEventHandler {
    fn handle_typing_event(&self, event: TypingEvent) {
        // The backend sends our own indicators back to us.
        if self.ctx.is_current_username(&event.user) {
            return;
        }

        let expires_at = self.time_provider.now() + self.ctx.config.composing_user_expiry;

        if self.room_list.set_user_composing(
            &event.room_id,
            &event.user,
            event.is_typing,
            expires_at,
        ) {
            self.client_event_dispatcher.dispatch_room_event(
                event.room_id,
                ClientRoomEventType::ComposingUsersChanged,
            );
        }
    }
}
