// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use campus_proc_macros::InjectDependencies;

use crate::app::deps::DynClientEventDispatcher;
use crate::app::event_handlers::{NoticeEvent, ServerEvent, ServerEventHandler};
use crate::ClientRoomEventType;

#[derive(InjectDependencies)]
pub struct NoticesEventHandler {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
}

#[async_trait]
impl ServerEventHandler for NoticesEventHandler {
    fn name(&self) -> &'static str {
        "notices"
    }

    async fn handle_event(&self, event: ServerEvent) -> Result<Option<ServerEvent>> {
        match event {
            ServerEvent::Notice(notice) => self.handle_notice(notice),
            _ => return Ok(Some(event)),
        }
        Ok(None)
    }
}

impl NoticesEventHandler {
    fn handle_notice(&self, notice: NoticeEvent) {
        warn!(
            "Server reported error in room {}: {}",
            notice.room_id, notice.message
        );
        self.client_event_dispatcher.dispatch_room_event(
            notice.room_id,
            ClientRoomEventType::ServerNotice {
                message: notice.message,
            },
        );
    }
}
