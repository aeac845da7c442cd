// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::info;

use campus_proc_macros::InjectDependencies;

use crate::app::deps::{DynClientEventDispatcher, DynRoomList, DynRoomManagementService};
use crate::domain::rooms::models::ChatRoom;
use crate::domain::shared::models::{RoomId, UserId};
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct RoomsService {
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    room_list: DynRoomList,
    #[inject]
    room_management_service: DynRoomManagementService,
}

impl RoomsService {
    /// The cached room list, most recently active room first.
    pub fn rooms(&self) -> Vec<ChatRoom> {
        self.room_list.rooms()
    }

    pub fn room(&self, room_id: &RoomId) -> Option<ChatRoom> {
        self.room_list.get(room_id)
    }

    pub async fn load_rooms(&self) -> Result<Vec<ChatRoom>> {
        let rooms = self.room_management_service.load_rooms().await?;
        info!("Loaded {} rooms.", rooms.len());
        self.room_list.replace_all(rooms);
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomListChanged);
        Ok(self.room_list.rooms())
    }

    /// Returns the room shared with `user_id`, creating it on the backend if needed.
    pub async fn start_conversation(&self, user_id: &UserId) -> Result<ChatRoom> {
        let room = self
            .room_management_service
            .get_or_create_room(user_id)
            .await?;
        self.room_list.upsert(room.clone());
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::RoomListChanged);
        Ok(room)
    }
}
