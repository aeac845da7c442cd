// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use room_management_service::RoomManagementService;

mod room_management_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::room_management_service::MockRoomManagementService;
}
