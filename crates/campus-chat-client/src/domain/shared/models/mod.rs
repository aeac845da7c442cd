// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use connection_state::ConnectionState;
pub use room_id::RoomId;
pub use user_basic_info::UserBasicInfo;
pub use user_id::UserId;

mod connection_state;
mod room_id;
mod user_basic_info;
mod user_id;
