// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use chat_room::ChatRoomDto;
pub use connection::{ConnectionDto, ConnectionIdDto};
pub use message::MessageDto;
pub use page::PageDto;
pub use user::{ProfileDto, UserDto};

mod chat_room;
mod connection;
mod message;
mod page;
mod user;
