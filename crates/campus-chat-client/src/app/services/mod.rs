// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use account_service::AccountService;
pub use composer::{Composer, MessageSubmitter};
pub use connection_manager::ConnectionManager;
pub use contact_list_service::ContactListService;
pub use message_store::{LoadOutcome, MessageStore};
pub use room::Room;
pub use rooms_service::RoomsService;

#[cfg(feature = "test")]
pub use composer::MockMessageSubmitter;

mod account_service;
mod composer;
mod connection_manager;
mod contact_list_service;
mod message_store;
mod room;
mod rooms_service;
