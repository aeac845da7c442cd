// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod account;
pub mod connection;
pub mod contacts;
pub mod general;
pub mod messaging;
pub mod rooms;
pub mod shared;
