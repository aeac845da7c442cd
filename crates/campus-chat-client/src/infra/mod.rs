// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub mod account;
pub mod api;
pub mod events;
pub mod general;
pub mod websocket;
