// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use channel_event::{ConnectionEvent, InboundEvent, OutboundEvent};
pub use connection_error::ConnectionError;

mod channel_event;
mod connection_error;
