// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use realtime_connector::{ConnectionEventHandler, RealtimeConnection, RealtimeConnector};

mod realtime_connector;
