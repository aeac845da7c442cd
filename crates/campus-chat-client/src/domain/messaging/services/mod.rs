// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use messaging_service::MessagingService;

mod messaging_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::messaging_service::MockMessagingService;
}
