// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::Message;

/// One page of a room's history as returned by the backend, newest first.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MessagePage {
    pub messages: Vec<Message>,
    /// Taken from the backend's next-page link.
    pub has_more: bool,
}
