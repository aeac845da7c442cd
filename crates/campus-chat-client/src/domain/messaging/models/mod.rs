// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use attachment::{Attachment, LocalAttachment};
pub use message::{DeliveryState, Message, MessageId, MessageType};
pub use message_page::MessagePage;
pub use messaging_error::MessagingError;
pub use send_message_request::SendMessageRequest;
pub use timeline::Timeline;
pub use timelines::{LoadingGuard, Timelines};

mod attachment;
mod message;
mod message_page;
mod messaging_error;
mod send_message_request;
mod timeline;
mod timelines;
