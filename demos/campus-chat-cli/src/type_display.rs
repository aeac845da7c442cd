// campus-connect/campus-chat-cli
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::fmt::{Display, Formatter};
use std::iter::once;

use campus_chat_client::dtos::{Attachment, ChatRoom, Contact, DeliveryState, Message};

pub struct RoomEnvelope(pub ChatRoom);

impl Display for RoomEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let room = &self.0;
        write!(
            f,
            "{:<24} | {:>3} unread | {}",
            room.participant.name.truncate_to(24),
            room.unread_count,
            room.last_message
                .as_ref()
                .map(|message| message.preview.truncate_to(50))
                .unwrap_or("<no messages>".to_string())
        )
    }
}

pub struct ContactEnvelope(pub Contact);

impl Display for ContactEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:<24} | @{}",
            self.0.user.name.truncate_to(24),
            self.0.user.username
        )
    }
}

pub struct MessageEnvelope(pub Message);

impl Display for MessageEnvelope {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let message = &self.0;
        let state = match &message.delivery {
            DeliveryState::Pending => " (sending…)".to_string(),
            DeliveryState::Confirmed => String::new(),
            DeliveryState::Failed { reason } => format!(" (failed: {})", reason),
        };
        let body = match &message.attachment {
            Some(Attachment::Remote(url)) => format!("[{}] {}", message.r#type, url),
            Some(Attachment::Local(attachment)) => {
                format!("[{}] {}", message.r#type, attachment.file_name)
            }
            None => message.body.clone(),
        };

        write!(
            f,
            "{} {:<16} {}{}",
            message.timestamp.format("%d.%m. %H:%M"),
            message.sender.name.truncate_to(16),
            body,
            state
        )
    }
}

pub trait StringExt {
    fn truncate_to(&self, new_len: usize) -> String;
}

impl StringExt for String {
    fn truncate_to(&self, new_len: usize) -> String {
        let count = self.chars().count();

        if count <= new_len {
            return self.clone();
        }

        self.chars().take(new_len - 1).chain(once('…')).collect()
    }
}
