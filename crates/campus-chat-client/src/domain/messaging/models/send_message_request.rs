// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use crate::domain::messaging::models::{LocalAttachment, MessageType, MessagingError};

#[derive(Debug, Clone, PartialEq)]
pub struct SendMessageRequest {
    pub body: String,
    pub r#type: MessageType,
    pub attachment: Option<LocalAttachment>,
}

impl SendMessageRequest {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            r#type: MessageType::Text,
            attachment: None,
        }
    }

    /// Images are sent without text.
    pub fn image(attachment: LocalAttachment) -> Self {
        Self::attachment(MessageType::Image, attachment)
    }

    pub fn attachment(r#type: MessageType, attachment: LocalAttachment) -> Self {
        Self {
            body: String::new(),
            r#type,
            attachment: Some(attachment),
        }
    }

    pub fn validate(&self) -> Result<(), MessagingError> {
        match self.r#type {
            MessageType::Text if self.body.trim().is_empty() => Err(MessagingError::EmptyMessage),
            MessageType::Text => Ok(()),
            _ if self.attachment.is_none() => Err(MessagingError::MissingAttachment),
            _ => Ok(()),
        }
    }
}
