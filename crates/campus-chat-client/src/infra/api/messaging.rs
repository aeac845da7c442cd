// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::domain::general::models::RequestError;
use crate::domain::messaging::models::{Message, MessageId, MessagePage, SendMessageRequest};
use crate::domain::messaging::services::MessagingService;
use crate::domain::shared::models::RoomId;
use crate::infra::api::type_conversions::{MessageDto, PageDto};
use crate::infra::api::ApiClient;

#[async_trait]
impl MessagingService for ApiClient {
    async fn load_messages(&self, room_id: &RoomId, page: u32) -> Result<MessagePage> {
        let response: PageDto<MessageDto> = self
            .get(
                &format!("chat/{}/messages/", room_id),
                &[("page", page.to_string())],
            )
            .await?;

        let has_more = response.has_more();
        let messages = response
            .results
            .into_iter()
            .map(|dto| dto.into_message(Some(room_id), self.config()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(MessagePage { messages, has_more })
    }

    async fn send_message(
        &self,
        room_id: &RoomId,
        request: SendMessageRequest,
    ) -> Result<Message> {
        let mut form = Form::new()
            .text("content", request.body)
            .text("message_type", request.r#type.to_string());

        if let Some(attachment) = request.attachment {
            let part = Part::bytes(attachment.data)
                .file_name(attachment.file_name)
                .mime_str(attachment.media_type.essence_str())
                .map_err(|err| RequestError::Network {
                    msg: err.to_string(),
                })?;
            form = form.part("file", part);
        }

        let dto: MessageDto = self
            .post_multipart(&format!("chat/{}/send/", room_id), form)
            .await?;
        Ok(dto.into_message(Some(room_id), self.config())?)
    }

    async fn mark_messages_read(&self, room_id: &RoomId) -> Result<()> {
        self.put(&format!("chat/{}/mark-read/", room_id)).await?;
        Ok(())
    }

    async fn delete_message(&self, message_id: &MessageId) -> Result<()> {
        self.delete(&format!("chat/message/{}/delete/", message_id))
            .await?;
        Ok(())
    }

    async fn search_messages(
        &self,
        query: &str,
        room_id: Option<&RoomId>,
    ) -> Result<Vec<Message>> {
        let mut params = vec![("q", query.to_string())];
        if let Some(room_id) = room_id {
            params.push(("room_id", room_id.to_string()));
        }
        let response: Vec<MessageDto> = self.get("chat/search/", &params).await?;

        Ok(response
            .into_iter()
            .map(|dto| dto.into_message(None, self.config()))
            .collect::<Result<Vec<_>, _>>()?)
    }
}
