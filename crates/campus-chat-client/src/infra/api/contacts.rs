// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;
use tracing::warn;

use crate::domain::contacts::models::Contact;
use crate::domain::contacts::services::ContactsService;
use crate::domain::shared::models::UserId;
use crate::infra::api::type_conversions::ConnectionDto;
use crate::infra::api::ApiClient;

#[async_trait]
impl ContactsService for ApiClient {
    async fn load_contacts(&self, current_user: &UserId) -> Result<Vec<Contact>> {
        let response: Vec<ConnectionDto> = self.get("my-connections/", &[]).await?;

        Ok(response
            .into_iter()
            .filter_map(|dto| {
                let contact = dto.into_contact(current_user, self.config());
                if contact.is_none() {
                    warn!("Ignoring connection that does not involve user {current_user}.");
                }
                contact
            })
            .collect())
    }
}
