// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use async_trait::async_trait;

use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::UserId;

#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait ContactsService: Send + Sync {
    /// Loads the connections of `current_user`, each resolved to the other user.
    async fn load_contacts(&self, current_user: &UserId) -> Result<Vec<Contact>>;
}
