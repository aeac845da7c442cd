// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::domain::contacts::models::Contact;
use crate::domain::shared::models::UserId;
use crate::infra::api::type_conversions::UserDto;
use crate::infra::api::ServerConfig;

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ConnectionIdDto {
    Number(i64),
    String(String),
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConnectionDto {
    pub id: ConnectionIdDto,
    pub user1: UserDto,
    pub user2: UserDto,
    pub created_at: DateTime<Utc>,
}

impl ConnectionDto {
    /// Returns the contact on the other side of the connection, or `None` if `current_user`
    /// is not part of it.
    pub fn into_contact(self, current_user: &UserId, config: &ServerConfig) -> Option<Contact> {
        let other = if self.user1.id == current_user.value() {
            self.user2
        } else if self.user2.id == current_user.value() {
            self.user1
        } else {
            return None;
        };

        let connection_id = match self.id {
            ConnectionIdDto::Number(id) => id.to_string(),
            ConnectionIdDto::String(id) => id,
        };

        Some(Contact {
            connection_id,
            user: other.into_user_info(config, None),
            connected_since: self.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAYLOAD: &str = r#"{
        "id": 12,
        "user1": {"id": 1, "username": "me"},
        "user2": {"id": 2, "username": "dana", "first_name": "Dana"},
        "created_at": "2026-01-10T12:00:00Z"
    }"#;

    #[test]
    fn test_picks_counterpart() {
        let config = ServerConfig::new("http://localhost:8000").unwrap();
        let dto: ConnectionDto = serde_json::from_str(PAYLOAD).unwrap();

        let contact = dto.clone().into_contact(&UserId::new(1), &config).unwrap();
        assert_eq!(contact.connection_id, "12");
        assert_eq!(contact.user.username, "dana");
        assert_eq!(contact.user.name, "Dana");

        let contact = dto.clone().into_contact(&UserId::new(2), &config).unwrap();
        assert_eq!(contact.user.username, "me");

        assert!(dto.into_contact(&UserId::new(3), &config).is_none());
    }
}
