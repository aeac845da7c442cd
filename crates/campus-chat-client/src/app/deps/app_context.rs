// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use chrono::TimeDelta;
use parking_lot::RwLock;

use crate::domain::messaging::models::MessagingError;
use crate::domain::shared::models::{UserBasicInfo, UserId};

pub struct AppConfig {
    /// Typing is reported as stopped after the composer was not edited for this long.
    pub typing_idle_timeout: TimeDelta,
    /// A typing indicator of another user is dropped if it was not refreshed for this long.
    pub composing_user_expiry: TimeDelta,
    /// The number of the page that holds the newest messages.
    pub first_page: u32,
}

pub struct AppContext {
    pub current_user: RwLock<Option<UserBasicInfo>>,
    pub config: AppConfig,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            current_user: Default::default(),
            config,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            typing_idle_timeout: TimeDelta::seconds(2),
            composing_user_expiry: TimeDelta::seconds(3),
            first_page: 1,
        }
    }
}

impl AppContext {
    pub fn current_user(&self) -> Result<UserBasicInfo> {
        self.current_user
            .read()
            .clone()
            .ok_or(MessagingError::NotSignedIn.into())
    }

    pub fn current_user_id(&self) -> Result<UserId> {
        self.current_user().map(|user| user.id)
    }

    pub fn is_current_username(&self, username: &str) -> bool {
        self.current_user
            .read()
            .as_ref()
            .map(|user| user.username == username)
            .unwrap_or(false)
    }

    pub fn set_current_user(&self, user: UserBasicInfo) {
        self.current_user.write().replace(user);
    }

    pub fn reset_current_user(&self) {
        self.current_user.write().take();
    }
}
