// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use user_account_service::UserAccountService;

mod user_account_service;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::user_account_service::MockUserAccountService;
}
