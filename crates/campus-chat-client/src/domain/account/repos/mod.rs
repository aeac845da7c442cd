// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use credentials_repository::CredentialsRepository;

mod credentials_repository;

#[cfg(feature = "test")]
pub mod mocks {
    pub use super::credentials_repository::MockCredentialsRepository;
}
