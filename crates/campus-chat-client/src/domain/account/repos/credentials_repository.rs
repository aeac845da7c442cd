// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use secrecy::SecretString;

/// Holds the access token shared by the HTTP client and the WebSocket connector.
#[cfg_attr(feature = "test", mockall::automock)]
pub trait CredentialsRepository: Send + Sync {
    fn get(&self) -> Option<SecretString>;
    fn set(&self, access_token: SecretString);
    fn clear(&self);
}
