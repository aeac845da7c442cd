// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use parking_lot::RwLock;
use secrecy::{ExposeSecret, SecretString};

use crate::domain::account::repos::CredentialsRepository;

#[derive(Default)]
pub struct InMemoryCredentialsRepository {
    access_token: RwLock<Option<SecretString>>,
}

impl CredentialsRepository for InMemoryCredentialsRepository {
    fn get(&self) -> Option<SecretString> {
        self.access_token
            .read()
            .as_ref()
            .map(|token| SecretString::new(token.expose_secret().clone()))
    }

    fn set(&self, access_token: SecretString) {
        self.access_token.write().replace(access_token);
    }

    fn clear(&self) {
        self.access_token.write().take();
    }
}
