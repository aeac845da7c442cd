// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use uuid::Uuid;

use crate::domain::general::services::IdProvider;

/// Generates ids for local placeholders. They are prefixed so that they can never collide
/// with the UUIDs the backend assigns.
#[derive(Default)]
pub struct UuidProvider {}

impl IdProvider for UuidProvider {
    fn new_id(&self) -> String {
        format!("local-{}", Uuid::new_v4())
    }
}
