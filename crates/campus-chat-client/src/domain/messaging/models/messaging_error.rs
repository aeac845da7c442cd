// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

#[derive(Debug, thiserror::Error, Clone, PartialEq)]
pub enum MessagingError {
    #[error("Message text must not be empty")]
    EmptyMessage,
    #[error("Message of this type requires an attachment")]
    MissingAttachment,
    #[error("Unknown message")]
    UnknownMessage,
    #[error("Only failed messages can be retried or discarded")]
    NotFailed,
    #[error("No user is signed in")]
    NotSignedIn,
}
