// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use id_provider::IdProvider;
pub use time_provider::TimeProvider;

mod id_provider;
mod time_provider;
