// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use system_time_provider::SystemTimeProvider;
pub use uuid_provider::UuidProvider;

mod system_time_provider;
mod uuid_provider;
