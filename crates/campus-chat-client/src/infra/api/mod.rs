// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use api_client::ApiClient;
pub use server_config::ServerConfig;

mod account;
mod api_client;
mod contacts;
mod messaging;
mod rooms;
mod server_config;
pub(crate) mod type_conversions;
