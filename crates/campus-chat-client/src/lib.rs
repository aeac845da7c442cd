// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub use app::dtos;
pub use app::services;
pub use client::{Client, ClientDelegate, SubscriptionId};
pub use client_builder::ClientBuilder;
pub use client_event::{ClientEvent, ClientRoomEventType};
pub use infra::api::ServerConfig;

#[cfg(feature = "test")]
pub mod test;

pub mod app;
mod client;
mod client_builder;
mod client_event;

#[cfg(feature = "test")]
pub mod domain;
#[cfg(not(feature = "test"))]
pub(crate) mod domain;

#[cfg(feature = "test")]
pub mod infra;
#[cfg(not(feature = "test"))]
pub(crate) mod infra;
