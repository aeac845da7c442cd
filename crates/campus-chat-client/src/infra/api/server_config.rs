// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::{bail, Result};
use url::Url;

use crate::domain::shared::models::RoomId;

/// Where and how to reach the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// The server root. Relative media paths are resolved against it.
    pub base_url: Url,
    /// The REST root, `{base_url}/api/`.
    pub api_url: Url,
    /// The WebSocket root, the base URL with `ws` or `wss` as scheme.
    pub ws_url: Url,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub heartbeat_interval: Duration,
}

impl ServerConfig {
    /// Builds the configuration from the server root, e.g. `https://campus.example.org`.
    /// A trailing `/api` is ignored.
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim().trim_end_matches('/');
        let trimmed = trimmed.strip_suffix("/api").unwrap_or(trimmed);
        let base_url = Url::parse(&format!("{trimmed}/"))?;

        let ws_scheme = match base_url.scheme() {
            "http" => "ws",
            "https" => "wss",
            scheme => bail!("Unsupported scheme '{}' in server URL", scheme),
        };

        let api_url = base_url.join("api/")?;
        let mut ws_url = base_url.clone();
        if ws_url.set_scheme(ws_scheme).is_err() {
            bail!("Failed to derive WebSocket URL from {}", base_url);
        }

        Ok(Self {
            base_url,
            api_url,
            ws_url,
            request_timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(10),
            heartbeat_interval: Duration::from_secs(30),
        })
    }

    /// The URL of a room's channel. The access token travels as query parameter since
    /// browsers and most WebSocket clients cannot set headers on the upgrade request.
    pub fn room_channel_url(&self, room_id: &RoomId, access_token: &str) -> Result<Url> {
        let mut url = self.ws_url.join(&format!("ws/chat/{}/", room_id))?;
        url.query_pairs_mut().append_pair("token", access_token);
        Ok(url)
    }

    /// Resolves a media path returned by the backend. Absolute URLs are kept as they are.
    pub fn resolve_media_url(&self, path: &str) -> Option<Url> {
        let path = path.trim();
        if path.is_empty() {
            return None;
        }
        Url::parse(path)
            .or_else(|_| self.base_url.join(path))
            .ok()
    }
}
