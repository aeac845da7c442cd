// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::app::deps::DynCredentialsRepository;
use crate::domain::general::models::RequestError;
use crate::infra::api::ServerConfig;

/// The REST side of the backend. Every request carries the access token from the shared
/// credentials repository.
pub struct ApiClient {
    http: reqwest::Client,
    config: ServerConfig,
    credentials_repo: DynCredentialsRepository,
}

impl ApiClient {
    pub fn new(config: ServerConfig, credentials_repo: DynCredentialsRepository) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            http,
            config,
            credentials_repo,
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RequestError> {
        let response = self
            .send(Method::GET, path, |request| request.query(query))
            .await?;
        decode(response).await
    }

    pub(crate) async fn put(&self, path: &str) -> Result<(), RequestError> {
        self.send(Method::PUT, path, |request| request).await?;
        Ok(())
    }

    pub(crate) async fn delete(&self, path: &str) -> Result<(), RequestError> {
        self.send(Method::DELETE, path, |request| request).await?;
        Ok(())
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T, RequestError> {
        let response = self
            .send(Method::POST, path, |request| request.multipart(form))
            .await?;
        decode(response).await
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        build: impl FnOnce(RequestBuilder) -> RequestBuilder,
    ) -> Result<Response, RequestError> {
        let Some(access_token) = self.credentials_repo.get() else {
            return Err(RequestError::Unauthorized);
        };

        let url = self
            .config
            .api_url
            .join(path)
            .map_err(|err| RequestError::Network {
                msg: err.to_string(),
            })?;

        debug!("{} {}", method, url);

        let request = self
            .http
            .request(method, url)
            .bearer_auth(access_token.expose_secret());

        let response = build(request)
            .send()
            .await
            .map_err(|err| RequestError::Network {
                msg: err.to_string(),
            })?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(error_for_status(status, &body))
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    let body = response.bytes().await.map_err(|err| RequestError::Network {
        msg: err.to_string(),
    })?;
    serde_json::from_slice(&body).map_err(|err| RequestError::Decoding {
        msg: err.to_string(),
    })
}

/// Maps a non-success response to an error. The backend puts its reason into an `error` or
/// `detail` field.
pub(crate) fn error_for_status(status: StatusCode, body: &str) -> RequestError {
    match status {
        StatusCode::UNAUTHORIZED => return RequestError::Unauthorized,
        StatusCode::NOT_FOUND => return RequestError::NotFound,
        _ => (),
    }

    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error", "detail"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .or_else(|| status.canonical_reason().map(str::to_string))
        .unwrap_or_default();

    RequestError::Rejected {
        status: status.as_u16(),
        message,
    }
}
