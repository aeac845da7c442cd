// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use parking_lot::Mutex;
use tracing::debug;

use crate::app::deps::DynTimeProvider;
use crate::domain::messaging::models::{LocalAttachment, SendMessageRequest};

/// Receives what the composer produces.
#[async_trait]
#[cfg_attr(feature = "test", mockall::automock)]
pub trait MessageSubmitter: Send + Sync {
    async fn submit(&self, request: SendMessageRequest) -> Result<()>;
    async fn set_user_is_composing(&self, is_composing: bool);
}

/// Holds the single unit the user is about to send: either text or one image.
pub struct Composer {
    submitter: Arc<dyn MessageSubmitter>,
    time_provider: DynTimeProvider,
    typing_idle_timeout: TimeDelta,
    state: Mutex<ComposerState>,
}

#[derive(Default)]
struct ComposerState {
    text: String,
    attachment: Option<LocalAttachment>,
    is_typing: bool,
    last_edit: Option<DateTime<Utc>>,
}

impl Composer {
    pub fn new(
        submitter: Arc<dyn MessageSubmitter>,
        time_provider: DynTimeProvider,
        typing_idle_timeout: TimeDelta,
    ) -> Self {
        Self {
            submitter,
            time_provider,
            typing_idle_timeout,
            state: Default::default(),
        }
    }

    pub fn text(&self) -> String {
        self.state.lock().text.clone()
    }

    pub fn attachment(&self) -> Option<LocalAttachment> {
        self.state.lock().attachment.clone()
    }

    pub fn is_empty(&self) -> bool {
        let state = self.state.lock();
        state.attachment.is_none() && state.text.trim().is_empty()
    }

    pub fn is_typing(&self) -> bool {
        self.state.lock().is_typing
    }

    /// Replaces the text. Removes a pending attachment.
    pub async fn set_text(&self, text: impl Into<String>) {
        let now = self.time_provider.now();

        let typing_changed = {
            let mut state = self.state.lock();
            state.attachment = None;
            state.text = text.into();
            state.last_edit = Some(now);

            let is_typing = !state.text.trim().is_empty();
            if is_typing == state.is_typing {
                None
            } else {
                state.is_typing = is_typing;
                Some(is_typing)
            }
        };

        if let Some(is_typing) = typing_changed {
            self.submitter.set_user_is_composing(is_typing).await;
        }
    }

    /// Replaces the text with an image.
    pub async fn set_attachment(&self, attachment: LocalAttachment) {
        let was_typing = {
            let mut state = self.state.lock();
            state.text.clear();
            state.attachment = Some(attachment);
            state.last_edit = None;
            std::mem::take(&mut state.is_typing)
        };

        if was_typing {
            self.submitter.set_user_is_composing(false).await;
        }
    }

    pub async fn clear(&self) {
        let was_typing = {
            let mut state = self.state.lock();
            std::mem::take(&mut *state).is_typing
        };

        if was_typing {
            self.submitter.set_user_is_composing(false).await;
        }
    }

    /// Reports that the user stopped typing if the text was not edited for a while.
    pub async fn check_typing_timeout(&self) {
        let now = self.time_provider.now();

        let timed_out = {
            let mut state = self.state.lock();
            let is_idle = state
                .last_edit
                .map(|last_edit| now - last_edit >= self.typing_idle_timeout)
                .unwrap_or(true);

            if state.is_typing && is_idle {
                state.is_typing = false;
                true
            } else {
                false
            }
        };

        if timed_out {
            self.submitter.set_user_is_composing(false).await;
        }
    }

    /// Hands the pending unit to the submitter and clears the composer before the submitter
    /// answers. Does nothing and returns false if there is nothing to send.
    ///
    /// Delivery failures are reported by the message store, not by the composer.
    pub async fn submit(&self) -> bool {
        let (request, was_typing) = {
            let mut state = self.state.lock();

            let request = match state.attachment.take() {
                Some(attachment) => SendMessageRequest::image(attachment),
                None => {
                    let text = state.text.trim();
                    if text.is_empty() {
                        return false;
                    }
                    SendMessageRequest::text(text)
                }
            };

            let was_typing = std::mem::take(&mut state.is_typing);
            state.text.clear();
            state.last_edit = None;
            (request, was_typing)
        };

        if was_typing {
            self.submitter.set_user_is_composing(false).await;
        }

        if let Err(err) = self.submitter.submit(request).await {
            debug!("Submitted message was not delivered: {}", err);
        }

        true
    }
}
