// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::OnceLock;

use tracing::{debug, error};

use crate::app::event_handlers::{ServerEvent, ServerEventHandler};

/// Passes events received over the room channels through the registered handlers, in order,
/// until one of them consumes the event.
#[derive(Default)]
pub struct ServerEventHandlerQueue {
    handlers: OnceLock<Vec<Box<dyn ServerEventHandler>>>,
}

impl ServerEventHandlerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Can only be called once. Later calls are ignored.
    pub fn set_handlers(&self, handlers: Vec<Box<dyn ServerEventHandler>>) {
        if self.handlers.set(handlers).is_err() {
            error!("The server event handlers were already set.");
        }
    }

    pub async fn handle_event(&self, event: ServerEvent) {
        let Some(handlers) = self.handlers.get() else {
            error!("No server event handlers are set. Dropping {:?}.", event);
            return;
        };

        let room_id = event.room_id().clone();
        let mut pending = Some(event);

        for handler in handlers {
            let Some(event) = pending.take() else {
                return;
            };

            match handler.handle_event(event).await {
                Ok(next) => pending = next,
                Err(err) => {
                    error!(
                        "Handler '{}' failed to process event in room {}. {}",
                        handler.name(),
                        room_id,
                        err
                    );
                    return;
                }
            }
        }

        if let Some(event) = pending {
            debug!("No handler consumed {:?}.", event);
        }
    }
}
