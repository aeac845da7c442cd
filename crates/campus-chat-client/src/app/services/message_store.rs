// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use tracing::{debug, info, warn};

use campus_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynIdProvider, DynMessagingService, DynRoomList,
    DynTimeProvider, DynTimelines,
};
use crate::domain::messaging::models::{Message, MessageId, MessagingError, SendMessageRequest};
use crate::domain::shared::models::RoomId;
use crate::{ClientEvent, ClientRoomEventType};

#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome {
    /// The page was merged. `message_ids` contains the messages that were new.
    Loaded {
        message_ids: Vec<MessageId>,
        has_more: bool,
    },
    /// Another load for the room was in flight. Nothing was requested.
    AlreadyInFlight,
    /// The room was closed while the page was loading. The result was dropped.
    Discarded,
}

/// The ordered, de-duplicated messages of all open rooms.
///
/// Outbound messages are inserted as pending placeholders before the backend is asked to
/// persist them and are replaced by the confirmed record once it answered.
#[derive(InjectDependencies)]
pub struct MessageStore {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    id_provider: DynIdProvider,
    #[inject]
    messaging_service: DynMessagingService,
    #[inject]
    room_list: DynRoomList,
    #[inject]
    time_provider: DynTimeProvider,
    #[inject]
    timelines: DynTimelines,
}

impl MessageStore {
    pub fn open_room(&self, room_id: &RoomId) {
        self.timelines.open(room_id);
    }

    /// Drops the room's messages. Operations still in flight for the room discard their
    /// results.
    pub fn close_room(&self, room_id: &RoomId) {
        self.timelines.close(room_id);
    }

    pub fn messages(&self, room_id: &RoomId) -> Vec<Message> {
        self.timelines
            .read(room_id, |timeline| timeline.messages().to_vec())
            .unwrap_or_default()
    }

    pub fn message(&self, room_id: &RoomId, message_id: &MessageId) -> Option<Message> {
        self.timelines
            .read(room_id, |timeline| timeline.get(message_id).cloned())
            .flatten()
    }

    pub fn has_more(&self, room_id: &RoomId) -> bool {
        self.timelines
            .read(room_id, |timeline| timeline.has_more())
            .unwrap_or(false)
    }

    pub fn unread_count(&self, room_id: &RoomId) -> usize {
        let Ok(viewer) = self.ctx.current_user_id() else {
            return 0;
        };
        self.timelines
            .read(room_id, |timeline| timeline.unread_count(&viewer))
            .unwrap_or(0)
    }

    /// Loads a page of the room's history and merges it into the timeline.
    pub async fn load(&self, room_id: &RoomId, page: u32) -> Result<LoadOutcome> {
        let Some(guard) = self.timelines.begin_loading(room_id) else {
            debug!("Ignoring load of room {} since a load is in flight.", room_id);
            return Ok(LoadOutcome::AlreadyInFlight);
        };

        debug!("Loading page {} of room {}…", page, room_id);

        let result = self.messaging_service.load_messages(room_id, page).await;

        let message_page = match result {
            Ok(message_page) => message_page,
            Err(err) => {
                warn!("Failed to load page {} of room {}: {}", page, room_id, err);
                self.client_event_dispatcher.dispatch_room_event(
                    room_id.clone(),
                    ClientRoomEventType::HistoryLoadFailed {
                        error: err.to_string(),
                    },
                );
                return Err(err);
            }
        };

        let has_more = message_page.has_more;

        let Some(message_ids) = guard.update(|timeline| {
            let message_ids = timeline.merge(message_page.messages);
            timeline.record_page(page, has_more);
            message_ids
        }) else {
            debug!("Discarding page {} of closed room {}.", page, room_id);
            return Ok(LoadOutcome::Discarded);
        };

        if !message_ids.is_empty() {
            self.client_event_dispatcher.dispatch_room_event(
                room_id.clone(),
                ClientRoomEventType::MessagesAppended {
                    message_ids: message_ids.clone(),
                },
            );
        }

        Ok(LoadOutcome::Loaded {
            message_ids,
            has_more,
        })
    }

    /// Loads the page after the last loaded one, or the first page if nothing was loaded.
    pub async fn load_more(&self, room_id: &RoomId) -> Result<LoadOutcome> {
        let next_page = self
            .timelines
            .read(room_id, |timeline| (timeline.next_page(), timeline.has_more()));

        let page = match next_page {
            Some((Some(_), false)) => {
                return Ok(LoadOutcome::Loaded {
                    message_ids: vec![],
                    has_more: false,
                })
            }
            Some((Some(page), true)) => page,
            Some((None, _)) | None => self.ctx.config.first_page,
        };

        self.load(room_id, page).await
    }

    /// Inserts the message as pending, asks the backend to persist it and replaces the
    /// placeholder with the confirmed record. If the backend rejects the message it stays in
    /// the timeline in a failed state.
    pub async fn send(&self, room_id: &RoomId, request: SendMessageRequest) -> Result<Message> {
        request.validate()?;

        let sender = self.ctx.current_user()?;
        let placeholder = Message::pending(
            MessageId::from(self.id_provider.new_id()),
            room_id.clone(),
            sender,
            &request,
            self.time_provider.now(),
        );
        let placeholder_id = placeholder.id.clone();

        self.timelines.update_or_open(room_id, |timeline| {
            timeline.insert_pending(placeholder, request.clone())
        });
        self.client_event_dispatcher.dispatch_room_event(
            room_id.clone(),
            ClientRoomEventType::MessagesAppended {
                message_ids: vec![placeholder_id.clone()],
            },
        );

        self.deliver(room_id, placeholder_id, request).await
    }

    /// Sends a failed message again with its original payload.
    pub async fn retry(&self, room_id: &RoomId, message_id: &MessageId) -> Result<Message> {
        let request = self
            .timelines
            .update(room_id, |timeline| timeline.begin_retry(message_id))
            .unwrap_or(Err(MessagingError::UnknownMessage))?;

        self.client_event_dispatcher.dispatch_room_event(
            room_id.clone(),
            ClientRoomEventType::MessagesUpdated {
                message_ids: vec![message_id.clone()],
            },
        );

        self.deliver(room_id, message_id.clone(), request).await
    }

    pub fn discard_failed(&self, room_id: &RoomId, message_id: &MessageId) -> Result<()> {
        self.timelines
            .update(room_id, |timeline| timeline.discard_failed(message_id))
            .unwrap_or(Err(MessagingError::UnknownMessage))?;

        self.client_event_dispatcher.dispatch_room_event(
            room_id.clone(),
            ClientRoomEventType::MessagesDeleted {
                message_ids: vec![message_id.clone()],
            },
        );
        Ok(())
    }

    pub async fn delete(&self, room_id: &RoomId, message_id: &MessageId) -> Result<()> {
        self.messaging_service.delete_message(message_id).await?;

        let removed = self
            .timelines
            .update(room_id, |timeline| timeline.remove(message_id))
            .flatten();

        if removed.is_some() {
            self.client_event_dispatcher.dispatch_room_event(
                room_id.clone(),
                ClientRoomEventType::MessagesDeleted {
                    message_ids: vec![message_id.clone()],
                },
            );
        }
        Ok(())
    }

    /// Searches all conversations, or only `room_id` if given. The results are not merged
    /// into any timeline.
    pub async fn search(&self, query: &str, room_id: Option<&RoomId>) -> Result<Vec<Message>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(vec![]);
        }
        self.messaging_service.search_messages(query, room_id).await
    }

    /// Marks all loaded messages of the room as read and tells the backend. The local state is
    /// kept even if the backend call fails.
    pub async fn mark_read(&self, room_id: &RoomId) -> Result<()> {
        let viewer = self.ctx.current_user_id()?;

        let message_ids = self
            .timelines
            .update(room_id, |timeline| timeline.mark_all_read(&viewer))
            .unwrap_or_default();

        if !message_ids.is_empty() {
            self.client_event_dispatcher.dispatch_room_event(
                room_id.clone(),
                ClientRoomEventType::MessagesRead { message_ids },
            );
        }

        if self.room_list.reset_unread_count(room_id) {
            self.client_event_dispatcher
                .dispatch_event(ClientEvent::RoomListChanged);
        }

        if let Err(err) = self.messaging_service.mark_messages_read(room_id).await {
            warn!("Failed to mark messages of room {} as read: {}", room_id, err);
            return Err(err);
        }

        Ok(())
    }
}

impl MessageStore {
    async fn deliver(
        &self,
        room_id: &RoomId,
        placeholder_id: MessageId,
        request: SendMessageRequest,
    ) -> Result<Message> {
        let session = self.timelines.session(room_id);

        match self.messaging_service.send_message(room_id, request).await {
            Ok(message) => {
                info!("Message {} in room {} was confirmed.", message.id, room_id);

                let applied = session.and_then(|session| {
                    self.timelines
                        .update_in_session(room_id, session, |timeline| {
                            timeline.confirm(&placeholder_id, message.clone())
                        })
                });

                if applied.is_some() {
                    self.client_event_dispatcher.dispatch_room_event(
                        room_id.clone(),
                        ClientRoomEventType::MessageConfirmed {
                            placeholder_id,
                            message_id: message.id.clone(),
                        },
                    );
                } else {
                    debug!("Room {} was closed before message was confirmed.", room_id);
                }

                if let Ok(viewer) = self.ctx.current_user_id() {
                    if self.room_list.apply_message(&message, &viewer) {
                        self.client_event_dispatcher
                            .dispatch_event(ClientEvent::RoomListChanged);
                    }
                }

                Ok(message)
            }
            Err(err) => {
                warn!("Failed to send message in room {}: {}", room_id, err);

                let applied = session.and_then(|session| {
                    self.timelines
                        .update_in_session(room_id, session, |timeline| {
                            timeline.fail(&placeholder_id, err.to_string())
                        })
                });

                if applied == Some(true) {
                    self.client_event_dispatcher.dispatch_room_event(
                        room_id.clone(),
                        ClientRoomEventType::MessageSendFailed {
                            message_id: placeholder_id,
                            error: err.to_string(),
                        },
                    );
                }

                Err(err)
            }
        }
    }
}
