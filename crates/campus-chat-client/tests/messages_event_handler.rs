// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::Result;
use chrono::TimeDelta;
use pretty_assertions::assert_eq;
use tokio::sync::oneshot;

use campus_chat_client::app::event_handlers::{
    MessageEvent, MessagesEventHandler, ServerEvent, ServerEventHandler,
};
use campus_chat_client::dtos::{ChatRoom, DeliveryState, SendMessageRequest};
use campus_chat_client::services::MessageStore;
use campus_chat_client::test::{mock_data, record_events, MessageBuilder, MockAppDependencies};
use campus_chat_client::{ClientEvent, ClientRoomEventType};

fn room() -> ChatRoom {
    ChatRoom {
        id: mock_data::room_id(),
        participant: mock_data::contact(),
        last_message: None,
        unread_count: 0,
        updated_at: mock_data::reference_date(),
    }
}

fn message_event(builder: MessageBuilder) -> ServerEvent {
    ServerEvent::Message(MessageEvent {
        room_id: mock_data::room_id(),
        message: builder.build(),
    })
}

#[tokio::test]
async fn test_appends_received_message_and_updates_room() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);
    deps.timelines.open(&mock_data::room_id());
    deps.room_list.replace_all(vec![room()]);

    let deps = deps.into_deps();
    let handler = MessagesEventHandler::from(&deps);

    let result = handler
        .handle_event(message_event(
            MessageBuilder::new_with_index(1).set_body("Lunch?"),
        ))
        .await?;
    assert!(result.is_none());

    let room = deps.room_list.get(&mock_data::room_id()).unwrap();
    assert_eq!(room.unread_count, 1);
    assert_eq!(
        room.last_message.map(|message| message.preview),
        Some("Lunch?".to_string())
    );
    assert_eq!(
        *events.lock(),
        vec![
            ClientEvent::RoomChanged {
                room_id: mock_data::room_id(),
                r#type: ClientRoomEventType::MessagesAppended {
                    message_ids: vec![MessageBuilder::id_for_index(1)]
                }
            },
            ClientEvent::RoomListChanged,
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_ignores_known_message() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);
    deps.timelines.open(&mock_data::room_id());
    deps.timelines.update(&mock_data::room_id(), |timeline| {
        timeline.merge([MessageBuilder::new_with_index(1).build()])
    });
    deps.room_list.replace_all(vec![room()]);

    let deps = deps.into_deps();
    let handler = MessagesEventHandler::from(&deps);

    handler
        .handle_event(message_event(MessageBuilder::new_with_index(1)))
        .await?;

    assert!(events.lock().is_empty());
    assert_eq!(deps.room_list.unread_count(&mock_data::room_id()), Some(0));

    Ok(())
}

#[tokio::test]
async fn test_own_messages_do_not_count_as_unread() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    _ = record_events(&mut deps.client_event_dispatcher);
    deps.room_list.replace_all(vec![room()]);

    let deps = deps.into_deps();
    let handler = MessagesEventHandler::from(&deps);

    handler
        .handle_event(message_event(
            MessageBuilder::new_with_index(1).set_from_current_user(),
        ))
        .await?;

    let room = deps.room_list.get(&mock_data::room_id()).unwrap();
    assert_eq!(room.unread_count, 0);
    assert!(room.last_message.is_some());

    Ok(())
}

#[tokio::test]
async fn test_echo_received_before_confirmation_is_merged() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    _ = record_events(&mut deps.client_event_dispatcher);
    let (tx, rx) = oneshot::channel::<()>();

    let confirmed = MessageBuilder::new_with_index(1)
        .set_id("c0ffee")
        .set_from_current_user()
        .set_body("On my way")
        .set_timestamp(mock_data::reference_date() + TimeDelta::seconds(1))
        .build();

    {
        let confirmed = confirmed.clone();
        deps.messaging_service
            .expect_send_message()
            .once()
            .return_once(move |_, _| {
                Box::pin(async move {
                    _ = rx.await;
                    Ok(confirmed)
                })
            });
    }

    let deps = Arc::new(deps.into_deps());
    let store = MessageStore::from(deps.as_ref());
    let handler = MessagesEventHandler::from(deps.as_ref());
    store.open_room(&mock_data::room_id());

    let echo = ServerEvent::Message(MessageEvent {
        room_id: mock_data::room_id(),
        message: confirmed.clone(),
    });

    let room_id = mock_data::room_id();

    let (sent, _) = tokio::join!(
        store.send(&room_id, SendMessageRequest::text("On my way")),
        async {
            handler.handle_event(echo).await.unwrap();
            _ = tx.send(());
        }
    );
    sent?;

    let messages = store.messages(&mock_data::room_id());
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].id, confirmed.id);
    assert_eq!(messages[0].delivery, DeliveryState::Confirmed);

    Ok(())
}
