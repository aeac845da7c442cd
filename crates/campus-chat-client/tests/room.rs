// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{format_err, Result};
use pretty_assertions::assert_eq;
use secrecy::SecretString;

use campus_chat_client::app::event_handlers::{MessagesEventHandler, TypingEventHandler};
use campus_chat_client::domain::connection::models::{InboundEvent, OutboundEvent};
use campus_chat_client::domain::messaging::models::MessagePage;
use campus_chat_client::dtos::{ConnectionState, DeliveryState, LocalAttachment};
use campus_chat_client::services::{LoadOutcome, Room};
use campus_chat_client::test::{
    mock_data, record_events, MessageBuilder, MockAppDependencies, MockConnector,
};

fn signed_in_deps() -> (MockAppDependencies, MockConnector) {
    let mut deps = MockAppDependencies::default();
    let connector = MockConnector::default();

    deps.credentials_repo
        .expect_get()
        .returning(|| Some(SecretString::new("access-token".to_string())));
    deps.realtime_connector = Arc::new(connector.clone());
    _ = record_events(&mut deps.client_event_dispatcher);

    (deps, connector)
}

#[tokio::test]
async fn test_relays_sent_message_over_channel() -> Result<()> {
    let (mut deps, connector) = signed_in_deps();

    deps.messaging_service
        .expect_send_message()
        .once()
        .return_once(|_, _| {
            Box::pin(async {
                Ok(MessageBuilder::new_with_index(1)
                    .set_id("7a2b")
                    .set_from_current_user()
                    .set_body("Hello")
                    .build())
            })
        });

    let room = Room::new(mock_data::room_id(), &deps.into_deps());
    room.connect().await?;
    assert_eq!(room.connection_state(), ConnectionState::Connected);

    room.composer().set_text("Hello").await;
    assert!(room.composer().submit().await);

    let sent = connector.sent_events();
    assert_eq!(sent.len(), 3);
    assert_eq!(sent[0], OutboundEvent::TypingStarted);
    assert_eq!(sent[1], OutboundEvent::TypingStopped);
    assert!(matches!(&sent[2], OutboundEvent::NewMessage(message) if message.id.as_str() == "7a2b"));

    let messages = room.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].delivery, DeliveryState::Confirmed);

    Ok(())
}

#[tokio::test]
async fn test_failed_message_is_not_relayed() -> Result<()> {
    let (mut deps, connector) = signed_in_deps();

    deps.messaging_service
        .expect_send_message()
        .once()
        .return_once(|_, _| Box::pin(async { Err(format_err!("Bad gateway")) }));

    let room = Room::new(mock_data::room_id(), &deps.into_deps());
    room.connect().await?;

    room.composer()
        .set_attachment(LocalAttachment::new(
            "whiteboard.png",
            mime::IMAGE_PNG,
            vec![0x89, 0x50, 0x4e, 0x47],
        ))
        .await;
    assert!(room.composer().submit().await);

    assert!(connector.sent_events().is_empty());
    assert!(room.messages()[0].is_failed());

    Ok(())
}

#[tokio::test]
async fn test_sends_nothing_while_disconnected() -> Result<()> {
    let (mut deps, connector) = signed_in_deps();

    deps.messaging_service
        .expect_mark_messages_read()
        .once()
        .returning(|_| Box::pin(async { Ok(()) }));

    let room = Room::new(mock_data::room_id(), &deps.into_deps());

    room.composer().set_text("Hel").await;
    room.mark_as_read().await?;

    assert!(!room.send_read_receipt(&MessageBuilder::id_for_index(1)));
    assert!(connector.sent_events().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_mark_as_read_notifies_participant() -> Result<()> {
    let (mut deps, connector) = signed_in_deps();

    deps.messaging_service
        .expect_load_messages()
        .once()
        .returning(|_, _| {
            Box::pin(async {
                Ok(MessagePage {
                    messages: vec![
                        MessageBuilder::new_with_index(2).build(),
                        MessageBuilder::new_with_index(1).build(),
                    ],
                    has_more: false,
                })
            })
        });
    deps.messaging_service
        .expect_mark_messages_read()
        .once()
        .returning(|_| Box::pin(async { Ok(()) }));

    let room = Room::new(mock_data::room_id(), &deps.into_deps());
    room.connect().await?;

    assert_eq!(
        room.load_latest_messages().await?,
        LoadOutcome::Loaded {
            message_ids: vec![
                MessageBuilder::id_for_index(2),
                MessageBuilder::id_for_index(1)
            ],
            has_more: false
        }
    );
    assert_eq!(room.unread_count(), 2);

    room.mark_as_read().await?;
    assert!(room.send_read_receipt(&MessageBuilder::id_for_index(2)));

    assert_eq!(room.unread_count(), 0);
    assert_eq!(
        connector.sent_events(),
        vec![
            OutboundEvent::MarkRead,
            OutboundEvent::MessageRead(MessageBuilder::id_for_index(2))
        ]
    );

    Ok(())
}

#[tokio::test]
async fn test_shows_received_messages_and_typing_users() -> Result<()> {
    let (deps, connector) = signed_in_deps();
    let deps = deps.into_deps();

    deps.server_event_handlers.set_handlers(vec![
        Box::new(MessagesEventHandler::from(&deps)),
        Box::new(TypingEventHandler::from(&deps)),
    ]);

    let room = Room::new(mock_data::room_id(), &deps);
    room.connect().await?;

    connector
        .receive(InboundEvent::UserTyping {
            user: "john.doe".to_string(),
            is_typing: true,
        })
        .await;
    assert_eq!(room.composing_users(), vec!["john.doe".to_string()]);

    connector
        .receive(InboundEvent::MessageReceived(
            MessageBuilder::new_with_index(1).build(),
        ))
        .await;
    assert_eq!(
        room.messages()
            .into_iter()
            .map(|message| message.id)
            .collect::<Vec<_>>(),
        vec![MessageBuilder::id_for_index(1)]
    );

    Ok(())
}

#[tokio::test]
async fn test_dropping_room_releases_channel_and_timeline() -> Result<()> {
    let (deps, connector) = signed_in_deps();
    let deps = deps.into_deps();

    let room = Room::new(mock_data::room_id(), &deps);
    room.connect().await?;
    assert!(deps.timelines.is_open(&mock_data::room_id()));

    drop(room);

    assert_eq!(connector.disconnect_count(), 1);
    assert!(!connector.is_open());
    assert!(!deps.timelines.is_open(&mock_data::room_id()));

    Ok(())
}

#[tokio::test]
async fn test_dropping_one_of_two_rooms_keeps_shared_timeline() -> Result<()> {
    let (mut deps, connector) = signed_in_deps();

    deps.messaging_service
        .expect_load_messages()
        .once()
        .returning(|_, _| {
            Box::pin(async {
                Ok(MessagePage {
                    messages: vec![MessageBuilder::new_with_index(1).build()],
                    has_more: false,
                })
            })
        });

    let deps = deps.into_deps();
    deps.server_event_handlers
        .set_handlers(vec![Box::new(MessagesEventHandler::from(&deps))]);

    let first = Room::new(mock_data::room_id(), &deps);
    let second = Room::new(mock_data::room_id(), &deps);
    first.connect().await?;

    first.load_latest_messages().await?;
    assert_eq!(second.messages().len(), 1);

    drop(second);

    assert!(deps.timelines.is_open(&mock_data::room_id()));
    assert_eq!(first.messages().len(), 1);

    connector
        .receive(InboundEvent::MessageReceived(
            MessageBuilder::new_with_index(2).build(),
        ))
        .await;
    assert_eq!(
        first
            .messages()
            .into_iter()
            .map(|message| message.id)
            .collect::<Vec<_>>(),
        vec![
            MessageBuilder::id_for_index(1),
            MessageBuilder::id_for_index(2)
        ]
    );

    drop(first);
    assert!(!deps.timelines.is_open(&mock_data::room_id()));

    Ok(())
}

#[tokio::test]
async fn test_search_is_limited_to_room() -> Result<()> {
    let (mut deps, _connector) = signed_in_deps();

    deps.messaging_service
        .expect_search_messages()
        .once()
        .withf(|query, room_id| query == "quiz" && *room_id == Some(&mock_data::room_id()))
        .return_once(|_, _| {
            Box::pin(async {
                Ok(vec![MessageBuilder::new_with_index(4)
                    .set_body("Quiz moved to Friday")
                    .build()])
            })
        });

    let room = Room::new(mock_data::room_id(), &deps.into_deps());
    let results = room.search_messages("quiz").await?;

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].body, "Quiz moved to Friday");
    assert!(room.messages().is_empty());

    Ok(())
}
