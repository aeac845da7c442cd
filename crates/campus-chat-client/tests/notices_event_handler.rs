// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use pretty_assertions::assert_eq;

use campus_chat_client::app::event_handlers::{
    MessageEvent, NoticeEvent, NoticesEventHandler, ServerEvent, ServerEventHandler,
};
use campus_chat_client::test::{mock_data, record_events, MessageBuilder, MockAppDependencies};
use campus_chat_client::{ClientEvent, ClientRoomEventType};

#[tokio::test]
async fn test_reports_server_notices() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    let handler = NoticesEventHandler::from(&deps.into_deps());
    handler
        .handle_event(ServerEvent::Notice(NoticeEvent {
            room_id: mock_data::room_id(),
            message: "Invalid JSON".to_string(),
        }))
        .await?;

    assert_eq!(
        *events.lock(),
        vec![ClientEvent::RoomChanged {
            room_id: mock_data::room_id(),
            r#type: ClientRoomEventType::ServerNotice {
                message: "Invalid JSON".to_string()
            }
        }]
    );

    Ok(())
}

#[tokio::test]
async fn test_passes_on_messages() -> Result<()> {
    let handler = NoticesEventHandler::from(&MockAppDependencies::default().into_deps());

    let event = ServerEvent::Message(MessageEvent {
        room_id: mock_data::room_id(),
        message: MessageBuilder::new_with_index(1).build(),
    });
    assert_eq!(handler.handle_event(event.clone()).await?, Some(event));

    Ok(())
}
