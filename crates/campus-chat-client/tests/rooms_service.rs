// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::{format_err, Result};
use chrono::TimeDelta;
use mockall::predicate;
use pretty_assertions::assert_eq;

use campus_chat_client::dtos::{ChatRoom, RoomId, UserBasicInfo, UserId};
use campus_chat_client::services::RoomsService;
use campus_chat_client::test::{mock_data, record_events, MockAppDependencies};
use campus_chat_client::ClientEvent;

fn room(id: &str, participant: UserBasicInfo, minutes: i64) -> ChatRoom {
    ChatRoom {
        id: RoomId::from(id),
        participant,
        last_message: None,
        unread_count: 0,
        updated_at: mock_data::reference_date() + TimeDelta::minutes(minutes),
    }
}

fn user(id: i64, username: &str) -> UserBasicInfo {
    UserBasicInfo {
        id: UserId::new(id),
        username: username.to_string(),
        name: username.to_string(),
        avatar: None,
    }
}

#[tokio::test]
async fn test_load_rooms_orders_by_activity() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.room_management_service
        .expect_load_rooms()
        .once()
        .returning(|| {
            Box::pin(async {
                Ok(vec![
                    room("room-a", user(3, "ada"), 1),
                    room("room-b", user(4, "grace"), 10),
                    room("room-c", user(5, "linus"), 5),
                ])
            })
        });

    let service = RoomsService::from(&deps.into_deps());
    let rooms = service.load_rooms().await?;

    assert_eq!(
        rooms.iter().map(|room| room.id.as_str()).collect::<Vec<_>>(),
        vec!["room-b", "room-c", "room-a"]
    );
    assert_eq!(service.rooms(), rooms);
    assert_eq!(*events.lock(), vec![ClientEvent::RoomListChanged]);

    Ok(())
}

#[tokio::test]
async fn test_failed_load_keeps_cached_rooms() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.room_list
        .replace_all(vec![room("room-a", user(3, "ada"), 1)]);
    deps.room_management_service
        .expect_load_rooms()
        .once()
        .returning(|| Box::pin(async { Err(format_err!("Service unavailable")) }));

    let service = RoomsService::from(&deps.into_deps());
    assert!(service.load_rooms().await.is_err());

    assert_eq!(service.rooms().len(), 1);
    assert!(events.lock().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_start_conversation_adds_room() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.room_list
        .replace_all(vec![room("room-a", user(3, "ada"), 1)]);
    deps.room_management_service
        .expect_get_or_create_room()
        .once()
        .with(predicate::eq(mock_data::contact().id))
        .returning(|_| Box::pin(async { Ok(room("room-1", mock_data::contact(), 0)) }));

    let service = RoomsService::from(&deps.into_deps());
    let room = service.start_conversation(&mock_data::contact().id).await?;

    assert_eq!(room.id, mock_data::room_id());
    assert_eq!(service.room(&mock_data::room_id()), Some(room));
    assert_eq!(service.rooms().len(), 2);
    assert_eq!(*events.lock(), vec![ClientEvent::RoomListChanged]);

    Ok(())
}
