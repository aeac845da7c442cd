// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use mockall::predicate;
use pretty_assertions::assert_eq;

use campus_chat_client::app::deps::AppContext;
use campus_chat_client::dtos::{Contact, UserBasicInfo, UserId};
use campus_chat_client::services::ContactListService;
use campus_chat_client::test::{mock_data, record_events, MockAppDependencies};
use campus_chat_client::ClientEvent;

fn contact(id: i64, name: &str) -> Contact {
    Contact {
        connection_id: format!("{}", id * 10),
        user: UserBasicInfo {
            id: UserId::new(id),
            username: name.to_lowercase().replace(' ', "."),
            name: name.to_string(),
            avatar: None,
        },
        connected_since: mock_data::reference_date(),
    }
}

#[tokio::test]
async fn test_loads_contacts_sorted_by_name() -> Result<()> {
    let mut deps = MockAppDependencies::default();
    let events = record_events(&mut deps.client_event_dispatcher);

    deps.contacts_service
        .expect_load_contacts()
        .once()
        .with(predicate::eq(mock_data::account().id))
        .returning(|_| {
            Box::pin(async {
                Ok(vec![
                    contact(3, "zoe Miller"),
                    contact(4, "Adam Smith"),
                    contact(5, "bea Jones"),
                ])
            })
        });

    let service = ContactListService::from(&deps.into_deps());
    let contacts = service.load_contacts().await?;

    assert_eq!(
        contacts
            .iter()
            .map(|contact| contact.user.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Adam Smith", "bea Jones", "zoe Miller"]
    );
    assert_eq!(*events.lock(), vec![ClientEvent::ContactListChanged]);

    Ok(())
}

#[tokio::test]
async fn test_requires_signed_in_user() -> Result<()> {
    let deps = MockAppDependencies {
        ctx: AppContext::new(Default::default()),
        ..Default::default()
    };

    let service = ContactListService::from(&deps.into_deps());
    assert!(service.load_contacts().await.is_err());

    Ok(())
}
