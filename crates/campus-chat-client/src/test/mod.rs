// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use parking_lot::Mutex;

use crate::app::event_handlers::MockClientEventDispatcherTrait;
use crate::ClientEvent;

pub use constant_time_provider::ConstantTimeProvider;
pub use incrementing_id_provider::IncrementingIdProvider;
pub use message_builder::MessageBuilder;
pub use mock_app_dependencies::MockAppDependencies;
pub use mock_connector::MockConnector;


pub mod mock_data {
    pub use super::mock_app_dependencies::{
        mock_account as account, mock_contact as contact, mock_reference_date as reference_date,
        mock_room_id as room_id,
    };
}

/// Makes `dispatcher` accept any event and returns the list the events are collected in.
/// Room events are recorded as `ClientEvent::RoomChanged`.
pub fn record_events(
    dispatcher: &mut MockClientEventDispatcherTrait,
) -> Arc<Mutex<Vec<ClientEvent>>> {
    let events = Arc::new(Mutex::new(vec![]));

    {
        let events = events.clone();
        dispatcher
            .expect_dispatch_event()
            .returning(move |event| events.lock().push(event));
    }
    {
        let events = events.clone();
        dispatcher
            .expect_dispatch_room_event()
            .returning(move |room_id, r#type| {
                events
                    .lock()
                    .push(ClientEvent::RoomChanged { room_id, r#type })
            });
    }

    events
}
