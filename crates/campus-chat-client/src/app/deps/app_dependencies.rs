// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use crate::app::deps::app_context::AppContext;
use crate::app::event_handlers::{ClientEventDispatcherTrait, ServerEventHandlerQueue};
use crate::domain::account::repos::CredentialsRepository;
use crate::domain::account::services::UserAccountService;
use crate::domain::connection::services::RealtimeConnector;
use crate::domain::contacts::services::ContactsService;
use crate::domain::general::services::{IdProvider, TimeProvider};
use crate::domain::messaging::models::Timelines;
use crate::domain::messaging::services::MessagingService;
use crate::domain::rooms::models::RoomList;
use crate::domain::rooms::services::RoomManagementService;

pub type DynAppContext = Arc<AppContext>;
pub type DynClientEventDispatcher = Arc<dyn ClientEventDispatcherTrait>;
pub type DynContactsService = Arc<dyn ContactsService>;
pub type DynCredentialsRepository = Arc<dyn CredentialsRepository>;
pub type DynIdProvider = Arc<dyn IdProvider>;
pub type DynMessagingService = Arc<dyn MessagingService>;
pub type DynRealtimeConnector = Arc<dyn RealtimeConnector>;
pub type DynRoomList = Arc<RoomList>;
pub type DynRoomManagementService = Arc<dyn RoomManagementService>;
pub type DynServerEventHandlerQueue = Arc<ServerEventHandlerQueue>;
pub type DynTimeProvider = Arc<dyn TimeProvider>;
pub type DynTimelines = Arc<Timelines>;
pub type DynUserAccountService = Arc<dyn UserAccountService>;

pub struct AppDependencies {
    pub client_event_dispatcher: DynClientEventDispatcher,
    pub contacts_service: DynContactsService,
    pub credentials_repo: DynCredentialsRepository,
    pub ctx: DynAppContext,
    pub id_provider: DynIdProvider,
    pub messaging_service: DynMessagingService,
    pub realtime_connector: DynRealtimeConnector,
    pub room_list: DynRoomList,
    pub room_management_service: DynRoomManagementService,
    pub server_event_handlers: DynServerEventHandlerQueue,
    pub time_provider: DynTimeProvider,
    pub timelines: DynTimelines,
    pub user_account_service: DynUserAccountService,
}
