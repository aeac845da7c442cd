// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::Arc;

use anyhow::{format_err, Result};

use crate::app::deps::{
    AppConfig, AppContext, AppDependencies, DynCredentialsRepository, DynIdProvider,
    DynRealtimeConnector, DynTimeProvider,
};
use crate::app::event_handlers::{
    MessagesEventHandler, NoticesEventHandler, ServerEventHandlerQueue, TypingEventHandler,
};
use crate::app::services::{AccountService, ContactListService, MessageStore, RoomsService};
use crate::client::ClientInner;
use crate::domain::connection::services::RealtimeConnector;
use crate::domain::general::services::{IdProvider, TimeProvider};
use crate::domain::messaging::models::Timelines;
use crate::domain::rooms::models::RoomList;
use crate::infra::account::InMemoryCredentialsRepository;
use crate::infra::api::{ApiClient, ServerConfig};
use crate::infra::events::ClientEventDispatcher;
use crate::infra::general::{SystemTimeProvider, UuidProvider};
use crate::infra::websocket::WebSocketConnector;
use crate::{Client, ClientDelegate};

pub struct ClientBuilder {
    app_config: AppConfig,
    credentials_repo: DynCredentialsRepository,
    delegate: Option<Box<dyn ClientDelegate>>,
    id_provider: DynIdProvider,
    realtime_connector: Option<DynRealtimeConnector>,
    server_config: Option<ServerConfig>,
    time_provider: DynTimeProvider,
}

impl ClientBuilder {
    pub(crate) fn new() -> Self {
        ClientBuilder {
            app_config: Default::default(),
            credentials_repo: Arc::new(InMemoryCredentialsRepository::default()),
            delegate: None,
            id_provider: Arc::new(UuidProvider::default()),
            realtime_connector: None,
            server_config: None,
            time_provider: Arc::new(SystemTimeProvider::default()),
        }
    }

    pub fn set_server_config(mut self, server_config: ServerConfig) -> Self {
        self.server_config = Some(server_config);
        self
    }

    pub fn set_config(mut self, config: AppConfig) -> Self {
        self.app_config = config;
        self
    }

    pub fn set_delegate(mut self, delegate: Option<Box<dyn ClientDelegate>>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Replaces the WebSocket transport, e.g. with an in-memory one in tests.
    pub fn set_realtime_connector<C: RealtimeConnector + 'static>(mut self, connector: C) -> Self {
        self.realtime_connector = Some(Arc::new(connector));
        self
    }

    pub fn set_id_provider<P: IdProvider + 'static>(mut self, id_provider: P) -> Self {
        self.id_provider = Arc::new(id_provider);
        self
    }

    pub fn set_time_provider<T: TimeProvider + 'static>(mut self, time_provider: T) -> Self {
        self.time_provider = Arc::new(time_provider);
        self
    }

    pub fn build(self) -> Result<Client> {
        let server_config = self
            .server_config
            .ok_or_else(|| format_err!("A server configuration is required to build a Client"))?;

        let api_client = Arc::new(ApiClient::new(
            server_config.clone(),
            self.credentials_repo.clone(),
        )?);
        let realtime_connector: DynRealtimeConnector = match self.realtime_connector {
            Some(connector) => connector,
            None => Arc::new(WebSocketConnector::new(server_config)),
        };

        let server_event_handlers = Arc::new(ServerEventHandlerQueue::new());
        let event_dispatcher = Arc::new(ClientEventDispatcher::new(self.delegate));

        let dependencies = AppDependencies {
            client_event_dispatcher: event_dispatcher.clone(),
            contacts_service: api_client.clone(),
            credentials_repo: self.credentials_repo,
            ctx: Arc::new(AppContext::new(self.app_config)),
            id_provider: self.id_provider,
            messaging_service: api_client.clone(),
            realtime_connector,
            room_list: Arc::new(RoomList::default()),
            room_management_service: api_client.clone(),
            server_event_handlers: server_event_handlers.clone(),
            time_provider: self.time_provider,
            timelines: Arc::new(Timelines::default()),
            user_account_service: api_client,
        };

        server_event_handlers.set_handlers(vec![
            Box::new(MessagesEventHandler::from(&dependencies)),
            Box::new(TypingEventHandler::from(&dependencies)),
            Box::new(NoticesEventHandler::from(&dependencies)),
        ]);

        let client_inner = Arc::new(ClientInner {
            account: AccountService::from(&dependencies),
            contact_list: ContactListService::from(&dependencies),
            rooms: RoomsService::from(&dependencies),
            messages: MessageStore::from(&dependencies),
            event_dispatcher: event_dispatcher.clone(),
            deps: dependencies,
        });

        event_dispatcher.set_client_inner(Arc::downgrade(&client_inner));

        Ok(Client::from(client_inner))
    }
}
