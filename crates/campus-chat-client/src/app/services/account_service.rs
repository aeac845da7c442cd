// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;
use secrecy::SecretString;
use tracing::{info, warn};

use campus_proc_macros::InjectDependencies;

use crate::app::deps::{
    DynAppContext, DynClientEventDispatcher, DynCredentialsRepository, DynRoomList,
    DynTimelines, DynUserAccountService,
};
use crate::domain::shared::models::UserBasicInfo;
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct AccountService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    credentials_repo: DynCredentialsRepository,
    #[inject]
    room_list: DynRoomList,
    #[inject]
    timelines: DynTimelines,
    #[inject]
    user_account_service: DynUserAccountService,
}

impl AccountService {
    pub fn current_user(&self) -> Option<UserBasicInfo> {
        self.ctx.current_user().ok()
    }

    /// Stores the access token and loads the user it belongs to. The token is dropped again
    /// if the backend rejects it.
    pub async fn sign_in(&self, access_token: SecretString) -> Result<UserBasicInfo> {
        self.credentials_repo.set(access_token);

        let user = match self.user_account_service.load_current_user().await {
            Ok(user) => user,
            Err(err) => {
                warn!("Failed to load current user: {}", err);
                self.credentials_repo.clear();
                return Err(err);
            }
        };

        info!("Signed in as {}.", user.username);
        self.ctx.set_current_user(user.clone());
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionChanged);
        Ok(user)
    }

    pub fn sign_out(&self) {
        self.credentials_repo.clear();
        self.ctx.reset_current_user();
        self.room_list.clear();
        self.timelines.clear();
        info!("Signed out.");
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::SessionChanged);
    }
}
