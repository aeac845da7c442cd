// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use anyhow::Result;

use campus_proc_macros::InjectDependencies;

use crate::app::deps::{DynAppContext, DynClientEventDispatcher, DynContactsService};
use crate::domain::contacts::models::Contact;
use crate::ClientEvent;

#[derive(InjectDependencies)]
pub struct ContactListService {
    #[inject]
    ctx: DynAppContext,
    #[inject]
    client_event_dispatcher: DynClientEventDispatcher,
    #[inject]
    contacts_service: DynContactsService,
}

impl ContactListService {
    pub async fn load_contacts(&self) -> Result<Vec<Contact>> {
        let current_user = self.ctx.current_user_id()?;
        let mut contacts = self.contacts_service.load_contacts(&current_user).await?;
        contacts.sort_by_key(|contact| contact.user.name.to_lowercase());
        self.client_event_dispatcher
            .dispatch_event(ClientEvent::ContactListChanged);
        Ok(contacts)
    }
}
