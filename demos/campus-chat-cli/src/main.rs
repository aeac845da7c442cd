// campus-connect/campus-chat-cli
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::path::Path;

use anyhow::{bail, Result};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};
use tracing::Level;

use campus_chat_client::dtos::{LocalAttachment, SendMessageRequest};
use campus_chat_client::services::{LoadOutcome, Room};
use campus_chat_client::{Client, ClientDelegate, ClientEvent, ClientRoomEventType, ServerConfig};

use crate::setup::{enable_debug_logging, load_credentials};
use crate::type_display::{ContactEnvelope, MessageEnvelope, RoomEnvelope};

mod setup;
mod type_display;

async fn configure_client() -> Result<Client> {
    let (url, access_token) = load_credentials()?;

    let client = Client::builder()
        .set_server_config(ServerConfig::new(&url)?)
        .set_delegate(Some(Box::new(Delegate {})))
        .build()?;

    println!("Signing in at {}…", url);
    let user = client.sign_in(access_token).await?;
    println!("Signed in as {} (@{}).", user.name, user.username);

    Ok(client)
}

fn select_item<T: ToString>(prompt: &str, items: &[T]) -> Option<usize> {
    if items.is_empty() {
        println!("Nothing to select.");
        return None;
    }
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .default(0)
        .items(items)
        .interact_opt()
        .ok()
        .flatten();
    println!();
    selection
}

fn select<S: IntoEnumIterator + ToString + Clone>(fallback: S) -> S {
    let options: Vec<S> = S::iter().collect();
    select_item("What do you want to do?", &options)
        .map(|idx| options[idx].clone())
        .unwrap_or(fallback)
}

fn prompt_string(prompt: &str) -> Result<String> {
    let input = Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    println!();
    Ok(input)
}

fn read_image(path: &str) -> Result<LocalAttachment> {
    let path = Path::new(path.trim());
    let media_type = match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_lowercase())
        .as_deref()
    {
        Some("jpg" | "jpeg") => mime::IMAGE_JPEG,
        Some("png") => mime::IMAGE_PNG,
        Some("gif") => mime::IMAGE_GIF,
        _ => bail!("Unsupported image {:?}", path),
    };
    let file_name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("image")
        .to_string();

    Ok(LocalAttachment::new(file_name, media_type, std::fs::read(path)?))
}

async fn load_rooms(client: &Client) -> Result<()> {
    let rooms = client
        .rooms
        .load_rooms()
        .await?
        .into_iter()
        .map(|room| RoomEnvelope(room).to_string())
        .collect::<Vec<_>>();
    println!("Conversations:\n{}", rooms.join("\n"));
    Ok(())
}

async fn load_contacts(client: &Client) -> Result<()> {
    let contacts = client
        .contact_list
        .load_contacts()
        .await?
        .into_iter()
        .map(|contact| ContactEnvelope(contact).to_string())
        .collect::<Vec<_>>();
    println!("Connections:\n{}", contacts.join("\n"));
    Ok(())
}

async fn start_conversation(client: &Client) -> Result<Option<Room>> {
    let contacts = client.contact_list.load_contacts().await?;
    let items = contacts
        .iter()
        .cloned()
        .map(ContactEnvelope)
        .collect::<Vec<_>>();

    let Some(idx) = select_item("Select a connection", &items) else {
        return Ok(None);
    };

    let room = client.rooms.start_conversation(&contacts[idx].user.id).await?;
    Ok(Some(client.enter_room(room.id)))
}

async fn select_room(client: &Client) -> Result<Option<Room>> {
    let rooms = match client.rooms.rooms() {
        rooms if rooms.is_empty() => client.rooms.load_rooms().await?,
        rooms => rooms,
    };
    let items = rooms.iter().cloned().map(RoomEnvelope).collect::<Vec<_>>();

    Ok(select_item("Select a conversation", &items)
        .map(|idx| client.enter_room(rooms[idx].id.clone())))
}

async fn search_messages(client: &Client) -> Result<()> {
    let query = prompt_string("Search for")?;
    let messages = client
        .search_messages(&query, None)
        .await?
        .into_iter()
        .map(|message| MessageEnvelope(message).to_string())
        .collect::<Vec<_>>();
    println!("{} results:\n{}", messages.len(), messages.join("\n"));
    Ok(())
}

fn print_messages(room: &Room) {
    for message in room.messages() {
        println!("{}", MessageEnvelope(message));
    }
    let composing_users = room.composing_users();
    if !composing_users.is_empty() {
        println!("{} typing…", composing_users.join(", "));
    }
}

async fn run_room(room: Room) -> Result<()> {
    if let Err(err) = room.connect().await {
        println!("Live updates are unavailable: {}", err);
    }
    room.load_latest_messages().await?;
    print_messages(&room);

    loop {
        println!();

        match select(RoomSelection::Noop) {
            RoomSelection::ShowMessages => print_messages(&room),
            RoomSelection::LoadOlderMessages => match room.load_more().await? {
                LoadOutcome::Loaded { message_ids, .. } => {
                    println!("Loaded {} older messages.", message_ids.len());
                    print_messages(&room);
                }
                outcome => println!("{:?}", outcome),
            },
            RoomSelection::SendText => {
                let text = prompt_string("Message")?;
                room.composer().set_text(text).await;
                if !room.composer().submit().await {
                    println!("Nothing to send.");
                }
            }
            RoomSelection::SendImage => {
                let attachment = read_image(&prompt_string("Path to image file")?)?;
                room.composer().set_attachment(attachment).await;
                room.composer().submit().await;
            }
            RoomSelection::RetryFailedMessages => {
                let failed = room
                    .messages()
                    .into_iter()
                    .filter(|message| message.is_failed())
                    .collect::<Vec<_>>();
                for message in failed {
                    room.retry_message(&message.id).await?;
                }
            }
            RoomSelection::MarkAsRead => room.mark_as_read().await?,
            RoomSelection::Search => {
                let query = prompt_string("Search for")?;
                for message in room.search_messages(&query).await? {
                    println!("{}", MessageEnvelope(message));
                }
            }
            RoomSelection::Noop => (),
            RoomSelection::Leave => return Ok(()),
        }
    }
}

struct Delegate {}

impl ClientDelegate for Delegate {
    fn handle_event(&self, _client: Client, event: ClientEvent) {
        match event {
            ClientEvent::RoomChanged { room_id, r#type } => match r#type {
                ClientRoomEventType::ConnectionStateChanged { state } => {
                    println!("[{}] Channel is {}.", room_id, state)
                }
                ClientRoomEventType::MessagesAppended { message_ids } => {
                    println!("[{}] {} new message(s).", room_id, message_ids.len())
                }
                ClientRoomEventType::MessageSendFailed { error, .. } => {
                    println!("[{}] Message was not delivered: {}", room_id, error)
                }
                ClientRoomEventType::ServerNotice { message } => {
                    println!("[{}] Server says: {}", room_id, message)
                }
                _ => (),
            },
            ClientEvent::SessionChanged
            | ClientEvent::RoomListChanged
            | ClientEvent::ContactListChanged => (),
        }
    }
}

#[derive(EnumIter, Display, Clone)]
enum Selection {
    #[strum(serialize = "Load conversations")]
    LoadRooms,
    #[strum(serialize = "Open conversation")]
    OpenRoom,
    #[strum(serialize = "Load connections")]
    LoadContacts,
    #[strum(serialize = "Start conversation")]
    StartConversation,
    #[strum(serialize = "Search messages")]
    SearchMessages,
    Noop,
    Exit,
}

#[derive(EnumIter, Display, Clone)]
enum RoomSelection {
    #[strum(serialize = "Show messages")]
    ShowMessages,
    #[strum(serialize = "Load older messages")]
    LoadOlderMessages,
    #[strum(serialize = "Send text")]
    SendText,
    #[strum(serialize = "Send image")]
    SendImage,
    #[strum(serialize = "Retry failed messages")]
    RetryFailedMessages,
    #[strum(serialize = "Mark as read")]
    MarkAsRead,
    #[strum(serialize = "Search this conversation")]
    Search,
    Noop,
    Leave,
}

#[tokio::main]
async fn main() -> Result<()> {
    enable_debug_logging(Level::DEBUG)?;

    let client = configure_client().await?;

    loop {
        println!();

        let result = match select(Selection::Noop) {
            Selection::LoadRooms => load_rooms(&client).await,
            Selection::OpenRoom => match select_room(&client).await {
                Ok(Some(room)) => run_room(room).await,
                Ok(None) => Ok(()),
                Err(err) => Err(err),
            },
            Selection::LoadContacts => load_contacts(&client).await,
            Selection::StartConversation => match start_conversation(&client).await {
                Ok(Some(room)) => run_room(room).await,
                Ok(None) => Ok(()),
                Err(err) => Err(err),
            },
            Selection::SearchMessages => search_messages(&client).await,
            Selection::Noop => Ok(()),
            Selection::Exit => {
                println!("Bye bye!");
                client.sign_out();
                return Ok(());
            }
        };

        if let Err(err) = result {
            println!("Error: {:#}", err);
        }
    }
}
