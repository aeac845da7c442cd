// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use futures::{SinkExt, StreamExt};
use secrecy::{ExposeSecret, SecretString};
use tokio::net::TcpStream;
use tokio::sync::mpsc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use tokio::{task, time};
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::{Error as WsError, Message as WsMessage};
use tokio_tungstenite::{connect_async, MaybeTlsStream, WebSocketStream};
use tracing::{debug, error, info, warn};

use crate::domain::connection::models::{ConnectionError, ConnectionEvent, OutboundEvent};
use crate::domain::connection::services::{
    ConnectionEventHandler, RealtimeConnection, RealtimeConnector,
};
use crate::domain::shared::models::RoomId;
use crate::infra::api::ServerConfig;
use crate::infra::websocket::frames;

type Stream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Opens the per-room channels at `{ws_url}/ws/chat/{room_id}/`.
pub struct WebSocketConnector {
    config: ServerConfig,
}

impl WebSocketConnector {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl RealtimeConnector for WebSocketConnector {
    async fn connect(
        &self,
        room_id: &RoomId,
        access_token: SecretString,
        event_handler: ConnectionEventHandler,
    ) -> Result<Box<dyn RealtimeConnection>, ConnectionError> {
        let url = self
            .config
            .room_channel_url(room_id, access_token.expose_secret())
            .map_err(|err| ConnectionError::Generic {
                msg: err.to_string(),
            })?;

        info!("Opening channel for room {}…", room_id);

        let stream = match time::timeout(self.config.connect_timeout, connect_async(url.as_str()))
            .await
        {
            Err(_) => return Err(ConnectionError::TimedOut),
            Ok(Err(WsError::Http(response)))
                if matches!(response.status().as_u16(), 401 | 403) =>
            {
                return Err(ConnectionError::InvalidCredentials)
            }
            Ok(Err(err)) => {
                return Err(ConnectionError::Generic {
                    msg: err.to_string(),
                })
            }
            Ok(Ok((stream, _))) => stream,
        };

        Ok(Box::new(Connection::new(
            stream,
            room_id.clone(),
            self.config.clone(),
            event_handler,
        )))
    }
}

#[derive(Debug)]
enum Command {
    Send(String),
    Close,
}

struct Connection {
    room_id: RoomId,
    sender: UnboundedSender<Command>,
    closed_by_client: Arc<AtomicBool>,
    read_handle: JoinHandle<()>,
    heartbeat_handle: JoinHandle<()>,
}

impl Connection {
    fn new(
        stream: Stream,
        room_id: RoomId,
        config: ServerConfig,
        event_handler: ConnectionEventHandler,
    ) -> Self {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let (mut writer, mut reader) = stream.split();
        let closed_by_client = Arc::new(AtomicBool::new(false));
        let heartbeat_interval = config.heartbeat_interval;

        let read_handle = {
            let room_id = room_id.clone();
            let closed_by_client = closed_by_client.clone();

            task::spawn(async move {
                let error = loop {
                    match reader.next().await {
                        Some(Ok(WsMessage::Text(text))) => {
                            match frames::decode(&text, &room_id, &config) {
                                // Awaited in place so that events are handled in the order
                                // they arrived.
                                Ok(Some(event)) => {
                                    (event_handler)(ConnectionEvent::Received(event)).await
                                }
                                Ok(None) => debug!("Ignoring frame in room {}: {}", room_id, text),
                                Err(err) => {
                                    warn!("Failed to parse frame in room {}. {}", room_id, err)
                                }
                            }
                        }
                        Some(Ok(WsMessage::Close(frame))) => {
                            break frame.filter(|frame| frame.code != CloseCode::Normal).map(
                                |frame| ConnectionError::Generic {
                                    msg: format!(
                                        "Channel closed with code {}. {}",
                                        u16::from(frame.code),
                                        frame.reason
                                    ),
                                },
                            );
                        }
                        Some(Ok(_)) => (),
                        Some(Err(err)) => {
                            break Some(ConnectionError::Generic {
                                msg: err.to_string(),
                            })
                        }
                        None => break None,
                    }
                };

                if closed_by_client.load(Ordering::SeqCst) {
                    return;
                }

                info!("Channel for room {} was closed. {:?}", room_id, error);
                (event_handler)(ConnectionEvent::Disconnected { error }).await;
            })
        };

        task::spawn(async move {
            while let Some(command) = rx.recv().await {
                match command {
                    Command::Send(text) => {
                        if let Err(err) = writer.send(WsMessage::Text(text)).await {
                            error!("Cannot write to channel: {}", err);
                            break;
                        }
                    }
                    Command::Close => {
                        if let Err(err) = writer.close().await {
                            debug!("Failed to close channel cleanly. {}", err);
                        }
                        break;
                    }
                }
            }
        });

        let heartbeat_handle = {
            let sender = tx.clone();

            task::spawn(async move {
                let mut interval =
                    time::interval_at(time::Instant::now() + heartbeat_interval, heartbeat_interval);

                loop {
                    interval.tick().await;
                    if sender.send(Command::Send(frames::heartbeat())).is_err() {
                        break;
                    }
                }
            })
        };

        Connection {
            room_id,
            sender: tx,
            closed_by_client,
            read_handle,
            heartbeat_handle,
        }
    }
}

impl RealtimeConnection for Connection {
    fn send_event(&self, event: OutboundEvent) -> Result<()> {
        let text = frames::encode(&event, &self.room_id)?;
        self.sender.send(Command::Send(text))?;
        Ok(())
    }

    fn disconnect(&self) {
        if self.closed_by_client.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("Closing channel for room {}.", self.room_id);

        self.heartbeat_handle.abort();
        self.read_handle.abort();
        if self.sender.send(Command::Close).is_err() {
            debug!("Channel for room {} was already closed.", self.room_id);
        }
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        self.disconnect()
    }
}
