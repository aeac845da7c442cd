// campus-connect/campus-chat-client
//
// Copyright: 2026, Campus Connect contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::time::Duration;

use anyhow::Result;
use futures::{FutureExt, SinkExt, StreamExt};
use pretty_assertions::assert_eq;
use secrecy::SecretString;
use serde_json::{json, Value};
use tokio::net::{TcpListener, TcpStream};
use tokio::sync::{mpsc, oneshot};
use tokio::time::timeout;
use tokio_tungstenite::tungstenite::handshake::server::{ErrorResponse, Request, Response};
use tokio_tungstenite::tungstenite::http;
use tokio_tungstenite::tungstenite::protocol::frame::coding::CloseCode;
use tokio_tungstenite::tungstenite::protocol::CloseFrame;
use tokio_tungstenite::tungstenite::Message as WsMessage;
use tokio_tungstenite::{accept_hdr_async, WebSocketStream};

use campus_chat_client::domain::connection::models::{
    ConnectionError, ConnectionEvent, InboundEvent, OutboundEvent,
};
use campus_chat_client::domain::connection::services::{
    ConnectionEventHandler, RealtimeConnector,
};
use campus_chat_client::dtos::MessageId;
use campus_chat_client::infra::websocket::WebSocketConnector;
use campus_chat_client::test::mock_data;
use campus_chat_client::ServerConfig;

const WAIT: Duration = Duration::from_secs(5);

async fn listen() -> Result<(TcpListener, ServerConfig)> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let config = ServerConfig::new(&format!("http://{}", listener.local_addr()?))?;
    Ok((listener, config))
}

/// Accepts one channel and reports the requested path.
async fn accept(listener: &TcpListener) -> Result<(WebSocketStream<TcpStream>, String)> {
    let (stream, _) = listener.accept().await?;
    let (tx, rx) = oneshot::channel();

    let record_path = move |request: &Request, response: Response| -> Result<Response, ErrorResponse> {
        _ = tx.send(request.uri().to_string());
        Ok(response)
    };
    let stream = accept_hdr_async(stream, record_path).await?;

    Ok((stream, rx.await?))
}

fn collect_events() -> (ConnectionEventHandler, mpsc::UnboundedReceiver<ConnectionEvent>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let handler: ConnectionEventHandler = Box::new(move |event| {
        _ = tx.send(event);
        async {}.boxed()
    });
    (handler, rx)
}

fn token() -> SecretString {
    SecretString::new("s3cr3t".to_string())
}

#[tokio::test]
async fn test_exchanges_frames_with_server() -> Result<()> {
    let (listener, config) = listen().await?;
    let connector = WebSocketConnector::new(config);
    let (handler, mut events) = collect_events();

    let room_id = mock_data::room_id();

    let (connection, server) = tokio::join!(
        connector.connect(&room_id, token(), handler),
        accept(&listener)
    );
    let connection = connection?;
    let (mut server, path) = server?;

    assert_eq!(path, "/ws/chat/room-1/?token=s3cr3t");

    server
        .send(WsMessage::Text(
            json!({
                "type": "chat_message",
                "message": {
                    "id": "9d1e",
                    "content": "Are you in the library?",
                    "sender": {"id": 2, "username": "john.doe"},
                    "created_at": "2026-03-02T09:05:00Z",
                    "message_type": "text"
                }
            })
            .to_string(),
        ))
        .await?;
    server
        .send(WsMessage::Text(r#"{"type": "message_delivered"}"#.to_string()))
        .await?;
    server
        .send(WsMessage::Text(
            r#"{"type": "typing_indicator", "user": "john.doe", "is_typing": true}"#.to_string(),
        ))
        .await?;

    let Some(ConnectionEvent::Received(InboundEvent::MessageReceived(message))) =
        timeout(WAIT, events.recv()).await?
    else {
        panic!("Expected a message");
    };
    assert_eq!(message.id, MessageId::from("9d1e"));
    assert_eq!(message.room_id, mock_data::room_id());
    assert_eq!(message.body, "Are you in the library?");

    // Unknown frames are skipped.
    assert_eq!(
        timeout(WAIT, events.recv()).await?,
        Some(ConnectionEvent::Received(InboundEvent::UserTyping {
            user: "john.doe".to_string(),
            is_typing: true
        }))
    );

    connection.send_event(OutboundEvent::TypingStarted)?;

    let Some(Ok(WsMessage::Text(text))) = timeout(WAIT, server.next()).await? else {
        panic!("Expected a text frame");
    };
    assert_eq!(
        serde_json::from_str::<Value>(&text)?,
        json!({"type": "typing_start", "roomId": "room-1"})
    );

    Ok(())
}

#[tokio::test]
async fn test_reports_closed_channel() -> Result<()> {
    let (listener, config) = listen().await?;
    let connector = WebSocketConnector::new(config);
    let (handler, mut events) = collect_events();

    let room_id = mock_data::room_id();

    let (connection, server) = tokio::join!(
        connector.connect(&room_id, token(), handler),
        accept(&listener)
    );
    let _connection = connection?;
    let (mut server, _) = server?;

    server
        .close(Some(CloseFrame {
            code: CloseCode::Library(4001),
            reason: "Session expired".into(),
        }))
        .await?;

    let Some(ConnectionEvent::Disconnected { error: Some(error) }) =
        timeout(WAIT, events.recv()).await?
    else {
        panic!("Expected the channel to be closed with an error");
    };
    assert!(matches!(error, ConnectionError::Generic { .. }));

    Ok(())
}

#[tokio::test]
async fn test_normal_close_carries_no_error() -> Result<()> {
    let (listener, config) = listen().await?;
    let connector = WebSocketConnector::new(config);
    let (handler, mut events) = collect_events();

    let room_id = mock_data::room_id();

    let (connection, server) = tokio::join!(
        connector.connect(&room_id, token(), handler),
        accept(&listener)
    );
    let _connection = connection?;
    let (mut server, _) = server?;

    server.close(None).await?;

    assert_eq!(
        timeout(WAIT, events.recv()).await?,
        Some(ConnectionEvent::Disconnected { error: None })
    );

    Ok(())
}

#[tokio::test]
async fn test_client_disconnect_is_not_reported() -> Result<()> {
    let (listener, config) = listen().await?;
    let connector = WebSocketConnector::new(config);
    let (handler, mut events) = collect_events();

    let room_id = mock_data::room_id();

    let (connection, server) = tokio::join!(
        connector.connect(&room_id, token(), handler),
        accept(&listener)
    );
    let connection = connection?;
    let (mut server, _) = server?;

    connection.disconnect();

    // The server sees the close frame or the end of the stream.
    let frame = timeout(WAIT, server.next()).await?;
    assert!(matches!(frame, Some(Ok(WsMessage::Close(_))) | None));

    assert!(timeout(Duration::from_millis(200), events.recv())
        .await
        .is_err());

    Ok(())
}

#[tokio::test]
async fn test_rejected_handshake_maps_to_invalid_credentials() -> Result<()> {
    let (listener, config) = listen().await?;
    let connector = WebSocketConnector::new(config);
    let (handler, _events) = collect_events();

    let server = async {
        let (stream, _) = listener.accept().await?;
        let reject = |_: &Request, _: Response| -> Result<Response, ErrorResponse> {
            Err(http::Response::builder()
                .status(http::StatusCode::UNAUTHORIZED)
                .body(None)
                .expect("valid response"))
        };
        let result = accept_hdr_async(stream, reject).await;
        assert!(result.is_err());
        anyhow::Ok(())
    };

    let room_id = mock_data::room_id();

    let (result, server) = tokio::join!(
        connector.connect(&room_id, token(), handler),
        server
    );
    server?;

    assert_eq!(result.err(), Some(ConnectionError::InvalidCredentials));

    Ok(())
}
