//! WebSocket room transport

use async_trait::async_trait;
use futures::stream::StreamExt;
use tokio::net::TcpStream;
use tokio_tungstenite::{connect_async, tungstenite::Message, MaybeTlsStream, WebSocketStream};
use tracing::{debug, info, warn};

use crate::error::{SessionError, SessionResult};
use super::transport::{RoomConnection, RoomEvent, RoomTransport};

/// Joins rooms by opening a WebSocket at `{endpoint}/{room}`
#[derive(Debug, Clone)]
pub struct WsTransport {
    endpoint: String,
}

impl WsTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// URL used to join `room`
    pub fn room_url(&self, room: &str) -> String {
        format!("{}/{}", self.endpoint.trim_end_matches('/'), room)
    }
}

#[async_trait]
impl RoomTransport for WsTransport {
    type Connection = WsConnection;

    async fn join_or_create(&self, room: &str) -> SessionResult<WsConnection> {
        let url = self.room_url(room);
        debug!("Opening WebSocket to {}", url);

        let (stream, _) = connect_async(url.as_str())
            .await
            .map_err(|e| SessionError::connection(room, e))?;

        info!("WebSocket connected to {}", url);
        Ok(WsConnection { stream })
    }
}

/// An open WebSocket room connection
pub struct WsConnection {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
}

#[async_trait]
impl RoomConnection for WsConnection {
    async fn next_event(&mut self) -> RoomEvent {
        loop {
            match self.stream.next().await {
                Some(Ok(Message::Text(text))) => return RoomEvent::Frame(text.to_string()),
                Some(Ok(Message::Binary(data))) => match String::from_utf8(data.to_vec()) {
                    Ok(text) => return RoomEvent::Frame(text),
                    Err(e) => warn!("Dropping non UTF-8 binary frame: {}", e),
                },
                Some(Ok(Message::Close(frame))) => {
                    return RoomEvent::Left {
                        code: frame.map(|f| u16::from(f.code)),
                    };
                }
                // Ping, pong and raw frames carry no room data
                Some(Ok(_)) => continue,
                Some(Err(e)) => {
                    warn!("WebSocket read failed: {}", e);
                    return RoomEvent::Left { code: None };
                }
                None => return RoomEvent::Left { code: None },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn room_url_joins_endpoint_and_room() {
        assert_eq!(
            WsTransport::new("ws://localhost:2567").room_url("club_pomo"),
            "ws://localhost:2567/club_pomo"
        );
        assert_eq!(
            WsTransport::new("ws://localhost:2567/").room_url("club_pomo"),
            "ws://localhost:2567/club_pomo"
        );
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_a_connection_error() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let transport = WsTransport::new(format!("ws://{}", addr));
        let err = transport.join_or_create("club_pomo").await.err().unwrap();
        assert!(matches!(err, SessionError::Connection { ref room, .. } if room == "club_pomo"));
    }
}
