//! Transport seam between the session client and the real-time server

use async_trait::async_trait;

use crate::error::SessionResult;

/// Event delivered by a joined room
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoomEvent {
    /// Raw text frame carrying a message envelope
    Frame(String),
    /// The transport left the room; no further events follow
    Left { code: Option<u16> },
}

/// Something that can join or create a named room
#[async_trait]
pub trait RoomTransport: Send + Sync {
    type Connection: RoomConnection;

    async fn join_or_create(&self, room: &str) -> SessionResult<Self::Connection>;
}

/// A joined room delivering events in order
#[async_trait]
pub trait RoomConnection: Send {
    /// Wait for the next event. Returns `Left` once the room is gone.
    async fn next_event(&mut self) -> RoomEvent;
}
