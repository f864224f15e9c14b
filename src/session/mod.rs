//! Room session module
//! 
//! This module contains the session client, the messages it understands and
//! the transport it joins the room through.

pub mod client;
pub mod messages;
pub mod transport;
pub mod websocket;

// Re-export main types
pub use client::SessionClient;
pub use messages::InboundMessage;
pub use transport::{RoomConnection, RoomEvent, RoomTransport};
pub use websocket::{WsConnection, WsTransport};
