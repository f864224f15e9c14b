//! Session client owning the single room connection

use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::{
    display::PARTICIPANT_JOINED_TEXT,
    error::{SessionError, SessionResult},
    state::{AppState, ConnectionState},
};
use super::{
    messages::InboundMessage,
    transport::{RoomConnection, RoomEvent, RoomTransport},
};

/// Joins the room once and routes its messages into the shared state
pub struct SessionClient {
    room: String,
    connection: ConnectionState,
    state: Arc<AppState>,
}

impl SessionClient {
    /// Create a client for the room named in the shared state
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            room: state.room.clone(),
            connection: ConnectionState::Unconnected,
            state,
        }
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.connection
    }

    fn transition(&mut self, next: ConnectionState) {
        if !self.connection.can_transition_to(next) {
            warn!("Ignoring connection transition {} -> {}", self.connection, next);
            return;
        }
        self.connection = next;
        if let Err(e) = self.state.set_connection(next) {
            error!("Failed to publish connection state: {}", e);
        }
    }

    /// Join or create the room.
    ///
    /// Only the first call issues a join; later calls return `Ok(None)`.
    pub async fn connect<T: RoomTransport>(&mut self, transport: &T) -> SessionResult<Option<T::Connection>> {
        if !self.connection.can_connect() {
            debug!("Connect skipped, connection already {}", self.connection);
            return Ok(None);
        }

        self.transition(ConnectionState::Connecting);
        info!("Joining room {}", self.room);

        match transport.join_or_create(&self.room).await {
            Ok(connection) => {
                self.transition(ConnectionState::Connected);
                info!("Joined room {}", self.room);
                Ok(Some(connection))
            }
            Err(e) => {
                self.transition(ConnectionState::Failed);
                Err(e)
            }
        }
    }

    /// Route events from a joined room until it is left
    pub async fn run<C: RoomConnection>(&mut self, mut connection: C) {
        loop {
            match connection.next_event().await {
                RoomEvent::Frame(frame) => self.handle_frame(&frame),
                RoomEvent::Left { code } => {
                    match code {
                        Some(code) => info!("You've been disconnected (code {})", code),
                        None => info!("You've been disconnected"),
                    }
                    self.transition(ConnectionState::Disconnected);
                    break;
                }
            }
        }
    }

    /// Connect, then run until the room is left. Failures are logged, never retried.
    pub async fn start<T: RoomTransport>(&mut self, transport: &T) {
        match self.connect(transport).await {
            Ok(Some(connection)) => self.run(connection).await,
            Ok(None) => {}
            Err(e) => error!("{}", e),
        }
    }

    /// Decode a raw frame and dispatch it, dropping anything malformed
    pub fn handle_frame(&mut self, frame: &str) {
        match InboundMessage::decode(frame) {
            Ok(message) => self.handle_message(message),
            Err(SessionError::UnhandledKind(kind)) => debug!("Ignoring message kind {}", kind),
            Err(e) => warn!("Dropping message: {}", e),
        }
    }

    /// Apply one inbound message to the shared state
    pub fn handle_message(&mut self, message: InboundMessage) {
        debug!("Message received from room: {}", message.kind());

        let result = match message {
            InboundMessage::TimeSync { initial_remaining_seconds } => {
                self.state.sync_time(initial_remaining_seconds).map(|_| ())
            }
            InboundMessage::ParticipantJoined { joined } => {
                debug!("Participant joined: {}", joined);
                self.state.notify(PARTICIPANT_JOINED_TEXT).map(|_| ())
            }
            InboundMessage::ParticipantCount { count } => {
                self.state.set_participant_count(count).map(|_| ())
            }
            InboundMessage::StateChange(state) => {
                debug!("New room state: {}", state);
                Ok(())
            }
        };

        if let Err(e) = result {
            error!("Failed to apply room message: {}", e);
        }
    }
}
