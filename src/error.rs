//! Error types for the room session

use thiserror::Error;

/// Errors raised while joining the room or decoding what it sends
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Couldn't connect to room {room}: {reason}")]
    Connection { room: String, reason: String },
    #[error("Malformed {kind} payload: {reason}")]
    MalformedPayload { kind: String, reason: String },
    #[error("Unhandled message kind: {0}")]
    UnhandledKind(String),
}

impl SessionError {
    pub fn connection(room: &str, reason: impl ToString) -> Self {
        SessionError::Connection {
            room: room.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn malformed(kind: &str, reason: impl ToString) -> Self {
        SessionError::MalformedPayload {
            kind: kind.to_string(),
            reason: reason.to_string(),
        }
    }
}

pub type SessionResult<T> = Result<T, SessionError>;
