//! Inbound room messages
//!
//! Frames arrive as JSON envelopes `{"type": <kind>, "message": <payload>}`.
//! Payloads are validated here so nothing downstream sees missing or negative
//! values.

use serde::Deserialize;
use serde_json::Value;

use crate::error::{SessionError, SessionResult};

/// A message the room pushes to this client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InboundMessage {
    /// Authoritative remaining time; restarts the local countdown
    TimeSync { initial_remaining_seconds: u64 },
    /// Someone joined the room
    ParticipantJoined { joined: bool },
    /// Number of people currently in the room
    ParticipantCount { count: u64 },
    /// Full room state, only logged
    StateChange(Value),
}

#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    message: Value,
}

#[derive(Debug, Deserialize)]
struct TimeSyncPayload {
    #[serde(rename = "initialTime", alias = "initialRemainingSeconds")]
    initial_remaining_seconds: u64,
}

#[derive(Debug, Deserialize)]
struct ParticipantJoinedPayload {
    joined: bool,
}

#[derive(Debug, Deserialize)]
struct ParticipantCountPayload {
    count: u64,
}

impl InboundMessage {
    /// Decode a text frame into a message
    pub fn decode(frame: &str) -> SessionResult<Self> {
        let envelope: Envelope = serde_json::from_str(frame)
            .map_err(|e| SessionError::malformed("envelope", e))?;
        Self::from_parts(&envelope.kind, envelope.message)
    }

    /// Build a message from its kind and raw payload
    pub fn from_parts(kind: &str, payload: Value) -> SessionResult<Self> {
        match kind {
            "sync_time" | "time-sync" => {
                let payload: TimeSyncPayload = parse_payload(kind, payload)?;
                Ok(InboundMessage::TimeSync {
                    initial_remaining_seconds: payload.initial_remaining_seconds,
                })
            }
            "new_participant" | "participant-joined" => {
                let payload: ParticipantJoinedPayload = parse_payload(kind, payload)?;
                Ok(InboundMessage::ParticipantJoined {
                    joined: payload.joined,
                })
            }
            "participant_count" | "participant-count" => {
                let payload: ParticipantCountPayload = parse_payload(kind, payload)?;
                Ok(InboundMessage::ParticipantCount {
                    count: payload.count,
                })
            }
            "state" => Ok(InboundMessage::StateChange(payload)),
            other => Err(SessionError::UnhandledKind(other.to_string())),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            InboundMessage::TimeSync { .. } => "time-sync",
            InboundMessage::ParticipantJoined { .. } => "participant-joined",
            InboundMessage::ParticipantCount { .. } => "participant-count",
            InboundMessage::StateChange(_) => "state",
        }
    }
}

fn parse_payload<T: for<'de> Deserialize<'de>>(kind: &str, payload: Value) -> SessionResult<T> {
    serde_json::from_value(payload).map_err(|e| SessionError::malformed(kind, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_time_sync_in_both_spellings() {
        let legacy = InboundMessage::decode(r#"{"type":"sync_time","message":{"initialTime":900}}"#).unwrap();
        let named = InboundMessage::decode(
            r#"{"type":"time-sync","message":{"initialRemainingSeconds":900}}"#,
        )
        .unwrap();

        let expected = InboundMessage::TimeSync { initial_remaining_seconds: 900 };
        assert_eq!(legacy, expected);
        assert_eq!(named, expected);
    }

    #[test]
    fn decodes_participant_messages() {
        assert_eq!(
            InboundMessage::from_parts("new_participant", json!({"joined": true})).unwrap(),
            InboundMessage::ParticipantJoined { joined: true }
        );
        assert_eq!(
            InboundMessage::from_parts("participant-count", json!({"count": 3})).unwrap(),
            InboundMessage::ParticipantCount { count: 3 }
        );
    }

    #[test]
    fn rejects_missing_and_negative_values() {
        let missing = InboundMessage::from_parts("sync_time", json!({})).unwrap_err();
        assert!(matches!(missing, SessionError::MalformedPayload { .. }));

        let negative = InboundMessage::from_parts("participant_count", json!({"count": -1})).unwrap_err();
        assert!(matches!(negative, SessionError::MalformedPayload { .. }));

        let wrong_type = InboundMessage::from_parts("new_participant", json!({"joined": "yes"})).unwrap_err();
        assert!(matches!(wrong_type, SessionError::MalformedPayload { .. }));
    }

    #[test]
    fn rejects_non_json_frames() {
        let err = InboundMessage::decode("not json").unwrap_err();
        assert!(matches!(err, SessionError::MalformedPayload { ref kind, .. } if kind == "envelope"));
    }

    #[test]
    fn unknown_kinds_are_reported() {
        let err = InboundMessage::decode(r#"{"type":"chat","message":"hi"}"#).unwrap_err();
        assert!(matches!(err, SessionError::UnhandledKind(ref kind) if kind == "chat"));
    }

    #[test]
    fn state_frames_keep_their_payload() {
        let msg = InboundMessage::decode(r#"{"type":"state","message":{"phase":"work"}}"#).unwrap();
        assert_eq!(msg, InboundMessage::StateChange(json!({"phase": "work"})));
        assert_eq!(msg.kind(), "state");
    }
}
