use std::sync::Arc;

use futures::SinkExt;
use tokio::net::TcpListener;
use tokio_tungstenite::{
    accept_async,
    tungstenite::{
        protocol::{frame::coding::CloseCode, CloseFrame},
        Message,
    },
};

use club_pomo::{
    display::ToastEvent,
    state::{AppState, ConnectionState},
    SessionClient, WsTransport,
};

async fn serve_frames(frames: Vec<&'static str>) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        let (stream, _) = listener.accept().await.unwrap();
        let mut ws = accept_async(stream).await.unwrap();
        for frame in frames {
            ws.send(Message::Text(frame.to_string())).await.unwrap();
        }
        let _ = ws
            .close(Some(CloseFrame {
                code: CloseCode::Normal,
                reason: "".into(),
            }))
            .await;
    });

    format!("ws://{}", addr)
}

#[tokio::test]
async fn follows_room_until_server_closes() {
    let endpoint = serve_frames(vec![
        r#"{"type":"sync_time","message":{"initialTime":900}}"#,
        r#"{"type":"participant_count","message":{"count":3}}"#,
        r#"{"type":"new_participant","message":{"joined":true}}"#,
        r#"{"type":"sync_time","message":{"initialTime":"soon"}}"#,
        r#"{"type":"participant_count","message":{"count":1}}"#,
        r#"{"type":"sync_time","message":{"initialTime":300}}"#,
    ])
    .await;

    let state = Arc::new(AppState::new("club_pomo", 300, 1800));
    let mut toasts = state.subscribe_toasts();
    let mut client = SessionClient::new(Arc::clone(&state));

    client.start(&WsTransport::new(endpoint)).await;

    let session = state.get_session_state().unwrap();
    assert_eq!(client.connection_state(), ConnectionState::Disconnected);
    assert_eq!(session.connection, ConnectionState::Disconnected);
    assert_eq!(session.synced_remaining(), Some(300));
    assert_eq!(session.participant_count, Some(1));

    let status = toasts.try_recv().unwrap();
    let joined = toasts.try_recv().unwrap();
    let updated = toasts.try_recv().unwrap();
    assert!(matches!(status, ToastEvent::Show { .. }));
    assert!(matches!(joined, ToastEvent::Show { .. }));
    assert_eq!(updated.id(), status.id());
    assert_eq!(updated.text(), "1 person is studying with you!");
}

#[tokio::test]
async fn failed_join_leaves_countdown_absent() {
    // Bind then drop to get a port nothing listens on
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let state = Arc::new(AppState::new("club_pomo", 300, 1800));
    let mut client = SessionClient::new(Arc::clone(&state));

    client.start(&WsTransport::new(format!("ws://{}", addr))).await;

    let session = state.get_session_state().unwrap();
    assert_eq!(session.connection, ConnectionState::Failed);
    assert_eq!(session.current_remaining(), None);
}
