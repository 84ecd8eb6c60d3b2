mod support;

use futures::{SinkExt, StreamExt};
use serde_json::Value;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::time::timeout;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

type Socket = WebSocketStream<MaybeTlsStream<TcpStream>>;

async fn connect() -> Socket {
    let (socket, _response) = connect_async(support::server().ws_url())
        .await
        .expect("websocket connect");
    socket
}

// Reads text frames until one matches `pred`, skipping everything else.
async fn read_until(socket: &mut Socket, pred: impl Fn(&Value) -> bool) -> Value {
    timeout(Duration::from_secs(5), async {
        loop {
            let msg = socket
                .next()
                .await
                .expect("socket open")
                .expect("frame ok");
            if !msg.is_text() {
                continue;
            }
            let value: Value = serde_json::from_str(msg.to_text().expect("utf8")).expect("json");
            if pred(&value) {
                return value;
            }
        }
    })
    .await
    .expect("expected message in time")
}

// Waits for the server's close frame, ignoring any updates sent before it.
async fn read_close(socket: &mut Socket) -> Option<u16> {
    timeout(Duration::from_secs(5), async {
        while let Some(Ok(msg)) = socket.next().await {
            if let Message::Close(frame) = msg {
                return frame.map(|f| u16::from(f.code));
            }
        }
        None
    })
    .await
    .expect("close in time")
}

#[tokio::test]
async fn when_client_connects_then_session_is_sent_first() {
    let mut socket = connect().await;

    let msg = socket
        .next()
        .await
        .expect("socket open")
        .expect("frame ok");
    let value: Value = serde_json::from_str(msg.to_text().expect("utf8")).expect("json");

    assert_eq!(value["type"], "Session");
    assert!(value["data"]["status"].is_string());
}

#[tokio::test]
async fn when_start_is_sent_then_session_runs_and_world_updates_follow() {
    let mut socket = connect().await;

    socket
        .send(Message::Text(r#"{"type":"Start"}"#.into()))
        .await
        .expect("send start");

    read_until(&mut socket, |v| {
        v["type"] == "Session" && v["data"]["status"] == "running"
    })
    .await;
    let update = read_until(&mut socket, |v| {
        v["type"] == "WorldUpdate" && !v["data"]["player"].is_null()
    })
    .await;

    assert!(update["data"]["tick"].as_u64().is_some());
    assert!(update["data"]["enemies"].is_array());
}

#[tokio::test]
async fn when_too_many_invalid_messages_arrive_then_socket_is_closed_with_policy() {
    let mut socket = connect().await;

    for _ in 0..11 {
        socket
            .send(Message::Text("not json".into()))
            .await
            .expect("send garbage");
    }

    assert_eq!(read_close(&mut socket).await, Some(1008));
}

#[tokio::test]
async fn when_binary_frame_arrives_then_socket_is_closed_as_unsupported() {
    let mut socket = connect().await;

    socket
        .send(Message::Binary(vec![1u8, 2, 3].into()))
        .await
        .expect("send binary");

    assert_eq!(read_close(&mut socket).await, Some(1003));
}
