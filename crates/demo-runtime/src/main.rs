//! # WireBind Demo Runtime
//!
//! A self-contained tour of the binder: one store, two in-memory channels
//! (root and a `news` namespace), and a pair of in-process echo peers
//! standing in for a server.
//!
//! ## Wiring
//!
//! ```text
//! [demo store] ──socketEmit_sendMessage──→ [root channel] ──frame──→ [echo peer]
//!       ↑                                        │                        │
//!       └────────socketOn_message (commit)───────┴──────"message"─────────┘
//! ```
//!
//! The store's member names follow the demo convention (`socketOn_` /
//! `socketEmit_` prefixes, camelCase wire names); the `news`-prefixed
//! members bind to the namespaced channel instead of the root one.
//!
//! Set `WIREBIND_CHANNEL_FORMAT` to override the wire-name format
//! (`CamelCase`, `PascalCase`, `UppSnakeCase`, `LowSnakeCase`).

mod state;

use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use wirebind::{
    BinderOptions, Channel, InMemoryChannel, Payload, SocketBinder, Store,
};

use crate::state::{build_store, DemoState, SharedState};

/// Load binder options, with an environment override for the wire format.
fn load_options() -> BinderOptions {
    let mut options = BinderOptions {
        listener_prefix: "socketOn_".to_string(),
        emitter_prefix: "socketEmit_".to_string(),
        channel_format: "CamelCase".to_string(),
        lifecycle_actions: Vec::new(),
    };

    if let Ok(format) = std::env::var("WIREBIND_CHANNEL_FORMAT") {
        options.channel_format = format;
    }

    options
}

/// Stand-in for a remote peer: watch the outbound wire and answer `request`
/// frames with an inbound `response` carrying the same payload.
fn spawn_echo_peer(channel: InMemoryChannel, request: &'static str, response: &'static str) {
    let mut wire = channel.outbound();
    tokio::spawn(async move {
        while let Ok(frame) = wire.recv().await {
            if frame.event == request {
                info!(
                    namespace = %channel.namespace(),
                    event = %frame.event,
                    "echo peer answering"
                );
                channel.deliver(response, frame.payload);
            }
        }
    });
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::DEBUG)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let options = load_options();
    info!(format = %options.channel_format, "starting demo runtime");

    // Store and channels are built by the host; the binder only wires them.
    let state: SharedState = Arc::new(std::sync::RwLock::new(DemoState::default()));
    let store = build_store(&state);
    let root = InMemoryChannel::new();
    let news = InMemoryChannel::with_namespace("news");

    let binder = SocketBinder::new(
        vec![Arc::new(root.clone()), Arc::new(news.clone())],
        options,
    )
    .context("resolving binder options")?;
    binder.attach(&(Arc::clone(&store) as Arc<dyn Store>));

    spawn_echo_peer(root.clone(), "sendMessage", "message");
    spawn_echo_peer(news.clone(), "sendStory", "headline");

    // Scripted session: connect both channels, emit through the store,
    // receive the echoes, take a server push, then disconnect.
    store.dispatch("session/socketConnect", Payload::Null);
    store.dispatch("session/newsSocketConnect", Payload::Null);

    store.dispatch(
        "feed/socketEmit_sendMessage",
        json!({ "text": "hello from the demo" }),
    );
    store.dispatch(
        "feed/newsSocketEmit_sendStory",
        json!({ "title": "wirebind demo ships" }),
    );
    root.deliver("deviceJoined", json!({ "id": "laptop-1" }));

    // Give the echo peers a moment to answer.
    tokio::time::sleep(Duration::from_millis(100)).await;

    store.dispatch("session/socketDisconnect", Payload::Null);
    store.dispatch("session/newsSocketDisconnect", Payload::Null);

    let state = state
        .read()
        .map_err(|_| anyhow::anyhow!("demo state lock poisoned"))?;
    info!(
        messages = state.messages.len(),
        headlines = state.headlines.len(),
        devices = state.devices.len(),
        outgoing = state.outgoing.len(),
        connected = state.connected,
        news_connected = state.news_connected,
        "demo finished"
    );

    Ok(())
}
