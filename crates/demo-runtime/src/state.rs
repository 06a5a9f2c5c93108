//! Demo store assembly: three modules tracking connection state, a message
//! feed, and joined devices, all writing into one shared [`DemoState`].

use std::sync::{Arc, RwLock};

use tracing::info;

use wirebind::{InMemoryStore, ModuleDef, Payload};

/// Everything the demo store's handlers write into.
#[derive(Debug, Default)]
pub struct DemoState {
    pub connected: bool,
    pub news_connected: bool,
    pub messages: Vec<Payload>,
    pub headlines: Vec<Payload>,
    pub devices: Vec<Payload>,
    /// `(event, payload)` log of everything the emit actions sent.
    pub outgoing: Vec<(String, Payload)>,
}

pub type SharedState = Arc<RwLock<DemoState>>;

/// Build the demo store. Member names follow the demo convention:
/// `socketOn_` listeners, `socketEmit_` emitters, camelCase wire names, and
/// a `news`-prefixed variant of each member for the namespaced channel.
pub fn build_store(state: &SharedState) -> Arc<InMemoryStore> {
    let store = Arc::new(InMemoryStore::new());

    store.module("session", session_module(state));
    store.module("feed", feed_module(state));
    store.module("devices", devices_module(state));

    store
}

fn session_module(state: &SharedState) -> ModuleDef {
    let on_connect = with_state(state, |s, _| {
        s.connected = true;
        info!("session: socket connected");
    });
    let on_disconnect = with_state(state, |s, _| {
        s.connected = false;
        info!("session: socket disconnected");
    });
    let on_news_connect = with_state(state, |s, _| {
        s.news_connected = true;
        info!("session: news socket connected");
    });
    let on_news_disconnect = with_state(state, |s, _| {
        s.news_connected = false;
        info!("session: news socket disconnected");
    });

    ModuleDef::new(true)
        .mutation("socketOn_connect", on_connect)
        .mutation("socketOn_disconnect", on_disconnect)
        .mutation("newsSocketOn_connect", on_news_connect)
        .mutation("newsSocketOn_disconnect", on_news_disconnect)
        .action("socketConnect", |_| {})
        .action("socketDisconnect", |_| {})
        .action("newsSocketConnect", |_| {})
        .action("newsSocketDisconnect", |_| {})
}

fn feed_module(state: &SharedState) -> ModuleDef {
    let on_message = with_state(state, |s, payload| {
        info!(%payload, "feed: message received");
        s.messages.push(payload);
    });
    let on_headline = with_state(state, |s, payload| {
        info!(%payload, "feed: headline received");
        s.headlines.push(payload);
    });
    let emit_message = with_state(state, |s, payload| {
        s.outgoing.push(("sendMessage".to_string(), payload));
    });
    let emit_story = with_state(state, |s, payload| {
        s.outgoing.push(("sendStory".to_string(), payload));
    });

    ModuleDef::new(true)
        .mutation("socketOn_message", on_message)
        .mutation("newsSocketOn_headline", on_headline)
        .action("socketEmit_sendMessage", emit_message)
        .action("newsSocketEmit_sendStory", emit_story)
}

fn devices_module(state: &SharedState) -> ModuleDef {
    let on_joined = with_state(state, |s, payload| {
        info!(%payload, "devices: device joined");
        s.devices.push(payload);
    });
    let emit_join = with_state(state, |s, payload| {
        s.outgoing.push(("joinSession".to_string(), payload));
    });

    ModuleDef::new(true)
        .mutation("socketOn_deviceJoined", on_joined)
        .action("socketEmit_joinSession", emit_join)
}

/// Wrap a handler body with the shared-state lock.
fn with_state(
    state: &SharedState,
    body: impl Fn(&mut DemoState, Payload) + Send + Sync + 'static,
) -> impl Fn(Payload) + Send + Sync + 'static {
    let state = Arc::clone(state);
    move |payload| {
        if let Ok(mut state) = state.write() {
            body(&mut state, payload);
        }
    }
}
