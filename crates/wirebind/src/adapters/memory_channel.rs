//! # In-Memory Channel
//!
//! Reference [`Channel`] implementation. Inbound packets are injected with
//! [`InMemoryChannel::deliver`]; outbound traffic is observable both as a
//! recorded frame log and as a broadcast stream, so a test or an in-process
//! peer can watch the wire.
//!
//! Reserved transport events (`connect`, `disconnect`, ...) reach named
//! subscriptions only — the interception hook never sees them, mirroring how
//! a real transport raises its own lifecycle events outside the packet path.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;
use tracing::{debug, warn};

use crate::domain::RESERVED_WIRE_EVENTS;
use crate::ports::{AnyEventHandler, Channel, EventHandler, LifecycleFn, Payload};

/// Outbound frames buffered per wire observer before the oldest are dropped.
pub const DEFAULT_WIRE_CAPACITY: usize = 1000;

/// One outbound message as seen on the wire.
#[derive(Debug, Clone)]
pub struct WireFrame {
    pub event: String,
    pub payload: Payload,
}

struct ChannelState {
    /// Namespace identifier; empty means root.
    namespace: String,

    /// Named event subscriptions.
    handlers: RwLock<HashMap<String, Vec<EventHandler>>>,

    /// Low-level interception hooks (see every non-reserved inbound packet).
    any_handlers: RwLock<Vec<AnyEventHandler>>,

    /// Connection flag flipped by the lifecycle methods.
    connected: AtomicBool,

    /// Outbound wire as a broadcast stream.
    outbound: broadcast::Sender<WireFrame>,

    /// Recorded outbound frames, oldest first.
    emitted: RwLock<Vec<WireFrame>>,
}

impl ChannelState {
    /// Invoke every named handler registered for `event`.
    fn fire(&self, event: &str, payload: Payload) {
        let snapshot = {
            let Ok(handlers) = self.handlers.read() else {
                return;
            };
            handlers.get(event).cloned()
        };
        let Some(list) = snapshot else { return };
        for handler in &list {
            handler(payload.clone());
        }
    }

    fn connect(&self) {
        self.connected.store(true, Ordering::Relaxed);
        debug!(namespace = %self.namespace, "channel connected");
        self.fire("connect", Payload::Null);
    }

    fn disconnect(&self) {
        self.connected.store(false, Ordering::Relaxed);
        debug!(namespace = %self.namespace, "channel disconnected");
        self.fire("disconnect", Payload::Null);
    }
}

/// In-memory channel endpoint. Cheap to clone; clones share one endpoint.
#[derive(Clone)]
pub struct InMemoryChannel {
    state: Arc<ChannelState>,
}

impl InMemoryChannel {
    /// Create a root-namespace channel.
    #[must_use]
    pub fn new() -> Self {
        Self::with_namespace("")
    }

    /// Create a channel under the given namespace.
    #[must_use]
    pub fn with_namespace(namespace: &str) -> Self {
        let (outbound, _) = broadcast::channel(DEFAULT_WIRE_CAPACITY);
        Self {
            state: Arc::new(ChannelState {
                namespace: namespace.to_string(),
                handlers: RwLock::new(HashMap::new()),
                any_handlers: RwLock::new(Vec::new()),
                connected: AtomicBool::new(false),
                outbound,
                emitted: RwLock::new(Vec::new()),
            }),
        }
    }

    /// Subscribe to the outbound wire.
    #[must_use]
    pub fn outbound(&self) -> broadcast::Receiver<WireFrame> {
        self.state.outbound.subscribe()
    }

    /// Snapshot of every frame emitted so far, oldest first.
    #[must_use]
    pub fn emitted(&self) -> Vec<WireFrame> {
        self.state
            .emitted
            .read()
            .map(|frames| frames.clone())
            .unwrap_or_default()
    }

    /// Whether the channel is currently connected.
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state.connected.load(Ordering::Relaxed)
    }

    /// Connect and raise the transport's `connect` event.
    pub fn connect(&self) {
        self.state.connect();
    }

    /// Disconnect and raise the transport's `disconnect` event.
    pub fn disconnect(&self) {
        self.state.disconnect();
    }

    /// Inject an inbound packet as if it arrived over the wire.
    ///
    /// Non-reserved events fire their named subscriptions, then every
    /// interception hook. Reserved transport events fire named
    /// subscriptions only.
    pub fn deliver(&self, event: &str, payload: Payload) {
        if !RESERVED_WIRE_EVENTS.contains(&event) {
            self.state.fire(event, payload.clone());

            let snapshot = {
                let Ok(hooks) = self.state.any_handlers.read() else {
                    return;
                };
                hooks.clone()
            };
            for hook in &snapshot {
                hook(event, payload.clone());
            }
        } else {
            self.state.fire(event, payload);
        }
    }
}

impl Default for InMemoryChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl Channel for InMemoryChannel {
    fn namespace(&self) -> &str {
        &self.state.namespace
    }

    fn on(&self, event: &str, handler: EventHandler) {
        let Ok(mut handlers) = self.state.handlers.write() else {
            return;
        };
        handlers.entry(event.to_string()).or_default().push(handler);
    }

    fn emit(&self, event: &str, payload: Payload) {
        let frame = WireFrame {
            event: event.to_string(),
            payload,
        };
        if let Ok(mut emitted) = self.state.emitted.write() {
            emitted.push(frame.clone());
        }
        match self.state.outbound.send(frame) {
            Ok(observers) => {
                debug!(namespace = %self.state.namespace, event, observers, "frame emitted");
            }
            Err(_) => {
                // No observer on the wire; the frame log still has it.
                warn!(namespace = %self.state.namespace, event, "frame emitted with no wire observer");
            }
        }
    }

    fn on_any(&self, handler: AnyEventHandler) {
        let Ok(mut hooks) = self.state.any_handlers.write() else {
            return;
        };
        hooks.push(handler);
    }

    fn lifecycle(&self, method: &str) -> Option<LifecycleFn> {
        match method {
            "connect" => {
                let state = Arc::clone(&self.state);
                Some(Arc::new(move || state.connect()))
            }
            "disconnect" => {
                let state = Arc::clone(&self.state);
                Some(Arc::new(move || state.disconnect()))
            }
            _ => None,
        }
    }
}
