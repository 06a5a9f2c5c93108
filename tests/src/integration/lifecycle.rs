//! # Lifecycle Wiring
//!
//! Reserved actions driving channel connect/disconnect, the bind-time
//! capability probe, and the handler-then-side-effect ordering.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, RwLock};

    use serde_json::json;

    use wirebind::{
        AnyEventHandler, BinderOptions, Channel, EventHandler, InMemoryChannel, InMemoryStore,
        LifecycleFn, ModuleDef, Payload, SocketBinder, Store,
    };

    use crate::integration::fixtures::{attach_single, counting};

    /// A channel with subscriptions and emission but no lifecycle
    /// capabilities at all.
    #[derive(Default)]
    struct BareChannel {
        handlers: RwLock<HashMap<String, Vec<EventHandler>>>,
        hooks: RwLock<Vec<AnyEventHandler>>,
        emitted: RwLock<Vec<(String, Payload)>>,
    }

    impl Channel for BareChannel {
        fn namespace(&self) -> &str {
            ""
        }

        fn on(&self, event: &str, handler: EventHandler) {
            self.handlers
                .write()
                .expect("handlers")
                .entry(event.to_string())
                .or_default()
                .push(handler);
        }

        fn emit(&self, event: &str, payload: Payload) {
            self.emitted
                .write()
                .expect("emitted")
                .push((event.to_string(), payload));
        }

        fn on_any(&self, handler: AnyEventHandler) {
            self.hooks.write().expect("hooks").push(handler);
        }

        fn lifecycle(&self, _method: &str) -> Option<LifecycleFn> {
            None
        }
    }

    /// Dispatching a lifecycle action connects the channel; the reserved
    /// `connect` event then reaches the listening mutation.
    #[test]
    fn connect_action_connects_channel_and_fires_listener() {
        let channel = InMemoryChannel::new();
        let store = Arc::new(InMemoryStore::new());
        let connects = Arc::new(AtomicUsize::new(0));
        store.module(
            "session",
            ModuleDef::new(true)
                .mutation("socketOnConnect", counting(&connects))
                .action("socketConnect", |_| {}),
        );

        attach_single(&channel, &store, BinderOptions::default());

        store.dispatch("session/socketConnect", Payload::Null);
        assert!(channel.is_connected());
        assert_eq!(connects.load(Ordering::SeqCst), 1);

        store.dispatch("session/socketConnect", Payload::Null);
        assert_eq!(connects.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn disconnect_action_disconnects_channel() {
        let channel = InMemoryChannel::new();
        let store = Arc::new(InMemoryStore::new());
        let disconnects = Arc::new(AtomicUsize::new(0));
        store.module(
            "session",
            ModuleDef::new(true)
                .mutation("socketOnDisconnect", counting(&disconnects))
                .action("socketConnect", |_| {})
                .action("socketDisconnect", |_| {}),
        );

        attach_single(&channel, &store, BinderOptions::default());

        store.dispatch("session/socketConnect", Payload::Null);
        store.dispatch("session/socketDisconnect", Payload::Null);
        assert!(!channel.is_connected());
        assert_eq!(disconnects.load(Ordering::SeqCst), 1);
    }

    /// The original handlers run before the channel side effect.
    #[test]
    fn handlers_run_before_the_lifecycle_call() {
        let channel = InMemoryChannel::new();
        let store = Arc::new(InMemoryStore::new());
        let order = Arc::new(RwLock::new(Vec::new()));

        let order_handler = Arc::clone(&order);
        let order_listener = Arc::clone(&order);
        store.module(
            "session",
            ModuleDef::new(false)
                .mutation("socketOnConnect", move |_| {
                    order_listener.write().expect("order").push("connect-event");
                })
                .action("socketConnect", move |_| {
                    order_handler.write().expect("order").push("handler");
                }),
        );

        attach_single(&channel, &store, BinderOptions::default());

        store.dispatch("socketConnect", Payload::Null);
        assert_eq!(
            order.read().expect("order").as_slice(),
            ["handler", "connect-event"]
        );
    }

    /// A lifecycle action bound to a channel without the method: the
    /// handlers run, the channel is never called. Silence, not an error.
    #[test]
    fn missing_lifecycle_method_is_skipped_silently() {
        let channel = Arc::new(BareChannel::default());
        let store = Arc::new(InMemoryStore::new());
        let handled = Arc::new(AtomicUsize::new(0));
        store.module(
            "session",
            ModuleDef::new(false).action("socketConnect", counting(&handled)),
        );

        let binder = SocketBinder::single(
            Arc::clone(&channel) as Arc<dyn Channel>,
            BinderOptions::default(),
        )
        .expect("valid options");
        binder.attach(&(Arc::clone(&store) as Arc<dyn Store>));

        store.dispatch("socketConnect", json!(null));
        assert_eq!(handled.load(Ordering::SeqCst), 1);
        assert!(channel.emitted.read().expect("emitted").is_empty());
    }

    /// Caller-supplied lifecycle names extend the built-in pair; the channel
    /// method is derived from the name's stem remainder.
    #[test]
    fn extended_lifecycle_action_probes_for_custom_method() {
        let channel = InMemoryChannel::new();
        let store = Arc::new(InMemoryStore::new());
        let handled = Arc::new(AtomicUsize::new(0));
        store.module(
            "session",
            ModuleDef::new(false).action("socketReconnect", counting(&handled)),
        );

        let options = BinderOptions {
            lifecycle_actions: vec!["socketReconnect".to_string()],
            ..Default::default()
        };
        attach_single(&channel, &store, options);

        // InMemoryChannel exposes no "reconnect" method; the action still
        // dispatches normally.
        store.dispatch("socketReconnect", Payload::Null);
        assert_eq!(handled.load(Ordering::SeqCst), 1);
        assert!(!channel.is_connected());
    }

    /// Namespaced lifecycle actions drive the namespaced channel only.
    #[test]
    fn namespaced_lifecycle_targets_the_namespaced_channel() {
        let root = InMemoryChannel::new();
        let news = InMemoryChannel::with_namespace("news");
        let store = Arc::new(InMemoryStore::new());
        store.module(
            "session",
            ModuleDef::new(true)
                .action("socketConnect", |_| {})
                .action("newsSocketConnect", |_| {}),
        );

        let binder = SocketBinder::new(
            vec![
                Arc::new(root.clone()) as Arc<dyn Channel>,
                Arc::new(news.clone()) as Arc<dyn Channel>,
            ],
            BinderOptions::default(),
        )
        .expect("valid options");
        binder.attach(&(Arc::clone(&store) as Arc<dyn Store>));

        store.dispatch("session/newsSocketConnect", Payload::Null);
        assert!(news.is_connected());
        assert!(!root.is_connected());

        store.dispatch("session/socketConnect", Payload::Null);
        assert!(root.is_connected());
    }
}
