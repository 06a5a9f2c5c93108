//! # Multi-Channel Binding
//!
//! Several channels sharing one store: namespace isolation, and the
//! intentional fan-out when one member matches more than one channel.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use serde_json::json;

    use wirebind::{BinderOptions, InMemoryChannel, InMemoryStore, ModuleDef, Payload, Store};

    use crate::integration::fixtures::{attach_all, counting};

    /// Root and namespaced members route to their own channels only,
    /// mirroring one store serving two transports.
    #[test]
    fn namespaces_isolate_channels() {
        let root = InMemoryChannel::new();
        let news = InMemoryChannel::with_namespace("news");
        let store = Arc::new(InMemoryStore::new());
        let root_commits = Arc::new(AtomicUsize::new(0));
        let news_commits = Arc::new(AtomicUsize::new(0));
        store.module(
            "feed",
            ModuleDef::new(true)
                .mutation("socketOnMessage", counting(&root_commits))
                .mutation("newsSocketOnMessage", counting(&news_commits)),
        );

        attach_all(
            &[root.clone(), news.clone()],
            &store,
            BinderOptions::default(),
        );

        root.deliver("MESSAGE", json!("to root"));
        assert_eq!(root_commits.load(Ordering::SeqCst), 1);
        assert_eq!(news_commits.load(Ordering::SeqCst), 0);

        news.deliver("MESSAGE", json!("to news"));
        assert_eq!(root_commits.load(Ordering::SeqCst), 1);
        assert_eq!(news_commits.load(Ordering::SeqCst), 1);
    }

    /// Two channels resolving to the same namespace: a matching emitter is
    /// bound once per channel, so one dispatch reaches both wires while the
    /// store handler still runs once.
    #[test]
    fn shared_member_fans_out_across_channels() {
        let primary = InMemoryChannel::new();
        let standby = InMemoryChannel::new();
        let store = Arc::new(InMemoryStore::new());
        let handled = Arc::new(AtomicUsize::new(0));
        store.module(
            "feed",
            ModuleDef::new(false).action("socketEmitBroadcast", counting(&handled)),
        );

        attach_all(
            &[primary.clone(), standby.clone()],
            &store,
            BinderOptions::default(),
        );

        store.dispatch("socketEmitBroadcast", json!({"seq": 1}));

        assert_eq!(primary.emitted().len(), 1);
        assert_eq!(standby.emitted().len(), 1);
        assert_eq!(primary.emitted()[0].event, "BROADCAST");
        assert_eq!(handled.load(Ordering::SeqCst), 1);
    }

    /// Inbound listeners fan in the same way: each channel delivery commits
    /// through its own subscription.
    #[test]
    fn shared_listener_commits_once_per_channel_delivery() {
        let primary = InMemoryChannel::new();
        let standby = InMemoryChannel::new();
        let store = Arc::new(InMemoryStore::new());
        let commits = Arc::new(AtomicUsize::new(0));
        store.module(
            "feed",
            ModuleDef::new(false).mutation("socketOnMessage", counting(&commits)),
        );

        attach_all(
            &[primary.clone(), standby.clone()],
            &store,
            BinderOptions::default(),
        );

        primary.deliver("MESSAGE", Payload::Null);
        standby.deliver("MESSAGE", Payload::Null);
        assert_eq!(commits.load(Ordering::SeqCst), 2);
    }

    /// Channels are bound in the order given; emitter decoration order
    /// follows, so the last-bound channel's emit runs first.
    #[test]
    fn binding_order_is_respected_for_decorations() {
        let first = InMemoryChannel::new();
        let second = InMemoryChannel::new();
        let store = Arc::new(InMemoryStore::new());
        store.module(
            "feed",
            ModuleDef::new(false).action("socketEmitPulse", |_| {}),
        );

        attach_all(
            &[first.clone(), second.clone()],
            &store,
            BinderOptions::default(),
        );

        store.dispatch("socketEmitPulse", json!(1));
        assert_eq!(first.emitted().len(), 1);
        assert_eq!(second.emitted().len(), 1);
    }
}
