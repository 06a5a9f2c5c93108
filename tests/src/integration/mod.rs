//! Cross-component binding scenarios.

pub mod lifecycle;
pub mod multi_channel;

#[cfg(test)]
pub(crate) mod fixtures {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, RwLock};

    use wirebind::{
        BinderOptions, Channel, InMemoryChannel, InMemoryStore, Payload, SocketBinder, Store,
    };

    /// Handler that counts invocations.
    pub fn counting(count: &Arc<AtomicUsize>) -> impl Fn(Payload) + Send + Sync + 'static {
        let count = Arc::clone(count);
        move |_| {
            count.fetch_add(1, Ordering::SeqCst);
        }
    }

    /// Handler that records every payload it receives.
    pub fn recording(log: &Arc<RwLock<Vec<Payload>>>) -> impl Fn(Payload) + Send + Sync + 'static {
        let log = Arc::clone(log);
        move |payload| {
            log.write().expect("payload log").push(payload);
        }
    }

    /// Bind one channel to a store with the given options.
    pub fn attach_single(
        channel: &InMemoryChannel,
        store: &Arc<InMemoryStore>,
        options: BinderOptions,
    ) {
        let binder =
            SocketBinder::single(Arc::new(channel.clone()), options).expect("valid options");
        binder.attach(&(Arc::clone(store) as Arc<dyn Store>));
    }

    /// Bind several channels to a store in one pass.
    pub fn attach_all(
        channels: &[InMemoryChannel],
        store: &Arc<InMemoryStore>,
        options: BinderOptions,
    ) {
        let channels: Vec<Arc<dyn Channel>> = channels
            .iter()
            .map(|channel| Arc::new(channel.clone()) as Arc<dyn Channel>)
            .collect();
        let binder = SocketBinder::new(channels, options).expect("valid options");
        binder.attach(&(Arc::clone(store) as Arc<dyn Store>));
    }
}
