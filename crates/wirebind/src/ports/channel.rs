use std::sync::Arc;

/// Message payload carried over the wire and into store handlers.
pub type Payload = serde_json::Value;

/// Handler for a single named event subscription.
pub type EventHandler = Arc<dyn Fn(Payload) + Send + Sync>;

/// Handler for the low-level interception hook; receives every inbound
/// `(event, payload)` pair regardless of named subscriptions.
pub type AnyEventHandler = Arc<dyn Fn(&str, Payload) + Send + Sync>;

/// A zero-argument connection-lifecycle capability obtained by name probe.
pub type LifecycleFn = Arc<dyn Fn() + Send + Sync>;

/// A bidirectional named-message endpoint.
///
/// The transport itself (framing, reconnection, delivery) is entirely the
/// implementor's concern; the binder only subscribes handlers, emits
/// messages, and probes for optional lifecycle capabilities.
pub trait Channel: Send + Sync {
    /// Namespace identifier. Empty string or `"/"` means the root namespace.
    fn namespace(&self) -> &str;

    /// Subscribe a handler to a named inbound event. Multiple handlers may
    /// be registered under one name; all of them fire per delivery.
    fn on(&self, event: &str, handler: EventHandler);

    /// Emit a named message over the wire.
    fn emit(&self, event: &str, payload: Payload);

    /// Install a low-level interception hook that observes every inbound
    /// message, including names with no subscription.
    fn on_any(&self, handler: AnyEventHandler);

    /// Probe for an optional named lifecycle method (`"connect"`,
    /// `"disconnect"`, ...). `None` means the channel does not expose the
    /// capability; callers treat absence as a defined non-error branch.
    fn lifecycle(&self, method: &str) -> Option<LifecycleFn>;
}
