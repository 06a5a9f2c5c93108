//! # Channel Binder
//!
//! The per-channel wiring pass. Runs exactly once per channel: enumerates
//! the store's member names (a snapshot — members registered later are not
//! picked up), classifies each against the listener prefix, emitter prefix,
//! and reserved lifecycle names, and installs the matching subscriptions and
//! decorations.
//!
//! Binding is intentionally not idempotent: binding the same store to the
//! same channel twice installs duplicate subscriptions. De-duplication is a
//! caller responsibility.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::domain::config::reserved_wire_event;
use crate::domain::{channel_suffix, member_matches, normalize, BindingConfig, LIFECYCLE_STEM};
use crate::ports::{ActionFn, Channel, Payload, Store};

/// Channel-specific view assembled for one binding pass and discarded
/// afterwards. Nothing survives the pass except the installed subscriptions
/// and action decorations.
struct ChannelContext {
    /// Normalized channel namespace, empty for the root namespace.
    namespace_prefix: String,
    /// Normalized namespaces of the store's namespaced modules.
    module_namespaces: Vec<String>,
    /// Snapshot of fully-qualified mutation names.
    mutations: Vec<String>,
    /// Snapshot of fully-qualified action names.
    actions: Vec<String>,
}

impl ChannelContext {
    fn capture(channel: &dyn Channel, store: &dyn Store) -> Self {
        let namespace_prefix = normalize(channel.namespace().trim_start_matches('/'));
        Self {
            namespace_prefix,
            module_namespaces: store
                .module_namespaces()
                .iter()
                .map(|ns| normalize(ns))
                .collect(),
            mutations: store.mutation_names(),
            actions: store.action_names(),
        }
    }
}

/// Wires one channel to one store.
pub struct ChannelBinder<'a> {
    channel: &'a Arc<dyn Channel>,
    store: &'a Arc<dyn Store>,
    config: &'a BindingConfig,
    ctx: ChannelContext,
}

impl<'a> ChannelBinder<'a> {
    /// Run the full binding pass for one channel.
    pub fn bind(channel: &'a Arc<dyn Channel>, store: &'a Arc<dyn Store>, config: &'a BindingConfig) {
        let ctx = ChannelContext::capture(channel.as_ref(), store.as_ref());
        let binder = Self {
            channel,
            store,
            config,
            ctx,
        };
        binder.run();
    }

    fn run(self) {
        // Wire names with a static subscription; the catch-all skips these
        // so an inbound event never fires a member twice.
        let mut bound_events = HashSet::new();

        for mutation in &self.ctx.mutations {
            if let Some(wire) = self.listener_wire_name(mutation) {
                self.subscribe_commit(mutation, &wire);
                bound_events.insert(wire);
            }
        }

        for action in &self.ctx.actions {
            if let Some(wire) = self.listener_wire_name(action) {
                self.subscribe_dispatch(action, &wire);
                bound_events.insert(wire);
            }
            self.wrap_emitter(action);
            self.wrap_lifecycle(action);
        }

        self.install_catch_all(bound_events);
    }

    /// The wire event name a member listens to, or `None` if the member does
    /// not carry the (namespace-qualified) listener prefix.
    ///
    /// A suffix naming a reserved transport event keeps the transport's
    /// native lowercase name; everything else goes through the configured
    /// formatter.
    fn listener_wire_name(&self, member: &str) -> Option<String> {
        let prefixed = format!("{}{}", self.ctx.namespace_prefix, self.config.listener_prefix);
        if !member_matches(member, &prefixed, &self.ctx.module_namespaces) {
            return None;
        }
        let bare = channel_suffix(member, &self.config.listener_prefix);
        let wire = match reserved_wire_event(&bare) {
            Some(reserved) => reserved.to_string(),
            None => self.config.format.apply(&bare),
        };
        Some(wire)
    }

    fn subscribe_commit(&self, mutation: &str, wire: &str) {
        let store = Arc::clone(self.store);
        let mutation_name = mutation.to_string();
        self.channel.on(
            wire,
            Arc::new(move |payload| store.commit(&mutation_name, payload)),
        );
        debug!(mutation, event = wire, "mutation subscribed to channel event");
    }

    fn subscribe_dispatch(&self, action: &str, wire: &str) {
        let store = Arc::clone(self.store);
        let action_name = action.to_string();
        self.channel.on(
            wire,
            Arc::new(move |payload| store.dispatch(&action_name, payload)),
        );
        debug!(action, event = wire, "action subscribed to channel event");
    }

    /// Decorate an emitter-matched action so dispatching it first sends the
    /// formatted channel message, then runs the original handlers. Outgoing
    /// messages never short-circuit the store effect.
    fn wrap_emitter(&self, action: &str) {
        let prefixed = format!("{}{}", self.ctx.namespace_prefix, self.config.emitter_prefix);
        if !member_matches(action, &prefixed, &self.ctx.module_namespaces) {
            return;
        }
        let wire = self
            .config
            .format
            .apply(&channel_suffix(action, &self.config.emitter_prefix));
        debug!(action, event = %wire, "action wrapped as emitter");

        let channel = Arc::clone(self.channel);
        self.store.decorate_action(
            action,
            Box::new(move |inner: ActionFn| -> ActionFn {
                Arc::new(move |payload: Payload| {
                    channel.emit(&wire, payload.clone());
                    inner(payload);
                })
            }),
        );
    }

    /// Decorate a lifecycle-matched action so dispatching it runs the
    /// original handlers first, then invokes the channel's same-named
    /// method. A channel lacking the method is a defined non-error branch:
    /// the action stays undecorated and only its handlers run.
    fn wrap_lifecycle(&self, action: &str) {
        let matched = self.config.lifecycle_actions.iter().find(|lifecycle| {
            let prefixed = format!("{}{}", self.ctx.namespace_prefix, lifecycle);
            member_matches(action, &prefixed, &self.ctx.module_namespaces)
        });
        let Some(lifecycle) = matched else { return };

        // Lifecycle names map to channel methods through the shared stem:
        // "socketconnect" → "connect". No stem, no method to call.
        let Some(at) = lifecycle.find(LIFECYCLE_STEM) else {
            debug!(action, lifecycle = %lifecycle, "lifecycle action has no method stem, skipping");
            return;
        };
        let method = lifecycle[at + LIFECYCLE_STEM.len()..].to_string();

        match self.channel.lifecycle(&method) {
            Some(call) => {
                debug!(action, method = %method, "action wrapped with channel lifecycle call");
                self.store.decorate_action(
                    action,
                    Box::new(move |inner: ActionFn| -> ActionFn {
                        Arc::new(move |payload: Payload| {
                            inner(payload);
                            call();
                        })
                    }),
                );
            }
            None => {
                debug!(action, method = %method, "channel lacks lifecycle method, skipping");
            }
        }
    }

    /// Install the dynamic path: one interception hook that matches inbound
    /// events against the full member snapshot, for wire names only known at
    /// runtime. Statically subscribed names are excluded so each member
    /// fires exactly once per event.
    fn install_catch_all(self, bound_events: HashSet<String>) {
        let store = Arc::clone(self.store);
        let ctx = self.ctx;
        let listener_prefix = self.config.listener_prefix.clone();

        self.channel.on_any(Arc::new(move |event: &str, payload: Payload| {
            if bound_events.contains(event) {
                return;
            }
            let probe = format!(
                "{}{}{}",
                ctx.namespace_prefix,
                listener_prefix,
                normalize(event)
            );
            for mutation in &ctx.mutations {
                if member_matches(mutation, &probe, &ctx.module_namespaces) {
                    store.commit(mutation, payload.clone());
                }
            }
            for action in &ctx.actions {
                if member_matches(action, &probe, &ctx.module_namespaces) {
                    store.dispatch(action, payload.clone());
                }
            }
        }));
    }
}
