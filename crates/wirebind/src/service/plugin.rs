//! # Binder Entry Point
//!
//! Accepts one or more channels plus options, validates the configuration
//! once (fail fast), and attaches to a store by running the binding pass
//! once per channel, in order.

use std::sync::Arc;

use tracing::info;

use crate::domain::{BindError, BinderOptions, BindingConfig};
use crate::ports::{Channel, Store};

use super::binder::ChannelBinder;

/// Top-level binder: a validated configuration plus the channels to wire.
///
/// Channels are fully independent. If a store member matches two channels
/// (overlapping namespaces), it is bound once per channel — intentional, to
/// support fan-out across multiple transports.
pub struct SocketBinder {
    channels: Vec<Arc<dyn Channel>>,
    config: BindingConfig,
}

impl SocketBinder {
    /// Build a binder over an ordered collection of channels.
    ///
    /// # Errors
    ///
    /// Returns [`BindError`] for an unknown formatter key or a prefix that
    /// normalizes to the empty string.
    pub fn new(channels: Vec<Arc<dyn Channel>>, options: BinderOptions) -> Result<Self, BindError> {
        let config = BindingConfig::resolve(options)?;
        Ok(Self { channels, config })
    }

    /// Convenience constructor for the common single-channel case.
    pub fn single(channel: Arc<dyn Channel>, options: BinderOptions) -> Result<Self, BindError> {
        Self::new(vec![channel], options)
    }

    /// The resolved configuration shared by all channel bindings.
    #[must_use]
    pub fn config(&self) -> &BindingConfig {
        &self.config
    }

    /// Run the binding pass for every channel against `store`.
    ///
    /// Attaching the same store twice installs duplicate subscriptions and
    /// doubles handler invocations per event; callers own de-duplication.
    pub fn attach(&self, store: &Arc<dyn Store>) {
        for channel in &self.channels {
            ChannelBinder::bind(channel, store, &self.config);
            info!(namespace = %channel.namespace(), "channel bound to store");
        }
    }
}
