//! # Binder Configuration
//!
//! Caller-supplied options merged with defaults, validated once per binder.
//! The resolved [`BindingConfig`] is immutable for the binder's lifetime.

use serde::{Deserialize, Serialize};

use super::errors::BindError;
use super::format::{normalize, ChannelFormat};

/// Transport-native event names shared read-only across all channel bindings.
///
/// A bare channel name that normalizes to one of these bypasses the wire
/// formatter so the transport's own lowercase event names still fire
/// (`socketOnConnect` listens to `connect`, not `CONNECT`).
pub const RESERVED_WIRE_EVENTS: [&str; 13] = [
    "connect",
    "error",
    "disconnect",
    "reconnect",
    "reconnect_attempt",
    "reconnecting",
    "reconnect_error",
    "reconnect_failed",
    "connect_error",
    "connect_timeout",
    "connecting",
    "ping",
    "pong",
];

/// Shared stem of lifecycle action names. The channel method name is the
/// normalized remainder after this stem (`socketConnect` → `connect`).
pub const LIFECYCLE_STEM: &str = "socket";

/// Caller-facing options. All fields are optional via `Default`; the struct
/// is serde-loadable so a host can read it from file or environment config.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BinderOptions {
    /// Name fragment marking a store member as bound to an incoming event.
    pub listener_prefix: String,
    /// Name fragment marking a store action as bound to an outgoing emission.
    pub emitter_prefix: String,
    /// Formatter registry key for wire names (see [`ChannelFormat`]).
    pub channel_format: String,
    /// Extra reserved action names bound to channel lifecycle methods, merged
    /// with the built-in connect/disconnect pair.
    pub lifecycle_actions: Vec<String>,
}

impl Default for BinderOptions {
    fn default() -> Self {
        Self {
            listener_prefix: "socketOn".to_string(),
            emitter_prefix: "socketEmit".to_string(),
            channel_format: ChannelFormat::UppSnakeCase.key().to_string(),
            lifecycle_actions: Vec::new(),
        }
    }
}

/// Configuration resolved and validated once per binder instance.
#[derive(Debug, Clone)]
pub struct BindingConfig {
    pub listener_prefix: String,
    pub emitter_prefix: String,
    pub format: ChannelFormat,
    /// Normalized lifecycle action names, built-ins included.
    pub lifecycle_actions: Vec<String>,
}

impl BindingConfig {
    /// Resolve options into a validated configuration.
    ///
    /// Fails fast on an unknown formatter key or on a prefix that normalizes
    /// to the empty string (which would make every store member match).
    pub fn resolve(options: BinderOptions) -> Result<Self, BindError> {
        let format = ChannelFormat::from_key(&options.channel_format)?;

        if normalize(&options.listener_prefix).is_empty() {
            return Err(BindError::EmptyPrefix { which: "listener" });
        }
        if normalize(&options.emitter_prefix).is_empty() {
            return Err(BindError::EmptyPrefix { which: "emitter" });
        }

        let mut lifecycle_actions: Vec<String> = options
            .lifecycle_actions
            .iter()
            .map(|name| normalize(name))
            .collect();
        lifecycle_actions.push(normalize("socketConnect"));
        lifecycle_actions.push(normalize("socketDisconnect"));

        Ok(Self {
            listener_prefix: options.listener_prefix,
            emitter_prefix: options.emitter_prefix,
            format,
            lifecycle_actions,
        })
    }
}

/// Look up the reserved wire event a bare channel name refers to, if any.
///
/// Comparison is on normalized forms, so `ReconnectAttempt` maps to the
/// transport's `reconnect_attempt`.
#[must_use]
pub fn reserved_wire_event(bare_name: &str) -> Option<&'static str> {
    let bare = normalize(bare_name);
    RESERVED_WIRE_EVENTS
        .iter()
        .find(|event| normalize(event) == bare)
        .copied()
}
