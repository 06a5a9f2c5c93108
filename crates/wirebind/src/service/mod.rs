//! # Binding Service
//!
//! The one-shot wiring pass ([`ChannelBinder`]) and the top-level entry
//! point ([`SocketBinder`]) that runs it once per channel against a store.

mod binder;
mod plugin;

pub use binder::ChannelBinder;
pub use plugin::SocketBinder;
