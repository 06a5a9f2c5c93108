//! # Ports
//!
//! Capability interfaces the binder requires from its two collaborators.
//! The binder never reaches into channel or store internals; everything it
//! needs is expressed here.

pub mod channel;
pub mod store;

pub use channel::{AnyEventHandler, Channel, EventHandler, LifecycleFn, Payload};
pub use store::{ActionDecorator, ActionFn, MutationFn, Store};
