//! # Adapters
//!
//! Reference in-memory implementations of the [`Channel`](crate::ports::Channel)
//! and [`Store`](crate::ports::Store) ports. Suitable for tests and
//! single-process demos; a production deployment would adapt a real
//! transport and state container instead.

pub mod memory_channel;
pub mod memory_store;

pub use memory_channel::{InMemoryChannel, WireFrame, DEFAULT_WIRE_CAPACITY};
pub use memory_store::{InMemoryStore, ModuleDef};
