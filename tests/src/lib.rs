//! # WireBind Test Suite
//!
//! Unified test crate for cross-component scenarios: a real store, real
//! channels, and the binder wired together the way a host application would.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/
//!     ├── binding_flow.rs    # inbound commits, outbound emits, rebinding
//!     ├── lifecycle.rs       # connect/disconnect wiring and capability probes
//!     └── multi_channel.rs   # namespacing and fan-out across channels
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p wirebind-tests
//! cargo test -p wirebind-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;
