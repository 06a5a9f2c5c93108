//! # wirebind
//!
//! Convention-based binder between a socket-style message channel and a
//! centralized mutation/action store.
//!
//! ## Role in System
//!
//! - **Name matching**: decides which store members belong to which channel
//!   by normalized prefix/namespace matching
//! - **One-shot wiring**: subscribes matched mutations/actions to inbound
//!   channel events and decorates matched actions with outbound emission or
//!   connection-lifecycle calls
//! - **No scheduler, no state**: after the binding pass, all reactivity is
//!   driven by the channel and the store themselves
//!
//! ## Binding Flow
//!
//! ```text
//! [SocketBinder] ──per channel──→ [ChannelBinder]
//!                                       │
//!                   ┌───────────────────┼───────────────────┐
//!                   ↓                   ↓                   ↓
//!          channel.on(event)   store.decorate_action   channel.on_any
//!          (inbound → commit/  (dispatch → emit /      (runtime-named
//!           dispatch)           lifecycle call)         events → match)
//! ```
//!
//! ## Conventions
//!
//! A store member named `socketOnMessage` listens to the wire event
//! `MESSAGE`; an action named `socketEmitSendMessage` emits `SEND_MESSAGE`
//! when dispatched; the reserved actions `socketConnect`/`socketDisconnect`
//! call the channel's same-named lifecycle methods. Prefixes, wire-name
//! format, and the lifecycle action set are configurable.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
pub use service::*;
