//! # Domain Layer
//!
//! Pure name-matching and formatting logic plus the resolved binder
//! configuration. Nothing in this module touches a channel or a store.

pub mod config;
pub mod errors;
pub mod format;
pub mod matcher;

pub use config::{
    reserved_wire_event, BinderOptions, BindingConfig, LIFECYCLE_STEM, RESERVED_WIRE_EVENTS,
};
pub use errors::BindError;
pub use format::{
    normalize, to_camel_case, to_lower_snake, to_pascal_case, to_space_case, to_upper_snake,
    ChannelFormat,
};
pub use matcher::{channel_suffix, member_matches};
