use thiserror::Error;

/// Fatal configuration errors raised while constructing a binder.
///
/// Everything else in the matching pipeline is deliberately permissive: a
/// member that matches nothing is left unbound, and a lifecycle action whose
/// channel lacks the method is skipped. Neither is an error.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BindError {
    #[error("Unknown channel format key: {key}")]
    UnknownFormat { key: String },

    #[error("Normalized {which} prefix is empty; every store member would match")]
    EmptyPrefix { which: &'static str },
}
