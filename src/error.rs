//! Error types for the orrery.

use crate::bodies::BodyId;

/// Errors raised while building or mutating the body registry.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrreryError {
    /// The registry has no record for the requested body.
    #[error("unknown body {0:?}")]
    UnknownBody(BodyId),

    /// An orbital operation was requested for a body that does not orbit.
    #[error("{0:?} is not a planet")]
    NotAPlanet(BodyId),

    /// The catalog used to build the registry is malformed.
    #[error("invalid body catalog: {0}")]
    InvalidCatalog(String),
}
