//! Public error surface.
//!
//! Classified backend failures are values ([`crate::outcome::Outcome`]), not
//! errors; this type only covers the two cases that escape an operation as
//! `Err`: missing required configuration (detected before any network
//! activity) and, on the complex create/edit path alone, a transport
//! failure.

use crate::transport::TransportError;

#[derive(Debug, thiserror::Error)]
pub enum GiftListError {
    /// Required configuration value unset. The message names the setter the
    /// caller must invoke first.
    #[error("{0} is not set; call the matching setter or set_config first")]
    MissingConfig(&'static str),

    /// Transport failure on the complex create/edit path, which deliberately
    /// does not fold transport errors into a classified outcome.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

pub type Result<T, E = GiftListError> = std::result::Result<T, E>;
