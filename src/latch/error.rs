use std::{error::Error, fmt};

use crate::latch::token::SettingToken;

pub type LatchResult<T> = Result<T, LatchError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatchError {
    /// The register holds no valid override for the requested token, either
    /// because the validity marker is unset or because the token has no bit
    /// mapping. Expected on most boots; callers treat it as control flow.
    NotFound { token: SettingToken },
    /// The caller supplied no destination for the decoded value. Raised
    /// before the store sees any access.
    MissingDestination,
}

impl fmt::Display for LatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LatchError::NotFound { token } => {
                write!(f, "no override recorded for {token:?}")
            }
            LatchError::MissingDestination => {
                write!(f, "caller supplied no destination for the override value")
            }
        }
    }
}

impl Error for LatchError {}
