//! Refresh tokens: the "selection changed" signal.

use std::fmt;

use serde::Serialize;

/// Version number of the selection state.
///
/// Tokens issued by one store are strictly increasing, so comparing two
/// tokens is enough to tell whether the selection moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RefreshToken(u64);

impl RefreshToken {
    pub fn version(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RefreshToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Per-store token counter.
#[derive(Debug, Default)]
pub(crate) struct TokenSource {
    last: u64,
}

impl TokenSource {
    pub(crate) fn issue(&mut self) -> RefreshToken {
        self.last += 1;
        RefreshToken(self.last)
    }
}
