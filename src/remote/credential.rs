//! Bearer credential for the remote store

use std::fmt;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{GastosError, GastosResult};

/// An opaque access token
///
/// Never printed, and wiped from memory when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token, rejecting blank input
    pub fn new(token: impl Into<String>) -> GastosResult<Self> {
        let mut token = token.into();
        let trimmed = token.trim().to_string();
        token.zeroize();

        if trimmed.is_empty() {
            return Err(GastosError::Unauthorized(
                "No access token given; pass --token or set GASTOS_TOKEN".into(),
            ));
        }
        Ok(Self(trimmed))
    }

    /// Value of the `Authorization` header
    pub(crate) fn bearer(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}
