//! Cross-site request forgery protection for form POSTs.
//!
//! Tokens are HMAC-SHA256 over the session token, keyed by a server
//! secret. GET form endpoints hand the token to the view; POST endpoints
//! require it back in a `CsrfToken` form field. A token is only valid for
//! the session it was issued to.
//!
//! # Security
//!
//! - Uses constant-time comparison to prevent timing attacks
//! - Tokens are deterministic per session, so re-rendering a form does not
//!   invalidate previously issued tokens

use hmac::{Hmac, Mac};
use secrecy::{ExposeSecret, SecretString};
use sha2::Sha256;
use subtle::ConstantTimeEq;

use crate::domain::foundation::SessionToken;

type HmacSha256 = Hmac<Sha256>;

/// Issues and verifies per-session CSRF tokens.
pub struct CsrfSigner {
    key: SecretString,
}

impl CsrfSigner {
    pub fn new(key: SecretString) -> Self {
        Self { key }
    }

    /// Hex-encoded token bound to the session.
    pub fn issue(&self, session: &SessionToken) -> String {
        hex_encode(&self.mac_for(session))
    }

    /// Verifies a token submitted with a form POST.
    pub fn verify(&self, session: &SessionToken, provided: &str) -> bool {
        let Some(provided) = hex_decode(provided) else {
            return false;
        };
        let expected = self.mac_for(session);
        expected.as_slice().ct_eq(&provided).unwrap_u8() == 1
    }

    fn mac_for(&self, session: &SessionToken) -> Vec<u8> {
        let mut mac = HmacSha256::new_from_slice(self.key.expose_secret().as_bytes())
            .expect("HMAC can take key of any size");
        mac.update(session.to_string().as_bytes());
        mac.finalize().into_bytes().to_vec()
    }
}

impl std::fmt::Debug for CsrfSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CsrfSigner").finish_non_exhaustive()
    }
}

pub(crate) fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

pub(crate) fn hex_decode(hex: &str) -> Option<Vec<u8>> {
    let hex = hex.trim();
    // Reject non-ASCII up front so byte slicing below cannot split a
    // multi-byte character.
    if !hex.is_ascii() || hex.len() % 2 != 0 {
        return None;
    }

    let mut bytes = Vec::with_capacity(hex.len() / 2);
    for i in (0..hex.len()).step_by(2) {
        let byte = u8::from_str_radix(&hex[i..i + 2], 16).ok()?;
        bytes.push(byte);
    }
    Some(bytes)
}
