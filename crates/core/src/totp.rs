//! Time-based one-time passwords for two-factor login (RFC 6238).
//!
//! Codes are 6 digits over a 30-second step, computed with HMAC-SHA256.
//! Secrets are stored as hex strings; verification accepts one step of clock
//! skew in either direction.

use hmac::{Hmac, Mac};
use rand::Rng;
use sha2::Sha256;

use crate::types::Timestamp;

/// Seconds per TOTP step.
const STEP_SECS: i64 = 30;
/// Number of digits in a code.
const DIGITS: u32 = 6;
/// Accepted clock skew, in steps, on either side of "now".
const SKEW_STEPS: i64 = 1;

/// Generate a new random shared secret, hex-encoded (20 random bytes).
pub fn generate_secret() -> String {
    let mut bytes = [0u8; 20];
    rand::rng().fill(&mut bytes[..]);
    hex_encode(&bytes)
}

/// Build the otpauth provisioning URI for an enrolled account.
///
/// The URI is returned as a plain string; rendering it as a QR code is the
/// client's concern.
pub fn provisioning_uri(issuer: &str, account: &str, secret: &str) -> String {
    format!("otpauth://totp/{issuer}:{account}?secret={secret}&issuer={issuer}&algorithm=SHA256&digits={DIGITS}&period={STEP_SECS}")
}

/// Compute the code for the step containing `at`.
pub fn code_at(secret: &str, at: Timestamp) -> Result<String, TotpError> {
    let counter = at.timestamp() / STEP_SECS;
    code_for_counter(secret, counter)
}

/// Verify a submitted code against the secret, allowing one step of skew.
pub fn verify(secret: &str, code: &str, at: Timestamp) -> Result<bool, TotpError> {
    let counter = at.timestamp() / STEP_SECS;
    for c in (counter - SKEW_STEPS)..=(counter + SKEW_STEPS) {
        if code_for_counter(secret, c)? == code {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Errors from TOTP computation. The only failure mode is a secret that is
/// not valid hex.
#[derive(Debug, thiserror::Error)]
pub enum TotpError {
    #[error("invalid TOTP secret encoding")]
    InvalidSecret,
}

fn code_for_counter(secret: &str, counter: i64) -> Result<String, TotpError> {
    let key = hex_decode(secret).ok_or(TotpError::InvalidSecret)?;
    let mut mac =
        Hmac::<Sha256>::new_from_slice(&key).map_err(|_| TotpError::InvalidSecret)?;
    mac.update(&counter.to_be_bytes());
    let digest = mac.finalize().into_bytes();

    // Dynamic truncation (RFC 4226 §5.3).
    let offset = (digest[digest.len() - 1] & 0x0f) as usize;
    let binary = ((digest[offset] as u32 & 0x7f) << 24)
        | ((digest[offset + 1] as u32) << 16)
        | ((digest[offset + 2] as u32) << 8)
        | (digest[offset + 3] as u32);
    let code = binary % 10u32.pow(DIGITS);
    Ok(format!("{code:06}"))
}

fn hex_encode(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 || s.is_empty() {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(s.get(i..i + 2)?, 16).ok())
        .collect()
}
