//! Playlist PIN rules.
//!
//! A PIN is exactly six ASCII digits and is compared as a string, so leading
//! zeros are significant. The format rule is enforced when a playlist is
//! created; supplied PINs on the access path are never normalised or
//! pre-validated, a malformed one simply fails the comparison.

use subtle::ConstantTimeEq;

use crate::error::CoreError;

/// Required PIN length.
pub const PIN_LENGTH: usize = 6;

/// Validate a PIN at creation time: exactly six ASCII digits.
pub fn validate_pin_format(pin: &str) -> Result<(), CoreError> {
    if pin.len() != PIN_LENGTH || !pin.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoreError::Validation(format!(
            "PIN must be exactly {PIN_LENGTH} digits"
        )));
    }
    Ok(())
}

/// Compare a supplied PIN with the stored one without early exit on the
/// first differing byte. Only the length comparison short-circuits.
pub fn pins_match(supplied: &str, stored: &str) -> bool {
    supplied.len() == stored.len() && bool::from(supplied.as_bytes().ct_eq(stored.as_bytes()))
}
