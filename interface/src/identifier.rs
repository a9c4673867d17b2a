//! Conversions between the hyphenated identifier strings callers use and the 16 raw bytes the
//! program stores and seeds its PDAs with.

use uuid::Uuid;

use crate::error::BricksError;

pub const IDENTIFIER_LEN: usize = 16;

/// Alias type for an identifier in its on-chain, 16 byte form.
pub type IdentifierBytes = [u8; IDENTIFIER_LEN];

const HYPHENATED_LEN: usize = 36;
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

fn is_hyphenated(uuid: &str) -> bool {
    let bytes = uuid.as_bytes();
    bytes.len() == HYPHENATED_LEN && HYPHEN_POSITIONS.iter().all(|pos| bytes[*pos] == b'-')
}

/// Parses a UUID string (`8-4-4-4-12` hex groups) into its 16 bytes, most significant first.
///
/// Only the hyphenated form is accepted. The simple, braced and `urn:uuid:` forms fail with
/// [`BricksError::InvalidIdentifier`].
pub fn uuid_to_bytes(uuid: &str) -> Result<IdentifierBytes, BricksError> {
    if !is_hyphenated(uuid) {
        return Err(BricksError::InvalidIdentifier);
    }

    Uuid::parse_str(uuid)
        .map(Uuid::into_bytes)
        .map_err(|_| BricksError::InvalidIdentifier)
}

/// Formats exactly 16 bytes as a lowercase hyphenated UUID string.
///
/// Any other input length fails with [`BricksError::InvalidIdentifierLength`].
pub fn bytes_to_uuid(bytes: &[u8]) -> Result<String, BricksError> {
    let uuid = Uuid::from_slice(bytes).map_err(|_| BricksError::InvalidIdentifierLength)?;

    Ok(uuid.hyphenated().to_string())
}
