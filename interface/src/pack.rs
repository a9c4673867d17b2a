use crate::error::BricksError;

/// The fixed width of an asset name on-chain.
pub const NAME_LEN: usize = 32;

/// Right-pads `text` with null bytes to exactly `N` bytes.
///
/// Text whose UTF-8 encoding is longer than `N` bytes fails with [`BricksError::FieldTooLong`]
/// instead of being truncated.
pub fn pad_fixed<const N: usize>(text: &str) -> Result<[u8; N], BricksError> {
    let bytes = text.as_bytes();
    if bytes.len() > N {
        return Err(BricksError::FieldTooLong);
    }

    let mut padded = [0u8; N];
    padded[..bytes.len()].copy_from_slice(bytes);
    Ok(padded)
}

/// Decodes stored text bytes, dropping trailing null padding.
///
/// Interior null bytes are kept. Invalid UTF-8 sequences are replaced rather than rejected since
/// the program stores whatever bytes it was sent.
pub fn bytes_to_string(bytes: &[u8]) -> String {
    let end = bytes.iter().rposition(|b| *b != 0).map_or(0, |i| i + 1);
    String::from_utf8_lossy(&bytes[..end]).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_name_to_fixed_width() {
        let padded = pad_fixed::<NAME_LEN>("Villa").unwrap();
        assert_eq!(padded.len(), 32);
        assert_eq!(&padded[..5], b"Villa");
        assert!(padded[5..].iter().all(|b| *b == 0));
        assert_eq!(bytes_to_string(&padded), "Villa");
    }

    #[test]
    fn exact_width_is_accepted() {
        let name = "a".repeat(NAME_LEN);
        let padded = pad_fixed::<NAME_LEN>(&name).unwrap();
        assert_eq!(bytes_to_string(&padded), name);
    }

    #[test]
    fn too_long_is_rejected() {
        let name = "a".repeat(NAME_LEN + 1);
        assert_eq!(pad_fixed::<NAME_LEN>(&name), Err(BricksError::FieldTooLong));
        // 11 three-byte characters is 33 bytes, even though it's only 11 chars.
        assert_eq!(
            pad_fixed::<NAME_LEN>(&"€".repeat(11)),
            Err(BricksError::FieldTooLong)
        );
    }

    #[test]
    fn only_trailing_nulls_are_stripped() {
        assert_eq!(bytes_to_string(b"a\0b\0\0\0"), "a\0b");
        assert_eq!(bytes_to_string(b"\0lead"), "\0lead");
        assert_eq!(bytes_to_string(&[0; 8]), "");
        assert_eq!(bytes_to_string(&[]), "");
    }

    #[test]
    fn unpadded_text_is_unchanged() {
        assert_eq!(bytes_to_string("Lisbon, Portugal".as_bytes()), "Lisbon, Portugal");
    }
}
