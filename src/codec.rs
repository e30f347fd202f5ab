//! Hex wire format for ciphertext.

use crate::error::CodecError;
use crate::rsa_service::Ciphertext;

pub fn to_wire_text(ciphertext: &Ciphertext) -> String {
    hex::encode(ciphertext.as_bytes())
}

/// Decodes wire text and checks it is exactly `expected_len` bytes, so
/// garbage never reaches the RSA primitive.
pub fn from_wire_text(text: &str, expected_len: usize) -> Result<Ciphertext, CodecError> {
    let text = text.trim_ascii();
    if text.is_empty() {
        return Err(CodecError::Empty);
    }

    let bytes = hex::decode(text)?;
    if bytes.len() != expected_len {
        return Err(CodecError::WrongLength {
            expected: expected_len,
            actual: bytes.len(),
        });
    }

    Ok(Ciphertext::from_bytes(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encodes_lowercase() {
        let ciphertext = Ciphertext::from_bytes(vec![0x00, 0xab, 0xcd, 0xef, 0x10]);
        assert_eq!(to_wire_text(&ciphertext), "00abcdef10");
    }

    #[test]
    fn decodes_expected_length() {
        let text = "0a".repeat(256);
        let ciphertext = from_wire_text(&text, 256).unwrap();
        assert_eq!(ciphertext.as_bytes(), vec![0x0a; 256].as_slice());
        assert_eq!(to_wire_text(&ciphertext), text);
    }

    #[test]
    fn accepts_uppercase_and_surrounding_whitespace() {
        let ciphertext = from_wire_text("  ABcd\r\n", 2).unwrap();
        assert_eq!(ciphertext.as_bytes(), &[0xab, 0xcd]);
    }

    #[test]
    fn rejects_empty_input() {
        assert_eq!(from_wire_text("", 256), Err(CodecError::Empty));
        assert_eq!(from_wire_text(" \n", 256), Err(CodecError::Empty));
    }

    #[test]
    fn rejects_invalid_hex() {
        assert_eq!(from_wire_text("zz", 256), Err(CodecError::InvalidCharacter));
    }

    #[test]
    fn rejects_odd_length() {
        assert_eq!(from_wire_text("abc", 256), Err(CodecError::OddLength));
    }

    #[test]
    fn rejects_wrong_decoded_length() {
        assert_eq!(
            from_wire_text("00", 256),
            Err(CodecError::WrongLength {
                expected: 256,
                actual: 1
            })
        );
    }
}
