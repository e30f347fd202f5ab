use openssl::encrypt::{Decrypter, Encrypter};
use openssl::error::ErrorStack;
use openssl::hash::MessageDigest;
use openssl::rsa::Padding;

use crate::error::{DecryptError, EncryptError};
use crate::key_pair::KeyPair;

/// Hash used for both the OAEP digest and MGF1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OaepDigest {
    Sha1,
    #[default]
    Sha256,
}

impl OaepDigest {
    fn message_digest(self) -> MessageDigest {
        match self {
            OaepDigest::Sha1 => MessageDigest::sha1(),
            OaepDigest::Sha256 => MessageDigest::sha256(),
        }
    }

    pub fn output_len(self) -> usize {
        match self {
            OaepDigest::Sha1 => 20,
            OaepDigest::Sha256 => 32,
        }
    }
}

/// RSA ciphertext, always exactly one modulus long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ciphertext(Vec<u8>);

impl Ciphertext {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

// RSA-OAEP service using OpenSSL
#[derive(Debug)]
pub struct RsaService {
    keys: KeyPair,
    digest: OaepDigest,
}

impl RsaService {
    pub fn new(keys: KeyPair) -> Self {
        Self::with_digest(keys, OaepDigest::default())
    }

    pub fn with_digest(keys: KeyPair, digest: OaepDigest) -> Self {
        Self { keys, digest }
    }

    pub fn keys(&self) -> &KeyPair {
        &self.keys
    }

    pub fn digest(&self) -> OaepDigest {
        self.digest
    }

    pub fn ciphertext_len(&self) -> usize {
        self.keys.modulus_len()
    }

    /// Largest plaintext OAEP can carry: k - 2*hLen - 2.
    pub fn max_plaintext_len(&self) -> usize {
        self.ciphertext_len()
            .saturating_sub(2 * self.digest.output_len() + 2)
    }

    pub fn encrypt(&self, plaintext: &str) -> Result<Ciphertext, EncryptError> {
        let data = plaintext.as_bytes();
        let max = self.max_plaintext_len();
        if data.len() > max {
            return Err(EncryptError::Oversize {
                len: data.len(),
                max,
            });
        }

        let md = self.digest.message_digest();
        let mut encrypter = Encrypter::new(self.keys.public_key())?;
        encrypter.set_rsa_padding(Padding::PKCS1_OAEP)?;
        encrypter.set_rsa_oaep_md(md)?;
        encrypter.set_rsa_mgf1_md(md)?;

        let mut buf = vec![0; encrypter.encrypt_len(data)?];
        let encrypted_len = encrypter.encrypt(data, &mut buf)?;
        buf.truncate(encrypted_len);

        Ok(Ciphertext(buf))
    }

    /// Recovers the plaintext. Any failure is reported as the same
    /// [`DecryptError`].
    pub fn decrypt(&self, ciphertext: &Ciphertext) -> Result<String, DecryptError> {
        if ciphertext.len() != self.ciphertext_len() {
            return Err(DecryptError);
        }

        let decrypted = self.oaep_decrypt(ciphertext.as_bytes()).map_err(|_| DecryptError)?;
        String::from_utf8(decrypted).map_err(|_| DecryptError)
    }

    fn oaep_decrypt(&self, data: &[u8]) -> Result<Vec<u8>, ErrorStack> {
        let md = self.digest.message_digest();
        let mut decrypter = Decrypter::new(self.keys.private_key())?;
        decrypter.set_rsa_padding(Padding::PKCS1_OAEP)?;
        decrypter.set_rsa_oaep_md(md)?;
        decrypter.set_rsa_mgf1_md(md)?;

        let mut buf = vec![0; decrypter.decrypt_len(data)?];
        let decrypted_len = decrypter.decrypt(data, &mut buf)?;
        buf.truncate(decrypted_len);

        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, OnceLock};

    fn service() -> Arc<RsaService> {
        static SERVICE: OnceLock<Arc<RsaService>> = OnceLock::new();
        SERVICE
            .get_or_init(|| Arc::new(RsaService::new(KeyPair::generate().unwrap())))
            .clone()
    }

    #[test]
    fn round_trip_short_text() {
        let service = service();
        let message = "The quick brown fox jumps over the lazy dog, again!";
        assert_eq!(message.len(), 51);

        let ciphertext = service.encrypt(message).unwrap();
        assert_eq!(ciphertext.len(), 256);
        assert_eq!(service.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn round_trip_multibyte_utf8() {
        let service = service();
        let message = "Шифрование и дешифровка ✓";
        let ciphertext = service.encrypt(message).unwrap();
        assert_eq!(service.decrypt(&ciphertext).unwrap(), message);
    }

    #[test]
    fn max_plaintext_for_2048_sha256_is_190() {
        let service = service();
        assert_eq!(service.max_plaintext_len(), 190);

        let exact = "a".repeat(190);
        let ciphertext = service.encrypt(&exact).unwrap();
        assert_eq!(service.decrypt(&ciphertext).unwrap(), exact);
    }

    #[test]
    fn empty_plaintext_round_trips() {
        let service = service();
        let ciphertext = service.encrypt("").unwrap();
        assert_eq!(service.decrypt(&ciphertext).unwrap(), "");
    }

    #[test]
    fn encryption_is_randomized() {
        let service = service();
        let first = service.encrypt("hello").unwrap();
        let second = service.encrypt("hello").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn oversize_plaintext_is_rejected() {
        let service = service();
        let err = service.encrypt(&"x".repeat(300)).unwrap_err();
        assert!(matches!(err, EncryptError::Oversize { len: 300, max: 190 }));

        let err = service.encrypt(&"x".repeat(191)).unwrap_err();
        assert!(matches!(err, EncryptError::Oversize { len: 191, max: 190 }));
    }

    #[test]
    fn flipped_bit_fails_decryption() {
        let service = service();
        let mut bytes = service.encrypt("tamper me").unwrap().into_bytes();
        bytes[100] ^= 0x01;
        assert_eq!(
            service.decrypt(&Ciphertext::from_bytes(bytes)),
            Err(DecryptError)
        );
    }

    #[test]
    fn wrong_length_fails_decryption() {
        let service = service();
        let mut bytes = service.encrypt("hello").unwrap().into_bytes();
        bytes.pop();
        assert_eq!(
            service.decrypt(&Ciphertext::from_bytes(bytes)),
            Err(DecryptError)
        );
        assert_eq!(
            service.decrypt(&Ciphertext::from_bytes(Vec::new())),
            Err(DecryptError)
        );
    }

    #[test]
    fn ciphertext_from_another_key_fails() {
        let service = service();
        let other = RsaService::new(KeyPair::generate().unwrap());
        let ciphertext = other.encrypt("not for you").unwrap();
        assert_eq!(service.decrypt(&ciphertext), Err(DecryptError));
    }

    #[test]
    fn mismatched_oaep_digest_fails() {
        let keys = KeyPair::generate_with_bits(1024).unwrap();
        let sha1 = RsaService::with_digest(keys, OaepDigest::Sha1);
        let ciphertext = sha1.encrypt("digest mismatch").unwrap();
        assert_eq!(sha1.decrypt(&ciphertext).unwrap(), "digest mismatch");

        let sha256 = RsaService::with_digest(sha1.keys, OaepDigest::Sha256);
        assert_eq!(sha256.decrypt(&ciphertext), Err(DecryptError));
    }

    #[test]
    fn non_utf8_plaintext_fails_like_bad_padding() {
        let service = service();

        // Encrypt raw bytes directly with the same OAEP parameters
        let bytes: [u8; 3] = [0xff, 0xfe, 0xfd];
        let md = MessageDigest::sha256();
        let mut encrypter = Encrypter::new(service.keys().public_key()).unwrap();
        encrypter.set_rsa_padding(Padding::PKCS1_OAEP).unwrap();
        encrypter.set_rsa_oaep_md(md).unwrap();
        encrypter.set_rsa_mgf1_md(md).unwrap();
        let mut buf = vec![0; encrypter.encrypt_len(&bytes).unwrap()];
        let len = encrypter.encrypt(&bytes, &mut buf).unwrap();
        buf.truncate(len);

        let err = service.decrypt(&Ciphertext::from_bytes(buf)).unwrap_err();
        assert_eq!(err.to_string(), "decryption failed");
    }

    #[test]
    fn sha1_engine_allows_longer_plaintext() {
        let keys = KeyPair::generate_with_bits(1024).unwrap();
        let service = RsaService::with_digest(keys, OaepDigest::Sha1);
        assert_eq!(service.max_plaintext_len(), 128 - 42);
    }
}
