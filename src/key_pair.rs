use std::fmt;

use openssl::bn::BigNum;
use openssl::pkey::{PKey, Private, Public};
use openssl::rsa::Rsa;

use crate::error::KeyError;

pub const DEFAULT_MODULUS_BITS: u32 = 2048;
pub const PUBLIC_EXPONENT: u32 = 65537;

const MIN_MODULUS_BITS: u32 = 1024;

/// The process-lifetime RSA key pair.
///
/// Built once at startup and handed to the cipher engine; there is no way to
/// serialize or export the private half.
pub struct KeyPair {
    private_key: PKey<Private>,
    public_key: PKey<Public>,
}

impl KeyPair {
    pub fn generate() -> Result<Self, KeyError> {
        Self::generate_with_bits(DEFAULT_MODULUS_BITS)
    }

    pub fn generate_with_bits(bits: u32) -> Result<Self, KeyError> {
        if bits < MIN_MODULUS_BITS || bits % 8 != 0 {
            return Err(KeyError::UnsupportedSize(bits));
        }

        let exponent = BigNum::from_u32(PUBLIC_EXPONENT)?;
        let rsa = Rsa::generate_with_e(bits, &exponent)?;

        // Public half rebuilt from (n, e) so it carries no private components
        let public_rsa = Rsa::from_public_components(rsa.n().to_owned()?, rsa.e().to_owned()?)?;

        Ok(Self {
            private_key: PKey::from_rsa(rsa)?,
            public_key: PKey::from_rsa(public_rsa)?,
        })
    }

    pub fn public_key(&self) -> &PKey<Public> {
        &self.public_key
    }

    pub(crate) fn private_key(&self) -> &PKey<Private> {
        &self.private_key
    }

    pub fn modulus_bits(&self) -> u32 {
        self.public_key.bits()
    }

    /// Modulus size in bytes, which is also the ciphertext length.
    pub fn modulus_len(&self) -> usize {
        self.public_key.size()
    }

    pub fn public_exponent(&self) -> u32 {
        PUBLIC_EXPONENT
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPair")
            .field("modulus_bits", &self.modulus_bits())
            .field("public_exponent", &self.public_exponent())
            .finish_non_exhaustive()
    }
}
