//! Decryption strategies for the supported token encryption schemes
//!
//! `ec` handles `EC_v1` envelopes (ECDH key agreement plus a one-step KDF),
//! `rsa` handles `RSA_v1` envelopes (RSA-OAEP key unwrap). Both feed the
//! shared AES-GCM step below, differing only in key size.

use aes_gcm::aead::generic_array::typenum::U16;
use aes_gcm::aead::{Aead, KeyInit, Nonce};
use aes_gcm::aes::{Aes128, Aes256};
use aes_gcm::{AesGcm, Key};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};

use crate::error::DecryptError;

pub(crate) mod ec;
pub(crate) mod rsa;

/// AES-256-GCM with the token's nonstandard 128-bit nonce (`EC_v1`)
pub(crate) type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// AES-128-GCM with the token's nonstandard 128-bit nonce (`RSA_v1`)
pub(crate) type Aes128Gcm16 = AesGcm<Aes128, U16>;

/// Decrypt a base64 ciphertext blob from the token body
///
/// The trailing 16 bytes of the decoded blob are the GCM authentication
/// tag, which is the aead crate's postfix layout, so the blob is passed
/// through whole. The nonce is 16 zero bytes — the protocol deviates from
/// the standard 96-bit GCM nonce — and there is no associated data.
///
/// Returns the plaintext bytes; callers decode UTF-8 themselves because the
/// EC scheme's plaintext occasionally carries non-UTF-8 trailing bytes.
pub(crate) fn decrypt_ciphertext<C>(key: &Key<C>, data: &str) -> Result<Vec<u8>, DecryptError>
where
    C: Aead + KeyInit,
{
    let decoded = BASE64.decode(data)?;

    let cipher = C::new(key);
    let nonce = Nonce::<C>::default();
    cipher
        .decrypt(&nonce, decoded.as_ref())
        .map_err(|_| DecryptError::Authentication)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Vectors produced with an independent AES-GCM implementation using the
    // protocol's 16 zero-byte nonce and empty associated data.
    const PLAINTEXT: &[u8] = b"{\"ok\":true}";
    const DATA_256: &str = "s5w3UZf/eqZvEAc8xV1cYmvfYn6GjGeXNAF7";
    const DATA_128: &str = "ezQUncmEgAWUVHKWMX9Pt9wn+QwgIEmTS9fx";
    const DATA_256_TAMPERED: &str = "spw3UZf/eqZvEAc8xV1cYmvfYn6GjGeXNAF7";

    fn key_256() -> [u8; 32] {
        core::array::from_fn(|i| i as u8)
    }

    fn key_128() -> [u8; 16] {
        core::array::from_fn(|i| i as u8)
    }

    #[test]
    fn test_decrypt_aes256_blob() {
        let key = key_256();
        let plaintext =
            decrypt_ciphertext::<Aes256Gcm16>(Key::<Aes256Gcm16>::from_slice(&key), DATA_256)
                .unwrap();
        assert_eq!(plaintext, PLAINTEXT);
    }

    #[test]
    fn test_decrypt_aes128_blob() {
        let key = key_128();
        let plaintext =
            decrypt_ciphertext::<Aes128Gcm16>(Key::<Aes128Gcm16>::from_slice(&key), DATA_128)
                .unwrap();
        assert_eq!(plaintext, PLAINTEXT);
    }

    #[test]
    fn test_tampered_ciphertext_fails_authentication() {
        let key = key_256();
        let result = decrypt_ciphertext::<Aes256Gcm16>(
            Key::<Aes256Gcm16>::from_slice(&key),
            DATA_256_TAMPERED,
        );
        assert!(matches!(result, Err(DecryptError::Authentication)));
    }

    #[test]
    fn test_wrong_key_fails_authentication() {
        let key = [0xAAu8; 32];
        let result =
            decrypt_ciphertext::<Aes256Gcm16>(Key::<Aes256Gcm16>::from_slice(&key), DATA_256);
        assert!(matches!(result, Err(DecryptError::Authentication)));
    }

    #[test]
    fn test_invalid_base64_is_reported_as_such() {
        let key = key_256();
        let result =
            decrypt_ciphertext::<Aes256Gcm16>(Key::<Aes256Gcm16>::from_slice(&key), "not base64!");
        assert!(matches!(result, Err(DecryptError::Base64(_))));
    }
}
