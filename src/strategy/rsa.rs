//! `RSA_v1` decryption path
//!
//! The token header carries a content key wrapped with
//! RSA/ECB/OAEPWithSHA256AndMGF1Padding; the unwrapped bytes are used
//! directly as an AES-128 key — there is no derivation step on this path.

use aes_gcm::Key;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Oaep, RsaPrivateKey};
use sha2::Sha256;
use zeroize::Zeroizing;

use super::{decrypt_ciphertext, Aes128Gcm16};
use crate::context::MerchantConfig;
use crate::error::DecryptError;
use crate::record::DecryptedPaymentData;
use crate::token::PaymentData;

/// Size of the unwrapped AES-128 content key
const CONTENT_KEY_LEN: usize = 16;

pub(crate) fn decrypt(
    payment_data: &PaymentData,
    merchant: &MerchantConfig,
) -> Result<DecryptedPaymentData, DecryptError> {
    let private_key = load_private_key(&merchant.private_key_pem)?;

    let wrapped_key = payment_data.header.wrapped_key.as_deref().ok_or_else(|| {
        DecryptError::KeyUnwrap("token header carries no wrapped key".to_string())
    })?;

    let content_key = unwrap_content_key(&private_key, wrapped_key)?;

    let plaintext = decrypt_ciphertext::<Aes128Gcm16>(
        Key::<Aes128Gcm16>::from_slice(&content_key),
        &payment_data.data,
    )?;

    // strict parse; the usual cause of failure here is a certificate that
    // does not pair with the supplied private key
    let decoded = String::from_utf8_lossy(&plaintext);
    serde_json::from_str(&decoded).map_err(DecryptError::PlaintextFormat)
}

fn load_private_key(pem: &[u8]) -> Result<RsaPrivateKey, DecryptError> {
    let pem = std::str::from_utf8(pem)
        .map_err(|_| DecryptError::KeyFormat("private key PEM is not valid UTF-8".to_string()))?;

    RsaPrivateKey::from_pkcs8_pem(pem)
        .or_else(|_| RsaPrivateKey::from_pkcs1_pem(pem))
        .map_err(|e| DecryptError::KeyFormat(format!("not an RSA private key: {}", e)))
}

/// Unwrap the content key with RSA-OAEP(SHA-256, MGF1-SHA-256), no label
fn unwrap_content_key(
    private_key: &RsaPrivateKey,
    wrapped_key: &str,
) -> Result<Zeroizing<Vec<u8>>, DecryptError> {
    let wrapped = BASE64.decode(wrapped_key).map_err(|e| {
        DecryptError::KeyUnwrap(format!("wrapped key is not valid base64: {}", e))
    })?;

    let content_key = private_key
        .decrypt(Oaep::new::<Sha256>(), &wrapped)
        .map(Zeroizing::new)
        .map_err(|e| DecryptError::KeyUnwrap(format!("RSA-OAEP decryption failed: {}", e)))?;

    if content_key.len() != CONTENT_KEY_LEN {
        return Err(DecryptError::KeyUnwrap(format!(
            "unwrapped content key must be {} bytes, got {}",
            CONTENT_KEY_LEN,
            content_key.len()
        )));
    }

    Ok(content_key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::PaymentHeader;

    const RSA_PRIVATE_KEY_PEM: &[u8] = include_bytes!("../../tests/data/rsa_private.key");

    fn rsa_payment_data(header: PaymentHeader) -> PaymentData {
        PaymentData {
            version: "RSA_v1".to_string(),
            header,
            data: "Q0lQSEVSVEVYVA==".to_string(),
            signature: "U0lHTkFUVVJF".to_string(),
        }
    }

    fn header_with_wrapped_key(wrapped_key: Option<&str>) -> PaymentHeader {
        PaymentHeader {
            ephemeral_public_key: None,
            wrapped_key: wrapped_key.map(str::to_owned),
            public_key_hash: "SEFTSA==".to_string(),
            transaction_id: "abc123".to_string(),
            application_data: None,
        }
    }

    #[test]
    fn test_load_private_key_rejects_ec_key() {
        let ec_pem = include_bytes!("../../tests/data/ec_private.key");
        let result = load_private_key(ec_pem);
        assert!(matches!(result, Err(DecryptError::KeyFormat(_))));
    }

    #[test]
    fn test_missing_wrapped_key() {
        let merchant = MerchantConfig::new(Vec::<u8>::new(), RSA_PRIVATE_KEY_PEM.to_vec());
        let payment_data = rsa_payment_data(header_with_wrapped_key(None));
        let result = decrypt(&payment_data, &merchant);
        assert!(matches!(result, Err(DecryptError::KeyUnwrap(_))));
    }

    #[test]
    fn test_unwrap_rejects_corrupted_wrapped_key() {
        let private_key = load_private_key(RSA_PRIVATE_KEY_PEM).unwrap();
        // a blob of the right size that was never OAEP-encrypted
        let bogus = BASE64.encode(vec![0x42u8; 256]);
        let result = unwrap_content_key(&private_key, &bogus);
        assert!(matches!(result, Err(DecryptError::KeyUnwrap(_))));
    }

    #[test]
    fn test_unwrap_rejects_invalid_base64() {
        let private_key = load_private_key(RSA_PRIVATE_KEY_PEM).unwrap();
        let result = unwrap_content_key(&private_key, "###");
        assert!(matches!(result, Err(DecryptError::KeyUnwrap(_))));
    }
}
