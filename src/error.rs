//! Unified error type for payment token decryption
//!
//! Every failure mode of the public API maps to one variant here. Variants
//! between `KeyFormat` and `PlaintextFormat` describe a failed decryption
//! attempt for one specific merchant credential; a multi-merchant context
//! collects those into `Aggregate` instead of propagating the first one.

use std::fmt;
use thiserror::Error;

/// Unified error type for all payment token decryption operations
///
/// # Error Categories
///
/// - **Configuration**: the context was constructed without credentials
/// - **UnsupportedVersion**: the envelope carries an unknown version tag
/// - **KeyFormat / MerchantIdExtraction / KeyAgreement / KeyUnwrap /
///   Authentication / Base64 / PlaintextFormat**: one merchant credential
///   failed to decrypt the envelope
/// - **Aggregate**: every configured credential failed; per-credential
///   causes are available through [`DecryptError::attempts`]
#[derive(Debug, Error)]
pub enum DecryptError {
    /// No merchant configuration was provided at construction
    #[error("no merchant configuration provided for decryption context")]
    Configuration,

    /// The envelope's version tag is neither `EC_v1` nor `RSA_v1`
    #[error("unsupported decryption for payment data version: {0}")]
    UnsupportedVersion(String),

    /// The merchant private key could not be parsed or is of the wrong kind
    #[error("invalid merchant private key: {0}")]
    KeyFormat(String),

    /// The merchant identifier extension could not be read from the certificate
    #[error("unable to extract merchant ID from certificate: {0}")]
    MerchantIdExtraction(String),

    /// ECDH with the token's ephemeral public key failed
    #[error("key agreement failed: {0}")]
    KeyAgreement(String),

    /// RSA-OAEP unwrap of the content key failed
    #[error("failed to unwrap content key: {0}")]
    KeyUnwrap(String),

    /// AES-GCM tag verification failed (wrong key or tampered ciphertext)
    #[error("payment data authentication failed")]
    Authentication,

    /// The ciphertext blob is not valid base64
    #[error("base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The decrypted plaintext did not parse as a payment record
    #[error(
        "unexpected format of decrypted data, check payment processing certificate and its private key"
    )]
    PlaintextFormat(#[source] serde_json::Error),

    /// Every configured merchant credential failed to decrypt the envelope
    ///
    /// The top-level message is intentionally generic; which credential and
    /// which cryptographic step failed is only visible by inspecting the
    /// per-attempt errors.
    #[error("failed to decrypt payment data using provided merchant configuration(s)")]
    Aggregate(Vec<AttemptError>),
}

impl DecryptError {
    /// Per-credential errors collected by a failed multi-merchant trial
    ///
    /// Empty for every variant other than `Aggregate`. Order matches the
    /// order in which credentials were supplied to the context.
    pub fn attempts(&self) -> &[AttemptError] {
        match self {
            Self::Aggregate(errors) => errors,
            _ => &[],
        }
    }

    /// Returns true if this error describes an unusable context configuration
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, Self::Configuration)
    }

    /// Returns true if the envelope's version tag was not recognized
    pub fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion(_))
    }
}

/// One failed decryption attempt, annotated with the credential it used
///
/// Built at the catch site of the context's trial loop; the underlying
/// error is owned, never a mutated shared instance.
#[derive(Debug)]
pub struct AttemptError {
    merchant: Option<String>,
    source: DecryptError,
}

impl AttemptError {
    pub(crate) fn new(merchant: Option<String>, source: DecryptError) -> Self {
        Self { merchant, source }
    }

    /// The credential's diagnostic identifier, if one was configured
    pub fn merchant_identifier(&self) -> Option<&str> {
        self.merchant.as_deref()
    }

    /// The error raised by this attempt
    pub fn error(&self) -> &DecryptError {
        &self.source
    }
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.merchant {
            Some(identifier) => write!(f, "merchant {}: {}", identifier, self.source),
            None => write!(f, "merchant <unnamed>: {}", self.source),
        }
    }
}

impl std::error::Error for AttemptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_version_names_tag() {
        let err = DecryptError::UnsupportedVersion("EC_v2".to_string());
        assert_eq!(
            err.to_string(),
            "unsupported decryption for payment data version: EC_v2"
        );
        assert!(err.is_unsupported_version());
    }

    #[test]
    fn test_aggregate_message_is_generic() {
        let err = DecryptError::Aggregate(vec![
            AttemptError::new(Some("old".to_string()), DecryptError::Authentication),
            AttemptError::new(None, DecryptError::Authentication),
        ]);
        let msg = err.to_string();
        assert!(!msg.contains("old"));
        assert!(!msg.contains("authentication"));
        assert_eq!(err.attempts().len(), 2);
    }

    #[test]
    fn test_attempt_error_labels_credential() {
        let labeled = AttemptError::new(
            Some("primary".to_string()),
            DecryptError::KeyAgreement("bad point".to_string()),
        );
        assert_eq!(
            labeled.to_string(),
            "merchant primary: key agreement failed: bad point"
        );

        let unlabeled = AttemptError::new(None, DecryptError::Authentication);
        assert_eq!(
            unlabeled.to_string(),
            "merchant <unnamed>: payment data authentication failed"
        );
    }

    #[test]
    fn test_attempt_error_chains_source() {
        use std::error::Error;

        let err = AttemptError::new(None, DecryptError::Authentication);
        let source = err.source().expect("attempt error carries its cause");
        assert_eq!(source.to_string(), "payment data authentication failed");
    }

    #[test]
    fn test_attempts_is_empty_for_non_aggregate() {
        assert!(DecryptError::Configuration.attempts().is_empty());
        assert!(DecryptError::Configuration.is_configuration_error());
    }
}
