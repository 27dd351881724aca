//! Decryption context and merchant credential configuration
//!
//! A context owns an ordered list of merchant credentials and tries each in
//! turn, which is the whole of the rotation/fallback policy: the caller
//! decides the order (oldest-first or newest-first), the context only
//! honors it. A primary/secondary pair is the two-element case of the same
//! list.

use std::fmt;

use crate::error::{AttemptError, DecryptError};
use crate::record::DecryptedPaymentData;
use crate::strategy;
use crate::token::{PaymentData, VERSION_EC_V1, VERSION_RSA_V1};

/// One merchant's decryption credentials
///
/// The certificate is the payment processing certificate issued for the
/// merchant, the private key is the one created alongside its signing
/// request; both in PEM form. Credentials are immutable once handed to a
/// context.
#[derive(Clone)]
pub struct MerchantConfig {
    /// Optional opaque identifier, used only to label errors
    pub identifier: Option<String>,
    /// Payment processing certificate in PEM form
    pub certificate_pem: Vec<u8>,
    /// Payment processing private key in PEM form
    pub private_key_pem: Vec<u8>,
}

impl MerchantConfig {
    pub fn new(certificate_pem: impl Into<Vec<u8>>, private_key_pem: impl Into<Vec<u8>>) -> Self {
        Self {
            identifier: None,
            certificate_pem: certificate_pem.into(),
            private_key_pem: private_key_pem.into(),
        }
    }

    /// Attach an identifier under which this credential appears in
    /// aggregate errors
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = Some(identifier.into());
        self
    }
}

// Key material stays out of debug output.
impl fmt::Debug for MerchantConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerchantConfig")
            .field("identifier", &self.identifier)
            .field("certificate_pem", &format_args!("[{} bytes]", self.certificate_pem.len()))
            .field("private_key_pem", &format_args!("[{} bytes]", self.private_key_pem.len()))
            .finish()
    }
}

/// Context used for decrypting Apple Pay payment tokens
///
/// Holds only immutable credential bytes; a single context can be reused
/// across sequential or concurrent `decrypt` calls.
///
/// # Example
///
/// ```no_run
/// use apple_pay_decrypt::{MerchantConfig, PaymentTokenContext, PaymentData};
///
/// # fn example(payment_data: &PaymentData) -> Result<(), Box<dyn std::error::Error>> {
/// let certificate_pem = std::fs::read("payment_processing.pem")?;
/// let private_key_pem = std::fs::read("private.key")?;
///
/// let context = PaymentTokenContext::new(vec![MerchantConfig::new(
///     certificate_pem,
///     private_key_pem,
/// )])?;
///
/// let record = context.decrypt(payment_data)?;
/// println!("{}", record.application_primary_account_number);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PaymentTokenContext {
    merchants: Vec<MerchantConfig>,
}

impl PaymentTokenContext {
    /// Create a context over an ordered, non-empty list of credentials
    ///
    /// Fails with [`DecryptError::Configuration`] when the list is empty.
    pub fn new(merchants: Vec<MerchantConfig>) -> Result<Self, DecryptError> {
        if merchants.is_empty() {
            return Err(DecryptError::Configuration);
        }

        Ok(Self { merchants })
    }

    /// Decrypt a payment token envelope into its plaintext record
    ///
    /// With a single configured credential the strategy error propagates
    /// as-is. With several, credentials are tried in order: the first
    /// success wins, and only if every credential fails does the call
    /// return [`DecryptError::Aggregate`] with the per-credential causes in
    /// trial order.
    pub fn decrypt(
        &self,
        payment_data: &PaymentData,
    ) -> Result<DecryptedPaymentData, DecryptError> {
        if let [merchant] = self.merchants.as_slice() {
            return Self::decrypt_for_merchant(payment_data, merchant);
        }

        let mut attempts = Vec::with_capacity(self.merchants.len());
        for merchant in &self.merchants {
            match Self::decrypt_for_merchant(payment_data, merchant) {
                Ok(record) => return Ok(record),
                // the version tag is credential independent; trying further
                // credentials cannot change it
                Err(error @ DecryptError::UnsupportedVersion(_)) => return Err(error),
                Err(error) => {
                    attempts.push(AttemptError::new(merchant.identifier.clone(), error))
                }
            }
        }

        Err(DecryptError::Aggregate(attempts))
    }

    fn decrypt_for_merchant(
        payment_data: &PaymentData,
        merchant: &MerchantConfig,
    ) -> Result<DecryptedPaymentData, DecryptError> {
        match payment_data.version.as_str() {
            VERSION_EC_V1 => strategy::ec::decrypt(payment_data, merchant),
            VERSION_RSA_V1 => strategy::rsa::decrypt(payment_data, merchant),
            other => Err(DecryptError::UnsupportedVersion(other.to_string())),
        }
    }
}
