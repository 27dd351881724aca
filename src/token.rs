//! Wire types for the Apple Pay payment token
//!
//! `PaymentData` is the `paymentData` dictionary of the token JSON:
//! <https://developer.apple.com/library/ios/documentation/PassKit/Reference/PaymentTokenJSON/PaymentTokenJSON.html>
//!
//! The remaining types mirror the Apple Pay JS payment structures that wrap
//! the token on the web, so integrators can deserialize the full payload and
//! hand `payment.token.payment_data` to the decryption context.

use serde::{Deserialize, Serialize};

/// Version tag of the elliptic-curve encryption scheme
pub const VERSION_EC_V1: &str = "EC_v1";

/// Version tag of the RSA encryption scheme
pub const VERSION_RSA_V1: &str = "RSA_v1";

/// Encrypted payment data dictionary from the wallet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    /// Encryption scheme tag, `EC_v1` or `RSA_v1` on the wire
    pub version: String,
    pub header: PaymentHeader,
    /// Encrypted payment data, Base64 encoded
    pub data: String,
    /// Signature of the payment and header data, Base64 encoded
    ///
    /// Carried verbatim; this crate does not verify it.
    pub signature: String,
}

/// Token header carrying the per-scheme key material
///
/// Exactly one of `ephemeral_public_key` (`EC_v1`) and `wrapped_key`
/// (`RSA_v1`) is present on a well-formed token; the version tag selects
/// which one the decryption path reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentHeader {
    /// Ephemeral public key as a Base64 SPKI string, `EC_v1` only
    #[serde(rename = "ephemeralPublicKey", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub ephemeral_public_key: Option<String>,

    /// RSA-wrapped content key, Base64 encoded, `RSA_v1` only
    #[serde(rename = "wrappedKey", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub wrapped_key: Option<String>,

    /// SHA-256 hash of the merchant's public key, Base64 encoded
    #[serde(rename = "publicKeyHash")]
    pub public_key_hash: String,

    /// Transaction identifier as a hexadecimal string
    #[serde(rename = "transactionId")]
    pub transaction_id: String,

    /// Optional hash of the merchant's applicationData, hex encoded
    #[serde(rename = "applicationData", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub application_data: Option<String>,
}

/// Payment structure returned by the Apple Pay JS API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayPayment {
    pub token: ApplePayPaymentToken,
    #[serde(rename = "billingContact", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub billing_contact: Option<ApplePayPaymentContact>,
    #[serde(rename = "shippingContact", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub shipping_contact: Option<ApplePayPaymentContact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayPaymentToken {
    #[serde(rename = "paymentMethod")]
    pub payment_method: ApplePayPaymentMethod,
    #[serde(
        rename = "transactionIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub transaction_identifier: Option<String>,
    #[serde(rename = "paymentData", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub payment_data: Option<PaymentData>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayPaymentMethod {
    #[serde(rename = "displayName", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub network: Option<String>,
    /// `debit`, `credit`, `prepaid` or `store`
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub method_type: Option<String>,
    #[serde(rename = "paymentPass", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub payment_pass: Option<ApplePayPaymentPass>,
    #[serde(rename = "billingContact", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub billing_contact: Option<ApplePayPaymentContact>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayPaymentPass {
    #[serde(rename = "primaryAccountIdentifier")]
    pub primary_account_identifier: String,
    #[serde(rename = "primaryAccountNumberSuffix")]
    pub primary_account_number_suffix: String,
    #[serde(
        rename = "deviceAccountIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub device_account_identifier: Option<String>,
    #[serde(
        rename = "deviceAccountNumberSuffix",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub device_account_number_suffix: Option<String>,
    /// `activated`, `requiresActivation`, `activating`, `suspended` or
    /// `deactivated`
    #[serde(rename = "activationState")]
    pub activation_state: String,
}

/// Contact information collected by the Apple Pay sheet
///
/// Every field is optional in practice; which ones arrive depends on the
/// contact fields the merchant requested.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayPaymentContact {
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(rename = "emailAddress", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub email_address: Option<String>,
    #[serde(rename = "givenName", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub given_name: Option<String>,
    #[serde(rename = "familyName", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub family_name: Option<String>,
    #[serde(rename = "phoneticGivenName", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub phonetic_given_name: Option<String>,
    #[serde(
        rename = "phoneticFamilyName",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub phonetic_family_name: Option<String>,
    #[serde(rename = "addressLines", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub address_lines: Option<Vec<String>>,
    #[serde(rename = "subLocality", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub sub_locality: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub locality: Option<String>,
    #[serde(rename = "postalCode", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub postal_code: Option<String>,
    #[serde(
        rename = "subAdministrativeArea",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub sub_administrative_area: Option<String>,
    #[serde(
        rename = "administrativeArea",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub administrative_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub country: Option<String>,
    #[serde(rename = "countryCode", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub country_code: Option<String>,
}
