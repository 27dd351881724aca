//! Decrypted payment record types
//!
//! The record is exactly the JSON object recovered from the decrypted
//! ciphertext; no semantic validation is applied beyond the typed parse.

use serde::{Deserialize, Serialize};

/// Plaintext payment-authorization record recovered from a token
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecryptedPaymentData {
    /// Device-specific account number of the card that funds this
    /// transaction, a.k.a. "DPAN"
    #[serde(rename = "applicationPrimaryAccountNumber")]
    pub application_primary_account_number: String,

    /// Card expiration date in the format YYMMDD
    #[serde(rename = "applicationExpirationDate")]
    pub application_expiration_date: String,

    /// ISO 4217 numeric currency code, as a string to preserve leading zeros
    #[serde(rename = "currencyCode")]
    pub currency_code: String,

    /// Transaction amount in minor currency units
    #[serde(rename = "transactionAmount")]
    pub transaction_amount: u64,

    /// Optional cardholder name
    #[serde(rename = "cardholderName", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub cardholder_name: Option<String>,

    /// Hex-encoded device manufacturer identifier
    #[serde(rename = "deviceManufacturerIdentifier")]
    pub device_manufacturer_identifier: String,

    /// For a multitoken request, submerchant responses containing cryptograms
    #[serde(
        rename = "authenticationResponses",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub authentication_responses: Option<Vec<AuthenticationResponse>>,

    /// For a merchant token request, the provisioned merchant token
    /// identifier from the payment network
    #[serde(
        rename = "merchantTokenIdentifier",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub merchant_token_identifier: Option<String>,

    /// For a merchant token request, card art and the token's last four
    /// digits and expiration date
    #[serde(
        rename = "merchantTokenMetadata",
        skip_serializing_if = "Option::is_none"
    )]
    #[serde(default)]
    pub merchant_token_metadata: Option<MerchantTokenMetadata>,

    /// Scheme-specific payment data, tagged by `paymentDataType` on the wire
    #[serde(flatten)]
    pub payment_details: PaymentDetails,
}

/// Scheme-specific payment data
///
/// Appears on the wire as the `paymentDataType` discriminator next to a
/// `paymentData` dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "paymentDataType", content = "paymentData")]
pub enum PaymentDetails {
    /// Online payment cryptogram, as defined by 3-D Secure
    #[serde(rename = "3DSecure")]
    ThreeDSecure(ThreeDSecurePaymentData),

    /// Output from the Secure Element in the EMV payment structure
    #[serde(rename = "EMV")]
    Emv(EmvPaymentData),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreeDSecurePaymentData {
    /// Online payment cryptogram, as defined by 3-D Secure, Base64 encoded
    #[serde(rename = "onlinePaymentCryptogram")]
    pub online_payment_cryptogram: String,

    /// ECI indicator, as defined by 3-D Secure
    ///
    /// When present it must be passed on to the payment processor or the
    /// transaction fails.
    #[serde(rename = "eciIndicator", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub eci_indicator: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmvPaymentData {
    /// The EMV payment structure, Base64 encoded
    #[serde(rename = "emvData")]
    pub emv_data: String,

    /// The PIN encrypted under the bank's key, hex encoded
    #[serde(rename = "encryptedPINData", skip_serializing_if = "Option::is_none")]
    #[serde(default)]
    pub encrypted_pin_data: Option<String>,
}

/// Submerchant response for a multitoken request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    /// The submerchant identifier as provided by the coordinator merchant
    #[serde(rename = "merchantIdentifier")]
    pub merchant_identifier: String,

    /// Payment network-generated cryptogram for the submerchant
    #[serde(rename = "authenticationData")]
    pub authentication_data: String,

    /// The authorized amount for the submerchant
    #[serde(rename = "transactionAmount")]
    pub transaction_amount: String,
}

/// Card art and card data for a merchant token request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantTokenMetadata {
    /// Art representing the card related to the merchant token
    #[serde(rename = "cardArt")]
    pub card_art: Vec<CardArt>,

    /// Expiration date and suffix of the card related to the merchant token
    #[serde(rename = "cardMetadata")]
    pub card_metadata: CardMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardArt {
    /// A name representing the bank and the card used for the transaction
    pub name: String,
    /// The card type
    #[serde(rename = "type")]
    pub art_type: String,
    /// The URL for downloading the card art, as provided by the issuing bank
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardMetadata {
    /// The card's expiration date
    #[serde(rename = "expirationDate")]
    pub expiration_date: String,
    /// The last four digits of the card's number
    #[serde(rename = "fpanSuffix")]
    pub fpan_suffix: String,
}
