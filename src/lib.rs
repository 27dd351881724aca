mod context;
mod error;
mod record;
mod strategy;
mod token;

pub use context::{MerchantConfig, PaymentTokenContext};
pub use error::{AttemptError, DecryptError};
pub use record::{
    AuthenticationResponse, CardArt, CardMetadata, DecryptedPaymentData, EmvPaymentData,
    MerchantTokenMetadata, PaymentDetails, ThreeDSecurePaymentData,
};
pub use token::{
    ApplePayPayment, ApplePayPaymentContact, ApplePayPaymentMethod, ApplePayPaymentPass,
    ApplePayPaymentToken, PaymentData, PaymentHeader, VERSION_EC_V1, VERSION_RSA_V1,
};
