mod payment;
mod provider_service;

pub use payment::{ManualReceiptVerifier, PaymentVerifier};
pub use provider_service::ProviderService;
