use async_trait::async_trait;

use crate::core::error::Result;

/// Seam for payment confirmation. The directory only ever sees the artifact
/// of a payment (a transaction id string), so verification is pluggable:
/// today a manual receipt check, later a real payment-channel lookup.
#[async_trait]
pub trait PaymentVerifier: Send + Sync {
    /// Returns whether the submitted transaction id counts as a payment
    async fn verify(&self, transaction_id: &str) -> Result<bool>;
}

/// Phase-1 verifier for the manual EasyPaisa flow: the submitter pays
/// out-of-band and types in whatever id they received. Presence of a
/// non-empty id is the whole check.
pub struct ManualReceiptVerifier;

#[async_trait]
impl PaymentVerifier for ManualReceiptVerifier {
    async fn verify(&self, transaction_id: &str) -> Result<bool> {
        Ok(!transaction_id.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn manual_verifier_only_requires_presence() {
        let verifier = ManualReceiptVerifier;

        assert!(!verifier.verify("").await.unwrap());
        assert!(!verifier.verify("   ").await.unwrap());
        assert!(verifier.verify("TX-12345").await.unwrap());
        // No well-formedness check at all
        assert!(verifier.verify("anything goes").await.unwrap());
    }
}
