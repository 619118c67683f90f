//! # Payment Signature Verification
//!
//! Razorpay signs every successful checkout with
//! `hex(HMAC-SHA256(key_secret, order_id + "|" + payment_id))`.
//! Verification recomputes that value and compares it in constant time.

use hmac::{Hmac, Mac};
use pay_core::{CallbackPayload, PaymentError, PaymentResult};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the expected lowercase-hex signature for an order/payment pair.
pub fn compute_payment_signature(order_id: &str, payment_id: &str, secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a callback signature. Pure: same inputs, same answer.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    signature: &str,
    secret: &str,
) -> bool {
    let expected = compute_payment_signature(order_id, payment_id, secret);
    constant_time_compare(&expected, signature)
}

/// Byte comparison that inspects every byte regardless of where the first
/// difference is. Only the length is allowed to leak.
fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}

/// Verifier bound to the shared key secret
#[derive(Clone)]
pub struct PaymentSignatureVerifier {
    secret: String,
}

impl PaymentSignatureVerifier {
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
        }
    }

    /// Check a parsed callback, returning `SignatureMismatch` on failure.
    pub fn verify(&self, payload: &CallbackPayload) -> PaymentResult<()> {
        if verify_payment_signature(
            &payload.razorpay_order_id,
            &payload.razorpay_payment_id,
            &payload.razorpay_signature,
            &self.secret,
        ) {
            Ok(())
        } else {
            Err(PaymentError::SignatureMismatch)
        }
    }
}

impl std::fmt::Debug for PaymentSignatureVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PaymentSignatureVerifier")
            .field("secret", &"[redacted]")
            .finish()
    }
}
