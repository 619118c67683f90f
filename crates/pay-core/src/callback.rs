//! # Payment Callback
//!
//! The form-encoded payload the gateway (or the browser checkout redirect)
//! posts back after a payment attempt.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};

pub const PAYMENT_ID_FIELD: &str = "razorpay_payment_id";
pub const ORDER_ID_FIELD: &str = "razorpay_order_id";
pub const SIGNATURE_FIELD: &str = "razorpay_signature";

/// Parsed payment callback
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackPayload {
    pub razorpay_payment_id: String,
    pub razorpay_order_id: String,
    pub razorpay_signature: String,
}

impl CallbackPayload {
    pub fn new(
        payment_id: impl Into<String>,
        order_id: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            razorpay_payment_id: payment_id.into(),
            razorpay_order_id: order_id.into(),
            razorpay_signature: signature.into(),
        }
    }

    /// Parse a callback from a raw `application/x-www-form-urlencoded` body.
    ///
    /// Malformed encoding yields [`PaymentError::CallbackParse`]. Required
    /// fields are checked in the order payment id, order id, signature, and
    /// the first absent or empty one yields [`PaymentError::MissingParameter`].
    /// When a key repeats, its first value wins.
    pub fn from_form(body: &[u8]) -> PaymentResult<Self> {
        let pairs = parse_form(body)?;

        let payment_id = required(&pairs, PAYMENT_ID_FIELD, "payment_id")?;
        let order_id = required(&pairs, ORDER_ID_FIELD, "order_id")?;
        let signature = required(&pairs, SIGNATURE_FIELD, "signature")?;

        Ok(Self::new(payment_id, order_id, signature))
    }

    /// Message covered by the gateway signature: `order_id|payment_id`
    pub fn signed_message(&self) -> String {
        format!("{}|{}", self.razorpay_order_id, self.razorpay_payment_id)
    }
}

impl std::fmt::Debug for CallbackPayload {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CallbackPayload")
            .field("razorpay_payment_id", &self.razorpay_payment_id)
            .field("razorpay_order_id", &self.razorpay_order_id)
            .field("razorpay_signature", &"[redacted]")
            .finish()
    }
}

fn required(
    pairs: &[(String, String)],
    key: &str,
    field: &'static str,
) -> PaymentResult<String> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.clone())
        .filter(|v| !v.is_empty())
        .ok_or(PaymentError::MissingParameter { field })
}

/// Form decoding that only rejects what breaks the encoding itself: a `%`
/// not followed by two hex digits, or a `;` separator. Non-UTF-8 bytes are
/// decoded lossily and left for the signature check to judge.
fn parse_form(body: &[u8]) -> PaymentResult<Vec<(String, String)>> {
    if body.contains(&b';') || !escapes_well_formed(body) {
        return Err(PaymentError::CallbackParse);
    }

    serde_urlencoded::from_bytes::<Vec<(String, String)>>(body)
        .map_err(|_| PaymentError::CallbackParse)
}

fn escapes_well_formed(raw: &[u8]) -> bool {
    let mut i = 0;
    while i < raw.len() {
        if raw[i] == b'%' {
            let hex_pair = raw.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && raw.get(i + 2).is_some_and(u8::is_ascii_hexdigit);
            if !hex_pair {
                return false;
            }
            i += 3;
        } else {
            i += 1;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_complete_callback() {
        let body = b"razorpay_payment_id=pay_xyz&razorpay_order_id=order_abc&razorpay_signature=deadbeef";
        let payload = CallbackPayload::from_form(body).unwrap();

        assert_eq!(payload.razorpay_payment_id, "pay_xyz");
        assert_eq!(payload.razorpay_order_id, "order_abc");
        assert_eq!(payload.razorpay_signature, "deadbeef");
        assert_eq!(payload.signed_message(), "order_abc|pay_xyz");
    }

    #[test]
    fn test_percent_decoding() {
        let body = b"razorpay_payment_id=pay%5Fxyz&razorpay_order_id=order+abc&razorpay_signature=ab";
        let payload = CallbackPayload::from_form(body).unwrap();

        assert_eq!(payload.razorpay_payment_id, "pay_xyz");
        assert_eq!(payload.razorpay_order_id, "order abc");
    }

    #[test]
    fn test_missing_fields_named_in_order() {
        let err = CallbackPayload::from_form(b"razorpay_order_id=o&razorpay_signature=s").unwrap_err();
        assert!(matches!(err, PaymentError::MissingParameter { field: "payment_id" }));

        let err = CallbackPayload::from_form(b"razorpay_payment_id=p&razorpay_signature=s").unwrap_err();
        assert!(matches!(err, PaymentError::MissingParameter { field: "order_id" }));

        let err = CallbackPayload::from_form(b"razorpay_payment_id=p&razorpay_order_id=o").unwrap_err();
        assert!(matches!(err, PaymentError::MissingParameter { field: "signature" }));

        let err = CallbackPayload::from_form(b"").unwrap_err();
        assert!(matches!(err, PaymentError::MissingParameter { field: "payment_id" }));
    }

    #[test]
    fn test_empty_value_counts_as_missing() {
        let body = b"razorpay_payment_id=p&razorpay_order_id=&razorpay_signature=s";
        let err = CallbackPayload::from_form(body).unwrap_err();

        assert!(matches!(err, PaymentError::MissingParameter { field: "order_id" }));
    }

    #[test]
    fn test_first_value_wins() {
        let body = b"razorpay_payment_id=first&razorpay_payment_id=second&razorpay_order_id=o&razorpay_signature=s";
        let payload = CallbackPayload::from_form(body).unwrap();

        assert_eq!(payload.razorpay_payment_id, "first");
    }

    #[test]
    fn test_malformed_bodies() {
        assert!(matches!(
            CallbackPayload::from_form(b"razorpay_payment_id=%zz").unwrap_err(),
            PaymentError::CallbackParse
        ));
        assert!(matches!(
            CallbackPayload::from_form(b"razorpay_payment_id=abc%4").unwrap_err(),
            PaymentError::CallbackParse
        ));
        assert!(matches!(
            CallbackPayload::from_form(b"a=1;b=2").unwrap_err(),
            PaymentError::CallbackParse
        ));
    }

    #[test]
    fn test_non_utf8_bytes_are_not_parse_errors() {
        let body = b"razorpay_payment_id=pay_xyz&razorpay_order_id=order_abc&razorpay_signature=ab&notes=%ff";
        let payload = CallbackPayload::from_form(body).unwrap();
        assert_eq!(payload.razorpay_order_id, "order_abc");

        let mut raw = b"razorpay_payment_id=pay_xyz&razorpay_order_id=order_abc&razorpay_signature=ab&notes=".to_vec();
        raw.extend_from_slice(&[0xff, 0xfe]);
        let payload = CallbackPayload::from_form(&raw).unwrap();
        assert_eq!(payload.razorpay_payment_id, "pay_xyz");

        // Undecodable required field still reaches the signature check
        let payload = CallbackPayload::from_form(
            b"razorpay_payment_id=%ff&razorpay_order_id=o&razorpay_signature=s",
        )
        .unwrap();
        assert_eq!(payload.razorpay_payment_id, "\u{fffd}");

        assert!(matches!(
            CallbackPayload::from_form(&[0xff, 0xfe]).unwrap_err(),
            PaymentError::MissingParameter { field: "payment_id" }
        ));
    }

    #[test]
    fn test_debug_redacts_signature() {
        let payload = CallbackPayload::new("pay_xyz", "order_abc", "deadbeef");
        let debug = format!("{:?}", payload);

        assert!(debug.contains("pay_xyz"));
        assert!(!debug.contains("deadbeef"));
    }
}
