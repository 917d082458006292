use hmac::{Hmac, Mac};
use listings::payloads::NewListing;
use sha2::Sha256;

use crate::error::AppError::{self, MalformedPayload};

/// Ids are client-supplied strings; cap them so redis keys stay bounded.
pub const MAX_ID_CHARS: usize = 100;

type HmacSha256 = Hmac<Sha256>;

pub fn validate_id(id: &str) -> Result<(), AppError> {
    if id.is_empty() || id.len() > MAX_ID_CHARS || id.chars().any(char::is_whitespace) {
        return Err(MalformedPayload);
    }

    Ok(())
}

pub fn validate_submission(submission: &NewListing) -> Result<(), AppError> {
    if submission.category.trim().is_empty() || submission.breed.trim().is_empty() {
        return Err(MalformedPayload);
    }

    Ok(())
}

/// Gateway callbacks carry `hex(HMAC-SHA256(order_id|payment_id))` under
/// the shared secret. Comparison happens inside the mac, in constant time.
pub fn verify_signature(secret: &str, order_id: &str, payment_id: &str, signature: &str) -> bool {
    let Ok(raw) = hex::decode(signature) else {
        return false;
    };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret.as_bytes()) else {
        return false;
    };
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());

    mac.verify_slice(&raw).is_ok()
}

/// The signature a well-behaved gateway would send. Test helper and
/// sandbox convenience.
pub fn sign(secret: &str, order_id: &str, payment_id: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac accepts any key size");
    mac.update(order_id.as_bytes());
    mac.update(b"|");
    mac.update(payment_id.as_bytes());

    hex::encode(mac.finalize().into_bytes())
}
