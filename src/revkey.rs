//! Reverse-key codec.
//!
//! The reverse key is the ordered list of per-word transform orders. The
//! current wire form packs each order's twelve indices two-per-byte (high
//! nibble first), six bytes per word, and base64-encodes the concatenation.
//! An older client emitted base64 over the JSON text of the list itself;
//! that legacy form must stay decodable indefinitely, so unpacking tries the
//! structured-list parse first and only then falls back to the packed codec.

use crate::error::{CloakError, Result};
use crate::transform::TRANSFORM_COUNT;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

/// Packed size of one word's order: twelve 4-bit indices.
pub const PACKED_ORDER_BYTES: usize = TRANSFORM_COUNT / 2;

/// Pack per-word transform orders into the base64 nibble-packed wire form.
///
/// Every order must hold exactly twelve entries; anything else is a
/// structural error, since the packed form has no per-word length marker.
pub fn pack_reverse_key(orders: &[Vec<u8>]) -> Result<String> {
    let mut buffer = Vec::with_capacity(orders.len() * PACKED_ORDER_BYTES);
    for order in orders {
        if order.len() != TRANSFORM_COUNT {
            return Err(CloakError::InvalidOrderLength {
                expected: TRANSFORM_COUNT,
                got: order.len(),
            });
        }
        for pair in order.chunks(2) {
            buffer.push(((pair[0] & 0x0f) << 4) | (pair[1] & 0x0f));
        }
    }
    Ok(BASE64.encode(&buffer))
}

/// Unpack a reverse key from its transport string.
///
/// Tries the legacy structured-list form first: if the base64 payload
/// decodes to JSON `[[...], ...]`, that is the key. Otherwise the decoded
/// bytes must be the packed form - length divisible by six, each six-byte
/// group unpacking high-nibble-first into one twelve-entry order.
pub fn unpack_reverse_key(text: &str) -> Result<Vec<Vec<u8>>> {
    let bytes = BASE64.decode(text)?;

    if let Ok(orders) = serde_json::from_slice::<Vec<Vec<u8>>>(&bytes) {
        return Ok(orders);
    }

    if bytes.len() % PACKED_ORDER_BYTES != 0 {
        return Err(CloakError::MalformedReverseKey(format!(
            "packed length {} is not a multiple of {}",
            bytes.len(),
            PACKED_ORDER_BYTES
        )));
    }

    let orders = bytes
        .chunks(PACKED_ORDER_BYTES)
        .map(|group| {
            let mut order = Vec::with_capacity(TRANSFORM_COUNT);
            for &b in group {
                order.push((b >> 4) & 0x0f);
                order.push(b & 0x0f);
            }
            order
        })
        .collect();
    Ok(orders)
}
