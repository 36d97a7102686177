//! Whole-phrase encryption and the JSON envelope around it.
//!
//! Encrypt path: split the phrase on single spaces, obfuscate each word,
//! assemble the length-prefixed blob, base64 it, hand the base64 text to the
//! transit cipher, and wrap the result in a versioned `{v, data}` envelope.
//! The packed reverse key travels alongside as its own string.
//!
//! Decrypt path: the mirror walk. The envelope parse is lenient - input that
//! is not a versioned envelope is treated as a bare transit string, which is
//! how older clients shipped it.

use crate::blob::{assemble_blob, disassemble_blob};
use crate::cipher::{decrypt_opaque, encrypt_opaque};
use crate::error::Result;
use crate::pipeline::{deobfuscate_word, obfuscate_word};
use crate::revkey::{pack_reverse_key, unpack_reverse_key};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

/// Envelope version emitted by this crate.
pub const ENVELOPE_VERSION: u32 = 2;

/// Result of encrypting a phrase: both strings are needed to decrypt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EncryptedPhrase {
    /// Versioned envelope JSON wrapping the transit string.
    #[serde(rename = "encryptedData")]
    pub encrypted_data: String,
    /// Packed reverse key, base64.
    #[serde(rename = "reverseKey")]
    pub reverse_key: String,
}

/// Versioned wrapper around the transit string.
#[derive(Serialize, Deserialize)]
struct DataEnvelope {
    v: u32,
    data: String,
}

/// Encrypt a space-separated phrase under a password.
pub fn encrypt_phrase(phrase: &str, password: &str) -> Result<EncryptedPhrase> {
    let mut transformed = Vec::new();
    let mut orders = Vec::new();

    // Split on single spaces, not general whitespace: word boundaries are
    // part of the wire-compatible behavior.
    for word in phrase.split(' ') {
        let (bytes, order) = obfuscate_word(word.as_bytes(), password.as_bytes());
        transformed.push(bytes);
        orders.push(order.to_vec());
    }

    let blob = assemble_blob(&transformed);
    let blob_b64 = BASE64.encode(&blob);
    let transit = encrypt_opaque(blob_b64.as_bytes(), password.as_bytes())?;

    let envelope = DataEnvelope {
        v: ENVELOPE_VERSION,
        data: transit,
    };

    Ok(EncryptedPhrase {
        encrypted_data: serde_json::to_string(&envelope)?,
        reverse_key: pack_reverse_key(&orders)?,
    })
}

/// Decrypt an encrypted phrase back to its original text.
///
/// Accepts both the versioned `{v, data}` envelope and a bare transit
/// string, and both reverse-key wire forms. If the blob and reverse key
/// disagree in length the word walk soft-stops, so the recovered phrase can
/// be shorter than the original; see [`disassemble_blob`].
pub fn decrypt_phrase(encrypted_data: &str, reverse_key: &str, password: &str) -> Result<String> {
    let orders = unpack_reverse_key(reverse_key)?;

    let transit = match serde_json::from_str::<DataEnvelope>(encrypted_data) {
        Ok(envelope) if envelope.v == ENVELOPE_VERSION => envelope.data,
        _ => encrypted_data.to_string(),
    };

    let blob_b64 = decrypt_opaque(&transit, password.as_bytes())?;
    let blob = BASE64.decode(String::from_utf8(blob_b64)?)?;

    let words = disassemble_blob(&blob, orders.len());
    let mut recovered = Vec::with_capacity(words.len());
    for (word, order) in words.iter().zip(&orders) {
        let bytes = deobfuscate_word(word, order, password.as_bytes())?;
        recovered.push(String::from_utf8(bytes)?);
    }
    Ok(recovered.join(" "))
}
