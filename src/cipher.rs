//! Transit cipher: the opaque confidentiality layer under the obfuscation
//! pipeline.
//!
//! AES-256-CBC with PKCS#7 padding; key derived per message with
//! PBKDF2-HMAC-SHA256 over a random salt. Transit string layout:
//!
//! ```text
//! hex(salt)[32 chars] || hex(iv)[32 chars] || base64(ciphertext)
//! ```
//!
//! Salt and IV are drawn fresh from the OS CSPRNG on every call, so
//! ciphertext bytes differ per run even for identical plaintext. Derived key
//! material is zeroized after use.

use crate::error::{CloakError, Result};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use cbc::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use hmac::Hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;
use zeroize::Zeroize;

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

const PBKDF2_ITERATIONS: u32 = 600_000;
const KEY_SIZE: usize = 32;
const SALT_SIZE: usize = 16;
const IV_SIZE: usize = 16;

/// Hex-encoded prefix length: salt and IV, 32 chars each.
const TRANSIT_HEADER_CHARS: usize = 2 * (SALT_SIZE + IV_SIZE);

fn derive_key(password: &[u8], salt: &[u8]) -> Result<[u8; KEY_SIZE]> {
    let mut key = [0u8; KEY_SIZE];
    pbkdf2::pbkdf2::<Hmac<Sha256>>(password, salt, PBKDF2_ITERATIONS, &mut key)
        .map_err(|_| CloakError::KeyDerivation)?;
    Ok(key)
}

/// Encrypt plaintext bytes into a transit string.
pub fn encrypt_opaque(plaintext: &[u8], password: &[u8]) -> Result<String> {
    let mut salt = [0u8; SALT_SIZE];
    OsRng.fill_bytes(&mut salt);
    let mut iv = [0u8; IV_SIZE];
    OsRng.fill_bytes(&mut iv);

    let mut key = derive_key(password, &salt)?;
    let cipher = Aes256CbcEnc::new_from_slices(&key, &iv).map_err(|_| CloakError::KeyDerivation);
    key.zeroize();
    let ciphertext = cipher?.encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    Ok(format!(
        "{}{}{}",
        hex::encode(salt),
        hex::encode(iv),
        BASE64.encode(ciphertext)
    ))
}

/// Decrypt a transit string back to plaintext bytes.
///
/// Fails on a malformed transit layout, undecodable salt/IV/ciphertext, or
/// bad padding after decryption - the usual symptom of a wrong password.
pub fn decrypt_opaque(transit: &str, password: &[u8]) -> Result<Vec<u8>> {
    let raw = transit.as_bytes();
    if raw.len() < TRANSIT_HEADER_CHARS {
        return Err(CloakError::InvalidTransit(format!(
            "message too short: {} chars",
            raw.len()
        )));
    }
    let salt = hex::decode(&raw[..32])?;
    let iv = hex::decode(&raw[32..64])?;
    let ciphertext = BASE64.decode(&raw[64..])?;

    let mut key = derive_key(password, &salt)?;
    let cipher = Aes256CbcDec::new_from_slices(&key, &iv)
        .map_err(|_| CloakError::InvalidTransit("bad salt or IV length".into()));
    key.zeroize();

    cipher?
        .decrypt_padded_vec_mut::<Pkcs7>(&ciphertext)
        .map_err(|_| CloakError::DecryptionFailed("invalid padding (wrong password?)".into()))
}
