//! Phrasecloak - reversible word obfuscation under phrase encryption
//!
//! A deterministic byte-transformation pipeline that obfuscates each word of
//! a secret phrase before the whole assembly is sealed with standard
//! symmetric encryption, plus the codec for the "reverse key" that records
//! how to invert the pipeline.
//!
//! ## Transform Pipeline
//!
//! Per word, on the encrypt path:
//!
//! ```text
//! Word → Derive Order → Transforms ×12 → Blob Assembly → Base64 → AES-256-CBC → Envelope
//!            ↓
//!       Reverse Key (nibble-packed, base64)
//! ```
//!
//! - **Derive Order**: Fisher-Yates over the 12 registry indices, driven by
//!   a deterministic PRNG seeded with `password + word`
//! - **Transforms**: twelve invertible byte transforms; indices 6-11 are
//!   keyed by the password and the order checksum
//! - **Blob Assembly**: 2-byte big-endian length prefix per word
//! - **AES-256-CBC**: PBKDF2-derived key, random salt and IV per message
//!
//! Decryption inverts each stage, walking every word's transform order
//! backwards. The twelve transforms are obfuscation layered on top of real
//! encryption, not a cipher in their own right; their exact bit-level
//! behavior is preserved for interoperability with existing ciphertexts.
//!
//! ## Example
//!
//! ```no_run
//! use phrasecloak::{encrypt_phrase, decrypt_phrase};
//!
//! let sealed = encrypt_phrase("cat dog fish bird", "MySecre!Password123").unwrap();
//! let phrase = decrypt_phrase(
//!     &sealed.encrypted_data,
//!     &sealed.reverse_key,
//!     "MySecre!Password123",
//! ).unwrap();
//! assert_eq!(phrase, "cat dog fish bird");
//! ```

pub mod blob;
pub mod cipher;
pub mod envelope;
pub mod error;
pub mod pipeline;
pub mod revkey;
pub mod rng;
pub mod transform;

pub use envelope::{decrypt_phrase, encrypt_phrase, EncryptedPhrase};
pub use error::{CloakError, Result};
pub use pipeline::{deobfuscate_word, obfuscate_word};
pub use revkey::{pack_reverse_key, unpack_reverse_key};
