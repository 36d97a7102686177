//! Per-word obfuscation pipeline.
//!
//! Each word gets its own transform order (a full permutation of the twelve
//! registry indices, derived from a PRNG seeded with `password + word`) and
//! its own auxiliary seed (password bytes followed by the decimal rendering
//! of the order checksum). The order is the word's reverse-key entry: it is
//! all a holder of the password needs to invert the pipeline.

use crate::error::Result;
use crate::rng::Mulberry32;
use crate::transform::{Transform, REGISTRY, TRANSFORM_COUNT};

/// Prime modulus for the order checksum.
const CHECKSUM_MODULUS: u32 = 997;

/// Derive the transform order for one word: start from the natural order
/// [0, 1, ..., 11] and Fisher-Yates shuffle it with a PRNG seeded by the
/// literal concatenation of password and word.
pub fn derive_order(word: &[u8], password: &[u8]) -> [u8; TRANSFORM_COUNT] {
    let mut order = [0u8; TRANSFORM_COUNT];
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i as u8;
    }
    let seed: Vec<u8> = [password, word].concat();
    let mut rng = Mulberry32::from_bytes(&seed);
    for i in (1..TRANSFORM_COUNT).rev() {
        let j = rng.next_below(i + 1);
        order.swap(i, j);
    }
    order
}

/// Checksum of an order: the sum of its index values modulo 997. For a full
/// permutation of 0..11 this is always 66, but the formula is part of the
/// wire-compatible seed derivation and is kept as specified.
pub fn order_checksum(order: &[u8]) -> u32 {
    order.iter().map(|&i| i as u32).sum::<u32>() % CHECKSUM_MODULUS
}

/// Auxiliary seed for the keyed transforms: password bytes followed by the
/// decimal ASCII rendering of the order checksum.
fn combined_seed(password: &[u8], order: &[u8]) -> Vec<u8> {
    let checksum = order_checksum(order).to_string();
    [password, checksum.as_bytes()].concat()
}

/// Obfuscate one word: derive its order, then apply all twelve forward
/// transforms sequentially in that order. Returns the transformed bytes and
/// the order to record as the word's reverse-key entry.
pub fn obfuscate_word(word: &[u8], password: &[u8]) -> (Vec<u8>, [u8; TRANSFORM_COUNT]) {
    let order = derive_order(word, password);
    let seed = combined_seed(password, &order);

    let mut current = word.to_vec();
    for &index in &order {
        // A derived order is a permutation of the registry indices
        current = REGISTRY[index as usize].forward(&current, &seed);
    }
    (current, order)
}

/// Invert the pipeline for one word: recompute the auxiliary seed from the
/// stored order, then apply each transform's inverse walking the order
/// backwards, so the last-applied forward transform is undone first.
///
/// Fails only if the stored order holds an index outside the registry
/// (possible with a corrupted or hand-built reverse key).
pub fn deobfuscate_word(data: &[u8], order: &[u8], password: &[u8]) -> Result<Vec<u8>> {
    let seed = combined_seed(password, order);

    let mut current = data.to_vec();
    for &index in order.iter().rev() {
        let transform = Transform::from_index(index)?;
        current = transform.inverse(&current, &seed);
    }
    Ok(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sha2::{Digest, Sha256};

    const PASSWORD: &[u8] = b"MySecre!Password123";

    #[test]
    fn test_order_is_full_permutation() {
        let order = derive_order(b"cat", PASSWORD);
        let mut seen = [false; TRANSFORM_COUNT];
        for &i in &order {
            assert!((i as usize) < TRANSFORM_COUNT);
            assert!(!seen[i as usize], "duplicate index {}", i);
            seen[i as usize] = true;
        }
    }

    #[test]
    fn test_order_golden() {
        // Interop golden vector, shared across ports of this scheme
        let order = derive_order(b"cat", PASSWORD);
        assert_eq!(order, [5, 4, 7, 3, 11, 2, 6, 0, 1, 8, 9, 10]);
    }

    #[test]
    fn test_order_depends_on_word_and_password() {
        assert_ne!(derive_order(b"cat", PASSWORD), derive_order(b"dog", PASSWORD));
        assert_ne!(
            derive_order(b"cat", PASSWORD),
            derive_order(b"cat", b"other password")
        );
    }

    #[test]
    fn test_checksum() {
        assert_eq!(order_checksum(&[0, 1, 2]), 3);
        assert_eq!(order_checksum(&[]), 0);
        // Any permutation of 0..11 sums to 66
        assert_eq!(order_checksum(&derive_order(b"anything", PASSWORD)), 66);
    }

    #[test]
    fn test_obfuscate_golden() {
        // Interop golden vector, shared across ports of this scheme
        let (bytes, order) = obfuscate_word(b"cat", PASSWORD);
        assert_eq!(order, [5, 4, 7, 3, 11, 2, 6, 0, 1, 8, 9, 10]);
        assert_eq!(bytes.len(), 494);
        assert_eq!(
            hex::encode(Sha256::digest(&bytes)),
            "f378aba803f509817ae06708dfb7c24c453a2b9367a1bdfb24d390d2bb5b6eda"
        );
    }

    #[test]
    fn test_word_roundtrip() {
        for word in [&b"cat"[..], b"dog", b"fish", b"bird", b"a", b"hello-world"] {
            let (obfuscated, order) = obfuscate_word(word, PASSWORD);
            let recovered = deobfuscate_word(&obfuscated, &order, PASSWORD).unwrap();
            assert_eq!(recovered, word);
        }
    }

    #[test]
    fn test_empty_word_roundtrip() {
        let (obfuscated, order) = obfuscate_word(b"", PASSWORD);
        let recovered = deobfuscate_word(&obfuscated, &order, PASSWORD).unwrap();
        assert!(recovered.is_empty());
    }

    #[test]
    fn test_non_ascii_word_roundtrip() {
        let word = "\u{00fc}ber".as_bytes();
        let (obfuscated, order) = obfuscate_word(word, PASSWORD);
        assert_eq!(deobfuscate_word(&obfuscated, &order, PASSWORD).unwrap(), word);
    }

    #[test]
    fn test_deobfuscate_rejects_bad_index() {
        let err = deobfuscate_word(b"data", &[0, 13], PASSWORD);
        assert!(err.is_err());
    }

    #[test]
    fn test_wrong_password_garbles() {
        let (obfuscated, order) = obfuscate_word(b"fish", PASSWORD);
        // Wrong password still walks the pipeline, but the seeded inverses
        // run with the wrong key material.
        if let Ok(recovered) = deobfuscate_word(&obfuscated, &order, b"wrong") {
            assert_ne!(recovered, b"fish");
        }
    }
}
