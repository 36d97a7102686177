//! Seeded transforms (indices 6-11).
//!
//! Each consumes auxiliary seed bytes (password || checksum decimals) in
//! addition to the input. Transforms that draw randomness construct their own
//! [`Mulberry32`] from the seed, so replaying the same seed reproduces the
//! identical permutation, filler stream, or block size on the inverse side.

use crate::rng::Mulberry32;

/// Filler alphabet for the interleave transform.
const FILLER_ALPHABET: &[u8; 36] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Transform 6 forward: Fisher-Yates permutation of the bytes, driven by a
/// PRNG seeded with the auxiliary seed.
pub fn shuffle(input: &[u8], seed: &[u8]) -> Vec<u8> {
    let mut output = input.to_vec();
    let mut rng = Mulberry32::from_bytes(seed);
    for i in (1..output.len()).rev() {
        let j = rng.next_below(i + 1);
        output.swap(i, j);
    }
    output
}

/// Transform 6 inverse: replay the identical index permutation from the same
/// seed, then apply its functional inverse mapping. Replaying the forward
/// swap sequence would not undo the shuffle; the inverse mapping does.
pub fn unshuffle(input: &[u8], seed: &[u8]) -> Vec<u8> {
    let n = input.len();
    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = Mulberry32::from_bytes(seed);
    for i in (1..n).rev() {
        let j = rng.next_below(i + 1);
        indices.swap(i, j);
    }
    let mut output = vec![0u8; n];
    for (i, &b) in input.iter().enumerate() {
        output[indices[i]] = b;
    }
    output
}

/// Transform 7: XOR every byte with the seed, cycling the seed to the input
/// length. Self-inverse. An empty seed leaves the input unchanged.
pub fn xor_cycle(input: &[u8], seed: &[u8]) -> Vec<u8> {
    if seed.is_empty() {
        return input.to_vec();
    }
    input
        .iter()
        .enumerate()
        .map(|(i, &b)| b ^ seed[i % seed.len()])
        .collect()
}

/// Transform 8 forward: insert one pseudo-random filler byte after every
/// input byte, doubling the length. Filler comes from a 36-character
/// alphabet via a PRNG keyed by the seed.
pub fn interleave(input: &[u8], seed: &[u8]) -> Vec<u8> {
    let mut rng = Mulberry32::from_bytes(seed);
    let mut output = Vec::with_capacity(input.len() * 2);
    for &b in input {
        output.push(b);
        output.push(FILLER_ALPHABET[rng.next_below(FILLER_ALPHABET.len())]);
    }
    output
}

/// Transform 8 inverse: drop every second byte. Filler bytes are discarded,
/// never reconstructed, so no PRNG replay is needed here.
pub fn deinterleave(input: &[u8]) -> Vec<u8> {
    input.iter().step_by(2).copied().collect()
}

/// Transform 9 forward: for each byte, add the cycled seed byte as an
/// integer (no wraparound) and render the sum as decimal text, comma-joined.
pub fn additive_encode(input: &[u8], seed: &[u8]) -> Vec<u8> {
    if seed.is_empty() {
        return input.to_vec();
    }
    let mut parts = Vec::new();
    for (i, &b) in input.iter().enumerate() {
        if i > 0 {
            parts.push(b',');
        }
        let sum = b as u16 + seed[i % seed.len()] as u16;
        parts.extend_from_slice(sum.to_string().as_bytes());
    }
    parts
}

/// Transform 9 inverse: parse decimal tokens, subtract the corresponding
/// seed byte, and narrow to a single byte. The narrowing is deliberately
/// unchecked - oversized values truncate rather than error - and malformed
/// tokens are dropped under the same lenient policy as the text transforms.
pub fn additive_decode(input: &[u8], seed: &[u8]) -> Vec<u8> {
    if seed.is_empty() {
        return input.to_vec();
    }
    input
        .split(|&b| b == b',')
        .enumerate()
        .filter_map(|(i, tok)| {
            let tok = std::str::from_utf8(tok).ok()?;
            if tok.is_empty() {
                return None;
            }
            let value: u32 = tok.parse().ok()?;
            let key = seed[i % seed.len()] as u32;
            Some(value.wrapping_sub(key) as u8)
        })
        .collect()
}

/// Transform 10: partition the input into consecutive blocks of a seeded
/// size and reverse the bytes within each block; the final block may be
/// shorter. Self-inverse because the block size is recomputed from the seed.
pub fn block_reverse(input: &[u8], seed: &[u8]) -> Vec<u8> {
    let mut rng = Mulberry32::from_bytes(seed);
    let block_size = rng.next_below(input.len() / 2) + 2;
    let mut output = input.to_vec();
    for chunk in output.chunks_mut(block_size) {
        chunk.reverse();
    }
    output
}

/// Transform 11 forward: substitute each byte through a 256-entry
/// permutation table built by Fisher-Yates from the seeded PRNG.
pub fn substitute(input: &[u8], seed: &[u8]) -> Vec<u8> {
    let table = permutation_table(seed);
    input.iter().map(|&b| table[b as usize]).collect()
}

/// Transform 11 inverse: rebuild the identical table, invert it, and look
/// each byte up through the inverse.
pub fn unsubstitute(input: &[u8], seed: &[u8]) -> Vec<u8> {
    let table = permutation_table(seed);
    let mut inverse = [0u8; 256];
    for (i, &c) in table.iter().enumerate() {
        inverse[c as usize] = i as u8;
    }
    input.iter().map(|&b| inverse[b as usize]).collect()
}

/// Seeded Fisher-Yates permutation of 0..=255.
fn permutation_table(seed: &[u8]) -> [u8; 256] {
    let mut table = [0u8; 256];
    for (i, entry) in table.iter_mut().enumerate() {
        *entry = i as u8;
    }
    let mut rng = Mulberry32::from_bytes(seed);
    for i in (1..=255usize).rev() {
        let j = rng.next_below(i + 1);
        table.swap(i, j);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEED: &[u8] = b"MySecre!Password12366";

    #[test]
    fn test_shuffle_unshuffle_roundtrip() {
        let data = b"the quick brown fox";
        let shuffled = shuffle(data, SEED);
        assert_ne!(shuffled.as_slice(), data.as_slice());
        assert_eq!(unshuffle(&shuffled, SEED), data);
    }

    #[test]
    fn test_shuffle_is_deterministic() {
        let data = b"determinism";
        assert_eq!(shuffle(data, SEED), shuffle(data, SEED));
    }

    #[test]
    fn test_shuffle_seed_sensitivity() {
        let data = b"seed sensitivity!";
        assert_ne!(shuffle(data, SEED), shuffle(data, b"other seed"));
    }

    #[test]
    fn test_xor_cycle_is_involution() {
        let data = b"xor me";
        assert_eq!(xor_cycle(&xor_cycle(data, SEED), SEED), data);
    }

    #[test]
    fn test_xor_empty_seed_is_identity() {
        assert_eq!(xor_cycle(b"abc", b""), b"abc");
    }

    #[test]
    fn test_interleave_single_byte() {
        // 0x41 -> exactly 2 bytes: the input byte, then one alphabet symbol
        let out = interleave(&[0x41], SEED);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], 0x41);
        assert!(FILLER_ALPHABET.contains(&out[1]));
    }

    #[test]
    fn test_interleave_doubles_length() {
        let data = b"word";
        let out = interleave(data, SEED);
        assert_eq!(out.len(), data.len() * 2);
        assert_eq!(deinterleave(&out), data);
    }

    #[test]
    fn test_deinterleave_halves_any_even_buffer() {
        // Deinterleaving ignores the seed entirely: every odd-indexed byte
        // is dropped, whatever it holds.
        let buf = [1u8, 2, 3, 4, 5, 6];
        assert_eq!(deinterleave(&buf), [1, 3, 5]);
    }

    #[test]
    fn test_additive_roundtrip() {
        let data = b"vigenere-ish";
        let encoded = additive_encode(data, SEED);
        assert_eq!(additive_decode(&encoded, SEED), data);
    }

    #[test]
    fn test_additive_encode_no_wraparound() {
        // 0xff + seed byte renders the full integer sum, not a wrapped byte
        let encoded = additive_encode(&[0xff], b"\x64");
        assert_eq!(encoded, b"355");
    }

    #[test]
    fn test_additive_decode_unchecked_narrowing() {
        // Oversized decimal values truncate to a byte without validation
        let decoded = additive_decode(b"300", b"\x01");
        assert_eq!(decoded, [(300u32 - 1) as u8]);
        let decoded = additive_decode(b"70000", b"\x01");
        assert_eq!(decoded, [(70000u32 - 1) as u8]);
    }

    #[test]
    fn test_additive_decode_drops_malformed_tokens() {
        assert_eq!(additive_decode(b"165,junk,166", b"\x64"), [65, 66]);
    }

    #[test]
    fn test_block_reverse_is_involution() {
        for len in [0usize, 1, 2, 3, 5, 16, 31] {
            let data: Vec<u8> = (0..len as u8).collect();
            let once = block_reverse(&data, SEED);
            assert_eq!(block_reverse(&once, SEED), data, "len {}", len);
        }
    }

    #[test]
    fn test_substitution_roundtrip() {
        let data: Vec<u8> = (0..=255).collect();
        let substituted = substitute(&data, SEED);
        assert_ne!(substituted, data);
        assert_eq!(unsubstitute(&substituted, SEED), data);
    }

    #[test]
    fn test_substitution_table_is_permutation() {
        let table = permutation_table(SEED);
        let mut seen = [false; 256];
        for &b in table.iter() {
            assert!(!seen[b as usize]);
            seen[b as usize] = true;
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(shuffle(b"", SEED).is_empty());
        assert!(unshuffle(b"", SEED).is_empty());
        assert!(xor_cycle(b"", SEED).is_empty());
        assert!(interleave(b"", SEED).is_empty());
        assert!(deinterleave(b"").is_empty());
        assert!(additive_encode(b"", SEED).is_empty());
        assert!(additive_decode(b"", SEED).is_empty());
        assert!(block_reverse(b"", SEED).is_empty());
        assert!(substitute(b"", SEED).is_empty());
        assert!(unsubstitute(b"", SEED).is_empty());
    }
}
