//! The transform registry: twelve fixed, indexed, invertible byte transforms.
//!
//! Indices 0-5 are unseeded (input-only); indices 6-11 additionally consume
//! auxiliary seed bytes derived from the password and the word checksum. The
//! registry is a fixed table of tagged variants rather than an array of
//! closures: index addressability is required by the packed reverse-key
//! format, and the enum keeps dispatch static.

pub mod keyed;
pub mod plain;

use crate::error::{CloakError, Result};

/// Number of transforms in the registry; every word's order is a permutation
/// of all of them.
pub const TRANSFORM_COUNT: usize = 12;

/// One entry of the transform registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    /// 0: reverse byte order
    Reverse,
    /// 1: Atbash letter mirror
    Atbash,
    /// 2: comma-joined decimal rendering
    DecimalCodes,
    /// 3: comma-joined binary rendering
    BinaryCodes,
    /// 4: Caesar shift 13 on ASCII letters
    Rot13,
    /// 5: adjacent byte-pair swap
    SwapAdjacent,
    /// 6: seeded Fisher-Yates byte shuffle
    Shuffle,
    /// 7: XOR with cycled seed
    XorCycle,
    /// 8: seeded filler interleave
    Interleave,
    /// 9: additive decimal rendering with cycled seed
    Additive,
    /// 10: seeded block reversal
    BlockReverse,
    /// 11: seeded 256-entry substitution
    Substitute,
}

/// Index-ordered registry. `REGISTRY[i].index() == i` for all entries.
pub const REGISTRY: [Transform; TRANSFORM_COUNT] = [
    Transform::Reverse,
    Transform::Atbash,
    Transform::DecimalCodes,
    Transform::BinaryCodes,
    Transform::Rot13,
    Transform::SwapAdjacent,
    Transform::Shuffle,
    Transform::XorCycle,
    Transform::Interleave,
    Transform::Additive,
    Transform::BlockReverse,
    Transform::Substitute,
];

impl Transform {
    /// Look up a registry entry by its wire index.
    pub fn from_index(index: u8) -> Result<Self> {
        REGISTRY
            .get(index as usize)
            .copied()
            .ok_or(CloakError::InvalidTransformIndex(index))
    }

    /// Fixed wire index of this transform.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Seeded transforms consume the auxiliary seed; unseeded ones ignore it.
    pub const fn is_seeded(self) -> bool {
        self.index() >= 6
    }

    /// Apply the forward operation. Unseeded variants ignore `seed`.
    pub fn forward(self, input: &[u8], seed: &[u8]) -> Vec<u8> {
        match self {
            Transform::Reverse => plain::reverse(input),
            Transform::Atbash => plain::atbash(input),
            Transform::DecimalCodes => plain::to_decimal_codes(input),
            Transform::BinaryCodes => plain::to_binary_codes(input),
            Transform::Rot13 => plain::rot13(input),
            Transform::SwapAdjacent => plain::swap_adjacent(input),
            Transform::Shuffle => keyed::shuffle(input, seed),
            Transform::XorCycle => keyed::xor_cycle(input, seed),
            Transform::Interleave => keyed::interleave(input, seed),
            Transform::Additive => keyed::additive_encode(input, seed),
            Transform::BlockReverse => keyed::block_reverse(input, seed),
            Transform::Substitute => keyed::substitute(input, seed),
        }
    }

    /// Apply the inverse operation. Self-inverse variants reuse the forward
    /// path; the rest replay their seed-derived state and invert it.
    pub fn inverse(self, input: &[u8], seed: &[u8]) -> Vec<u8> {
        match self {
            Transform::Reverse => plain::reverse(input),
            Transform::Atbash => plain::atbash(input),
            Transform::DecimalCodes => plain::from_decimal_codes(input),
            Transform::BinaryCodes => plain::from_binary_codes(input),
            Transform::Rot13 => plain::rot13(input),
            Transform::SwapAdjacent => plain::swap_adjacent(input),
            Transform::Shuffle => keyed::unshuffle(input, seed),
            Transform::XorCycle => keyed::xor_cycle(input, seed),
            Transform::Interleave => keyed::deinterleave(input),
            Transform::Additive => keyed::additive_decode(input, seed),
            Transform::BlockReverse => keyed::block_reverse(input, seed),
            Transform::Substitute => keyed::unsubstitute(input, seed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_registry_index_agreement() {
        for (i, t) in REGISTRY.iter().enumerate() {
            assert_eq!(t.index() as usize, i);
            assert_eq!(Transform::from_index(i as u8).unwrap(), *t);
        }
    }

    #[test]
    fn test_from_index_out_of_range() {
        assert!(matches!(
            Transform::from_index(12),
            Err(CloakError::InvalidTransformIndex(12))
        ));
    }

    #[test]
    fn test_seeded_split() {
        for t in REGISTRY {
            assert_eq!(t.is_seeded(), t.index() >= 6);
        }
    }

    #[test]
    fn test_involutions_ignore_prng_state() {
        // Transforms 0, 1, 4, 5 applied twice restore the input regardless
        // of any seed material.
        let data = b"Involution check 42";
        for idx in [0u8, 1, 4, 5] {
            let t = Transform::from_index(idx).unwrap();
            let once = t.forward(data, b"ignored");
            assert_eq!(t.forward(&once, b"other"), data, "transform {}", idx);
        }
    }

    proptest! {
        #[test]
        fn prop_inverse_undoes_forward(
            data in proptest::collection::vec(any::<u8>(), 0..64),
            seed in "[ -~]{1,24}",
            idx in 0u8..12,
        ) {
            let t = Transform::from_index(idx).unwrap();
            let transformed = t.forward(&data, seed.as_bytes());
            prop_assert_eq!(t.inverse(&transformed, seed.as_bytes()), data);
        }

        #[test]
        fn prop_empty_input_stays_empty(idx in 0u8..12) {
            let t = Transform::from_index(idx).unwrap();
            prop_assert!(t.forward(b"", b"seed").is_empty());
            prop_assert!(t.inverse(b"", b"seed").is_empty());
        }
    }
}
