//! Deterministic 32-bit PRNG used for transform ordering and keyed transforms.
//!
//! The generator is a Mulberry32 variant seeded by a string hash. Every draw
//! must be bit-exact across implementations: the transform order, the shuffle
//! permutations, the interleave filler, and the block sizes are all derived
//! from this stream, so any deviation makes old ciphertexts unrecoverable.

/// Seeded deterministic generator producing doubles in `[0, 1)`.
///
/// One instance per logical random stream. Instances are cheap to construct
/// and must never be shared between independent streams - reproducibility
/// depends on each consumer drawing from its own sequence.
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Seed from a string by folding its character codes into a 32-bit hash.
    pub fn new(seed: &str) -> Self {
        let mut h: u32 = 0;
        for ch in seed.chars() {
            h = (h ^ ch as u32).wrapping_mul(3432918353);
            h = h.rotate_left(13);
        }
        // Avalanche finisher
        h = (h ^ (h >> 16)).wrapping_mul(2246822507);
        h = (h ^ (h >> 13)).wrapping_mul(3266489909);
        h ^= h >> 16;
        Mulberry32 { state: h }
    }

    /// Seed from raw bytes, interpreting them as UTF-8 text.
    ///
    /// Seed material is built by concatenating password bytes with ASCII
    /// decimals, so well-formed inputs are always valid UTF-8; invalid
    /// sequences fall back to replacement characters.
    pub fn from_bytes(seed: &[u8]) -> Self {
        Self::new(&String::from_utf8_lossy(seed))
    }

    /// Next value in `[0, 1)`. All arithmetic is wrapping 32-bit unsigned.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(0x6d2b79f5);
        let mut t = self.state ^ (self.state >> 15);
        t = t.wrapping_mul(1 | self.state);
        let u = (t ^ (t >> 7)).wrapping_mul(61 | t);
        t = t.wrapping_add(u) ^ t;
        let result = t ^ (t >> 14);
        (result as f64) / 4294967296.0
    }

    /// Next index in `[0, bound)`, i.e. `floor(next_f64() * bound)`.
    pub fn next_below(&mut self, bound: usize) -> usize {
        (self.next_f64() * bound as f64) as usize
    }
}
