//! Unseeded transforms (indices 0-5).
//!
//! These depend only on the input bytes. Four of them are involutions; the
//! two text renderings (decimal and binary codes) have explicit inverse
//! parsers with a lenient skip policy: empty or unparsable tokens are
//! silently dropped instead of aborting the word.

/// Transform 0: reverse byte order. Self-inverse.
pub fn reverse(input: &[u8]) -> Vec<u8> {
    input.iter().rev().copied().collect()
}

/// Transform 1: Atbash - mirror A-Z and a-z, leave everything else. Self-inverse.
pub fn atbash(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .map(|&b| match b {
            b'A'..=b'Z' => b'Z' - (b - b'A'),
            b'a'..=b'z' => b'z' - (b - b'a'),
            _ => b,
        })
        .collect()
}

/// Transform 2 forward: render each byte as decimal text, comma-joined.
pub fn to_decimal_codes(input: &[u8]) -> Vec<u8> {
    join_rendered(input, |b| b.to_string())
}

/// Transform 2 inverse: parse comma-separated decimal tokens back to bytes.
pub fn from_decimal_codes(input: &[u8]) -> Vec<u8> {
    split_tokens(input)
        .filter_map(|tok| tok.parse::<u8>().ok())
        .collect()
}

/// Transform 3 forward: render each byte as unpadded base-2 text, comma-joined.
pub fn to_binary_codes(input: &[u8]) -> Vec<u8> {
    join_rendered(input, |b| format!("{:b}", b))
}

/// Transform 3 inverse: parse comma-separated base-2 tokens back to bytes.
pub fn from_binary_codes(input: &[u8]) -> Vec<u8> {
    split_tokens(input)
        .filter_map(|tok| u8::from_str_radix(tok, 2).ok())
        .collect()
}

/// Transform 4: Caesar shift 13 on ASCII letters. Shift 13 of 26 is an
/// involution, so forward and inverse are the same operation.
pub fn rot13(input: &[u8]) -> Vec<u8> {
    input
        .iter()
        .map(|&b| match b {
            b'A'..=b'Z' => (b - b'A' + 13) % 26 + b'A',
            b'a'..=b'z' => (b - b'a' + 13) % 26 + b'a',
            _ => b,
        })
        .collect()
}

/// Transform 5: swap each adjacent byte pair at even offsets; a trailing odd
/// byte is left in place. Self-inverse.
pub fn swap_adjacent(input: &[u8]) -> Vec<u8> {
    let mut output = input.to_vec();
    for i in (0..output.len().saturating_sub(1)).step_by(2) {
        output.swap(i, i + 1);
    }
    output
}

/// Render each byte with `f` and join the pieces with commas.
fn join_rendered(input: &[u8], f: impl Fn(u8) -> String) -> Vec<u8> {
    let mut parts = Vec::new();
    for (i, &b) in input.iter().enumerate() {
        if i > 0 {
            parts.push(b',');
        }
        parts.extend_from_slice(f(b).as_bytes());
    }
    parts
}

/// Split rendered text on commas, dropping empty tokens.
fn split_tokens(input: &[u8]) -> impl Iterator<Item = &str> {
    input
        .split(|&b| b == b',')
        .filter_map(|tok| std::str::from_utf8(tok).ok())
        .filter(|tok| !tok.is_empty())
}
