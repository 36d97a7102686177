//! Length-prefixed blob assembly and disassembly.
//!
//! The blob is the plaintext handed to the transit cipher: for each word, in
//! original phrase order, a 2-byte big-endian length followed by that many
//! transformed bytes.

/// Concatenate transformed words into one buffer, each prefixed with its
/// 2-byte big-endian length.
pub fn assemble_blob(transformed_words: &[Vec<u8>]) -> Vec<u8> {
    let total: usize = transformed_words.iter().map(|w| w.len() + 2).sum();
    let mut blob = Vec::with_capacity(total);
    for word in transformed_words {
        let len = word.len();
        blob.push(((len >> 8) & 0xff) as u8);
        blob.push((len & 0xff) as u8);
        blob.extend_from_slice(word);
    }
    blob
}

/// Split a blob back into per-word byte sequences.
///
/// The walk soft-stops instead of failing: it ends early, returning a
/// partial list, if fewer than 2 bytes remain for a length prefix, if a
/// declared length would overrun the buffer, or if `word_count` entries have
/// already been produced (no reverse-key entry would remain to invert a
/// further word). Callers that need strict validation must compare the
/// returned count against the count they expect.
pub fn disassemble_blob(blob: &[u8], word_count: usize) -> Vec<Vec<u8>> {
    let mut words = Vec::new();
    let mut offset = 0;

    while offset < blob.len() {
        if words.len() >= word_count {
            break;
        }
        if offset + 2 > blob.len() {
            break;
        }
        let length = ((blob[offset] as usize) << 8) | (blob[offset + 1] as usize);
        offset += 2;
        if offset + length > blob.len() {
            break;
        }
        words.push(blob[offset..offset + length].to_vec());
        offset += length;
    }
    words
}
