//! Fixed-length sequence normalization.
//!
//! The classifier expects every input to have exactly its trained sequence
//! length. Longer sequences are truncated at the end, shorter ones padded at
//! the end with [`PAD_ID`] ("post" truncation and padding).

/// Id appended to sequences shorter than the target length. Reserved: the
/// vocabulary never assigns it to a token.
pub const PAD_ID: u32 = 0;

/// Returns a sequence of exactly `len` ids: the first `len` elements of
/// `ids`, followed by [`PAD_ID`] filler if `ids` is shorter.
///
/// Pure and total. An empty input yields an all-pad sequence, and the
/// function is idempotent for a fixed `len`.
pub fn pad_to_length(ids: &[u32], len: usize) -> Vec<u32> {
    let mut out: Vec<u32> = ids.iter().copied().take(len).collect();
    out.resize(len, PAD_ID);
    out
}
