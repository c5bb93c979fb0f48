//! A deterministic, seeded chunk-size simulator for streaming-producer tests.
//!
//! This is exactly the "external collaborator" the crate's docs describe: a
//! finite, seeded sequence of string slices with pseudo-random sizes. It is
//! **not** a streaming parser — it only decides how a complete document gets
//! sliced up before being handed, buffer-so-far, to [`json_expand::expand`]
//! on every step. Test-only; not part of the crate's public API.

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Splits a source string into a deterministic sequence of chunks of
/// pseudo-random length, at `char` boundaries (the core only ever sees valid
/// `&str` input, so chunk boundaries never land mid-character).
pub struct ChunkedStream {
    rng: ChaCha8Rng,
    remaining: Vec<char>,
    min_chunk_chars: usize,
    max_chunk_chars: usize,
}

impl ChunkedStream {
    /// A stream over `source` with chunk sizes in `1..=6` characters, seeded
    /// by `seed` for reproducibility across test runs.
    pub fn new(source: &str, seed: u64) -> Self {
        Self::with_chunk_bounds(source, seed, 1, 6)
    }

    pub fn with_chunk_bounds(
        source: &str,
        seed: u64,
        min_chunk_chars: usize,
        max_chunk_chars: usize,
    ) -> Self {
        let min_chunk_chars = min_chunk_chars.max(1);
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            remaining: source.chars().collect(),
            min_chunk_chars,
            max_chunk_chars: max_chunk_chars.max(min_chunk_chars),
        }
    }
}

impl Iterator for ChunkedStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.remaining.is_empty() {
            return None;
        }
        let take = self
            .rng
            .gen_range(self.min_chunk_chars..=self.max_chunk_chars)
            .min(self.remaining.len());
        Some(self.remaining.drain(..take).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chunks_reassemble_to_the_original_source() {
        let source = "hello, world! \u{1F389}";
        let reassembled: String = ChunkedStream::new(source, 42).collect();
        assert_eq!(reassembled, source);
    }

    #[test]
    fn same_seed_is_deterministic() {
        let a: Vec<String> = ChunkedStream::new("abcdefghij", 7).collect();
        let b: Vec<String> = ChunkedStream::new("abcdefghij", 7).collect();
        assert_eq!(a, b);
    }

    #[test]
    fn different_seeds_usually_produce_different_chunking() {
        let a: Vec<String> = ChunkedStream::new("abcdefghijklmnopqrstuvwxyz", 1).collect();
        let b: Vec<String> = ChunkedStream::new("abcdefghijklmnopqrstuvwxyz", 2).collect();
        assert_ne!(a, b);
    }
}
