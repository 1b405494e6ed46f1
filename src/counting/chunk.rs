//! Per-chunk counting mode.
//!
//! Each call is scoped strictly to the chunk it is given. A tag split
//! across two receive chunks is not counted.

use crate::counting::DEFAULT_TAG;
use crate::counting::traits::{TagCounter, scan};

/// Counter with no state between chunks.
///
/// # Examples
///
/// ```
/// use h1_counter::counting::{ChunkCounter, TagCounter};
///
/// let mut counter = ChunkCounter::new();
/// assert_eq!(counter.count(b"<h"), 0);
/// assert_eq!(counter.count(b"1>"), 0);
/// ```
#[derive(Debug, Clone)]
pub struct ChunkCounter {
    tag: Vec<u8>,
}

impl Default for ChunkCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkCounter {
    /// Creates a counter for the `<h1>` tag.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tag(DEFAULT_TAG)
    }

    /// Creates a counter for an arbitrary ASCII tag.
    ///
    /// An empty tag never matches.
    #[must_use]
    pub fn with_tag(tag: &[u8]) -> Self {
        Self { tag: tag.to_vec() }
    }
}

impl TagCounter for ChunkCounter {
    fn count(&mut self, chunk: &[u8]) -> usize {
        scan(chunk, &self.tag).0
    }

    fn name(&self) -> &'static str {
        "per-chunk"
    }

    fn description(&self) -> &'static str {
        "Counts tags inside each chunk; tags straddling a chunk boundary are missed"
    }

    fn tag(&self) -> &[u8] {
        &self.tag
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(b"<h1>", 1 ; "lowercase")]
    #[test_case(b"<H1>", 1 ; "uppercase")]
    #[test_case(b"<h1><H1>", 2 ; "adjacent mixed case")]
    #[test_case(b"<h2><h1 ><h1", 0 ; "near misses")]
    #[test_case(b"<h", 0 ; "shorter than tag")]
    #[test_case(b"", 0 ; "empty")]
    #[test_case(b"<h1>Title</h1>\n<H1>x</H1>", 2 ; "closing tags ignored")]
    #[test_case(b"xxxxxxx<h1>", 1 ; "match at last position")]
    fn test_count(input: &[u8], expected: usize) {
        let mut counter = ChunkCounter::new();
        assert_eq!(counter.count(input), expected);
    }

    #[test]
    fn test_count_is_idempotent() {
        let mut counter = ChunkCounter::new();
        let buf = b"<h1>a<H1>b<h1>";
        let first = counter.count(buf);
        let second = counter.count(buf);
        assert_eq!(first, 3);
        assert_eq!(first, second);
    }

    #[test]
    fn test_no_overlapping_matches() {
        // "aaa" holds two windows of "aa" but only one non-overlapping match.
        let mut counter = ChunkCounter::with_tag(b"aa");
        assert_eq!(counter.count(b"aaa"), 1);
        assert_eq!(counter.count(b"aaaa"), 2);
        assert_eq!(counter.count(b"AaAaA"), 2);
    }

    #[test]
    fn test_split_tag_is_not_counted() {
        let mut counter = ChunkCounter::new();
        assert_eq!(counter.count(b"xx<h"), 0);
        assert_eq!(counter.count(b"1>xx"), 0);
    }

    #[test]
    fn test_name() {
        let counter = ChunkCounter::new();
        assert_eq!(counter.name(), "per-chunk");
        assert_eq!(counter.tag(), b"<h1>");
        assert!(!counter.description().is_empty());
    }
}
