//! Tag counter trait definition.
//!
//! Defines the interface for counting tag occurrences in a stream that
//! arrives one receive chunk at a time.

/// Trait for counting tag occurrences chunk by chunk.
///
/// The driver calls [`TagCounter::count`] once per received chunk, in
/// arrival order, passing only the filled region of the receive buffer.
/// Matching is exact, ASCII case-insensitive and non-overlapping.
///
/// # Examples
///
/// ```
/// use h1_counter::counting::{ChunkCounter, TagCounter};
///
/// let mut counter = ChunkCounter::new();
/// assert_eq!(counter.count(b"<h1>a</h1><H1>b</H1>"), 2);
/// ```
pub trait TagCounter: Send {
    /// Counts matches in the next chunk of the stream.
    fn count(&mut self, chunk: &[u8]) -> usize;

    /// Returns the mode name this counter is selected by.
    fn name(&self) -> &'static str;

    /// Returns a description of the counting mode.
    fn description(&self) -> &'static str {
        "No description available"
    }

    /// Returns the tag being counted.
    fn tag(&self) -> &[u8];
}

/// Scans `buf` for non-overlapping, case-insensitive occurrences of `tag`.
///
/// Returns the match count and the first position whose window no longer
/// fits in `buf`. Bytes from that position onward are the undecided tail:
/// shorter than the tag and not part of any counted match.
pub(crate) fn scan(buf: &[u8], tag: &[u8]) -> (usize, usize) {
    if tag.is_empty() {
        return (0, buf.len());
    }

    let mut count = 0;
    let mut i = 0;
    while i + tag.len() <= buf.len() {
        if buf[i..i + tag.len()].eq_ignore_ascii_case(tag) {
            count += 1;
            i += tag.len();
        } else {
            i += 1;
        }
    }
    (count, i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_empty_buffer() {
        assert_eq!(scan(b"", b"<h1>"), (0, 0));
    }

    #[test]
    fn test_scan_empty_tag() {
        assert_eq!(scan(b"abc", b""), (0, 3));
    }

    #[test]
    fn test_scan_tail_is_shorter_than_tag() {
        let (count, resume) = scan(b"xx<h1>yy<h", b"<h1>");
        assert_eq!(count, 1);
        assert_eq!(&b"xx<h1>yy<h"[resume..], b"y<h");
    }

    #[test]
    fn test_scan_resume_after_trailing_match() {
        let (count, resume) = scan(b"ab<h1>", b"<h1>");
        assert_eq!(count, 1);
        assert_eq!(resume, 6);
    }

    /// Counter relying on the default description.
    struct NullCounter;

    impl TagCounter for NullCounter {
        fn count(&mut self, _chunk: &[u8]) -> usize {
            0
        }

        fn name(&self) -> &'static str {
            "null"
        }

        fn tag(&self) -> &[u8] {
            b""
        }
    }

    #[test]
    fn test_counter_default_description() {
        let counter = NullCounter;
        assert_eq!(counter.description(), "No description available");
    }
}
