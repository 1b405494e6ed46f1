//! Carry-over counting mode.
//!
//! Keeps the undecided tail of each chunk (fewer bytes than the tag, none
//! of them part of a counted match) and prepends it to the next chunk, so
//! the totals equal a single scan over the whole stream.

use crate::counting::DEFAULT_TAG;
use crate::counting::traits::{TagCounter, scan};

/// Counter that detects tags straddling chunk boundaries.
///
/// # Examples
///
/// ```
/// use h1_counter::counting::{CarryOverCounter, TagCounter};
///
/// let mut counter = CarryOverCounter::new();
/// assert_eq!(counter.count(b"<h"), 0);
/// assert_eq!(counter.count(b"1>"), 1);
/// ```
#[derive(Debug, Clone)]
pub struct CarryOverCounter {
    tag: Vec<u8>,
    /// Tail of the previous chunk, always shorter than `tag`.
    residual: Vec<u8>,
}

impl Default for CarryOverCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CarryOverCounter {
    /// Creates a counter for the `<h1>` tag.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tag(DEFAULT_TAG)
    }

    /// Creates a counter for an arbitrary ASCII tag.
    #[must_use]
    pub fn with_tag(tag: &[u8]) -> Self {
        Self {
            tag: tag.to_vec(),
            residual: Vec::with_capacity(tag.len()),
        }
    }

    /// Returns the bytes currently carried into the next chunk.
    #[must_use]
    pub fn residual(&self) -> &[u8] {
        &self.residual
    }
}

impl TagCounter for CarryOverCounter {
    fn count(&mut self, chunk: &[u8]) -> usize {
        if self.residual.is_empty() {
            let (count, resume) = scan(chunk, &self.tag);
            self.residual.extend_from_slice(&chunk[resume..]);
            return count;
        }

        let mut joined = std::mem::take(&mut self.residual);
        joined.extend_from_slice(chunk);
        let (count, resume) = scan(&joined, &self.tag);
        joined.drain(..resume);
        self.residual = joined;
        count
    }

    fn name(&self) -> &'static str {
        "carry-over"
    }

    fn description(&self) -> &'static str {
        "Carries partial tags across chunk boundaries so every tag is counted once"
    }

    fn tag(&self) -> &[u8] {
        &self.tag
    }
}
