//! Tag counting modes.
//!
//! Two modes are available:
//!
//! - **per-chunk**: every chunk is scanned on its own; a tag straddling a
//!   chunk boundary is missed (reference behavior, the default)
//! - **carry-over**: the undecided tail of each chunk is prepended to the
//!   next one so boundary-straddling tags are counted

pub mod carry;
pub mod chunk;
pub mod traits;

pub use carry::CarryOverCounter;
pub use chunk::ChunkCounter;
pub use traits::TagCounter;

/// The tag being counted, matched ASCII case-insensitively.
pub const DEFAULT_TAG: &[u8] = b"<h1>";

/// Name of the default counting mode.
pub const DEFAULT_MODE: &str = "per-chunk";

/// Creates a counter for the default tag by mode name.
///
/// # Errors
///
/// Returns [`crate::error::UsageError::UnknownMode`] if the mode name is not recognized.
pub fn create_counter(name: &str) -> crate::error::Result<Box<dyn TagCounter>> {
    match name.to_lowercase().as_str() {
        "per-chunk" => Ok(Box::new(ChunkCounter::new())),
        "carry-over" => Ok(Box::new(CarryOverCounter::new())),
        _ => Err(crate::error::UsageError::UnknownMode {
            name: name.to_string(),
        }
        .into()),
    }
}

/// Lists available counting mode names.
#[must_use]
pub fn available_modes() -> Vec<&'static str> {
    vec!["per-chunk", "carry-over"]
}
