//! Display region port

use askdeck_domain::Notice;

/// Port for the region that shows the answer or a notice
///
/// The reveal task appends one character at a time from a spawned task, so
/// the region is shared and every method takes `&self`. Implementations
/// use interior mutability and must not block: a slow sink stalls the
/// reveal cadence.
pub trait DisplayRegion: Send + Sync {
    /// Drop everything the region currently shows
    fn clear(&self);

    /// Append text after the current content, preserving what is already
    /// shown
    fn append(&self, text: &str);

    /// Replace the region content with a fixed notice
    fn set_notice(&self, notice: Notice);
}
