//! Replacement collaborator seam.

use crate::SizeSpec;

/// Collaborator that replaces media-provider URLs with embeddable markup.
///
/// Implementations own URL detection, provider resolution, HTTP fetching,
/// and response caching. This crate only constructs the request and
/// delegates; a well-behaved implementation never fails for well-formed
/// input and surfaces internal failures as returned text (typically the
/// input unchanged).
///
/// The replacer is shared between the filter and block tag via `Arc`, so it
/// must be `Send + Sync`. Calls may block (network I/O); timeout and retry
/// policy belong entirely to the implementation.
pub trait EmbedReplacer: Send + Sync {
    /// Replace provider URLs in `text`, honoring the size constraint.
    ///
    /// An unconstrained [`SizeSpec`] means provider-default sizing.
    fn replace(&self, text: &str, size: &SizeSpec) -> String;
}

/// Replacer that returns the input unchanged.
///
/// Useful for wiring the tags into a processor before a real backend is
/// available, and for rendering modes where embeds are disabled.
pub struct NoopReplacer;

impl EmbedReplacer for NoopReplacer {
    fn replace(&self, text: &str, _size: &SizeSpec) -> String {
        text.to_owned()
    }
}
