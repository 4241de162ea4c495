//! Inline oEmbed filter.

use std::sync::Arc;

use oembed_render::{RenderContext, RenderError, TextFilter};

use crate::replace::EmbedReplacer;
use crate::sizespec::SizeSpec;

/// Inline text filter: `{{ value|oembed }}` or `{{ value|oembed:"640x480" }}`
///
/// Parses the optional size specifier and delegates the value to the
/// replacement collaborator. The collaborator is always invoked: with no
/// specifier the embed uses provider-default sizing.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use oembed_render::TemplateProcessor;
/// use oembed_tags::{NoopReplacer, OembedFilter};
///
/// let mut processor = TemplateProcessor::new()
///     .with_filter(OembedFilter::new(Arc::new(NoopReplacer)));
///
/// let output = processor
///     .apply_filter("oembed", "http://example.com/v/1", Some("640x480"))
///     .unwrap();
/// assert_eq!(output, "http://example.com/v/1");
/// ```
pub struct OembedFilter {
    replacer: Arc<dyn EmbedReplacer>,
}

impl OembedFilter {
    /// Create the filter with the given replacement collaborator.
    #[must_use]
    pub fn new(replacer: Arc<dyn EmbedReplacer>) -> Self {
        Self { replacer }
    }
}

impl TextFilter for OembedFilter {
    fn name(&self) -> &'static str {
        "oembed"
    }

    fn apply(
        &mut self,
        input: &str,
        arg: Option<&str>,
        _ctx: &RenderContext,
    ) -> Result<String, RenderError> {
        let size = SizeSpec::parse(arg)?;
        tracing::debug!(size = ?size, "delegating inline oembed replacement");
        Ok(self.replacer.replace(input, &size))
    }
}
