//! oEmbed block tag.

use std::sync::Arc;

use oembed_render::{BlockTag, RenderContext, RenderError};

use crate::replace::EmbedReplacer;
use crate::sizespec::SizeSpec;

/// Block tag: `{% oembed [WIDTHxHEIGHT] %}` ... `{% endoembed %}`
///
/// Accepts at most one argument, the optional size specifier. The inner
/// content is rendered against the current context first (nested tags and
/// variables resolve), then the resulting text is delegated to the
/// replacement collaborator.
///
/// The closing delimiter is non-nesting: the first `{% endoembed %}`
/// terminates the block.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use oembed_render::TemplateProcessor;
/// use oembed_tags::{NoopReplacer, OembedTag};
///
/// let mut processor = TemplateProcessor::new()
///     .with_tag(OembedTag::new(Arc::new(NoopReplacer)));
///
/// let output = processor
///     .process("{% oembed 640x480 %}http://example.com/v/1{% endoembed %}")
///     .unwrap();
/// assert_eq!(output, "http://example.com/v/1");
/// ```
pub struct OembedTag {
    replacer: Arc<dyn EmbedReplacer>,
    /// Pending size specs for open blocks, LIFO with open/render pairing.
    pending: Vec<SizeSpec>,
}

impl OembedTag {
    /// Create the tag with the given replacement collaborator.
    #[must_use]
    pub fn new(replacer: Arc<dyn EmbedReplacer>) -> Self {
        Self {
            replacer,
            pending: Vec::new(),
        }
    }
}

impl BlockTag for OembedTag {
    fn name(&self) -> &'static str {
        "oembed"
    }

    fn open(&mut self, args: &[String], _ctx: &RenderContext) -> Result<(), RenderError> {
        if args.len() > 1 {
            return Err(RenderError::syntax(
                "oembed tag takes only one (optional) argument: WIDTHxHEIGHT",
            ));
        }

        let size = SizeSpec::parse(args.first().map(String::as_str))?;
        self.pending.push(size);
        Ok(())
    }

    fn render(&mut self, inner: &str, _ctx: &RenderContext) -> Result<String, RenderError> {
        // The processor pairs render() with a successful open(); an empty
        // stack would be a processor bug. Fall back to unconstrained sizing.
        let size = self.pending.pop().unwrap_or_default();
        tracing::debug!(size = ?size, "delegating oembed block replacement");
        Ok(self.replacer.replace(inner, &size))
    }
}
