//! oEmbed filter and block tag for the `oembed-render` preprocessor.
//!
//! Scans rendered text for media-provider URLs and replaces them with
//! provider-supplied embeddable markup. This crate is the presentation-layer
//! adapter: it parses the compact `[!]WIDTHx[!]HEIGHT` size specifier,
//! builds a [`SizeSpec`], and delegates the actual URL matching, provider
//! lookup, fetching, and caching to an [`EmbedReplacer`] implementation.
//!
//! Two entry points share the specifier syntax:
//!
//! - inline filter: `{{ url|oembed }}`, `{{ url|oembed:"640x480" }}`,
//!   `{{ url|oembed:"!640x!480" }}`
//! - block tag: `{% oembed 640x480 %}` ... `{% endoembed %}` (the inner
//!   content is rendered first, then passed through the replacer)
//!
//! A `!` prefix requests a fixed dimension instead of a maximum; not every
//! provider honors it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use oembed_render::TemplateProcessor;
//! use oembed_tags::NoopReplacer;
//!
//! let mut processor = oembed_tags::register(
//!     TemplateProcessor::new(),
//!     Arc::new(NoopReplacer),
//! );
//!
//! let output = processor
//!     .process("{% oembed %}http://example.com/v/1{% endoembed %}")
//!     .unwrap();
//! assert_eq!(output, "http://example.com/v/1");
//! ```

use std::sync::Arc;

use oembed_render::TemplateProcessor;

mod filter;
mod replace;
mod sizespec;
mod tag;

pub use filter::OembedFilter;
pub use replace::{EmbedReplacer, NoopReplacer};
pub use sizespec::{SizeSpec, SizeSpecError};
pub use tag::OembedTag;

/// Register both oEmbed entry points on a processor.
///
/// The filter and the block tag share one replacement collaborator.
#[must_use]
pub fn register(
    processor: TemplateProcessor,
    replacer: Arc<dyn EmbedReplacer>,
) -> TemplateProcessor {
    processor
        .with_filter(OembedFilter::new(Arc::clone(&replacer)))
        .with_tag(OembedTag::new(replacer))
}

#[cfg(test)]
pub(crate) mod testing {
    use std::sync::Mutex;

    use super::{EmbedReplacer, SizeSpec};

    /// Replacer that records every delegation call.
    #[derive(Default)]
    pub(crate) struct RecordingReplacer {
        calls: Mutex<Vec<(String, SizeSpec)>>,
    }

    impl RecordingReplacer {
        pub(crate) fn calls(&self) -> Vec<(String, SizeSpec)> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl EmbedReplacer for RecordingReplacer {
        fn replace(&self, text: &str, size: &SizeSpec) -> String {
            self.calls.lock().unwrap().push((text.to_owned(), *size));
            format!("<embed>{text}</embed>")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingReplacer;
    use oembed_render::RenderError;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn setup() -> (Arc<RecordingReplacer>, TemplateProcessor) {
        let replacer = Arc::new(RecordingReplacer::default());
        let processor = register(
            TemplateProcessor::new(),
            Arc::clone(&replacer) as Arc<dyn EmbedReplacer>,
        );
        (replacer, processor)
    }

    #[test]
    fn test_filter_end_to_end() {
        let (replacer, mut processor) = setup();
        let vars = HashMap::from([(
            "url".to_owned(),
            "http://www.viddler.com/explore/SYSTM/videos/49/".to_owned(),
        )]);

        let output = processor
            .process_with_vars(r#"{{ url|oembed:"640x480" }}"#, &vars)
            .unwrap();

        assert_eq!(
            output,
            "<embed>http://www.viddler.com/explore/SYSTM/videos/49/</embed>"
        );
        let calls = replacer.calls();
        assert_eq!(calls[0].1.max_width, Some(640));
        assert_eq!(calls[0].1.max_height, Some(480));
    }

    #[test]
    fn test_filter_without_argument() {
        let (replacer, mut processor) = setup();
        let vars = HashMap::from([("url".to_owned(), "http://example.com/v/1".to_owned())]);

        processor
            .process_with_vars("{{ url|oembed }}", &vars)
            .unwrap();

        // The replacer still runs, with provider-default sizing.
        assert_eq!(replacer.calls()[0].1, SizeSpec::default());
    }

    #[test]
    fn test_block_renders_inner_first() {
        let (replacer, mut processor) = setup();
        let vars = HashMap::from([("video".to_owned(), "http://example.com/v/1".to_owned())]);

        let output = processor
            .process_with_vars("{% oembed 640x480 %}{{ video }}{% endoembed %}", &vars)
            .unwrap();

        assert_eq!(output, "<embed>http://example.com/v/1</embed>");
        let calls = replacer.calls();
        // The variable resolved before delegation.
        assert_eq!(calls[0].0, "http://example.com/v/1");
        assert_eq!(calls[0].1.max_width, Some(640));
    }

    #[test]
    fn test_block_without_argument() {
        let (replacer, mut processor) = setup();

        let output = processor
            .process("{% oembed %}http://example.com/v/1{% endoembed %}")
            .unwrap();

        assert_eq!(output, "<embed>http://example.com/v/1</embed>");
        assert_eq!(replacer.calls()[0].1, SizeSpec::default());
    }

    #[test]
    fn test_block_fixed_dimensions() {
        let (replacer, mut processor) = setup();

        processor
            .process("{% oembed !640x!480 %}http://example.com/v/1{% endoembed %}")
            .unwrap();

        let calls = replacer.calls();
        assert!(calls[0].1.fixed_width);
        assert!(calls[0].1.fixed_height);
    }

    #[test]
    fn test_block_too_many_tokens() {
        let (replacer, mut processor) = setup();

        let result = processor.process("{% oembed 640x480 extra %}x{% endoembed %}");

        assert!(matches!(result, Err(RenderError::Syntax(_))));
        assert!(replacer.calls().is_empty());
    }

    #[test]
    fn test_block_invalid_specifier() {
        let (replacer, mut processor) = setup();

        let result = processor.process("{% oembed 1x2x3 %}x{% endoembed %}");

        assert!(matches!(result, Err(RenderError::Syntax(_))));
        assert!(replacer.calls().is_empty());
    }

    #[test]
    fn test_surrounding_text_preserved() {
        let (_, mut processor) = setup();

        let output = processor
            .process("before {% oembed %}url{% endoembed %} after")
            .unwrap();

        assert_eq!(output, "before <embed>url</embed> after");
    }

    #[test]
    fn test_filter_and_block_share_replacer() {
        let (replacer, mut processor) = setup();
        let vars = HashMap::from([("url".to_owned(), "http://a".to_owned())]);

        processor
            .process_with_vars("{{ url|oembed }} {% oembed %}http://b{% endoembed %}", &vars)
            .unwrap();

        let calls = replacer.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "http://a");
        assert_eq!(calls[1].0, "http://b");
    }
}
