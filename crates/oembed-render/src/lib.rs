//! Minimal template preprocessor with pluggable filters and block tags.
//!
//! This crate provides the host-side rendering capability that template
//! extensions plug into: named text filters (`{{ value|name:"arg" }}`) and
//! named block tags (`{% name arg %}` ... `{% endname %}`).
//!
//! It is deliberately not a template engine. The [`TemplateProcessor`]
//! resolves variable substitutions and dispatches registered handlers, and
//! nothing else: no conditionals, no loops, no inheritance. Unregistered
//! names pass through unchanged so other tooling can process them later.
//!
//! # Architecture
//!
//! - [`TextFilter`]: transforms a value inline, with an optional string
//!   argument (`{{ url|oembed:"640x480" }}`).
//! - [`BlockTag`]: wraps a content segment; the segment is rendered against
//!   the current [`RenderContext`] before the tag sees it.
//! - [`TemplateProcessor`]: scans input text and dispatches to handlers.
//!
//! # Example
//!
//! ```
//! use oembed_render::{
//!     RenderContext, RenderError, TemplateProcessor, TextFilter,
//! };
//!
//! struct UpperFilter;
//!
//! impl TextFilter for UpperFilter {
//!     fn name(&self) -> &str { "upper" }
//!
//!     fn apply(
//!         &mut self,
//!         input: &str,
//!         _arg: Option<&str>,
//!         _ctx: &RenderContext,
//!     ) -> Result<String, RenderError> {
//!         Ok(input.to_uppercase())
//!     }
//! }
//!
//! let mut processor = TemplateProcessor::new().with_filter(UpperFilter);
//! let vars = std::collections::HashMap::from([
//!     ("name".to_owned(), "world".to_owned()),
//! ]);
//! let output = processor.process_with_vars("hi {{ name|upper }}", &vars).unwrap();
//! assert_eq!(output, "hi WORLD");
//! ```

mod context;
mod error;
mod filter;
mod parser;
mod processor;
mod tag;

pub use context::RenderContext;
pub use error::RenderError;
pub use filter::TextFilter;
pub use processor::{TemplateProcessor, TemplateProcessorConfig};
pub use tag::BlockTag;
