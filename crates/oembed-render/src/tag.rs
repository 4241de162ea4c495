//! Block tag trait.
//!
//! Block tags use delimiter syntax: `{% name arg %}` ... `{% endname %}`

use super::{RenderContext, RenderError};

/// Handler for block tags: `{% name arg %}` ... `{% endname %}`
///
/// Block tags wrap a content segment and have open/render phases. Argument
/// validation happens in [`open`](Self::open), before any inner content is
/// rendered; [`render`](Self::render) receives the inner segment after the
/// processor has resolved nested tags and variables in it.
///
/// The closing delimiter is non-nesting: the first matching `{% endname %}`
/// terminates the block. Handlers that can be re-entered through nested
/// different-named tags should keep their open-state in a stack.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each render pass gets
/// its own processor instance.
///
/// # Example
///
/// ```
/// use oembed_render::{BlockTag, RenderContext, RenderError};
///
/// struct VerbatimTag;
///
/// impl BlockTag for VerbatimTag {
///     fn name(&self) -> &str { "verbatim" }
///
///     fn open(&mut self, args: &[String], _ctx: &RenderContext) -> Result<(), RenderError> {
///         if args.is_empty() {
///             Ok(())
///         } else {
///             Err(RenderError::syntax("verbatim tag takes no arguments"))
///         }
///     }
///
///     fn render(&mut self, inner: &str, _ctx: &RenderContext) -> Result<String, RenderError> {
///         Ok(inner.to_owned())
///     }
/// }
/// ```
pub trait BlockTag: Send {
    /// Tag name (e.g., "oembed").
    ///
    /// This is matched against the opening delimiter `{% name ... %}` and
    /// derives the closing delimiter `{% endname %}`.
    fn name(&self) -> &str;

    /// Handle the opening delimiter.
    ///
    /// `args` holds the whitespace-separated tokens after the tag name.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Syntax`] for invalid arguments. The error is
    /// raised at open-tag parse time and aborts the render pass before the
    /// inner content is touched.
    fn open(&mut self, args: &[String], ctx: &RenderContext) -> Result<(), RenderError>;

    /// Render the block from its inner content.
    ///
    /// `inner` is the segment between the delimiters, already rendered
    /// against the current context.
    ///
    /// **Invariant**: the processor only calls `render()` after a matching
    /// successful `open()`, and open/render pairs are strictly LIFO.
    fn render(&mut self, inner: &str, ctx: &RenderContext) -> Result<String, RenderError>;

    /// Get warnings generated during processing.
    ///
    /// Override this method if your tag can produce warnings.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
