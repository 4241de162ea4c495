//! Text filter trait.
//!
//! Filters use pipe syntax: `{{ value|name }}` or `{{ value|name:"arg" }}`.

use super::{RenderContext, RenderError};

/// Handler for inline text filters: `{{ value|name:"arg" }}`
///
/// Filters transform a value within the text flow. They receive the value
/// after variable resolution and any preceding filters in the chain, plus an
/// optional string argument.
///
/// # Thread Safety
///
/// Handlers implement `Send` only (not `Sync`) since each render pass gets
/// its own processor instance. For parallel rendering, create separate
/// processor instances per thread.
///
/// # Example
///
/// ```
/// use oembed_render::{RenderContext, RenderError, TextFilter};
///
/// struct TruncateFilter;
///
/// impl TextFilter for TruncateFilter {
///     fn name(&self) -> &str { "truncate" }
///
///     fn apply(
///         &mut self,
///         input: &str,
///         arg: Option<&str>,
///         _ctx: &RenderContext,
///     ) -> Result<String, RenderError> {
///         let limit: usize = arg
///             .unwrap_or("80")
///             .parse()
///             .map_err(|_| RenderError::syntax("truncate argument must be an integer"))?;
///         Ok(input.chars().take(limit).collect())
///     }
/// }
/// ```
pub trait TextFilter: Send {
    /// Filter name (e.g., "oembed").
    ///
    /// This is matched against the filter syntax: `{{ value|name }}`
    fn name(&self) -> &str;

    /// Apply the filter to `input`.
    ///
    /// `arg` is the optional argument from `name:"arg"` syntax, `None` when
    /// no argument was given.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Syntax`] for a malformed argument; the error
    /// aborts the current render pass.
    fn apply(
        &mut self,
        input: &str,
        arg: Option<&str>,
        ctx: &RenderContext,
    ) -> Result<String, RenderError>;

    /// Get warnings generated during processing.
    ///
    /// Override this method if your filter can produce warnings.
    fn warnings(&self) -> &[String] {
        &[]
    }
}
