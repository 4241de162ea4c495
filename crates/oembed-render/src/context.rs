//! Rendering context passed to filter and tag handlers.

use std::collections::HashMap;

/// Context provided to handlers during a render pass.
///
/// Carries the variable bindings for the current pass and the block nesting
/// depth. A fresh context is created per dispatch by
/// [`TemplateProcessor`](crate::TemplateProcessor); handlers never hold on
/// to it across calls.
///
/// # Example
///
/// ```
/// use std::collections::HashMap;
/// use oembed_render::RenderContext;
///
/// let vars = HashMap::from([("url".to_owned(), "http://example.com".to_owned())]);
/// let ctx = RenderContext { vars: &vars, depth: 0 };
///
/// assert_eq!(ctx.lookup("url"), Some("http://example.com"));
/// assert_eq!(ctx.lookup("missing"), None);
/// ```
pub struct RenderContext<'a> {
    /// Variable bindings for the current render pass.
    pub vars: &'a HashMap<String, String>,
    /// Block nesting depth (0 at the top level).
    pub depth: usize,
}

impl RenderContext<'_> {
    /// Look up a variable by name.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }
}
