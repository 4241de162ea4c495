//! Error type for template processing.

/// Error raised while processing a template.
///
/// Argument validation failures surface here at filter-invocation or
/// block-open time and abort the current [`process`] call with no partial
/// output. Recoverable conditions (unknown names, unclosed blocks) are
/// reported through the processor's warnings instead.
///
/// [`process`]: crate::TemplateProcessor::process
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RenderError {
    /// Malformed filter or tag arguments.
    #[error("template syntax error: {0}")]
    Syntax(String),
}

impl RenderError {
    /// Create a syntax error with the given message.
    #[must_use]
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }
}
