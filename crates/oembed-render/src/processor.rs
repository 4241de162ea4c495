//! Template processor.
//!
//! Scans input text for variable substitutions and block tags, dispatching
//! to registered handlers.

use std::collections::HashMap;

use super::parser::{FilterCall, ParsedToken, find_block_close, next_token};
use super::{BlockTag, RenderContext, RenderError, TextFilter};

/// Default bound on nested block rendering.
const DEFAULT_MAX_DEPTH: usize = 10;

/// Configuration for the template processor.
#[derive(Debug, Clone)]
pub struct TemplateProcessorConfig {
    /// Maximum nesting depth for block rendering.
    ///
    /// Default: 10
    pub max_depth: usize,
}

impl Default for TemplateProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Set the maximum block nesting depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Processor for template text.
///
/// Resolves `{{ name|filter:"arg" }}` substitutions and `{% tag %}` ...
/// `{% endtag %}` blocks using registered [`TextFilter`] and [`BlockTag`]
/// handlers. Unregistered names pass through unchanged.
///
/// # Example
///
/// ```
/// use oembed_render::{
///     BlockTag, RenderContext, RenderError, TemplateProcessor,
/// };
///
/// struct QuoteTag;
///
/// impl BlockTag for QuoteTag {
///     fn name(&self) -> &str { "quote" }
///
///     fn open(&mut self, _args: &[String], _ctx: &RenderContext) -> Result<(), RenderError> {
///         Ok(())
///     }
///
///     fn render(&mut self, inner: &str, _ctx: &RenderContext) -> Result<String, RenderError> {
///         Ok(format!("<blockquote>{inner}</blockquote>"))
///     }
/// }
///
/// let mut processor = TemplateProcessor::new().with_tag(QuoteTag);
/// let output = processor.process("{% quote %}hi{% endquote %}").unwrap();
/// assert_eq!(output, "<blockquote>hi</blockquote>");
/// ```
pub struct TemplateProcessor {
    config: TemplateProcessorConfig,
    filters: Vec<Box<dyn TextFilter>>,
    tags: Vec<Box<dyn BlockTag>>,
    warnings: Vec<String>,
}

impl Default for TemplateProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateProcessor {
    /// Create a new processor with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(TemplateProcessorConfig::default())
    }

    /// Create a new processor with custom configuration.
    #[must_use]
    pub fn with_config(config: TemplateProcessorConfig) -> Self {
        Self {
            config,
            filters: Vec::new(),
            tags: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Register a text filter handler.
    #[must_use]
    pub fn with_filter<F: TextFilter + 'static>(mut self, handler: F) -> Self {
        self.filters.push(Box::new(handler));
        self
    }

    /// Register a block tag handler.
    #[must_use]
    pub fn with_tag<T: BlockTag + 'static>(mut self, handler: T) -> Self {
        self.tags.push(Box::new(handler));
        self
    }

    /// Process template text with no variable bindings.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Syntax`] when a handler rejects its arguments;
    /// the input is not partially rendered in that case.
    pub fn process(&mut self, input: &str) -> Result<String, RenderError> {
        let vars = HashMap::new();
        self.process_at_depth(input, &vars, 0)
    }

    /// Process template text against the given variable bindings.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Syntax`] when a handler rejects its arguments.
    pub fn process_with_vars(
        &mut self,
        input: &str,
        vars: &HashMap<String, String>,
    ) -> Result<String, RenderError> {
        self.process_at_depth(input, vars, 0)
    }

    /// Apply a registered filter directly to a value.
    ///
    /// This is the programmatic form of `{{ value|name:"arg" }}`.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Syntax`] for an unregistered filter name or
    /// when the filter rejects its argument.
    pub fn apply_filter(
        &mut self,
        name: &str,
        input: &str,
        arg: Option<&str>,
    ) -> Result<String, RenderError> {
        let Some(idx) = self.filters.iter().position(|f| f.name() == name) else {
            return Err(RenderError::syntax(format!("unknown filter '{name}'")));
        };

        let vars = HashMap::new();
        let ctx = RenderContext {
            vars: &vars,
            depth: 0,
        };
        self.filters[idx].apply(input, arg, &ctx)
    }

    fn process_at_depth(
        &mut self,
        input: &str,
        vars: &HashMap<String, String>,
        depth: usize,
    ) -> Result<String, RenderError> {
        if depth > self.config.max_depth {
            self.warnings.push(format!(
                "maximum block depth ({}) exceeded",
                self.config.max_depth
            ));
            return Ok(input.to_owned());
        }

        let mut output = String::with_capacity(input.len());
        let mut remaining = input;

        while let Some((token, start, end)) = next_token(remaining) {
            output.push_str(&remaining[..start]);

            match token {
                ParsedToken::Variable { name, filters } => {
                    let value = self.resolve_variable(&name, &filters, vars, depth)?;
                    output.push_str(&value);
                    remaining = &remaining[end..];
                }
                ParsedToken::Block { tokens } => {
                    let consumed = self.dispatch_block(
                        &tokens,
                        &remaining[start..end],
                        &remaining[end..],
                        vars,
                        depth,
                        &mut output,
                    )?;
                    remaining = &remaining[end + consumed..];
                }
            }
        }

        output.push_str(remaining);
        Ok(output)
    }

    fn resolve_variable(
        &mut self,
        name: &str,
        filters: &[FilterCall],
        vars: &HashMap<String, String>,
        depth: usize,
    ) -> Result<String, RenderError> {
        let mut value = match vars.get(name) {
            Some(value) => value.clone(),
            None => {
                self.warnings.push(format!("unknown variable '{name}'"));
                String::new()
            }
        };

        for call in filters {
            let Some(idx) = self.filters.iter().position(|f| f.name() == call.name) else {
                self.warnings
                    .push(format!("unknown filter '{}'", call.name));
                continue;
            };

            let ctx = RenderContext { vars, depth };
            value = self.filters[idx].apply(&value, call.arg.as_deref(), &ctx)?;
        }

        Ok(value)
    }

    /// Dispatch a `{% ... %}` token.
    ///
    /// Appends the block's output (or the raw token on pass-through) and
    /// returns how many bytes of `tail` were consumed.
    fn dispatch_block(
        &mut self,
        tokens: &[String],
        raw: &str,
        tail: &str,
        vars: &HashMap<String, String>,
        depth: usize,
        output: &mut String,
    ) -> Result<usize, RenderError> {
        let name = &tokens[0];

        if let Some(idx) = self.tags.iter().position(|t| t.name() == *name) {
            let closer = format!("end{name}");
            let Some((close_start, close_end)) = find_block_close(tail, &closer) else {
                self.warnings.push(format!(
                    "unclosed {{% {name} %}} block (missing {{% {closer} %}})"
                ));
                output.push_str(raw);
                return Ok(0);
            };

            // open() validates arguments before any inner rendering.
            let ctx = RenderContext { vars, depth };
            self.tags[idx].open(&tokens[1..], &ctx)?;

            let inner = self.process_at_depth(&tail[..close_start], vars, depth + 1)?;

            let ctx = RenderContext { vars, depth };
            let rendered = self.tags[idx].render(&inner, &ctx)?;
            output.push_str(&rendered);

            Ok(close_end)
        } else if tokens.len() == 1
            && name
                .strip_prefix("end")
                .is_some_and(|n| self.tags.iter().any(|t| t.name() == n))
        {
            self.warnings
                .push(format!("stray {{% {name} %}} with no opening tag"));
            output.push_str(raw);
            Ok(0)
        } else {
            // Unregistered tag, pass through unchanged.
            output.push_str(raw);
            Ok(0)
        }
    }

    /// Get all warnings generated during processing.
    ///
    /// Includes warnings from the processor itself and from all handlers.
    #[must_use]
    pub fn warnings(&self) -> Vec<String> {
        let mut all_warnings = self.warnings.clone();

        for handler in &self.filters {
            all_warnings.extend(handler.warnings().iter().cloned());
        }
        for handler in &self.tags {
            all_warnings.extend(handler.warnings().iter().cloned());
        }

        all_warnings
    }
}
