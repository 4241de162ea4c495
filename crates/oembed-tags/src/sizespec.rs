//! Size-specifier parsing.
//!
//! Parses the compact `[!]WIDTHx[!]HEIGHT` syntax shared by the oEmbed
//! filter and block tag.

/// Error from size-specifier parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SizeSpecError {
    /// A width or height segment is missing.
    #[error("size specifier '{0}' must be WIDTHxHEIGHT with both WIDTH and HEIGHT present")]
    MissingDimension(String),

    /// A width or height segment is not a positive integer.
    #[error("size specifier '{0}' requires WIDTH and HEIGHT to be positive integers")]
    InvalidDimension(String),
}

/// Parsed dimension constraint for an embed request.
///
/// Produced once per render invocation from the optional `WIDTHxHEIGHT`
/// specifier and consumed by the replacement collaborator. Either both
/// dimensions are present or both are absent; a `!` prefix on a segment
/// marks that dimension as exact rather than a maximum.
///
/// # Example
///
/// ```
/// use oembed_tags::SizeSpec;
///
/// let spec = SizeSpec::parse(Some("!640x480")).unwrap();
/// assert_eq!(spec.max_width, Some(640));
/// assert_eq!(spec.max_height, Some(480));
/// assert!(spec.fixed_width);
/// assert!(!spec.fixed_height);
///
/// let unconstrained = SizeSpec::parse(None).unwrap();
/// assert_eq!(unconstrained, SizeSpec::default());
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SizeSpec {
    /// Maximum (or exact, see `fixed_width`) embed width in pixels.
    pub max_width: Option<u32>,
    /// Maximum (or exact, see `fixed_height`) embed height in pixels.
    pub max_height: Option<u32>,
    /// Width is exact rather than an upper bound.
    pub fixed_width: bool,
    /// Height is exact rather than an upper bound.
    pub fixed_height: bool,
}

impl SizeSpec {
    /// Parse an optional specifier string.
    ///
    /// `None` or an empty string yields the unconstrained default. Otherwise
    /// the string is lower-cased and split on the first literal `x`; each
    /// side may carry a leading `!` (fixed dimension) and must leave a
    /// positive integer after stripping it.
    ///
    /// # Errors
    ///
    /// Returns [`SizeSpecError`] when a segment is empty or not a positive
    /// integer. Note that splitting happens on the *first* `x`, so a
    /// specifier like `1x2x3` fails on its height segment (`2x3`).
    pub fn parse(raw: Option<&str>) -> Result<Self, SizeSpecError> {
        let Some(raw) = raw.filter(|s| !s.is_empty()) else {
            return Ok(Self::default());
        };

        let lowered = raw.to_lowercase();
        let Some((width, height)) = lowered.split_once('x') else {
            return Err(SizeSpecError::MissingDimension(raw.to_owned()));
        };

        let (width, fixed_width) = strip_fixed(width);
        let (height, fixed_height) = strip_fixed(height);

        if width.is_empty() || height.is_empty() {
            return Err(SizeSpecError::MissingDimension(raw.to_owned()));
        }

        Ok(Self {
            max_width: Some(parse_dimension(width, raw)?),
            max_height: Some(parse_dimension(height, raw)?),
            fixed_width,
            fixed_height,
        })
    }

    /// Whether the spec carries an explicit size constraint.
    #[must_use]
    pub fn is_constrained(&self) -> bool {
        self.max_width.is_some()
    }

    /// Reconstruct the canonical specifier string.
    ///
    /// Returns `None` for an unconstrained spec.
    ///
    /// # Example
    ///
    /// ```
    /// use oembed_tags::SizeSpec;
    ///
    /// let spec = SizeSpec::parse(Some("!640X480")).unwrap();
    /// assert_eq!(spec.to_specifier().as_deref(), Some("!640x480"));
    /// ```
    #[must_use]
    pub fn to_specifier(&self) -> Option<String> {
        let (width, height) = (self.max_width?, self.max_height?);

        let mut spec = String::new();
        if self.fixed_width {
            spec.push('!');
        }
        spec.push_str(&width.to_string());
        spec.push('x');
        if self.fixed_height {
            spec.push('!');
        }
        spec.push_str(&height.to_string());
        Some(spec)
    }
}

impl From<SizeSpecError> for oembed_render::RenderError {
    fn from(err: SizeSpecError) -> Self {
        Self::syntax(err.to_string())
    }
}

/// Strip an optional leading `!`, reporting whether it was present.
fn strip_fixed(segment: &str) -> (&str, bool) {
    segment
        .strip_prefix('!')
        .map_or((segment, false), |rest| (rest, true))
}

fn parse_dimension(segment: &str, raw: &str) -> Result<u32, SizeSpecError> {
    match segment.parse::<u32>() {
        Ok(value) if value > 0 => Ok(value),
        _ => Err(SizeSpecError::InvalidDimension(raw.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_absent_is_unconstrained() {
        let spec = SizeSpec::parse(None).unwrap();

        assert_eq!(spec.max_width, None);
        assert_eq!(spec.max_height, None);
        assert!(!spec.fixed_width);
        assert!(!spec.fixed_height);
        assert!(!spec.is_constrained());
    }

    #[test]
    fn test_empty_string_is_unconstrained() {
        assert_eq!(SizeSpec::parse(Some("")).unwrap(), SizeSpec::default());
    }

    #[test]
    fn test_max_dimensions() {
        let spec = SizeSpec::parse(Some("640x480")).unwrap();

        assert_eq!(spec.max_width, Some(640));
        assert_eq!(spec.max_height, Some(480));
        assert!(!spec.fixed_width);
        assert!(!spec.fixed_height);
        assert!(spec.is_constrained());
    }

    #[test]
    fn test_fixed_width() {
        let spec = SizeSpec::parse(Some("!640x480")).unwrap();

        assert_eq!(spec.max_width, Some(640));
        assert!(spec.fixed_width);
        assert!(!spec.fixed_height);
    }

    #[test]
    fn test_fixed_height() {
        let spec = SizeSpec::parse(Some("640x!480")).unwrap();

        assert_eq!(spec.max_height, Some(480));
        assert!(!spec.fixed_width);
        assert!(spec.fixed_height);
    }

    #[test]
    fn test_fixed_both() {
        let spec = SizeSpec::parse(Some("!640x!480")).unwrap();

        assert!(spec.fixed_width);
        assert!(spec.fixed_height);
    }

    #[test]
    fn test_uppercase_separator() {
        let spec = SizeSpec::parse(Some("640X480")).unwrap();

        assert_eq!(spec.max_width, Some(640));
        assert_eq!(spec.max_height, Some(480));
    }

    #[test]
    fn test_missing_height() {
        let err = SizeSpec::parse(Some("640x")).unwrap_err();
        assert!(matches!(err, SizeSpecError::MissingDimension(_)));
    }

    #[test]
    fn test_missing_width() {
        let err = SizeSpec::parse(Some("x480")).unwrap_err();
        assert!(matches!(err, SizeSpecError::MissingDimension(_)));
    }

    #[test]
    fn test_separator_only() {
        let err = SizeSpec::parse(Some("x")).unwrap_err();
        assert!(matches!(err, SizeSpecError::MissingDimension(_)));
    }

    #[test]
    fn test_bang_only_segment() {
        let err = SizeSpec::parse(Some("!x480")).unwrap_err();
        assert!(matches!(err, SizeSpecError::MissingDimension(_)));
    }

    #[test]
    fn test_no_separator() {
        let err = SizeSpec::parse(Some("640")).unwrap_err();
        assert!(matches!(err, SizeSpecError::MissingDimension(_)));
    }

    #[test]
    fn test_non_numeric_segment() {
        let err = SizeSpec::parse(Some("widextall")).unwrap_err();
        assert!(matches!(err, SizeSpecError::InvalidDimension(_)));
    }

    #[test]
    fn test_zero_rejected() {
        let err = SizeSpec::parse(Some("0x480")).unwrap_err();
        assert!(matches!(err, SizeSpecError::InvalidDimension(_)));
    }

    #[test]
    fn test_first_split_makes_extra_separator_invalid() {
        // "1x2x3" splits on the first 'x', leaving "2x3" as the height
        // segment, which is not a positive integer.
        let err = SizeSpec::parse(Some("1x2x3")).unwrap_err();
        assert!(matches!(err, SizeSpecError::InvalidDimension(_)));
    }

    #[test]
    fn test_error_message_names_argument() {
        let err = SizeSpec::parse(Some("640x")).unwrap_err();
        assert!(err.to_string().contains("640x"));
    }

    #[test]
    fn test_roundtrip() {
        for raw in ["640x480", "!640x480", "640x!480", "!640x!480"] {
            let spec = SizeSpec::parse(Some(raw)).unwrap();
            assert_eq!(spec.to_specifier().as_deref(), Some(raw));
        }
    }

    #[test]
    fn test_roundtrip_case_insensitive() {
        let spec = SizeSpec::parse(Some("!640X!480")).unwrap();
        assert_eq!(spec.to_specifier().as_deref(), Some("!640x!480"));
    }

    #[test]
    fn test_roundtrip_unconstrained() {
        assert_eq!(SizeSpec::default().to_specifier(), None);
    }
}
