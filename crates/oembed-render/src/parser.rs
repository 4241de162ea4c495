//! Template token parsing.
//!
//! Parses the two delimiter forms: `{{ value|filter:"arg" }}` and
//! `{% name arg %}`.

/// A filter application from a variable chain: `|name` or `|name:"arg"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FilterCall {
    pub name: String,
    pub arg: Option<String>,
}

/// Parsed token from the input text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum ParsedToken {
    /// Variable substitution with an optional filter chain: `{{ name|f:"a" }}`
    Variable {
        name: String,
        filters: Vec<FilterCall>,
    },
    /// Block delimiter: `{% token token ... %}` (opening or closing).
    Block { tokens: Vec<String> },
}

/// Find the next well-formed token in `input`.
///
/// Returns the token and its byte range. Delimiters without a closer or with
/// malformed contents are treated as plain text and skipped over.
pub(crate) fn next_token(input: &str) -> Option<(ParsedToken, usize, usize)> {
    let mut offset = 0;

    while offset < input.len() {
        let rest = &input[offset..];
        let candidate = match (rest.find("{{"), rest.find("{%")) {
            (Some(v), Some(t)) => {
                if v < t {
                    (v, false)
                } else {
                    (t, true)
                }
            }
            (Some(v), None) => (v, false),
            (None, Some(t)) => (t, true),
            (None, None) => return None,
        };

        let (pos, is_block) = candidate;
        let start = offset + pos;
        let closer = if is_block { "%}" } else { "}}" };

        let Some(close_rel) = input[start + 2..].find(closer) else {
            // No closing delimiter; emit as text and keep scanning.
            offset = start + 2;
            continue;
        };

        let inner = &input[start + 2..start + 2 + close_rel];
        let end = start + 2 + close_rel + 2;

        let parsed = if is_block {
            parse_block(inner)
        } else {
            parse_variable(inner)
        };

        match parsed {
            Some(token) => return Some((token, start, end)),
            // Malformed contents pass through verbatim.
            None => offset = start + 2,
        }
    }

    None
}

/// Find the first closing delimiter `{% closer %}` in `tail`.
///
/// Returns the byte range of the closing token. The scan is flat: it does
/// not track nesting of same-named blocks.
pub(crate) fn find_block_close(tail: &str, closer: &str) -> Option<(usize, usize)> {
    let mut offset = 0;

    while let Some((token, start, end)) = next_token(&tail[offset..]) {
        if let ParsedToken::Block { tokens } = &token {
            if tokens.len() == 1 && tokens[0] == closer {
                return Some((offset + start, offset + end));
            }
        }
        offset += end;
    }

    None
}

/// Check if a name is a valid filter, tag, or variable name.
///
/// Valid names contain only alphanumeric characters, hyphens, and underscores.
fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_alphanumeric() || c == '-' || c == '_')
}

/// Parse the contents of a `{{ ... }}` delimiter.
fn parse_variable(inner: &str) -> Option<ParsedToken> {
    let mut parts = inner.split('|');

    let name = parts.next()?.trim();
    if !is_valid_name(name) {
        return None;
    }

    let mut filters = Vec::new();
    for part in parts {
        let part = part.trim();
        let (filter_name, arg) = match part.split_once(':') {
            Some((filter_name, raw_arg)) => {
                (filter_name.trim(), Some(parse_filter_arg(raw_arg.trim())?))
            }
            None => (part, None),
        };
        if !is_valid_name(filter_name) {
            return None;
        }
        filters.push(FilterCall {
            name: filter_name.to_owned(),
            arg,
        });
    }

    Some(ParsedToken::Variable {
        name: name.to_owned(),
        filters,
    })
}

/// Parse a filter argument: `"arg"`, `'arg'`, or a bare word.
fn parse_filter_arg(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    if raw.len() >= 2
        && ((bytes[0] == b'"' && bytes[raw.len() - 1] == b'"')
            || (bytes[0] == b'\'' && bytes[raw.len() - 1] == b'\''))
    {
        return Some(raw[1..raw.len() - 1].to_owned());
    }

    if raw.is_empty() || raw.contains(char::is_whitespace) {
        None
    } else {
        Some(raw.to_owned())
    }
}

/// Parse the contents of a `{% ... %}` delimiter into whitespace-separated
/// tokens.
fn parse_block(inner: &str) -> Option<ParsedToken> {
    let tokens: Vec<String> = inner.split_whitespace().map(str::to_owned).collect();

    if tokens.is_empty() || !is_valid_name(&tokens[0]) {
        return None;
    }

    Some(ParsedToken::Block { tokens })
}
