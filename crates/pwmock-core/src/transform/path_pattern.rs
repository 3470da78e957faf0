//! Conversion of OpenAPI path templates into request-matching patterns.
//!
//! A template such as `/users/{userId}/posts/{postId}` becomes:
//!
//! - a glob: `**/users/*/posts/*`
//! - a suffix regex: `/users/([^/]+)/posts/([^/]+)$`
//! - a parameter list: `["userId", "postId"]`
//!
//! All three are rendered from the same token scan, so the number of params
//! always equals the number of glob wildcards and regex capture groups.
//!
//! A placeholder is `{`, one or more characters that are neither `{` nor `}`,
//! then `}`. Anything else (an unterminated `{`, an empty `{}`, the outer
//! brace of `{a{b}`) is kept as literal text.

use regex::Regex;

/// Default base pattern prepended to globs.
pub const DEFAULT_BASE_PATTERN: &str = "**";

const PARAM_GROUP: &str = "([^/]+)";
const QUERY_SUFFIX: &str = r"(\?.*)?$";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token<'a> {
    Literal(&'a str),
    Param(&'a str),
}

fn tokenize(path: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut literal_start = 0;
    let mut i = 0;

    while let Some(offset) = path[i..].find('{') {
        let open = i + offset;
        let rest = &path[open + 1..];
        match rest.find(['{', '}']) {
            Some(end) if end > 0 && rest.as_bytes()[end] == b'}' => {
                if literal_start < open {
                    tokens.push(Token::Literal(&path[literal_start..open]));
                }
                tokens.push(Token::Param(&rest[..end]));
                i = open + end + 2;
                literal_start = i;
            }
            _ => i = open + 1,
        }
    }

    if literal_start < path.len() {
        tokens.push(Token::Literal(&path[literal_start..]));
    }
    tokens
}

/// Replace every placeholder with `*` and prepend `base_pattern` verbatim.
///
/// No separator logic is applied, so `path` should start with `/`.
pub fn path_to_glob(path: &str, base_pattern: &str) -> String {
    let mut glob = String::from(base_pattern);
    for token in tokenize(path) {
        match token {
            Token::Literal(text) => glob.push_str(text),
            Token::Param(_) => glob.push('*'),
        }
    }
    glob
}

/// Regex source matching any URL that ends with `path`.
///
/// Literal text is escaped, placeholders become `([^/]+)` and the result is
/// anchored at the end only.
pub fn path_to_regex_source(path: &str) -> String {
    let mut source = String::new();
    for token in tokenize(path) {
        match token {
            Token::Literal(text) => source.push_str(&regex::escape(text)),
            Token::Param(_) => source.push_str(PARAM_GROUP),
        }
    }
    source.push('$');
    source
}

/// Compiled form of [`path_to_regex_source`].
///
/// Generators only need the source text and go through
/// [`path_to_regex_source`], so the compiled form is never on their path.
pub fn path_to_regex(path: &str) -> Regex {
    // Literals are escaped and the only group is `([^/]+)`, so the source is
    // always well formed; compiling can only fail past the regex size limit,
    // which a single path template does not reach.
    Regex::new(&path_to_regex_source(path)).expect("escaped path template is a valid regex")
}

/// Placeholder names in source order, duplicates kept.
pub fn extract_path_params(path: &str) -> Vec<String> {
    tokenize(path)
        .into_iter()
        .filter_map(|t| match t {
            Token::Param(name) => Some(name.to_string()),
            Token::Literal(_) => None,
        })
        .collect()
}

/// Relax the end anchor of a path regex source so a `?query` suffix also matches.
///
/// Every generator that needs query-string tolerance goes through this.
pub fn query_tolerant(source: &str) -> String {
    match source.strip_suffix('$') {
        Some(body) => format!("{body}{QUERY_SUFFIX}"),
        None => source.to_string(),
    }
}

/// Glob, regex and parameter list derived from one path template.
#[derive(Debug, Clone)]
pub struct PathPattern {
    pub glob: String,
    pub regex: Regex,
    pub params: Vec<String>,
}

impl PathPattern {
    pub fn new(path: &str, base_pattern: &str) -> Self {
        Self {
            glob: path_to_glob(path, base_pattern),
            regex: path_to_regex(path),
            params: extract_path_params(path),
        }
    }

    /// Match `url` and pair each parameter name with its captured value.
    pub fn extract(&self, url: &str) -> Option<Vec<(String, String)>> {
        let caps = self.regex.captures(url)?;
        Some(
            self.params
                .iter()
                .zip(caps.iter().skip(1))
                .map(|(name, value)| {
                    let value = value.map(|m| m.as_str()).unwrap_or_default();
                    (name.clone(), value.to_string())
                })
                .collect(),
        )
    }
}

/// Build the aggregate pattern for `path`.
pub fn build_path_pattern(path: &str, base_pattern: &str) -> PathPattern {
    PathPattern::new(path, base_pattern)
}
