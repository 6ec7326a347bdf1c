//! Glob patterns and pattern parsing
//!
//! Patterns are matched against the full changed-file path as an opaque
//! string. Unlike filesystem globbing, `*` is not stopped by `/`:
//!
//! - `*` and `**` - any run of characters, including path separators
//! - `?` - any single character, including `/`
//! - `[seq]` / `[!seq]` - character class and negated class, with `a-z` ranges
//! - anything else - literal
//!
//! # Examples
//!
//! ```
//! use file_filter::core::models::parse_patterns;
//!
//! let patterns = parse_patterns("*.py\n  docs/**").unwrap();
//! assert_eq!(patterns.len(), 2);
//! assert!(patterns.matches_any("src/main.py"));
//! assert!(patterns.matches_any("docs/README.md"));
//! assert!(!patterns.matches_any("package.json"));
//! ```

use regex::Regex;
use thiserror::Error;

/// Errors that can occur when parsing pattern input
#[derive(Debug, Error)]
pub enum PatternError {
    /// Input was non-empty but contained nothing but whitespace
    #[error("no valid patterns found in input")]
    NoValidPatterns,

    /// A glob could not be compiled
    #[error("invalid glob pattern '{pattern}': {reason}")]
    InvalidGlob {
        /// The offending pattern
        pattern: String,
        /// Why compilation failed
        reason: String,
    },
}

/// A single compiled glob pattern
#[derive(Debug, Clone)]
pub struct Pattern {
    /// Original pattern string
    raw: String,

    /// Compiled regex; `None` when the glob can never match (e.g. `[z-a]`)
    regex: Option<Regex>,
}

impl PartialEq for Pattern {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl Eq for Pattern {}

impl Pattern {
    /// Compile a glob pattern
    pub fn new(pattern: &str) -> Result<Self, PatternError> {
        let regex = match glob_to_regex(pattern) {
            Some(source) => Some(Regex::new(&source).map_err(|e| PatternError::InvalidGlob {
                pattern: pattern.to_string(),
                reason: e.to_string(),
            })?),
            None => None,
        };

        Ok(Self {
            raw: pattern.to_string(),
            regex,
        })
    }

    /// Get the original pattern string
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Check if the whole path matches this pattern
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.regex.as_ref().is_some_and(|re| re.is_match(path))
    }
}

impl std::fmt::Display for Pattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

/// An ordered set of patterns, checked first-match-wins
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternSet {
    patterns: Vec<Pattern>,
}

impl PatternSet {
    /// Compile each string into a pattern, keeping order
    pub fn compile<S: AsRef<str>>(patterns: &[S]) -> Result<Self, PatternError> {
        patterns
            .iter()
            .map(|p| Pattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map(|patterns| Self { patterns })
    }

    /// Number of patterns
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// Whether the set has no patterns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// The first pattern matching `path`, if any
    #[must_use]
    pub fn first_match(&self, path: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.matches(path))
    }

    /// Whether any pattern matches `path`
    #[must_use]
    pub fn matches_any(&self, path: &str) -> bool {
        self.first_match(path).is_some()
    }

    /// The raw pattern strings, in input order
    #[must_use]
    pub fn raw(&self) -> Vec<String> {
        self.patterns.iter().map(|p| p.raw.clone()).collect()
    }
}

/// Split raw input into pattern tokens
///
/// Tokens are separated by any whitespace (spaces, tabs, newlines). There is
/// no quoting, escaping, or comment syntax.
///
/// An empty input yields no tokens; an input made only of whitespace is an
/// error.
pub fn split_patterns(input: &str) -> Result<Vec<String>, PatternError> {
    if input.is_empty() {
        return Ok(Vec::new());
    }

    let tokens: Vec<String> = input
        .split_whitespace()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect();

    if tokens.is_empty() {
        return Err(PatternError::NoValidPatterns);
    }

    Ok(tokens)
}

/// Split and compile raw pattern input
pub fn parse_patterns(input: &str) -> Result<PatternSet, PatternError> {
    PatternSet::compile(&split_patterns(input)?)
}

/// Translate a glob into an anchored regex source
///
/// Returns `None` when the glob contains a character class that can match
/// nothing, so the whole pattern can never match.
fn glob_to_regex(glob: &str) -> Option<String> {
    let chars: Vec<char> = glob.chars().collect();
    let mut regex = String::with_capacity(glob.len() * 2);
    regex.push_str(r"(?s)\A");

    let mut i = 0;
    while i < chars.len() {
        match chars[i] {
            '*' => {
                // Collapse runs: `**` is no different from `*` here
                while i + 1 < chars.len() && chars[i + 1] == '*' {
                    i += 1;
                }
                regex.push_str(".*");
            },
            '?' => regex.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    regex.push_str(&translate_class(&chars[i + 1..end])?);
                    i = end;
                },
                // Unterminated class: the bracket is literal
                None => regex.push_str(r"\["),
            },
            c => push_literal(&mut regex, c),
        }
        i += 1;
    }

    regex.push_str(r"\z");
    Some(regex)
}

/// Index of the `]` closing the class that opens at `start`
///
/// A `]` directly after `[` or `[!` is a member of the class, not its end.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start + 1;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

/// Translate the body of a `[...]` class
fn translate_class(body: &[char]) -> Option<String> {
    let (negated, body) = match body.split_first() {
        Some(('!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut members = String::new();
    let mut k = 0;
    while k < body.len() {
        let c = body[k];
        if k + 2 < body.len() && body[k + 1] == '-' {
            let hi = body[k + 2];
            // Reversed ranges are empty
            if c <= hi {
                push_class_char(&mut members, c);
                members.push('-');
                push_class_char(&mut members, hi);
            }
            k += 3;
        } else {
            push_class_char(&mut members, c);
            k += 1;
        }
    }

    match (negated, members.is_empty()) {
        (true, true) => Some(".".to_string()),
        (false, true) => None,
        (true, false) => Some(format!("[^{members}]")),
        (false, false) => Some(format!("[{members}]")),
    }
}

fn push_class_char(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '^' | '-' | '&' | '~') {
        out.push('\\');
    }
    out.push(c);
}

fn push_literal(out: &mut String, c: char) {
    let mut buf = [0u8; 4];
    out.push_str(&regex::escape(c.encode_utf8(&mut buf)));
}
