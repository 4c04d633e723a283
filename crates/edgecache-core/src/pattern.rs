//! Body validation pattern.

use regress::Regex;

use crate::error::{CoreError, Result};

/// A compiled `regex` parameter.
///
/// Patterns use ECMAScript syntax with no flags, the same dialect a
/// `new RegExp(pattern)` accepts: look-around and back-references are
/// supported, and `\d` and `\w` only match ASCII. A fetched body is only
/// considered valid (and cacheable) when the pattern matches somewhere in it.
///
/// # Example
///
/// ```
/// use edgecache_core::BodyPattern;
///
/// let pattern = BodyPattern::compile(r#""status":\s*"ok""#).unwrap();
/// assert!(pattern.is_match(r#"{"status": "ok"}"#));
/// assert!(!pattern.is_match(r#"{"status": "error"}"#));
/// ```
#[derive(Debug, Clone)]
pub struct BodyPattern {
    source: String,
    regex: Regex,
}

impl BodyPattern {
    /// Compiles a pattern.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidPattern`] when the source does not compile.
    pub fn compile(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(|regex| Self {
                source: source.to_string(),
                regex,
            })
            .map_err(|e| CoreError::invalid_pattern(source, e))
    }

    /// Returns true if the pattern matches anywhere in `body`.
    pub fn is_match(&self, body: &str) -> bool {
        self.regex.find(body).is_some()
    }

    /// Pattern source.
    pub fn as_str(&self) -> &str {
        &self.source
    }
}
