//! Proxy request parameters.
//!
//! The proxy is driven entirely by three query parameters: `url`, `regex`
//! and `ttl`. Parsing is lenient: `ttl` accepts anything that starts with an
//! integer.

/// Parsed proxy parameters.
///
/// # Example
///
/// ```
/// use edgecache_core::ProxyParams;
///
/// let params = ProxyParams::from_pairs([
///     ("url", "https://example.com/a"),
///     ("regex", "foo"),
///     ("ttl", "30"),
/// ])
/// .unwrap();
///
/// assert_eq!(params.url(), "https://example.com/a");
/// assert_eq!(params.pattern(), Some("foo"));
/// assert_eq!(params.ttl(), Some(30));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProxyParams {
    url: String,
    pattern: Option<String>,
    ttl: Option<i64>,
}

impl ProxyParams {
    /// Creates parameters for the given target URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pattern: None,
            ttl: None,
        }
    }

    /// Sets the body validation pattern.
    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the freshness window in seconds.
    pub fn with_ttl(mut self, ttl: i64) -> Self {
        self.ttl = Some(ttl);
        self
    }

    /// Builds parameters from decoded query pairs.
    ///
    /// The first occurrence of each key wins. Returns `None` when `url` is
    /// missing or empty. An empty `regex` counts as absent, and a `ttl` that
    /// does not start with an integer is left unset so the policy default
    /// applies.
    pub fn from_pairs<I, K, V>(pairs: I) -> Option<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut url: Option<String> = None;
        let mut pattern: Option<String> = None;
        let mut ttl: Option<Option<i64>> = None;

        for (key, value) in pairs {
            let value = value.as_ref();
            match key.as_ref() {
                "url" if url.is_none() => url = Some(value.to_string()),
                "regex" if pattern.is_none() => pattern = Some(value.to_string()),
                "ttl" if ttl.is_none() => ttl = Some(parse_ttl(value)),
                _ => {},
            }
        }

        let url = url.filter(|u| !u.is_empty())?;

        Some(Self {
            url,
            pattern: pattern.filter(|p| !p.is_empty()),
            ttl: ttl.flatten(),
        })
    }

    /// Target URL, also used as the store key.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Body validation pattern, if any.
    pub fn pattern(&self) -> Option<&str> {
        self.pattern.as_deref()
    }

    /// Requested freshness window in seconds, if one was parsed.
    pub fn ttl(&self) -> Option<i64> {
        self.ttl
    }
}

/// Parses a `ttl` value the lenient way.
///
/// Leading whitespace and an optional sign are accepted, then the longest
/// run of digits is taken (`0x` switches to hexadecimal). Trailing garbage
/// is ignored. Values that do not fit in an `i64` saturate.
///
/// # Example
///
/// ```
/// use edgecache_core::parse_ttl;
///
/// assert_eq!(parse_ttl("30"), Some(30));
/// assert_eq!(parse_ttl(" 10s"), Some(10));
/// assert_eq!(parse_ttl("1.5"), Some(1));
/// assert_eq!(parse_ttl("-5"), Some(-5));
/// assert_eq!(parse_ttl("abc"), None);
/// assert_eq!(parse_ttl(""), None);
/// ```
pub fn parse_ttl(raw: &str) -> Option<i64> {
    let s = raw.trim_start();

    let (negative, s) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let (radix, s) = match s.get(..2) {
        Some("0x") | Some("0X") => (16, &s[2..]),
        _ => (10, s),
    };

    let digits_len = s
        .char_indices()
        .find(|(_, c)| !c.is_digit(radix))
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    if digits_len == 0 {
        return None;
    }

    let digits = &s[..digits_len];
    let signed = if negative {
        format!("-{digits}")
    } else {
        digits.to_string()
    };

    match i64::from_str_radix(&signed, radix) {
        Ok(value) => Some(value),
        // Only overflow is possible at this point
        Err(_) if negative => Some(i64::MIN),
        Err(_) => Some(i64::MAX),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_url() {
        assert!(ProxyParams::from_pairs([("ttl", "10")]).is_none());
    }

    #[test]
    fn test_empty_url_counts_as_missing() {
        assert!(ProxyParams::from_pairs([("url", "")]).is_none());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let params = ProxyParams::from_pairs([
            ("url", "https://a.example"),
            ("url", "https://b.example"),
            ("ttl", "5"),
            ("ttl", "50"),
        ])
        .unwrap();

        assert_eq!(params.url(), "https://a.example");
        assert_eq!(params.ttl(), Some(5));
    }

    #[test]
    fn test_empty_regex_counts_as_absent() {
        let params = ProxyParams::from_pairs([("url", "https://a.example"), ("regex", "")]).unwrap();
        assert_eq!(params.pattern(), None);
    }

    #[test]
    fn test_non_numeric_ttl_is_unset() {
        let params =
            ProxyParams::from_pairs([("url", "https://a.example"), ("ttl", "soon")]).unwrap();
        assert_eq!(params.ttl(), None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let params =
            ProxyParams::from_pairs([("foo", "bar"), ("url", "https://a.example")]).unwrap();
        assert_eq!(params, ProxyParams::new("https://a.example"));
    }

    #[test]
    fn test_parse_ttl_hex() {
        assert_eq!(parse_ttl("0x10"), Some(16));
        assert_eq!(parse_ttl("0x"), None);
    }

    #[test]
    fn test_parse_ttl_sign_only() {
        assert_eq!(parse_ttl("-"), None);
        assert_eq!(parse_ttl("+7"), Some(7));
    }

    #[test]
    fn test_parse_ttl_saturates() {
        assert_eq!(parse_ttl("99999999999999999999999"), Some(i64::MAX));
        assert_eq!(parse_ttl("-99999999999999999999999"), Some(i64::MIN));
    }
}
