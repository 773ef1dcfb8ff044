use regex::Regex;

use crate::domain::errors::ValidationError;

/// Glob selecting the linux x86_64 archives. The naming scheme changed at
/// some point, so a plain prefix cannot select them.
pub const LINUX_X86_64_ARCHIVE_GLOB: &str = "*-linux-x86_64.tar.gz";

/// Server-side filter for a bucket listing
#[derive(Debug, Clone, Default)]
pub struct ListingQuery {
    /// Prefix to match object names
    prefix: Option<String>,
    /// Glob the full object name must match
    match_glob: Option<String>,
    matcher: Option<Regex>,
}

impl ListingQuery {
    /// Create a query that lists everything
    pub fn new() -> Self {
        Self::default()
    }

    /// The query used to collect SDK versions
    pub fn linux_x86_64_archives() -> Self {
        Self::new()
            .with_match_glob(LINUX_X86_64_ARCHIVE_GLOB)
            .expect("built-in glob is valid")
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_match_glob(mut self, glob: impl Into<String>) -> Result<Self, ValidationError> {
        let glob = glob.into();
        let pattern = glob_to_regex(&glob)?;
        let matcher = Regex::new(&pattern).map_err(|e| ValidationError::InvalidMatchGlob {
            glob: glob.clone(),
            reason: e.to_string(),
        })?;

        self.match_glob = Some(glob);
        self.matcher = Some(matcher);
        Ok(self)
    }

    pub fn prefix(&self) -> Option<&str> {
        self.prefix.as_deref()
    }

    pub fn match_glob(&self) -> Option<&str> {
        self.match_glob.as_deref()
    }

    /// Partial-response selector for the JSON API `fields` parameter.
    /// Listings only ever need object names.
    pub fn fields_selector(&self) -> &'static str {
        "items(name),nextPageToken"
    }

    /// Evaluate the query client-side, for backends that cannot filter
    pub fn matches(&self, name: &str) -> bool {
        if let Some(prefix) = &self.prefix {
            if !name.starts_with(prefix.as_str()) {
                return false;
            }
        }

        match &self.matcher {
            Some(matcher) => matcher.is_match(name),
            None => true,
        }
    }
}

/// Translate a Cloud Storage `matchGlob` into an anchored regex
///
/// `*` matches within one path segment, `**` across segments, `?` one
/// non-separator character, `[...]` a class (`!` or `^` negates) and
/// `{a,b}` any of the alternatives.
fn glob_to_regex(glob: &str) -> Result<String, ValidationError> {
    let invalid = |reason: &str| ValidationError::InvalidMatchGlob {
        glob: glob.to_string(),
        reason: reason.to_string(),
    };

    let mut out = String::with_capacity(glob.len() * 2 + 2);
    out.push('^');

    let mut chars = glob.chars().peekable();
    let mut brace_depth = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '*' => {
                if chars.peek() == Some(&'*') {
                    chars.next();
                    out.push_str(".*");
                } else {
                    out.push_str("[^/]*");
                }
            }
            '?' => out.push_str("[^/]"),
            '[' => {
                out.push('[');
                if matches!(chars.peek(), Some('!') | Some('^')) {
                    chars.next();
                    out.push('^');
                }
                let mut closed = false;
                let mut empty = true;
                for c in chars.by_ref() {
                    if c == ']' && !empty {
                        closed = true;
                        break;
                    }
                    empty = false;
                    match c {
                        '\\' | '[' | ']' | '&' | '~' | '^' => {
                            out.push('\\');
                            out.push(c);
                        }
                        _ => out.push(c),
                    }
                }
                if !closed {
                    return Err(invalid("unterminated character class"));
                }
                out.push(']');
            }
            '{' => {
                brace_depth += 1;
                out.push_str("(?:");
            }
            ',' if brace_depth > 0 => out.push('|'),
            '}' if brace_depth > 0 => {
                brace_depth -= 1;
                out.push(')');
            }
            '\\' => match chars.next() {
                Some(escaped) => out.push_str(&regex::escape(&escaped.to_string())),
                None => return Err(invalid("trailing escape")),
            },
            _ => out.push_str(&regex::escape(&c.to_string())),
        }
    }

    if brace_depth > 0 {
        return Err(invalid("unterminated alternation"));
    }

    out.push('$');
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_query_selects_linux_archives() {
        let query = ListingQuery::linux_x86_64_archives();
        assert_eq!(query.match_glob(), Some(LINUX_X86_64_ARCHIVE_GLOB));
        assert_eq!(query.fields_selector(), "items(name),nextPageToken");

        assert!(query.matches("google-cloud-sdk-400.1.2-linux-x86_64.tar.gz"));
        assert!(!query.matches("google-cloud-sdk-400.1.2-linux-x86_64-bundled-python.tar.gz"));
        assert!(!query.matches("google-cloud-sdk-400.1.2-darwin-x86_64.tar.gz"));
        assert!(!query.matches("README.txt"));
    }

    #[test]
    fn test_single_star_stays_in_segment() {
        let query = ListingQuery::new().with_match_glob("*.txt").unwrap();
        assert!(query.matches("README.txt"));
        assert!(!query.matches("docs/README.txt"));

        let query = ListingQuery::new().with_match_glob("**.txt").unwrap();
        assert!(query.matches("docs/README.txt"));
    }

    #[test]
    fn test_question_mark_classes_and_alternatives() {
        let query = ListingQuery::new().with_match_glob("v?.[0-9].{zip,tar.gz}").unwrap();
        assert!(query.matches("v1.2.zip"));
        assert!(query.matches("v1.2.tar.gz"));
        assert!(!query.matches("v1.x.zip"));
        assert!(!query.matches("v12.2.zip"));

        let query = ListingQuery::new().with_match_glob("[!a]*").unwrap();
        assert!(query.matches("b.txt"));
        assert!(!query.matches("a.txt"));
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let query = ListingQuery::new().with_match_glob("a+b(1).tar.gz").unwrap();
        assert!(query.matches("a+b(1).tar.gz"));
        assert!(!query.matches("aab(1)xtar.gz"));
    }

    #[test]
    fn test_invalid_globs() {
        assert!(ListingQuery::new().with_match_glob("[abc").is_err());
        assert!(ListingQuery::new().with_match_glob("{a,b").is_err());
        assert!(ListingQuery::new().with_match_glob("abc\\").is_err());
    }

    #[test]
    fn test_prefix_is_matched_on_raw_name() {
        let query = ListingQuery::new().with_prefix("google-");
        assert!(query.matches("google-cloud-sdk.tar.gz"));
        assert!(!query.matches("README.txt"));
        assert_eq!(query.prefix(), Some("google-"));
    }
}
