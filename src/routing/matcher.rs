//! Path matching logic.
//!
//! # Design Decisions
//! - Matching is case-sensitive
//! - A trailing slash is ignored (except for the root path itself)
//! - Query string and fragment never take part in matching
//! - Non-exact routes match descendants only at a segment boundary
//! - No regex or parameters; prefix comparison only

/// Matches request paths against one route path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathMatcher {
    path: String,
    exact: bool,
}

impl PathMatcher {
    /// Create a new matcher. The route path is normalized once here.
    pub fn new(path: &str, exact: bool) -> Self {
        Self {
            path: normalize(path).to_string(),
            exact,
        }
    }

    /// The normalized route path.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns true if the request path is handled by this route.
    pub fn matches(&self, request_path: &str) -> bool {
        let request_path = normalize(request_path);
        if request_path == self.path {
            return true;
        }
        if self.exact {
            return false;
        }
        if self.path == "/" {
            return true;
        }
        request_path
            .strip_prefix(self.path.as_str())
            .is_some_and(|rest| rest.starts_with('/'))
    }
}

/// Drop any query or fragment, then strip trailing slashes, keeping "/" for
/// the root. Empty input is the root.
pub fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or(path);
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_matcher() {
        let matcher = PathMatcher::new("/park", true);
        assert!(matcher.matches("/park"));
        assert!(matcher.matches("/park/"));
        assert!(!matcher.matches("/park/bench"));
        assert!(!matcher.matches("/parking"));
        assert!(!matcher.matches("/Park")); // Case sensitive
    }

    #[test]
    fn test_exact_root() {
        let matcher = PathMatcher::new("/", true);
        assert!(matcher.matches("/"));
        assert!(matcher.matches(""));
        assert!(!matcher.matches("/park"));
    }

    #[test]
    fn test_prefix_matcher() {
        let matcher = PathMatcher::new("/park/", false);
        assert_eq!(matcher.path(), "/park");
        assert!(matcher.matches("/park"));
        assert!(matcher.matches("/park/bench/3"));
        assert!(!matcher.matches("/parking"));
        assert!(!matcher.matches("/"));
    }

    #[test]
    fn test_query_and_fragment_ignored() {
        let root = PathMatcher::new("/", true);
        assert!(root.matches("/?x=1"));
        assert!(root.matches("?x=1"));
        assert!(root.matches("/#top"));

        let park = PathMatcher::new("/park", true);
        assert!(park.matches("/park/?bench=3#map"));
        assert!(!park.matches("/?next=/park"));
    }

    #[test]
    fn test_non_exact_root_matches_everything() {
        let matcher = PathMatcher::new("/", false);
        assert!(matcher.matches("/anything/at/all"));
    }
}
